//! # rbtree-map
//!
//! An ordered key-value map backed by a red-black tree whose nodes carry
//! parent links, so that cursors and iterators step through the sorted
//! sequence without an auxiliary stack.
//!
//! ## Overview
//!
//! - **[`TreeMap`]**: insert, get, remove and lower bound in O(log N)
//! - **[`Cursor`]**: a bidirectional position in key order with a distinct
//!   end position, obtained from `begin`, `end`, `find` and `lower_bound`
//! - **Iterators**: double-ended, exact-size iteration over entries, keys
//!   and values
//!
//! Nodes are stored in an arena and addressed by index, so the crate
//! contains no `unsafe` code.
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` events for structural changes and each
//!   rebalancing step
//!
//! ## Example
//!
//! ```rust
//! use rbtree_map::TreeMap;
//!
//! let mut map = TreeMap::from([(1, "one"), (3, "three"), (5, "five")]);
//! map.insert(4, "four");
//!
//! let cursor = map.lower_bound(&2);
//! assert_eq!(cursor.entry(), Some((3, "three")));
//!
//! map.remove(&3);
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 4, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use rbtree_map::prelude::*;
///
/// let map: TreeMap<i32, i32> = TreeMap::new();
/// assert!(map.is_empty());
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::treemap::*;
}

pub mod error;
pub mod treemap;

mod tracing_helpers;

pub use error::{CursorError, InvariantViolation};
pub use treemap::{Cursor, TreeMap};
