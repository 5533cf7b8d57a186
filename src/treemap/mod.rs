//! Ordered map based on a Red-Black Tree with parent links.
//!
//! This module provides [`TreeMap`], a mutable ordered map, and
//! [`Cursor`], a bidirectional position in its key order.
//!
//! # Overview
//!
//! - O(log N) insert, get, remove and lower bound
//! - O(1) len and `is_empty`
//! - O(1) amortized cursor and iterator steps, without an auxiliary stack
//!
//! # Examples
//!
//! ```rust
//! use rbtree_map::TreeMap;
//!
//! let mut map = TreeMap::new();
//! map.insert(3, "three");
//! map.insert(1, "one");
//! map.insert(2, "two");
//!
//! // Entries are always in sorted order
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! // Lower bound lands on the smallest key not less than the query
//! assert_eq!(map.lower_bound(&2).key(), Some(&2));
//! ```
//!
//! # Internal Structure
//!
//! Nodes are stored in an arena and linked by index: each node knows its
//! left child, right child and parent. The Red-Black Tree maintains the
//! following invariants:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. Red nodes have only black children
//! 4. Every path from a node to an absent child has the same number of black nodes
//!
//! These invariants ensure the tree height is O(log N).

mod cursor;
mod insert;
mod iter;
mod node;
mod remove;
mod rotate;
mod search;
mod validate;

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Index;

pub use cursor::Cursor;
pub use iter::{IntoIter, Iter, Keys, Values};

use node::{Link, NodeArena, Side};

// =============================================================================
// TreeMap Definition
// =============================================================================

/// An ordered map based on a Red-Black Tree.
///
/// Keys must implement `Ord`. Entries are kept in sorted key order and can
/// be walked with [`iter`](Self::iter) or positioned with a [`Cursor`] from
/// [`begin`](Self::begin), [`end`](Self::end), [`find`](Self::find) or
/// [`lower_bound`](Self::lower_bound).
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `get`          | O(log N)          |
/// | `insert`       | O(log N)          |
/// | `remove`       | O(log N)          |
/// | `lower_bound`  | O(log N)          |
/// | `begin`/`end`  | O(log N)          |
/// | `len`          | O(1)              |
/// | `clone`        | O(N log N)        |
///
/// # Examples
///
/// ```rust
/// use rbtree_map::TreeMap;
///
/// let mut map = TreeMap::from([(2, "two"), (1, "one")]);
/// map.insert(3, "three");
/// map.remove(&2);
///
/// let entries: Vec<(i32, &str)> = map.iter().map(|(key, value)| (*key, *value)).collect();
/// assert_eq!(entries, vec![(1, "one"), (3, "three")]);
/// ```
pub struct TreeMap<K, V> {
    /// Storage for every node of the tree
    arena: NodeArena<K, V>,
    /// Root node of the tree
    root: Link,
    /// Number of entries
    length: usize,
}

impl<K, V> TreeMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree_map::TreeMap;
    ///
    /// let map: TreeMap<i32, String> = TreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
            length: 0,
        }
    }

    /// Creates an empty map with room for `capacity` entries before reallocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree_map::TreeMap;
    ///
    /// let map: TreeMap<i32, i32> = TreeMap::with_capacity(64);
    /// assert!(map.capacity() >= 64);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            root: None,
            length: 0,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of entries the map can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Releases node storage that is no longer in use.
    pub fn shrink_to_fit(&mut self) {
        self.arena.shrink_to_fit();
    }

    /// Removes every entry, keeping the allocated storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree_map::TreeMap;
    ///
    /// let mut map = TreeMap::from([(1, "one")]);
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.begin(), map.end());
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.length = 0;
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree_map::TreeMap;
    ///
    /// let mut map = TreeMap::from([(2, 'b'), (1, 'a')]);
    /// assert_eq!(map.pop_first(), Some((1, 'a')));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.edge(Side::Left)?;
        Some(self.remove_node(first))
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.edge(Side::Right)?;
        Some(self.remove_node(last))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for TreeMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Copies by re-inserting every entry in key order into a fresh tree.
impl<K: Clone + Ord, V: Clone> Clone for TreeMap<K, V> {
    fn clone(&self) -> Self {
        let mut map = Self::with_capacity(self.length);
        for (key, value) in self {
            map.insert(key.clone(), value.clone());
        }
        map
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for (key, value) in source {
            self.insert(key.clone(), value.clone());
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for TreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Later duplicates overwrite earlier ones.
///
/// ```rust
/// use rbtree_map::TreeMap;
///
/// let map = TreeMap::from([(1, "first"), (2, "two"), (1, "second")]);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(&1), Some(&"second"));
/// ```
impl<K: Ord, V, const N: usize> From<[(K, V); N]> for TreeMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, Q, V> Index<&Q> for TreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &Self::Output {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in TreeMap"),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for TreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for TreeMap<K, V> {}

/// Hashes the length, then each (key, value) pair in key order.
impl<K: Hash, V: Hash> Hash for TreeMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TreeMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for TreeMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(TreeMap<i32, String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Cursor<'static, i32, String>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(TreeMap<std::rc::Rc<i32>, i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
