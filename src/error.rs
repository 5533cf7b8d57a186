//! Error types for the tree map.
//!
//! Map operations never fail; absence is reported through the end cursor or
//! `None`. The types here cover the two remaining situations: moving a
//! [`Cursor`](crate::treemap::Cursor) past either end of the sequence, and
//! structural corruption reported by
//! [`TreeMap::validate`](crate::treemap::TreeMap::validate).

use std::fmt;

/// Represents an attempt to move a cursor outside of the in-order sequence.
///
/// # Examples
///
/// ```rust
/// use rbtree_map::{CursorError, TreeMap};
///
/// let map = TreeMap::from([(1, "one")]);
/// let mut cursor = map.end();
/// assert_eq!(cursor.try_move_next(), Err(CursorError::PastEnd));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// The cursor is already at the end position.
    PastEnd,
    /// The cursor is already at the first entry (or the map is empty).
    BeforeBegin,
}

impl fmt::Display for CursorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PastEnd => write!(formatter, "cannot advance a cursor past the end"),
            Self::BeforeBegin => {
                write!(formatter, "cannot move a cursor before the first entry")
            }
        }
    }
}

impl std::error::Error for CursorError {}

/// A red-black or binary-search-tree invariant that does not hold.
///
/// Returned by [`TreeMap::validate`](crate::treemap::TreeMap::validate). A
/// correctly functioning map never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvariantViolation {
    /// The root node is red.
    RedRoot,
    /// A red node has a red child.
    RedRed {
        /// Depth of the child, counting the root as 0.
        depth: usize,
    },
    /// Two sibling subtrees carry a different number of black nodes.
    BlackHeightMismatch {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },
    /// A key is out of order with respect to one of its ancestors.
    OrderViolation {
        /// Depth of the offending node, counting the root as 0.
        depth: usize,
    },
    /// A child does not point back at its parent, or the root has a parent.
    BrokenParentLink {
        /// Depth of the offending node, counting the root as 0.
        depth: usize,
    },
    /// The number of reachable nodes differs from the recorded length.
    LengthMismatch {
        /// Nodes reachable from the root.
        counted: usize,
        /// Length recorded by the map.
        recorded: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "root node is red"),
            Self::RedRed { depth } => {
                write!(formatter, "red node at depth {depth} has a red parent")
            }
            Self::BlackHeightMismatch { left, right } => write!(
                formatter,
                "black height mismatch: left subtree {left}, right subtree {right}"
            ),
            Self::OrderViolation { depth } => {
                write!(formatter, "key at depth {depth} breaks search-tree order")
            }
            Self::BrokenParentLink { depth } => {
                write!(formatter, "node at depth {depth} has an inconsistent parent link")
            }
            Self::LengthMismatch { counted, recorded } => write!(
                formatter,
                "map records {recorded} entries but {counted} nodes are reachable"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}
