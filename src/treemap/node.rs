//! Node storage for the red-black tree.
//!
//! Nodes live in a [`NodeArena`] owned by the map and refer to each other by
//! [`NodeIndex`]. Child links express ownership; the parent link is only a
//! navigation aid and never decides when a node is released.

use std::mem;
use std::ops::{Index, IndexMut};

use super::TreeMap;

// =============================================================================
// Color and Side
// =============================================================================

/// The color of a Red-Black Tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child of a node a link refers to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the mirror side.
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// Stable address of a node inside a [`NodeArena`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub(crate) struct NodeIndex(usize);

/// An optional link to another node. `None` is an absent child or parent.
pub(crate) type Link = Option<NodeIndex>;

/// Internal node structure for the Red-Black Tree.
#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) left: Link,
    pub(crate) right: Link,
    pub(crate) parent: Link,
}

impl<K, V> Node<K, V> {
    /// Creates a detached node.
    pub(crate) const fn new(key: K, value: V, color: Color) -> Self {
        Self {
            key,
            value,
            color,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub(crate) const fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) const fn set_child(&mut self, side: Side, link: Link) {
        match side {
            Side::Left => self.left = link,
            Side::Right => self.right = link,
        }
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

// =============================================================================
// Arena
// =============================================================================

/// Slot storage for tree nodes with a free list of vacated slots.
#[derive(Debug)]
pub(crate) struct NodeArena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeIndex>,
}

impl<K, V> NodeArena<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Stores a node, reusing a vacated slot when one is available.
    pub(crate) fn allocate(&mut self, node: Node<K, V>) -> NodeIndex {
        if let Some(index) = self.free.pop() {
            self.slots[index.0] = Some(node);
            index
        } else {
            self.slots.push(Some(node));
            NodeIndex(self.slots.len() - 1)
        }
    }

    /// Takes a node out of the arena and marks its slot as vacant.
    pub(crate) fn release(&mut self, index: NodeIndex) -> Node<K, V> {
        match self.slots[index.0].take() {
            Some(node) => {
                self.free.push(index);
                node
            }
            None => panic!("{STALE_INDEX_PANIC_MESSAGE}"),
        }
    }

    /// Exchanges the key and value of two nodes, leaving links and colors in place.
    pub(crate) fn swap_entries(&mut self, first: NodeIndex, second: NodeIndex) {
        if first == second {
            return;
        }
        let (low, high) = if first.0 < second.0 {
            (first.0, second.0)
        } else {
            (second.0, first.0)
        };
        let (head, tail) = self.slots.split_at_mut(high);
        match (head[low].as_mut(), tail[0].as_mut()) {
            (Some(low_node), Some(high_node)) => {
                mem::swap(&mut low_node.key, &mut high_node.key);
                mem::swap(&mut low_node.value, &mut high_node.value);
            }
            _ => panic!("{STALE_INDEX_PANIC_MESSAGE}"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops trailing vacant slots and releases unused memory.
    pub(crate) fn shrink_to_fit(&mut self) {
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        let live_slots = self.slots.len();
        self.free.retain(|index| index.0 < live_slots);
        self.slots.shrink_to_fit();
        self.free.shrink_to_fit();
    }
}

/// Message for a link that points at a vacated slot.
const STALE_INDEX_PANIC_MESSAGE: &str = "tree link points at a vacated arena slot";

impl<K, V> Index<NodeIndex> for NodeArena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        match &self.slots[index.0] {
            Some(node) => node,
            None => panic!("{STALE_INDEX_PANIC_MESSAGE}"),
        }
    }
}

impl<K, V> IndexMut<NodeIndex> for NodeArena<K, V> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        match &mut self.slots[index.0] {
            Some(node) => node,
            None => panic!("{STALE_INDEX_PANIC_MESSAGE}"),
        }
    }
}

// =============================================================================
// Navigation
// =============================================================================

impl<K, V> TreeMap<K, V> {
    /// Checks if an optional node is red. Absent nodes count as black.
    pub(crate) fn is_red(&self, link: Link) -> bool {
        link.is_some_and(|index| self.arena[index].is_red())
    }

    /// Returns the parent of `node` and the side `node` hangs from, or `None` for the root.
    pub(crate) fn position(&self, node: NodeIndex) -> Option<(NodeIndex, Side)> {
        self.arena[node].parent.map(|parent| {
            if self.arena[parent].left == Some(node) {
                (parent, Side::Left)
            } else {
                (parent, Side::Right)
            }
        })
    }

    /// Descends from `node` along `side` links as far as possible.
    pub(crate) fn extreme(&self, mut node: NodeIndex, side: Side) -> NodeIndex {
        while let Some(next) = self.arena[node].child(side) {
            node = next;
        }
        node
    }

    /// Returns the in-order neighbor of `node` in direction `side`.
    ///
    /// `Side::Right` yields the successor, `Side::Left` the predecessor. Only
    /// parent links are followed; no auxiliary storage is used.
    pub(crate) fn step(&self, node: NodeIndex, side: Side) -> Link {
        if let Some(child) = self.arena[node].child(side) {
            return Some(self.extreme(child, side.opposite()));
        }
        let mut current = node;
        while let Some((parent, from)) = self.position(current) {
            if from == side.opposite() {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// The smallest (`Side::Left`) or largest (`Side::Right`) node of the tree.
    pub(crate) fn edge(&self, side: Side) -> Link {
        self.root.map(|root| self.extreme(root, side))
    }
}
