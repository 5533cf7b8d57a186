//! Removal and delete rebalancing.
//!
//! A logical removal first reduces a two-child node to its in-order
//! predecessor, then physically detaches a node with at most one child.
//! Detaching a black leaf leaves its parent's subtree one black node short
//! on that side; [`TreeMap::remove_fixup`] walks the deficiency upward until
//! a recolor or rotation absorbs it.

use std::borrow::Borrow;

use super::TreeMap;
use super::node::{Color, NodeIndex, Side};
use crate::tracing_helpers::{debug_log, trace_log};

impl<K: Ord, V> TreeMap<K, V> {
    /// Removes a key from the map, returning its value if it was present.
    ///
    /// Removing an absent key is a no-op.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree_map::TreeMap;
    ///
    /// let mut map = TreeMap::from([(1, "one"), (2, "two")]);
    /// assert_eq!(map.remove(&1), Some("one"));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if it was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree_map::TreeMap;
    ///
    /// let mut map = TreeMap::from([("a".to_string(), 1)]);
    /// assert_eq!(map.remove_entry("a"), Some(("a".to_string(), 1)));
    /// assert!(map.is_empty());
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let target = self.find_node(key)?;
        Some(self.remove_node(target))
    }
}

impl<K, V> TreeMap<K, V> {
    /// Removes the entry stored at `target` and returns it.
    ///
    /// The length is decremented once, however many nodes the entry travels
    /// through before storage is released.
    pub(crate) fn remove_node(&mut self, target: NodeIndex) -> (K, V) {
        let mut doomed = target;
        if let (Some(left), Some(_)) = (self.arena[target].left, self.arena[target].right) {
            let predecessor = self.extreme(left, Side::Right);
            self.arena.swap_entries(target, predecessor);
            doomed = predecessor;
        }

        self.length -= 1;
        let entry = self.detach(doomed);
        debug_log!(length = self.length, "removed entry");
        entry
    }

    /// Physically removes `node`, which has at most one child.
    fn detach(&mut self, mut node: NodeIndex) -> (K, V) {
        // A black node with a single child hands its entry down to that (red) child.
        while !self.arena[node].is_red() {
            let current = &self.arena[node];
            let Some(child) = current.left.or(current.right) else {
                break;
            };
            self.arena.swap_entries(node, child);
            node = child;
        }

        let position = self.position(node);
        let removed = self.arena.release(node);
        match position {
            None => self.root = None,
            Some((parent, side)) => {
                self.arena[parent].set_child(side, None);
                if removed.color == Color::Black {
                    self.remove_fixup(parent, side);
                }
            }
        }
        (removed.key, removed.value)
    }

    /// Restores black height after `node` lost one black node on `side`.
    pub(crate) fn remove_fixup(&mut self, mut node: NodeIndex, mut side: Side) {
        loop {
            let far_side = side.opposite();
            let Some(sibling) = self.arena[node].child(far_side) else {
                return;
            };

            if self.arena[sibling].is_red() {
                trace_log!(case = "red sibling", "remove fixup");
                self.rotate(node, side);
                self.arena[node].color = Color::Red;
                self.arena[sibling].color = Color::Black;
                continue;
            }

            let near = self.arena[sibling].child(side);
            let far = self.arena[sibling].child(far_side);

            if !self.is_red(near) && !self.is_red(far) {
                trace_log!(case = "black nephews", "remove fixup");
                self.arena[sibling].color = Color::Red;
                if self.arena[node].is_red() {
                    self.arena[node].color = Color::Black;
                    return;
                }
                let Some((parent, from)) = self.position(node) else {
                    return;
                };
                node = parent;
                side = from;
                continue;
            }

            if let Some(near) = near
                && !self.is_red(far)
            {
                trace_log!(case = "red near nephew", "remove fixup");
                self.arena[near].color = Color::Black;
                self.arena[sibling].color = Color::Red;
                self.rotate(sibling, far_side);
                continue;
            }

            trace_log!(case = "red far nephew", "remove fixup");
            self.arena[sibling].color = self.arena[node].color;
            self.arena[node].color = Color::Black;
            if let Some(far) = far {
                self.arena[far].color = Color::Black;
            }
            self.rotate(node, side);
            return;
        }
    }
}
