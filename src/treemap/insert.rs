//! Insertion and insert rebalancing.

use std::cmp::Ordering;
use std::mem;

use super::TreeMap;
use super::node::{Color, Node, NodeIndex, Side};
use crate::tracing_helpers::{debug_log, trace_log};

impl<K: Ord, V> TreeMap<K, V> {
    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contains the key, the value is replaced in place
    /// and the old value is returned; the structure and the length are left
    /// untouched. Otherwise a new red leaf is attached and the tree is
    /// rebalanced, and `None` is returned.
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
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.insert(1, "one"), None);
    /// assert_eq!(map.insert(1, "ONE"), Some("one"));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&1), Some(&"ONE"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Some(mut current) = self.root else {
            let root = self.arena.allocate(Node::new(key, value, Color::Black));
            self.root = Some(root);
            self.length = 1;
            debug_log!(length = self.length, "inserted root entry");
            return None;
        };

        let side = loop {
            let node = &mut self.arena[current];
            let side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            };
            match node.child(side) {
                Some(next) => current = next,
                None => break side,
            }
        };

        let mut leaf = Node::new(key, value, Color::Red);
        leaf.parent = Some(current);
        let leaf = self.arena.allocate(leaf);
        self.arena[current].set_child(side, Some(leaf));
        self.length += 1;
        debug_log!(length = self.length, "inserted entry");

        self.insert_fixup(leaf);
        None
    }
}

impl<K, V> TreeMap<K, V> {
    /// Restores the red-black invariants after `node` was attached as a red leaf.
    fn insert_fixup(&mut self, mut node: NodeIndex) {
        while let Some(parent) = self.arena[node].parent
            && let Some((grandparent, parent_side)) = self.position(parent)
            && self.arena[parent].is_red()
        {
            let uncle_side = parent_side.opposite();
            let uncle = self.arena[grandparent].child(uncle_side);

            if let Some(uncle) = uncle
                && self.arena[uncle].is_red()
            {
                trace_log!(case = "red uncle", "insert fixup");
                self.arena[parent].color = Color::Black;
                self.arena[uncle].color = Color::Black;
                self.arena[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.arena[parent].child(uncle_side) == Some(node) {
                trace_log!(case = "inner child", "insert fixup");
                self.rotate(parent, parent_side);
                mem::swap(&mut node, &mut parent);
            }

            trace_log!(case = "outer child", "insert fixup");
            self.arena[parent].color = Color::Black;
            self.arena[grandparent].color = Color::Red;
            self.rotate(grandparent, uncle_side);
        }

        if let Some(root) = self.root {
            self.arena[root].color = Color::Black;
        }
    }
}
