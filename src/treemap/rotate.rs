//! Rotation primitives.
//!
//! Rotations are the only operations that change the shape of the tree.
//! Every rebalancing step in insertion and removal is a sequence of
//! recolors and calls into this module.

use super::TreeMap;
use super::node::{NodeIndex, Side};

impl<K, V> TreeMap<K, V> {
    /// Rotates the subtree rooted at `node` towards `side`.
    ///
    /// `Side::Left` is a left rotation (the right child is promoted),
    /// `Side::Right` the mirror.
    ///
    /// The child on the opposite side (the pivot) takes `node`'s place, the
    /// pivot's inner subtree moves under `node`, and `node` becomes the
    /// pivot's `side` child. The parent's child link (or the root) and all
    /// three affected parent links are updated. Does nothing when the pivot
    /// is absent.
    pub(crate) fn rotate(&mut self, node: NodeIndex, side: Side) {
        let Some(pivot) = self.arena[node].child(side.opposite()) else {
            return;
        };

        let inner = self.arena[pivot].child(side);
        self.arena[node].set_child(side.opposite(), inner);
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(node);
        }

        match self.position(node) {
            Some((parent, from)) => self.arena[parent].set_child(from, Some(pivot)),
            None => self.root = Some(pivot),
        }
        self.arena[pivot].parent = self.arena[node].parent;

        self.arena[pivot].set_child(side, Some(node));
        self.arena[node].parent = Some(pivot);
    }
}
