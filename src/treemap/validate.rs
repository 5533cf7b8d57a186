//! Structural self-checks.

use super::TreeMap;
use super::node::{Link, NodeIndex};
use crate::error::InvariantViolation;

impl<K: Ord, V> TreeMap<K, V> {
    /// Checks every red-black and search-tree invariant.
    ///
    /// Verifies that the root is black and has no parent, that no red node
    /// has a red child, that all paths carry the same number of black nodes,
    /// that keys are strictly ordered, that every child links back to its
    /// parent, and that the recorded length matches the reachable nodes.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbtree_map::TreeMap;
    ///
    /// let map: TreeMap<i32, i32> = (0..100).map(|key| (key, key)).collect();
    /// assert_eq!(map.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let Some(root) = self.root else {
            return if self.length == 0 {
                Ok(())
            } else {
                Err(InvariantViolation::LengthMismatch {
                    counted: 0,
                    recorded: self.length,
                })
            };
        };
        if self.arena[root].is_red() {
            return Err(InvariantViolation::RedRoot);
        }
        if self.arena[root].parent.is_some() {
            return Err(InvariantViolation::BrokenParentLink { depth: 0 });
        }

        let mut counted = 0;
        self.check_subtree(root, 0, None, None, &mut counted)?;
        if counted != self.length {
            return Err(InvariantViolation::LengthMismatch {
                counted,
                recorded: self.length,
            });
        }
        Ok(())
    }

    /// Validates the subtree at `index` and returns its black height.
    fn check_subtree(
        &self,
        index: NodeIndex,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
        counted: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        let node = &self.arena[index];
        *counted += 1;

        let below_lower = lower.is_some_and(|lower| node.key <= *lower);
        let above_upper = upper.is_some_and(|upper| node.key >= *upper);
        if below_lower || above_upper {
            return Err(InvariantViolation::OrderViolation { depth });
        }

        let mut heights = [0; 2];
        for (slot, child) in [node.left, node.right].into_iter().enumerate() {
            let Some(child) = child else {
                continue;
            };
            let child_node = &self.arena[child];
            if child_node.parent != Some(index) {
                return Err(InvariantViolation::BrokenParentLink { depth: depth + 1 });
            }
            if node.is_red() && child_node.is_red() {
                return Err(InvariantViolation::RedRed { depth: depth + 1 });
            }
            let (child_lower, child_upper) = if slot == 0 {
                (lower, Some(&node.key))
            } else {
                (Some(&node.key), upper)
            };
            heights[slot] =
                self.check_subtree(child, depth + 1, child_lower, child_upper, counted)?;
        }

        let [left, right] = heights;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { left, right });
        }
        Ok(left + usize::from(!node.is_red()))
    }
}

impl<K, V> TreeMap<K, V> {
    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// An empty map has height 0.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(Link, usize)> = vec![(self.root, 1)];
        while let Some((link, depth)) = pending.pop() {
            if let Some(index) = link {
                deepest = deepest.max(depth);
                let node = &self.arena[index];
                pending.push((node.left, depth + 1));
                pending.push((node.right, depth + 1));
            }
        }
        deepest
    }

    /// Returns the number of black nodes on the path from the root to its leftmost leaf.
    ///
    /// For a valid tree every root-to-leaf path has this many black nodes.
    #[must_use]
    pub fn black_height(&self) -> usize {
        let mut black = 0;
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.arena[index];
            black += usize::from(!node.is_red());
            current = node.left;
        }
        black
    }
}
