/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Delete path: splicing nodes out of the tree and rebalancing.

use tracing::debug;

use super::AvlSet;
use crate::arena::NodeIndex;

impl<T: Ord> AvlSet<T> {
    /// Remove a value from the set.
    ///
    /// Returns `true` if the value was present. Removing an absent value is
    /// a no-op that returns `false`.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Remove a value from the set and hand back the stored element.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let idx = self.find_exact(value)?;
        Some(self.remove_at(idx))
    }

    /// Remove and return the smallest element, or `None` if the set is empty.
    pub fn pop_first(&mut self) -> Option<T> {
        let idx = self.leftmost(self.root?);
        Some(self.remove_at(idx))
    }

    /// Remove and return the greatest element, or `None` if the set is empty.
    pub fn pop_last(&mut self) -> Option<T> {
        let idx = self.rightmost(self.root?);
        Some(self.remove_at(idx))
    }

    /// Remove every element of `iter`.
    ///
    /// Returns `true` if every element was present.
    pub fn remove_all<'a, I>(&mut self, iter: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        iter.into_iter()
            .fold(true, |all, value| self.remove(value) && all)
    }

    /// Remove the node at `idx` and return its element.
    pub(crate) fn remove_at(&mut self, idx: NodeIndex) -> T {
        let value = self.splice_out(idx);

        #[cfg(any(test, all(feature = "unittest", not(miri))))]
        self.check_tree_invariants();

        value
    }

    /// Unlink the node at `idx` and rebalance.
    ///
    /// # Algorithm
    ///
    /// - **No children**: the parent's slot is cleared.
    /// - **One child**: the child takes the node's place.
    /// - **Two children**: the in-order predecessor (rightmost node of the
    ///   left subtree) is detached, its left child promoted into its slot,
    ///   and its element moved into the node at `idx`. The node at `idx`
    ///   keeps its links, so it acts as the replacement node carrying the
    ///   predecessor's value and the removed node's children.
    ///
    /// Rebalancing starts at the parent of the structurally changed
    /// location: the removed node's parent (the new root if it had none),
    /// or the predecessor's former parent in the two-children case.
    fn splice_out(&mut self, idx: NodeIndex) -> T {
        self.len -= 1;
        let node = &self.nodes[idx];
        let (left, right, parent) = (node.left, node.right, node.parent);

        match (left, right) {
            (None, None) => self.replace_child(parent, idx, None),
            (Some(child), None) | (None, Some(child)) => self.replace_child(parent, idx, Some(child)),
            (Some(left), Some(_)) => {
                let predecessor = self.rightmost(left);
                let predecessor_parent = self.nodes[predecessor]
                    .parent
                    .expect("the in-order predecessor always has a parent");
                let promoted = self.nodes[predecessor].left;
                self.replace_child(Some(predecessor_parent), predecessor, promoted);

                debug!(
                    removed = ?idx,
                    predecessor = ?predecessor,
                    "replacing node with its in-order predecessor"
                );

                let predecessor = self.nodes.remove(predecessor);
                let removed = std::mem::replace(&mut self.nodes[idx].value, predecessor.value);
                self.balance_from(Some(predecessor_parent));
                return removed;
            }
        }

        let removed = self.nodes.remove(idx);
        self.balance_from(parent.or(self.root));
        removed.value
    }
}
