/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Debug invariant checks for the AVL tree.
//!
//! These checks are gated behind the `unittest` feature flag and run
//! after every mutation (`insert`, `remove`, `pop_*`) to catch structural
//! violations early.

use super::AvlSet;
use crate::arena::NodeIndex;

impl<T: Ord> AvlSet<T> {
    /// Verify all structural invariants of the tree.
    ///
    /// Panics with a descriptive message if any invariant is violated.
    /// Called automatically after mutations when the `unittest` feature is enabled.
    pub fn check_tree_invariants(&self) {
        if let Some(root) = self.root {
            assert_eq!(
                self.nodes[root].parent, None,
                "root {root:?} must not have a parent"
            );
        }

        let counted = self.root.map_or(0, |root| self.check_node_invariants(root).1);
        assert_eq!(
            counted, self.len,
            "len mismatch: memoized={}, reachable={counted}",
            self.len,
        );
        assert_eq!(
            self.nodes.len(),
            self.len,
            "arena holds {} nodes but the set has {} elements",
            self.nodes.len(),
            self.len,
        );

        assert!(self.check_invariant(), "binary search ordering violated");
    }

    /// Recursively check invariants for the subtree rooted at `idx`.
    ///
    /// Returns `(height, node_count)` of the subtree.
    fn check_node_invariants(&self, idx: NodeIndex) -> (u32, usize) {
        let node = &self.nodes[idx];

        let child_summary = |child: Option<NodeIndex>| match child {
            None => (0, 0),
            Some(child) => {
                assert_eq!(
                    self.nodes[child].parent,
                    Some(idx),
                    "child {child:?} does not point back to its parent {idx:?}",
                );
                self.check_node_invariants(child)
            }
        };
        let (left_height, left_count) = child_summary(node.left);
        let (right_height, right_count) = child_summary(node.right);

        // --- Invariant 1: cached height ---
        let expected_height = left_height.max(right_height) + 1;
        assert_eq!(
            node.height, expected_height,
            "height mismatch at node {idx:?}: \
             stored {}, expected {expected_height} (left={left_height}, right={right_height})",
            node.height,
        );

        // --- Invariant 2: balance ---
        let imbalance = left_height.abs_diff(right_height);
        assert!(
            imbalance <= Self::MAXIMUM_BALANCE_FACTOR,
            "balance factor ({imbalance}) exceeds MAXIMUM_BALANCE_FACTOR ({}) \
             at node {idx:?} (left={left_height}, right={right_height})",
            Self::MAXIMUM_BALANCE_FACTOR,
        );

        (expected_height, left_count + right_count + 1)
    }
}
