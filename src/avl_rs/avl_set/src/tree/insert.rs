/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: insertion, rotations, and balancing.
//!
//! Adding a value descends to the closest node, attaches a new leaf under
//! it, and then walks back up through the `parent` links restoring the AVL
//! balance with single or double rotations.

use std::cmp::Ordering;

use tracing::trace;

use super::AvlSet;
use crate::AvlNode;
use crate::arena::NodeIndex;
use crate::node::{balance_factor, height_of, update_height};

impl<T: Ord> AvlSet<T> {
    /// Add a value to the set.
    ///
    /// Returns `true` if the value was inserted, `false` if an equal value
    /// was already present. In the latter case the set is left untouched.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.attach(value);

        #[cfg(any(test, all(feature = "unittest", not(miri))))]
        self.check_tree_invariants();

        inserted
    }

    fn attach(&mut self, value: T) -> bool {
        let Some(closest) = self.find(&value) else {
            // Empty tree: the new node becomes the root.
            self.root = Some(self.nodes.insert(AvlNode::leaf(value, None)));
            self.len = 1;
            return true;
        };

        let ordering = value.cmp(&self.nodes[closest].value);
        if ordering == Ordering::Equal {
            return false;
        }

        let new_idx = self.nodes.insert(AvlNode::leaf(value, Some(closest)));
        let parent = &mut self.nodes[closest];
        if ordering == Ordering::Less {
            debug_assert!(parent.left.is_none(), "closest node must have a free left slot");
            parent.left = Some(new_idx);
        } else {
            debug_assert!(parent.right.is_none(), "closest node must have a free right slot");
            parent.right = Some(new_idx);
        }
        self.len += 1;

        self.balance_from(Some(closest));
        true
    }

    /// Restore heights and balance from `start` up to the root.
    ///
    /// At every node the cached height is recomputed first. A balance factor
    /// of -2 or +2 is fixed with a single rotation when the taller grandchild
    /// is on the outside, or with a double rotation when it is on the inside.
    /// The walk then resumes at the parent of whichever node now roots the
    /// subtree, since a rotation can change an ancestor's balance.
    ///
    /// # Panics
    ///
    /// Panics if a balance factor outside `-2..=2` is found. That can only
    /// happen if the tree was already corrupted on entry.
    pub(super) fn balance_from(&mut self, start: Option<NodeIndex>) {
        let mut current = start;
        while let Some(idx) = current {
            update_height(&mut self.nodes, idx);

            let subtree_root = match balance_factor(&self.nodes, idx) {
                -1..=1 => idx,
                -2 => {
                    let left = self.nodes[idx]
                        .left
                        .expect("a left-heavy node must have a left child");
                    let outer = height_of(&self.nodes, self.nodes[left].left);
                    let inner = height_of(&self.nodes, self.nodes[left].right);
                    if outer >= inner {
                        self.rotate_right(idx)
                    } else {
                        self.rotate_left_then_right(idx)
                    }
                }
                2 => {
                    let right = self.nodes[idx]
                        .right
                        .expect("a right-heavy node must have a right child");
                    let outer = height_of(&self.nodes, self.nodes[right].right);
                    let inner = height_of(&self.nodes, self.nodes[right].left);
                    if outer >= inner {
                        self.rotate_left(idx)
                    } else {
                        self.rotate_right_then_left(idx)
                    }
                }
                factor => panic!(
                    "balance factor {factor} at node {idx:?} is out of range, the tree is corrupted"
                ),
            };

            current = self.nodes[subtree_root].parent;
        }
    }

    /// Rotate the subtree rooted at `idx` to the left.
    ///
    /// The right child is promoted into `idx`'s place, `idx` becomes its left
    /// child, and the promoted node's former left subtree is reattached as
    /// `idx`'s right subtree. Returns the index of the promoted node.
    fn rotate_left(&mut self, idx: NodeIndex) -> NodeIndex {
        let pivot = self.nodes[idx]
            .right
            .expect("cannot rotate left without a right child");
        let parent = self.nodes[idx].parent;
        let inner = self.nodes[pivot].left;

        self.nodes[idx].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(idx);
        }

        self.replace_child(parent, idx, Some(pivot));
        self.nodes[pivot].left = Some(idx);
        self.nodes[idx].parent = Some(pivot);

        update_height(&mut self.nodes, idx);
        update_height(&mut self.nodes, pivot);

        trace!(promoted = ?pivot, demoted = ?idx, "rotate left");
        pivot
    }

    /// Rotate the subtree rooted at `idx` to the right.
    ///
    /// Mirror image of [`Self::rotate_left`]. Returns the index of the
    /// promoted node.
    fn rotate_right(&mut self, idx: NodeIndex) -> NodeIndex {
        let pivot = self.nodes[idx]
            .left
            .expect("cannot rotate right without a left child");
        let parent = self.nodes[idx].parent;
        let inner = self.nodes[pivot].right;

        self.nodes[idx].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(idx);
        }

        self.replace_child(parent, idx, Some(pivot));
        self.nodes[pivot].right = Some(idx);
        self.nodes[idx].parent = Some(pivot);

        update_height(&mut self.nodes, idx);
        update_height(&mut self.nodes, pivot);

        trace!(promoted = ?pivot, demoted = ?idx, "rotate right");
        pivot
    }

    /// Left-right case: rotate the left child left, then `idx` right.
    fn rotate_left_then_right(&mut self, idx: NodeIndex) -> NodeIndex {
        let left = self.nodes[idx]
            .left
            .expect("cannot rotate left-right without a left child");
        self.rotate_left(left);
        self.rotate_right(idx)
    }

    /// Right-left case: rotate the right child right, then `idx` left.
    fn rotate_right_then_left(&mut self, idx: NodeIndex) -> NodeIndex {
        let right = self.nodes[idx]
            .right
            .expect("cannot rotate right-left without a right child");
        self.rotate_right(right);
        self.rotate_left(idx)
    }

    /// Point `parent`'s link to `old` at `new` instead, and set `new`'s
    /// parent accordingly. A `None` parent means `old` is the root.
    pub(super) fn replace_child(
        &mut self,
        parent: Option<NodeIndex>,
        old: NodeIndex,
        new: Option<NodeIndex>,
    ) {
        if let Some(new) = new {
            self.nodes[new].parent = parent;
        }
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    debug_assert_eq!(parent.right, Some(old), "{old:?} is not a child of its parent");
                    parent.right = new;
                }
            }
        }
    }
}
