/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AvlNode - A node in the AVL tree.

use crate::arena::{NodeArena, NodeIndex};

/// A node in the AVL tree.
///
/// Links to other nodes are [`NodeIndex`] handles into the tree's arena.
/// `left` and `right` are the owning edges; `parent` is a back-reference
/// that is `None` only for the root.
#[derive(Debug, Clone)]
pub struct AvlNode<T> {
    /// The stored element.
    pub(crate) value: T,
    /// Left child (values < `value`).
    pub(crate) left: Option<NodeIndex>,
    /// Right child (values > `value`).
    pub(crate) right: Option<NodeIndex>,
    /// Parent node, `None` for the root.
    pub(crate) parent: Option<NodeIndex>,
    /// Height of the subtree rooted at this node. A leaf has height 1.
    pub(crate) height: u32,
}

impl<T> AvlNode<T> {
    /// Create a new leaf hanging under `parent`.
    pub(crate) const fn leaf(value: T, parent: Option<NodeIndex>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
            height: 1,
        }
    }

    /// The element stored in this node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Index of the left child, if any.
    pub const fn left_index(&self) -> Option<NodeIndex> {
        self.left
    }

    /// Index of the right child, if any.
    pub const fn right_index(&self) -> Option<NodeIndex> {
        self.right
    }

    /// Index of the parent, `None` for the root.
    pub const fn parent_index(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Height of the subtree rooted at this node.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if this node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Height of an optional subtree; an absent child counts as 0.
#[inline]
pub(crate) fn height_of<T>(nodes: &NodeArena<T>, idx: Option<NodeIndex>) -> u32 {
    idx.map_or(0, |idx| nodes[idx].height)
}

/// Recompute the cached height of `idx` from its children.
#[inline]
pub(crate) fn update_height<T>(nodes: &mut NodeArena<T>, idx: NodeIndex) {
    let node = &nodes[idx];
    let height = height_of(nodes, node.left).max(height_of(nodes, node.right)) + 1;
    nodes[idx].height = height;
}

/// `height(right) - height(left)` for the node at `idx`.
#[inline]
pub(crate) fn balance_factor<T>(nodes: &NodeArena<T>, idx: NodeIndex) -> i64 {
    let node = &nodes[idx];
    i64::from(height_of(nodes, node.right)) - i64::from(height_of(nodes, node.left))
}
