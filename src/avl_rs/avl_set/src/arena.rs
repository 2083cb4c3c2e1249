/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for AVL tree nodes.
//!
//! Nodes live in a [`Slab`] and refer to each other through [`NodeIndex`]
//! handles. Child links are the owning edges of the tree; parent links are
//! plain handles with no ownership implied, which keeps the parent/child
//! cycle out of the type system entirely.

use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::AvlNode;

/// Index into the node arena.
///
/// This is a lightweight handle that stays valid until the node it refers to
/// is removed from the tree. Rotations never invalidate handles: they only
/// rewrite the links stored inside the nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Return the slot position of this handle inside the arena.
    pub const fn position(self) -> usize {
        self.0
    }
}

/// Arena storage for [`AvlNode`]s.
///
/// A newtype around [`Slab<AvlNode<T>>`] that indexes by [`NodeIndex`]
/// instead of a raw `usize`.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    nodes: Slab<AvlNode<T>>,
}

impl<T> NodeArena<T> {
    /// Create a new empty arena.
    pub(crate) const fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    /// Create an empty arena with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
        }
    }

    /// Number of nodes currently stored in the arena.
    ///
    /// Not to be confused with the capacity of the underlying slab.
    #[cfg_attr(
        not(any(test, all(feature = "unittest", not(miri)))),
        expect(dead_code, reason = "used by invariant checks in unittest feature")
    )]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes the arena can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Insert a node into the arena, returning its index.
    pub(crate) fn insert(&mut self, node: AvlNode<T>) -> NodeIndex {
        NodeIndex(self.nodes.insert(node))
    }

    /// Remove a node from the arena, returning it.
    ///
    /// # Panics
    ///
    /// Panics if the index does not refer to a live node.
    pub(crate) fn remove(&mut self, idx: NodeIndex) -> AvlNode<T> {
        self.nodes.remove(idx.0)
    }

    /// Drop every node, keeping the allocation around.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<T> Index<NodeIndex> for NodeArena<T> {
    type Output = AvlNode<T>;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.nodes[idx.0]
    }
}

impl<T> IndexMut<NodeIndex> for NodeArena<T> {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.0]
    }
}
