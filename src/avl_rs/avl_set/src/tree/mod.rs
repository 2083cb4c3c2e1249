/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AVL tree implementation.
//!
//! This module contains the core tree structure and algorithms of the set.
//!
//! The implementation is split into sub-modules by concern:
//! - [`insert`]: Write path (insertion, rotations, rebalancing)
//! - [`remove`]: Delete path (splicing, predecessor replacement, polling)
//! - [`find`]: Read path (membership, endpoints, neighbour queries)

mod find;
mod insert;
#[cfg(any(test, all(feature = "unittest", not(miri))))]
mod invariants;
mod remove;

pub(crate) use find::Neighbor;

use std::fmt;

use crate::AvlNode;
use crate::arena::{NodeArena, NodeIndex};
use crate::iter::Iter;

/// An ordered set of unique values, backed by a height-balanced binary
/// search tree.
///
/// # Arena Storage
///
/// All nodes are stored in a [`NodeArena`]. Children and parents are
/// referenced by [`NodeIndex`] instead of pointers, so rotations are index
/// rewrites and the parent back-links carry no ownership.
///
/// # Balancing
///
/// After every insertion and removal the tree is rebalanced bottom-up with
/// single and double rotations, so that for every node the heights of its
/// two subtrees differ by at most [`Self::MAXIMUM_BALANCE_FACTOR`].
///
/// # Views
///
/// [`sub_set`](Self::sub_set), [`head_set`](Self::head_set) and
/// [`tail_set`](Self::tail_set) (and their `_mut` variants) return live
/// windows over the tree. They never copy elements.
#[derive(Clone)]
pub struct AvlSet<T> {
    /// The root node index, `None` when the set is empty.
    pub(crate) root: Option<NodeIndex>,
    /// Arena holding all tree nodes.
    pub(crate) nodes: NodeArena<T>,
    /// Number of elements in the set.
    pub(crate) len: usize,
}

impl<T> AvlSet<T> {
    /// Maximum allowed difference between the heights of the two subtrees
    /// of any node.
    pub const MAXIMUM_BALANCE_FACTOR: u32 = 1;

    /// Create a new empty set.
    pub const fn new() -> Self {
        Self {
            root: None,
            nodes: NodeArena::new(),
            len: 0,
        }
    }

    /// Create a new empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: None,
            nodes: NodeArena::with_capacity(capacity),
            len: 0,
        }
    }

    /// Number of elements in the set.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of elements the set can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Height of the tree, 0 when empty.
    pub fn height(&self) -> u32 {
        self.root.map_or(0, |root| self.nodes[root].height)
    }

    /// Get the root node index.
    pub const fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Resolve a [`NodeIndex`] to a shared reference to the node.
    ///
    /// # Panics
    ///
    /// Panics if the index does not refer to a node of this tree.
    pub fn node(&self, idx: NodeIndex) -> &AvlNode<T> {
        &self.nodes[idx]
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.root = None;
        self.nodes.clear();
        self.len = 0;
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: Ord> AvlSet<T> {
    /// Verify the binary-search-tree ordering of the whole tree.
    ///
    /// Every value in a left subtree must be strictly less than its
    /// ancestor, and every value in a right subtree strictly greater.
    /// Returns `false` on the first violation.
    pub fn check_invariant(&self) -> bool {
        let Some(root) = self.root else {
            return true;
        };
        // (node, exclusive lower limit, exclusive upper limit)
        let mut stack: Vec<(NodeIndex, Option<&T>, Option<&T>)> = vec![(root, None, None)];
        while let Some((idx, low, high)) = stack.pop() {
            let node = &self.nodes[idx];
            if low.is_some_and(|low| node.value <= *low) || high.is_some_and(|high| node.value >= *high) {
                return false;
            }
            if let Some(left) = node.left {
                stack.push((left, low, Some(&node.value)));
            }
            if let Some(right) = node.right {
                stack.push((right, Some(&node.value), high));
            }
        }
        true
    }

    /// Insert every element of `iter`.
    ///
    /// Returns `true` if every element was newly inserted.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, iter: I) -> bool {
        iter.into_iter()
            .fold(true, |all, value| self.insert(value) && all)
    }

    /// Returns `true` if every element of `iter` is in the set.
    pub fn contains_all<'a, I>(&self, iter: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        iter.into_iter().all(|value| self.contains(value))
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for AvlSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AvlSet<T> {}

impl<T: Ord> FromIterator<T> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
