/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: membership, endpoints, and neighbour queries.
//!
//! Every query here is a single descent from the root, so it runs in
//! `O(height)` without any auxiliary index.

use std::cmp::Ordering;

use super::AvlSet;
use crate::RangeFilter;
use crate::arena::NodeIndex;
use crate::error::{NavigableError, Result};

/// The relation a neighbour query asks for, relative to the query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Neighbor {
    /// Greatest value strictly less than the query.
    Lower,
    /// Greatest value less than or equal to the query.
    Floor,
    /// Least value greater than or equal to the query.
    Ceiling,
    /// Least value strictly greater than the query.
    Higher,
}

impl<T> AvlSet<T> {
    /// Index of the leftmost node of the subtree rooted at `idx`.
    pub(crate) fn leftmost(&self, mut idx: NodeIndex) -> NodeIndex {
        while let Some(left) = self.nodes[idx].left {
            idx = left;
        }
        idx
    }

    /// Index of the rightmost node of the subtree rooted at `idx`.
    pub(crate) fn rightmost(&self, mut idx: NodeIndex) -> NodeIndex {
        while let Some(right) = self.nodes[idx].right {
            idx = right;
        }
        idx
    }

    /// The smallest element of the set.
    ///
    /// Fails with [`NavigableError::NotFound`] if the set is empty.
    pub fn first(&self) -> Result<&T> {
        let root = self.root.ok_or(NavigableError::NotFound)?;
        Ok(&self.nodes[self.leftmost(root)].value)
    }

    /// The greatest element of the set.
    ///
    /// Fails with [`NavigableError::NotFound`] if the set is empty.
    pub fn last(&self) -> Result<&T> {
        let root = self.root.ok_or(NavigableError::NotFound)?;
        Ok(&self.nodes[self.rightmost(root)].value)
    }
}

impl<T: Ord> AvlSet<T> {
    /// Find the node holding `value`, or the node under which `value` would
    /// be attached if it were inserted.
    ///
    /// Returns `None` only if the tree is empty.
    pub(crate) fn find(&self, value: &T) -> Option<NodeIndex> {
        let mut current = self.root?;
        loop {
            let node = &self.nodes[current];
            let next = match value.cmp(&node.value) {
                Ordering::Equal => return Some(current),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            match next {
                Some(next) => current = next,
                None => return Some(current),
            }
        }
    }

    /// Find the node holding exactly `value`.
    pub(crate) fn find_exact(&self, value: &T) -> Option<NodeIndex> {
        self.find(value)
            .filter(|&idx| self.nodes[idx].value.cmp(value) == Ordering::Equal)
    }

    /// Returns `true` if the set contains `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find_exact(value).is_some()
    }

    /// The greatest element strictly less than `value`.
    pub fn lower(&self, value: &T) -> Option<&T> {
        self.neighbor(value, Neighbor::Lower)
    }

    /// The greatest element less than or equal to `value`.
    pub fn floor(&self, value: &T) -> Option<&T> {
        self.neighbor(value, Neighbor::Floor)
    }

    /// The least element greater than or equal to `value`.
    pub fn ceiling(&self, value: &T) -> Option<&T> {
        self.neighbor(value, Neighbor::Ceiling)
    }

    /// The least element strictly greater than `value`.
    pub fn higher(&self, value: &T) -> Option<&T> {
        self.neighbor(value, Neighbor::Higher)
    }

    fn neighbor(&self, value: &T, neighbor: Neighbor) -> Option<&T> {
        self.neighbor_index(value, neighbor)
            .map(|idx| &self.nodes[idx].value)
    }

    /// Descend from the root looking for the neighbour of `value`.
    ///
    /// # Descent Rule
    ///
    /// At each node, go left if the node is greater than `value` (or equal,
    /// for `lower`), otherwise go right. Every node passed on the correct
    /// side of `value` becomes the new candidate: later candidates lie in
    /// its subtree and are therefore closer to `value`. `floor` and
    /// `ceiling` stop early on an exact match.
    pub(crate) fn neighbor_index(&self, value: &T, neighbor: Neighbor) -> Option<NodeIndex> {
        let mut current = self.root;
        let mut best = None;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = match (node.value.cmp(value), neighbor) {
                (Ordering::Equal, Neighbor::Floor | Neighbor::Ceiling) => return Some(idx),
                (Ordering::Greater, Neighbor::Higher | Neighbor::Ceiling) => {
                    best = Some(idx);
                    node.left
                }
                (Ordering::Less, Neighbor::Lower | Neighbor::Floor) => {
                    best = Some(idx);
                    node.right
                }
                (Ordering::Greater, _) | (Ordering::Equal, Neighbor::Lower) => node.left,
                (Ordering::Less, _) | (Ordering::Equal, Neighbor::Higher) => node.right,
            };
        }
        best
    }

    /// Index of the smallest node inside `filter`.
    ///
    /// Tracks the last valid node on the path. A valid node sends the
    /// descent left, towards smaller valid values. An invalid node sends it
    /// towards the window.
    pub(crate) fn first_in(&self, filter: &RangeFilter<T>) -> Option<NodeIndex> {
        let mut current = self.root;
        let mut best = None;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = if !filter.admits_lower(&node.value) {
                node.right
            } else if !filter.admits_upper(&node.value) {
                node.left
            } else {
                best = Some(idx);
                node.left
            };
        }
        best
    }

    /// Index of the greatest node inside `filter`. Mirror of [`Self::first_in`].
    pub(crate) fn last_in(&self, filter: &RangeFilter<T>) -> Option<NodeIndex> {
        let mut current = self.root;
        let mut best = None;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = if !filter.admits_upper(&node.value) {
                node.left
            } else if !filter.admits_lower(&node.value) {
                node.right
            } else {
                best = Some(idx);
                node.right
            };
        }
        best
    }

    /// Neighbour query restricted to the elements inside `filter`.
    ///
    /// If `value` lies outside the window the answer follows from the
    /// bounds alone. A query beyond the far side has no answer. A query
    /// beyond the near side is answered by the window's first or last
    /// element. Otherwise the unrestricted neighbour is looked up. It is
    /// accepted only if it falls inside the window: anything further away
    /// would be outside too.
    pub(crate) fn neighbor_in(
        &self,
        value: &T,
        neighbor: Neighbor,
        filter: &RangeFilter<T>,
    ) -> Option<NodeIndex> {
        match neighbor {
            Neighbor::Lower if !filter.reaches_below(value) => return None,
            Neighbor::Floor if !filter.admits_lower(value) => return None,
            Neighbor::Ceiling if !filter.admits_upper(value) => return None,
            Neighbor::Higher if !filter.reaches_above(value) => return None,
            Neighbor::Lower | Neighbor::Floor if !filter.admits_upper(value) => {
                return self.last_in(filter);
            }
            Neighbor::Ceiling | Neighbor::Higher if !filter.admits_lower(value) => {
                return self.first_in(filter);
            }
            _ => {}
        }
        self.neighbor_index(value, neighbor)
            .filter(|&idx| filter.contains(&self.nodes[idx].value))
    }
}
