/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! In-order traversal of the set.
//!
//! All iterators walk the tree with an explicit stack of pending ancestors
//! instead of recursion, so traversal depth is bounded by the heap rather
//! than the call stack.

use std::fmt;
use std::iter::FusedIterator;

use lending_iterator::prelude::*;

use crate::arena::NodeIndex;
use crate::error::{NavigableError, Result};
use crate::{AvlSet, RangeFilter};

/// An iterator over the elements of an [`AvlSet`] in ascending order.
///
/// Created by [`AvlSet::iter`].
pub struct Iter<'a, T> {
    tree: &'a AvlSet<T>,
    /// Nodes whose left subtree is being visited. The top of the stack is
    /// the next element to yield.
    stack: Vec<NodeIndex>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a AvlSet<T>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::with_capacity(tree.height() as usize),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<NodeIndex>) {
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.tree.nodes[idx].left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = &self.tree.nodes[idx];
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Push the pending ancestors of the smallest in-window element of the
/// subtree rooted at `current`.
///
/// Subtrees that lie entirely outside `filter` are never entered: a node
/// below the window sends the walk right, a node above it sends it left,
/// and the left subtree of an in-window node is skipped when nothing
/// smaller can be in the window.
fn push_window_spine<T: Ord>(
    tree: &AvlSet<T>,
    filter: &RangeFilter<T>,
    stack: &mut Vec<NodeIndex>,
    mut current: Option<NodeIndex>,
) {
    while let Some(idx) = current {
        let node = &tree.nodes[idx];
        current = if !filter.admits_lower(&node.value) {
            node.right
        } else if !filter.admits_upper(&node.value) {
            node.left
        } else {
            stack.push(idx);
            node.left.filter(|_| filter.reaches_below(&node.value))
        };
    }
}

/// Pop the next in-window element off `stack` and queue its successors.
fn advance_window<T: Ord>(
    tree: &AvlSet<T>,
    filter: &RangeFilter<T>,
    stack: &mut Vec<NodeIndex>,
) -> Option<NodeIndex> {
    let idx = stack.pop()?;
    let node = &tree.nodes[idx];
    if filter.reaches_above(&node.value) {
        push_window_spine(tree, filter, stack, node.right);
    }
    Some(idx)
}

/// An iterator over the elements of a range view, in ascending order.
///
/// Created by [`SetView::iter`](crate::SetView::iter) and
/// [`SetViewMut::iter`](crate::SetViewMut::iter).
pub struct RangeIter<'a, T> {
    tree: &'a AvlSet<T>,
    filter: &'a RangeFilter<T>,
    stack: Vec<NodeIndex>,
}

impl<'a, T: Ord> RangeIter<'a, T> {
    pub(crate) fn new(tree: &'a AvlSet<T>, filter: &'a RangeFilter<T>) -> Self {
        let mut stack = Vec::with_capacity(tree.height() as usize);
        push_window_spine(tree, filter, &mut stack, tree.root);
        Self {
            tree,
            filter,
            stack,
        }
    }
}

impl<'a, T: Ord> Iterator for RangeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = advance_window(self.tree, self.filter, &mut self.stack)?;
        Some(&self.tree.nodes[idx].value)
    }
}

impl<T: Ord> FusedIterator for RangeIter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for RangeIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeIter")
            .field("filter", self.filter)
            .field("pending", &self.stack.len())
            .finish()
    }
}

/// A cursor walking a set (or a window of it) in ascending order, able to
/// remove the element it last returned.
///
/// Advance it with [`LendingIterator::next`]. Each returned reference is
/// only valid until the next call on the cursor, which lets
/// [`remove_current`](Self::remove_current) mutate the tree in between.
///
/// ```
/// use avl_set::AvlSet;
/// use lending_iterator::LendingIterator;
///
/// let mut set: AvlSet<u32> = (1..=10).collect();
/// let mut cursor = set.cursor_mut();
/// while let Some(&value) = LendingIterator::next(&mut cursor) {
///     if value % 2 == 0 {
///         cursor.remove_current().unwrap();
///     }
/// }
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 7, 9]);
/// ```
pub struct CursorMut<'a, T> {
    tree: &'a mut AvlSet<T>,
    filter: RangeFilter<T>,
    stack: Vec<NodeIndex>,
    /// The element returned by the last call to `next`, if it is still in
    /// the tree.
    current: Option<NodeIndex>,
}

impl<'a, T: Ord> CursorMut<'a, T> {
    pub(crate) fn new(tree: &'a mut AvlSet<T>, filter: RangeFilter<T>) -> Self {
        let mut stack = Vec::with_capacity(tree.height() as usize);
        push_window_spine(&*tree, &filter, &mut stack, tree.root);
        Self {
            tree,
            filter,
            stack,
            current: None,
        }
    }

    /// The element returned by the last call to `next`, unless it has been
    /// removed since.
    pub fn current(&self) -> Option<&T> {
        self.current.map(|idx| &self.tree.nodes[idx].value)
    }

    /// Remove the element returned by the last call to `next` and hand it
    /// back. Iteration then continues with its successor.
    ///
    /// Fails with [`NavigableError::NotFound`] if `next` has not been called
    /// yet, if it returned `None`, or if the element was already removed.
    pub fn remove_current(&mut self) -> Result<T> {
        let idx = self.current.take().ok_or(NavigableError::NotFound)?;
        let removed = self.tree.remove_at(idx);
        self.seek_after(&removed);
        Ok(removed)
    }

    /// Rebuild the stack so that the next element yielded is the smallest
    /// in-window element strictly greater than `value`.
    ///
    /// Removal may rotate the tree or move a value into another node, so
    /// the pending ancestors recorded before the removal cannot be reused.
    fn seek_after(&mut self, value: &T) {
        self.stack.clear();
        let mut current = self.tree.root;
        while let Some(idx) = current {
            let node = &self.tree.nodes[idx];
            current = if node.value > *value {
                if self.filter.admits_upper(&node.value) {
                    self.stack.push(idx);
                }
                node.left
            } else {
                node.right
            };
        }
    }
}

// The [`LendingIterator`] trait lets the yielded reference borrow the cursor,
// so it cannot outlive a subsequent `remove_current`.
#[gat]
// The 'a lifetime parameter is not actually needless.
#[allow(clippy::needless_lifetimes)]
impl<'a, T: Ord> LendingIterator for CursorMut<'a, T> {
    type Item<'next>
    where
        Self: 'next,
    = &'next T;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        self.current = advance_window(&*self.tree, &self.filter, &mut self.stack);
        self.current.map(|idx| &self.tree.nodes[idx].value)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("filter", &self.filter)
            .field("current", &self.current.map(|idx| &self.tree.nodes[idx].value))
            .finish()
    }
}

impl<T: Ord> AvlSet<T> {
    /// Returns a cursor over the whole set that can remove elements while
    /// iterating.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, RangeFilter::all())
    }
}
