/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Live range views over an [`AvlSet`].
//!
//! A view is a [`RangeFilter`] paired with a borrow of the backing tree. It
//! holds no elements of its own: every query descends the backing tree and
//! keeps only the results inside the window. Narrowing a view intersects the
//! two windows and borrows the same tree again, so views never stack on top
//! of each other.

use std::fmt;

use crate::error::{NavigableError, Result};
use crate::iter::{CursorMut, RangeIter};
use crate::tree::Neighbor;
use crate::{AvlSet, RangeBoundary, RangeFilter};

fn window<T>(from: T, from_inclusive: bool, to: T, to_inclusive: bool) -> RangeFilter<T> {
    RangeFilter::between(
        RangeBoundary::new(from, from_inclusive),
        RangeBoundary::new(to, to_inclusive),
    )
}

impl<T: Ord> AvlSet<T> {
    /// A read-only view of the elements inside `filter`.
    pub fn range(&self, filter: RangeFilter<T>) -> SetView<'_, T> {
        SetView { tree: self, filter }
    }

    /// A read-only view of the elements between `from` and `to`.
    ///
    /// If `from` is greater than `to` the view is empty.
    pub fn sub_set(&self, from: T, from_inclusive: bool, to: T, to_inclusive: bool) -> SetView<'_, T> {
        self.range(window(from, from_inclusive, to, to_inclusive))
    }

    /// A read-only view of the elements less than (or equal to, if
    /// `inclusive`) `to`.
    pub fn head_set(&self, to: T, inclusive: bool) -> SetView<'_, T> {
        self.range(RangeFilter::below(RangeBoundary::new(to, inclusive)))
    }

    /// A read-only view of the elements greater than (or equal to, if
    /// `inclusive`) `from`.
    pub fn tail_set(&self, from: T, inclusive: bool) -> SetView<'_, T> {
        self.range(RangeFilter::above(RangeBoundary::new(from, inclusive)))
    }

    /// A mutable view of the elements inside `filter`.
    pub fn range_mut(&mut self, filter: RangeFilter<T>) -> SetViewMut<'_, T> {
        SetViewMut { tree: self, filter }
    }

    /// A mutable view of the elements between `from` and `to`.
    pub fn sub_set_mut(
        &mut self,
        from: T,
        from_inclusive: bool,
        to: T,
        to_inclusive: bool,
    ) -> SetViewMut<'_, T> {
        self.range_mut(window(from, from_inclusive, to, to_inclusive))
    }

    /// A mutable view of the elements less than (or equal to, if
    /// `inclusive`) `to`.
    pub fn head_set_mut(&mut self, to: T, inclusive: bool) -> SetViewMut<'_, T> {
        self.range_mut(RangeFilter::below(RangeBoundary::new(to, inclusive)))
    }

    /// A mutable view of the elements greater than (or equal to, if
    /// `inclusive`) `from`.
    pub fn tail_set_mut(&mut self, from: T, inclusive: bool) -> SetViewMut<'_, T> {
        self.range_mut(RangeFilter::above(RangeBoundary::new(from, inclusive)))
    }
}

/// A read-only window over an [`AvlSet`].
///
/// Created by [`AvlSet::range`], [`AvlSet::sub_set`], [`AvlSet::head_set`]
/// and [`AvlSet::tail_set`]. Any number of views may borrow the same set.
pub struct SetView<'a, T> {
    tree: &'a AvlSet<T>,
    filter: RangeFilter<T>,
}

impl<'a, T: Ord> SetView<'a, T> {
    /// The bounds of this view.
    pub const fn filter(&self) -> &RangeFilter<T> {
        &self.filter
    }

    /// Returns `true` if `value` is inside the window and in the set.
    pub fn contains(&self, value: &T) -> bool {
        self.filter.contains(value) && self.tree.contains(value)
    }

    /// Returns `true` if every element of `iter` is in the view.
    pub fn contains_all<'v, I>(&self, iter: I) -> bool
    where
        I: IntoIterator<Item = &'v T>,
        T: 'v,
    {
        iter.into_iter().all(|value| self.contains(value))
    }

    /// Number of elements inside the window.
    ///
    /// Counts by walking the window, so this is linear in the result.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if no element of the set lies inside the window.
    pub fn is_empty(&self) -> bool {
        self.tree.first_in(&self.filter).is_none()
    }

    /// The smallest element inside the window.
    pub fn first(&self) -> Result<&'a T> {
        let tree = self.tree;
        let idx = tree.first_in(&self.filter).ok_or(NavigableError::NotFound)?;
        Ok(&tree.nodes[idx].value)
    }

    /// The greatest element inside the window.
    pub fn last(&self) -> Result<&'a T> {
        let tree = self.tree;
        let idx = tree.last_in(&self.filter).ok_or(NavigableError::NotFound)?;
        Ok(&tree.nodes[idx].value)
    }

    /// The greatest element of the window strictly less than `value`.
    pub fn lower(&self, value: &T) -> Option<&'a T> {
        self.neighbor(value, Neighbor::Lower)
    }

    /// The greatest element of the window less than or equal to `value`.
    pub fn floor(&self, value: &T) -> Option<&'a T> {
        self.neighbor(value, Neighbor::Floor)
    }

    /// The least element of the window greater than or equal to `value`.
    pub fn ceiling(&self, value: &T) -> Option<&'a T> {
        self.neighbor(value, Neighbor::Ceiling)
    }

    /// The least element of the window strictly greater than `value`.
    pub fn higher(&self, value: &T) -> Option<&'a T> {
        self.neighbor(value, Neighbor::Higher)
    }

    fn neighbor(&self, value: &T, neighbor: Neighbor) -> Option<&'a T> {
        let tree = self.tree;
        tree.neighbor_in(value, neighbor, &self.filter)
            .map(|idx| &tree.nodes[idx].value)
    }

    /// Iterate over the window in ascending order.
    pub fn iter(&self) -> RangeIter<'_, T> {
        RangeIter::new(self.tree, &self.filter)
    }
}

impl<'a, T: Ord + Clone> SetView<'a, T> {
    /// Narrow this view to the elements also inside `filter`.
    ///
    /// The result borrows the same set. Narrowing outside the current
    /// window yields an empty view.
    pub fn range(&self, filter: RangeFilter<T>) -> SetView<'a, T> {
        SetView {
            tree: self.tree,
            filter: self.filter.clone().intersect(filter),
        }
    }

    /// Narrow this view to the elements between `from` and `to`.
    pub fn sub_set(&self, from: T, from_inclusive: bool, to: T, to_inclusive: bool) -> SetView<'a, T> {
        self.range(window(from, from_inclusive, to, to_inclusive))
    }

    /// Narrow this view to the elements below `to`.
    pub fn head_set(&self, to: T, inclusive: bool) -> SetView<'a, T> {
        self.range(RangeFilter::below(RangeBoundary::new(to, inclusive)))
    }

    /// Narrow this view to the elements above `from`.
    pub fn tail_set(&self, from: T, inclusive: bool) -> SetView<'a, T> {
        self.range(RangeFilter::above(RangeBoundary::new(from, inclusive)))
    }
}

impl<T: Clone> Clone for SetView<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            filter: self.filter.clone(),
        }
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for SetView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'v, T: Ord> IntoIterator for &'v SetView<'_, T> {
    type Item = &'v T;
    type IntoIter = RangeIter<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A window over an [`AvlSet`] that can also modify it.
///
/// Created by [`AvlSet::range_mut`], [`AvlSet::sub_set_mut`],
/// [`AvlSet::head_set_mut`] and [`AvlSet::tail_set_mut`]. Insertions and
/// removals are checked against the window before the set is touched.
pub struct SetViewMut<'a, T> {
    tree: &'a mut AvlSet<T>,
    filter: RangeFilter<T>,
}

impl<T: Ord> SetViewMut<'_, T> {
    /// The bounds of this view.
    pub const fn filter(&self) -> &RangeFilter<T> {
        &self.filter
    }

    /// Returns `true` if `value` is inside the window and in the set.
    pub fn contains(&self, value: &T) -> bool {
        self.filter.contains(value) && self.tree.contains(value)
    }

    /// Returns `true` if every element of `iter` is in the view.
    pub fn contains_all<'v, I>(&self, iter: I) -> bool
    where
        I: IntoIterator<Item = &'v T>,
        T: 'v,
    {
        iter.into_iter().all(|value| self.contains(value))
    }

    /// Number of elements inside the window.
    ///
    /// Counts by walking the window, so this is linear in the result.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if no element of the set lies inside the window.
    pub fn is_empty(&self) -> bool {
        self.tree.first_in(&self.filter).is_none()
    }

    /// The smallest element inside the window.
    pub fn first(&self) -> Result<&T> {
        let idx = self.tree.first_in(&self.filter).ok_or(NavigableError::NotFound)?;
        Ok(&self.tree.nodes[idx].value)
    }

    /// The greatest element inside the window.
    pub fn last(&self) -> Result<&T> {
        let idx = self.tree.last_in(&self.filter).ok_or(NavigableError::NotFound)?;
        Ok(&self.tree.nodes[idx].value)
    }

    /// The greatest element of the window strictly less than `value`.
    pub fn lower(&self, value: &T) -> Option<&T> {
        self.neighbor(value, Neighbor::Lower)
    }

    /// The greatest element of the window less than or equal to `value`.
    pub fn floor(&self, value: &T) -> Option<&T> {
        self.neighbor(value, Neighbor::Floor)
    }

    /// The least element of the window greater than or equal to `value`.
    pub fn ceiling(&self, value: &T) -> Option<&T> {
        self.neighbor(value, Neighbor::Ceiling)
    }

    /// The least element of the window strictly greater than `value`.
    pub fn higher(&self, value: &T) -> Option<&T> {
        self.neighbor(value, Neighbor::Higher)
    }

    fn neighbor(&self, value: &T, neighbor: Neighbor) -> Option<&T> {
        self.tree
            .neighbor_in(value, neighbor, &self.filter)
            .map(|idx| &self.tree.nodes[idx].value)
    }

    /// Iterate over the window in ascending order.
    pub fn iter(&self) -> RangeIter<'_, T> {
        RangeIter::new(&*self.tree, &self.filter)
    }

    /// Add `value` to the set.
    ///
    /// Fails with [`NavigableError::OutOfRange`] if `value` is outside the
    /// window. Otherwise returns whether it was newly inserted.
    pub fn insert(&mut self, value: T) -> Result<bool> {
        if !self.filter.contains(&value) {
            return Err(NavigableError::OutOfRange);
        }
        Ok(self.tree.insert(value))
    }

    /// Remove `value` from the set.
    ///
    /// Fails with [`NavigableError::OutOfRange`] if `value` is outside the
    /// window. Otherwise returns whether it was present.
    pub fn remove(&mut self, value: &T) -> Result<bool> {
        if !self.filter.contains(value) {
            return Err(NavigableError::OutOfRange);
        }
        Ok(self.tree.remove(value))
    }

    /// Remove and return the smallest element inside the window.
    pub fn pop_first(&mut self) -> Option<T> {
        let idx = self.tree.first_in(&self.filter)?;
        Some(self.tree.remove_at(idx))
    }

    /// Remove and return the greatest element inside the window.
    pub fn pop_last(&mut self) -> Option<T> {
        let idx = self.tree.last_in(&self.filter)?;
        Some(self.tree.remove_at(idx))
    }

    /// Insert every element of `iter` that lies inside the window.
    ///
    /// Elements outside the window are skipped. Returns `true` if every
    /// element was inside the window and newly inserted.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, iter: I) -> bool {
        iter.into_iter()
            .fold(true, |all, value| self.insert(value).unwrap_or(false) && all)
    }

    /// Remove every element of `iter` that lies inside the window.
    ///
    /// Elements outside the window are skipped. Returns `true` if every
    /// element was inside the window and present.
    pub fn remove_all<'v, I>(&mut self, iter: I) -> bool
    where
        I: IntoIterator<Item = &'v T>,
        T: 'v,
    {
        iter.into_iter()
            .fold(true, |all, value| self.remove(value).unwrap_or(false) && all)
    }
}

impl<T: Ord + Clone> SetViewMut<'_, T> {
    /// A cursor over the window that can remove elements while iterating.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(&mut *self.tree, self.filter.clone())
    }

    /// A read-only view of the elements also inside `filter`.
    pub fn range(&self, filter: RangeFilter<T>) -> SetView<'_, T> {
        SetView {
            tree: &*self.tree,
            filter: self.filter.clone().intersect(filter),
        }
    }

    /// Narrow this view to the elements also inside `filter`.
    ///
    /// The result borrows the same set for as long as it lives.
    pub fn range_mut(&mut self, filter: RangeFilter<T>) -> SetViewMut<'_, T> {
        SetViewMut {
            filter: self.filter.clone().intersect(filter),
            tree: &mut *self.tree,
        }
    }

    /// A read-only view of the elements between `from` and `to`.
    pub fn sub_set(&self, from: T, from_inclusive: bool, to: T, to_inclusive: bool) -> SetView<'_, T> {
        self.range(window(from, from_inclusive, to, to_inclusive))
    }

    /// A read-only view of the elements below `to`.
    pub fn head_set(&self, to: T, inclusive: bool) -> SetView<'_, T> {
        self.range(RangeFilter::below(RangeBoundary::new(to, inclusive)))
    }

    /// A read-only view of the elements above `from`.
    pub fn tail_set(&self, from: T, inclusive: bool) -> SetView<'_, T> {
        self.range(RangeFilter::above(RangeBoundary::new(from, inclusive)))
    }

    /// Narrow this view to the elements between `from` and `to`.
    pub fn sub_set_mut(
        &mut self,
        from: T,
        from_inclusive: bool,
        to: T,
        to_inclusive: bool,
    ) -> SetViewMut<'_, T> {
        self.range_mut(window(from, from_inclusive, to, to_inclusive))
    }

    /// Narrow this view to the elements below `to`.
    pub fn head_set_mut(&mut self, to: T, inclusive: bool) -> SetViewMut<'_, T> {
        self.range_mut(RangeFilter::below(RangeBoundary::new(to, inclusive)))
    }

    /// Narrow this view to the elements above `from`.
    pub fn tail_set_mut(&mut self, from: T, inclusive: bool) -> SetViewMut<'_, T> {
        self.range_mut(RangeFilter::above(RangeBoundary::new(from, inclusive)))
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for SetViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'v, T: Ord> IntoIterator for &'v SetViewMut<'_, T> {
    type Item = &'v T;
    type IntoIter = RangeIter<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
