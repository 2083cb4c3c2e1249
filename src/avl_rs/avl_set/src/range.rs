/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Bounds for range views.
//!
//! A [`RangeFilter`] is a pair of optional [`RangeBoundary`]s. Each boundary
//! is independently inclusive or exclusive, and an absent boundary leaves
//! that side of the range unbounded.

use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::ops::{Bound, RangeBounds};

/// One of the bounds for a [`RangeFilter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeBoundary<T> {
    /// The boundary value.
    pub value: T,
    /// Whether `value` itself belongs to the range.
    pub is_included: bool,
}

impl<T> RangeBoundary<T> {
    /// Create a new range boundary.
    pub const fn new(value: T, is_included: bool) -> Self {
        Self { value, is_included }
    }

    /// Create a new range boundary that includes its boundary value.
    pub const fn included(value: T) -> Self {
        Self::new(value, true)
    }

    /// Create a new range boundary that doesn't include its boundary value.
    pub const fn excluded(value: T) -> Self {
        Self::new(value, false)
    }
}

/// The window of a range view: an optional lower and an optional upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeFilter<T> {
    /// Lower bound, `None` if the range is unbounded below.
    pub min: Option<RangeBoundary<T>>,
    /// Upper bound, `None` if the range is unbounded above.
    pub max: Option<RangeBoundary<T>>,
}

impl<T> RangeFilter<T> {
    /// A filter that matches all values.
    pub const fn all() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// A filter bounded on both sides.
    pub const fn between(min: RangeBoundary<T>, max: RangeBoundary<T>) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// A filter bounded below only.
    pub const fn above(min: RangeBoundary<T>) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// A filter bounded above only.
    pub const fn below(max: RangeBoundary<T>) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }
}

impl<T: Clone> RangeFilter<T> {
    /// Build a filter out of any standard range expression, e.g. `3..=7`.
    pub fn from_bounds<R: RangeBounds<T>>(range: &R) -> Self {
        fn convert<T: Clone>(bound: Bound<&T>) -> Option<RangeBoundary<T>> {
            match bound {
                Bound::Included(value) => Some(RangeBoundary::included(value.clone())),
                Bound::Excluded(value) => Some(RangeBoundary::excluded(value.clone())),
                Bound::Unbounded => None,
            }
        }
        Self {
            min: convert(range.start_bound()),
            max: convert(range.end_bound()),
        }
    }
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self::all()
    }
}

impl<T: Ord> RangeFilter<T> {
    /// Whether `value` satisfies the lower bound.
    pub fn admits_lower(&self, value: &T) -> bool {
        match &self.min {
            None => true,
            Some(min) => match value.cmp(&min.value) {
                Ordering::Greater => true,
                Ordering::Equal => min.is_included,
                Ordering::Less => false,
            },
        }
    }

    /// Whether `value` satisfies the upper bound.
    pub fn admits_upper(&self, value: &T) -> bool {
        match &self.max {
            None => true,
            Some(max) => match value.cmp(&max.value) {
                Ordering::Less => true,
                Ordering::Equal => max.is_included,
                Ordering::Greater => false,
            },
        }
    }

    /// Whether `value` lies inside the range.
    pub fn contains(&self, value: &T) -> bool {
        self.admits_lower(value) && self.admits_upper(value)
    }

    /// Combine two filters into the tightest filter satisfying both.
    ///
    /// On each side the stricter bound wins. When both bounds sit on the
    /// same value, the result is inclusive only if both inputs were.
    pub fn intersect(self, other: Self) -> Self {
        Self {
            min: tighter(self.min, other.min, Ordering::Greater),
            max: tighter(self.max, other.max, Ordering::Less),
        }
    }

    /// Whether a value strictly smaller than `value` could lie inside the range.
    pub(crate) fn reaches_below(&self, value: &T) -> bool {
        self.min.as_ref().is_none_or(|min| min.value < *value)
    }

    /// Whether a value strictly greater than `value` could lie inside the range.
    pub(crate) fn reaches_above(&self, value: &T) -> bool {
        self.max.as_ref().is_none_or(|max| max.value > *value)
    }
}

/// Pick the stricter of two optional bounds. `keep` is the ordering of `a`
/// relative to `b` for which `a` is the stricter one.
fn tighter<T: Ord>(
    a: Option<RangeBoundary<T>>,
    b: Option<RangeBoundary<T>>,
    keep: Ordering,
) -> Option<RangeBoundary<T>> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(a), Some(b)) => match a.value.cmp(&b.value) {
            Ordering::Equal => Some(RangeBoundary {
                is_included: a.is_included && b.is_included,
                value: a.value,
            }),
            ord if ord == keep => Some(a),
            _ => Some(b),
        },
    }
}

impl<T: fmt::Display> fmt::Display for RangeFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(min) = &self.min {
            write!(f, "{} <", min.value)?;
            if min.is_included {
                f.write_char('=')?;
            }
            f.write_char(' ')?;
        }
        f.write_str("..")?;
        if let Some(max) = &self.max {
            let equal = if max.is_included { "=" } else { "" };
            write!(f, " <{equal} {}", max.value)?;
        }
        Ok(())
    }
}
