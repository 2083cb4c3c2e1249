/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Range views: bounds, narrowing, and writes through a window.

use avl_set::{AvlSet, NavigableError, RangeBoundary, RangeFilter};

use crate::helpers::assert_avl;

fn evens() -> AvlSet<i32> {
    (0..=20).step_by(2).collect()
}

#[test]
fn sub_set_contents() {
    let set = evens();
    let view = set.sub_set(4, true, 12, false);
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), [4, 6, 8, 10]);
    assert_eq!(view.len(), 4);
    assert!(!view.is_empty());
    assert_eq!(view.first(), Ok(&4));
    assert_eq!(view.last(), Ok(&10));
    assert!(view.contains(&4));
    assert!(!view.contains(&12), "12 is in the set but outside the view");
    assert!(!view.contains(&5));
    assert!(view.contains_all(&[4, 10]));
    assert!(!view.contains_all(&[4, 12]));
    assert_eq!(format!("{view:?}"), "{4, 6, 8, 10}");
}

#[test]
fn head_set_inclusivity() {
    let set = evens();
    assert!(!set.head_set(10, false).contains(&10));
    assert!(set.head_set(10, true).contains(&10));
    assert!(!set.head_set(11, true).contains(&11));
    assert_eq!(set.head_set(4, false).iter().copied().collect::<Vec<_>>(), [0, 2]);
    assert_eq!(set.head_set(4, true).iter().copied().collect::<Vec<_>>(), [0, 2, 4]);
}

#[test]
fn tail_set_inclusivity() {
    let set = evens();
    assert_eq!(set.tail_set(16, true).iter().copied().collect::<Vec<_>>(), [16, 18, 20]);
    assert_eq!(set.tail_set(16, false).iter().copied().collect::<Vec<_>>(), [18, 20]);
    assert_eq!(set.tail_set(15, false).first(), Ok(&16));
}

#[test]
fn neighbours_inside_a_window() {
    let set = evens();
    let view = set.sub_set(4, true, 12, false);

    assert_eq!(view.lower(&4), None);
    assert_eq!(view.lower(&5), Some(&4));
    assert_eq!(view.lower(&100), Some(&10));
    assert_eq!(view.lower(&-100), None);

    assert_eq!(view.higher(&-3), Some(&4));
    assert_eq!(view.higher(&4), Some(&6));
    assert_eq!(view.higher(&10), None);
    assert_eq!(view.higher(&12), None);

    assert_eq!(view.floor(&3), None);
    assert_eq!(view.floor(&4), Some(&4));
    assert_eq!(view.floor(&11), Some(&10));
    assert_eq!(view.floor(&100), Some(&10));

    assert_eq!(view.ceiling(&0), Some(&4));
    assert_eq!(view.ceiling(&9), Some(&10));
    assert_eq!(view.ceiling(&11), None);
    assert_eq!(view.ceiling(&12), None);
}

#[test]
fn neighbours_at_exclusive_bounds() {
    let set = evens();
    let view = set.sub_set(4, false, 12, true);
    assert_eq!(view.first(), Ok(&6));
    assert_eq!(view.last(), Ok(&12));

    assert_eq!(view.higher(&4), Some(&6));
    assert_eq!(view.ceiling(&4), Some(&6));
    assert_eq!(view.lower(&4), None);
    assert_eq!(view.floor(&4), None);

    assert_eq!(view.lower(&12), Some(&10));
    assert_eq!(view.floor(&12), Some(&12));
    assert_eq!(view.higher(&12), None);
    assert_eq!(view.lower(&13), Some(&12));
}

#[test]
fn inclusive_lower_bound_is_not_skipped() {
    let set = evens();
    let view = set.tail_set(4, true);
    assert_eq!(view.ceiling(&4), Some(&4));
    assert_eq!(view.higher(&3), Some(&4));
    assert_eq!(view.floor(&4), Some(&4));
}

#[test]
fn empty_windows() {
    let set = evens();

    let between = set.sub_set(5, true, 6, false);
    assert!(between.is_empty());
    assert_eq!(between.len(), 0);
    assert_eq!(between.first(), Err(NavigableError::NotFound));
    assert_eq!(between.last(), Err(NavigableError::NotFound));
    assert_eq!(between.lower(&100), None);
    assert_eq!(between.higher(&-100), None);

    let inverted = set.sub_set(10, true, 2, true);
    assert!(inverted.is_empty());
    assert_eq!(inverted.iter().next(), None);
    assert_eq!(inverted.floor(&5), None);
    assert_eq!(inverted.ceiling(&5), None);
}

#[test]
fn narrowing_keeps_the_stricter_bounds() {
    let set = evens();
    let outer = set.sub_set(2, true, 16, true);

    let head = outer.head_set(10, false);
    assert_eq!(head.iter().copied().collect::<Vec<_>>(), [2, 4, 6, 8]);

    // A looser lower bound leaves the outer one in place.
    let widened = head.tail_set(0, true);
    assert_eq!(widened.filter(), head.filter());

    let tail = outer.tail_set(12, false);
    assert_eq!(tail.iter().copied().collect::<Vec<_>>(), [14, 16]);
    assert_eq!(
        tail.filter(),
        &RangeFilter::between(RangeBoundary::excluded(12), RangeBoundary::included(16))
    );

    let sub = outer.sub_set(0, true, 100, false);
    assert_eq!(sub.filter(), outer.filter());
}

#[test]
fn narrowing_on_equal_bounds_ands_inclusivity() {
    let set = evens();
    let view = set.sub_set(4, true, 12, false).sub_set(4, false, 12, true);
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), [6, 8, 10]);
}

#[test]
fn narrowing_outside_the_window_is_empty() {
    let set = evens();
    let view = set.sub_set(2, true, 6, true).tail_set(10, true);
    assert!(view.is_empty());
    assert_eq!(view.first(), Err(NavigableError::NotFound));
}

#[test]
fn range_from_standard_bounds() {
    let set = evens();
    let view = set.range(RangeFilter::from_bounds(&(3..=9)));
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), [4, 6, 8]);
    assert_eq!(set.range(RangeFilter::all()).len(), set.len());
}

#[test]
fn writes_are_checked_against_the_window() {
    let mut set = evens();
    {
        let mut view = set.sub_set_mut(4, true, 12, false);
        assert_eq!(view.insert(12), Err(NavigableError::OutOfRange));
        assert_eq!(view.insert(3), Err(NavigableError::OutOfRange));
        assert_eq!(view.remove(&14), Err(NavigableError::OutOfRange));

        assert_eq!(view.insert(5), Ok(true));
        assert_eq!(view.insert(5), Ok(false));
        assert!(view.contains(&5));
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), [4, 5, 6, 8, 10]);

        assert_eq!(view.remove(&6), Ok(true));
        assert_eq!(view.remove(&6), Ok(false));
        assert_eq!(view.len(), 4);
    }
    assert!(set.contains(&5));
    assert!(!set.contains(&6));
    assert!(set.contains(&14));
    assert_eq!(set.len(), 11);
    assert_avl(&set);
}

#[test]
fn pop_through_a_window() {
    let mut set = evens();
    let mut view = set.sub_set_mut(5, true, 15, true);
    assert_eq!(view.pop_first(), Some(6));
    assert_eq!(view.pop_last(), Some(14));
    assert_eq!(view.first(), Ok(&8));
    assert_eq!(view.last(), Ok(&12));
    assert_eq!(view.pop_first(), Some(8));
    assert_eq!(view.pop_first(), Some(10));
    assert_eq!(view.pop_first(), Some(12));
    assert_eq!(view.pop_first(), None);
    assert_eq!(view.pop_last(), None);
    assert_eq!(
        set.iter().copied().collect::<Vec<_>>(),
        [0, 2, 4, 16, 18, 20]
    );
    assert_avl(&set);
}

#[test]
fn bulk_writes_skip_out_of_range_values() {
    let mut set = AvlSet::new();
    let mut view = set.head_set_mut(10, false);
    assert!(view.insert_all([1, 2, 3]));
    assert!(!view.insert_all([4, 10, 11]));
    assert!(view.contains_all(&[1, 2, 3, 4]));
    assert!(!view.remove_all(&[1, 10]));
    assert!(view.remove_all(&[2, 3]));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [4]);
}

#[test]
fn narrowing_a_mutable_view() {
    let mut set = evens();
    let mut outer = set.sub_set_mut(0, true, 10, true);
    {
        let mut inner = outer.tail_set_mut(6, false);
        assert_eq!(inner.insert(4), Err(NavigableError::OutOfRange));
        assert_eq!(inner.insert(7), Ok(true));
        assert_eq!(inner.insert(12), Err(NavigableError::OutOfRange));
    }
    assert!(outer.contains(&7));
    assert_eq!(outer.head_set(4, true).iter().copied().collect::<Vec<_>>(), [0, 2, 4]);
    assert_eq!(outer.sub_set_mut(3, true, 7, true).pop_last(), Some(7));
    assert_eq!(outer.len(), 6);
}

#[test]
fn views_see_the_current_state() {
    let mut set = evens();
    set.insert(7);
    assert!(set.sub_set(5, true, 9, true).contains(&7));
    set.remove(&7);
    assert!(!set.sub_set(5, true, 9, true).contains(&7));

    let mut view = set.tail_set_mut(15, true);
    view.insert(17).unwrap();
    assert_eq!(view.first(), Ok(&16));
    assert_eq!(view.higher(&16), Some(&17));
}
