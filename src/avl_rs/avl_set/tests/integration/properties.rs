/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests comparing [`AvlSet`] against [`BTreeSet`].

#[cfg(not(miri))]
mod proptests {
    use std::collections::BTreeSet;
    use std::ops::Bound;

    use avl_set::{AvlSet, RangeBoundary, RangeFilter};
    use lending_iterator::LendingIterator;

    use crate::helpers::assert_avl;

    #[derive(proptest_derive::Arbitrary, Debug, Clone, Copy)]
    /// Operations that can be performed on a set.
    /// Used by `sanity_check` below.
    enum SetOperation {
        Insert(#[proptest(strategy = "-64i32..64")] i32),
        Remove(#[proptest(strategy = "-64i32..64")] i32),
        PopFirst,
        PopLast,
    }

    /// Whether `value` lies inside the bounds, spelled out without
    /// [`RangeFilter::contains`].
    fn in_window(value: i16, min: Option<(i16, bool)>, max: Option<(i16, bool)>) -> bool {
        let above_min = match min {
            None => true,
            Some((min, included)) => value > min || (included && value == min),
        };
        let below_max = match max {
            None => true,
            Some((max, included)) => value < max || (included && value == max),
        };
        above_min && below_max
    }

    fn filter_of(min: Option<(i16, bool)>, max: Option<(i16, bool)>) -> RangeFilter<i16> {
        RangeFilter {
            min: min.map(|(value, included)| RangeBoundary::new(value, included)),
            max: max.map(|(value, included)| RangeBoundary::new(value, included)),
        }
    }

    proptest::proptest! {
        #[test]
        /// Check whether the set behaves like a [`BTreeSet`] under a random
        /// sequence of insertions and removals, and stays a valid AVL tree
        /// after every step.
        fn sanity_check(ops: Vec<SetOperation>) {
            let mut set = AvlSet::new();
            let mut model = BTreeSet::new();

            for op in ops {
                match op {
                    SetOperation::Insert(value) => {
                        assert_eq!(set.insert(value), model.insert(value), "insert({value})");
                    }
                    SetOperation::Remove(value) => {
                        assert_eq!(set.remove(&value), model.remove(&value), "remove({value})");
                    }
                    SetOperation::PopFirst => assert_eq!(set.pop_first(), model.pop_first()),
                    SetOperation::PopLast => assert_eq!(set.pop_last(), model.pop_last()),
                }
                assert_avl(&set);
                assert_eq!(set.len(), model.len());
            }

            assert!(set.iter().eq(model.iter()), "AvlSet and BTreeSet should report the same elements");
            assert_eq!(set.first().ok(), model.first());
            assert_eq!(set.last().ok(), model.last());
        }

        #[test]
        /// Neighbour queries agree with the equivalent `BTreeSet::range` lookups.
        fn neighbours_match_btree(
            values in proptest::collection::btree_set(-100i16..100, 0..64),
            probes in proptest::collection::vec(-110i16..110, 1..32),
        ) {
            let set: AvlSet<i16> = values.iter().copied().collect();
            for probe in probes {
                assert_eq!(set.lower(&probe), values.range(..probe).next_back(), "lower({probe})");
                assert_eq!(set.floor(&probe), values.range(..=probe).next_back(), "floor({probe})");
                assert_eq!(set.ceiling(&probe), values.range(probe..).next(), "ceiling({probe})");
                assert_eq!(
                    set.higher(&probe),
                    values.range((Bound::Excluded(probe), Bound::Unbounded)).next(),
                    "higher({probe})"
                );
                assert_eq!(set.contains(&probe), values.contains(&probe));
            }
        }

        #[test]
        /// A view yields exactly the model elements inside its bounds, and its
        /// endpoint and neighbour queries agree with the filtered model.
        fn views_match_filtered_btree(
            values in proptest::collection::btree_set(-100i16..100, 0..64),
            min: Option<(i16, bool)>,
            max: Option<(i16, bool)>,
            probes in proptest::collection::vec(-110i16..110, 1..16),
        ) {
            let min = min.map(|(value, included)| (value % 110, included));
            let max = max.map(|(value, included)| (value % 110, included));

            let set: AvlSet<i16> = values.iter().copied().collect();
            let view = set.range(filter_of(min, max));
            let expected: Vec<i16> = values.iter().copied().filter(|&v| in_window(v, min, max)).collect();

            assert_eq!(view.iter().copied().collect::<Vec<_>>(), expected);
            assert_eq!(view.len(), expected.len());
            assert_eq!(view.is_empty(), expected.is_empty());
            assert_eq!(view.first().ok(), expected.first());
            assert_eq!(view.last().ok(), expected.last());

            for probe in probes {
                let lower = expected.iter().rev().find(|&&v| v < probe);
                let floor = expected.iter().rev().find(|&&v| v <= probe);
                let ceiling = expected.iter().find(|&&v| v >= probe);
                let higher = expected.iter().find(|&&v| v > probe);
                assert_eq!(view.lower(&probe), lower, "lower({probe})");
                assert_eq!(view.floor(&probe), floor, "floor({probe})");
                assert_eq!(view.ceiling(&probe), ceiling, "ceiling({probe})");
                assert_eq!(view.higher(&probe), higher, "higher({probe})");
                assert_eq!(view.contains(&probe), expected.contains(&probe));
            }
        }

        #[test]
        /// Removing through a cursor leaves the same elements as `retain`.
        fn cursor_removal_matches_retain(
            values in proptest::collection::btree_set(-1000i32..1000, 0..128),
            modulus in 2i32..6,
        ) {
            let mut set: AvlSet<i32> = values.iter().copied().collect();
            let mut cursor = set.cursor_mut();
            let mut visited = Vec::new();
            while let Some(&value) = LendingIterator::next(&mut cursor) {
                visited.push(value);
                if value % modulus == 0 {
                    assert_eq!(cursor.remove_current(), Ok(value));
                }
            }
            assert!(visited.iter().eq(values.iter()), "every element is visited once, in order");

            let mut model = values;
            model.retain(|value| value % modulus != 0);
            assert!(set.iter().eq(model.iter()));
            assert_avl(&set);
        }

        #[test]
        /// Writes through a mutable view only ever touch its window.
        fn view_writes_stay_in_window(
            values in proptest::collection::btree_set(-100i16..100, 0..64),
            min: Option<(i16, bool)>,
            max: Option<(i16, bool)>,
            writes in proptest::collection::vec((-110i16..110, proptest::bool::ANY), 0..32),
        ) {
            let mut set: AvlSet<i16> = values.iter().copied().collect();
            let mut model = values;
            let mut view = set.range_mut(filter_of(min, max));

            for (value, insert) in writes {
                let result = if insert { view.insert(value) } else { view.remove(&value) };
                if in_window(value, min, max) {
                    let changed = if insert { model.insert(value) } else { model.remove(&value) };
                    assert_eq!(result, Ok(changed));
                } else {
                    assert_eq!(result, Err(avl_set::NavigableError::OutOfRange));
                }
            }
            assert!(set.iter().eq(model.iter()));
            assert_avl(&set);
        }
    }
}
