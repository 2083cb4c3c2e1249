/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AvlSet - An ordered set backed by a height-balanced binary search tree.
//!
//! # Overview
//!
//! [`AvlSet`] stores unique values ordered by [`Ord`]. It provides:
//!
//! - `O(log n)` insertion, removal and membership tests
//! - Neighbour queries (`lower`, `floor`, `ceiling`, `higher`) in a single descent
//! - In-order iteration, plus a [`CursorMut`] that can remove while iterating
//! - Live range views ([`SetView`], [`SetViewMut`]) bounded by a [`RangeFilter`]
//!
//! Nodes live in an arena and link to each other through [`NodeIndex`]
//! handles, so rebalancing never moves values around in memory.
//!
//! # Example
//!
//! ```
//! use avl_set::{AvlSet, NavigableError};
//!
//! let mut set = AvlSet::new();
//! for value in [10, 7, 12, 5, 4, 8] {
//!     set.insert(value);
//! }
//!
//! assert_eq!(set.first(), Ok(&4));
//! assert_eq!(set.lower(&13), Some(&12));
//! assert_eq!(set.higher(&7), Some(&8));
//!
//! // A live window over [5, 10).
//! let mut window = set.sub_set_mut(5, true, 10, false);
//! assert_eq!(window.iter().copied().collect::<Vec<_>>(), [5, 7, 8]);
//! assert_eq!(window.insert(11), Err(NavigableError::OutOfRange));
//! assert_eq!(window.pop_first(), Some(5));
//!
//! assert_eq!(set.len(), 5);
//! ```

mod arena;
mod error;
mod iter;
mod node;
mod range;
mod tree;
mod view;

pub use arena::NodeIndex;
pub use error::{NavigableError, Result};
pub use iter::{CursorMut, Iter, RangeIter};
pub use node::AvlNode;
pub use range::{RangeBoundary, RangeFilter};
pub use tree::AvlSet;
pub use view::{SetView, SetViewMut};
