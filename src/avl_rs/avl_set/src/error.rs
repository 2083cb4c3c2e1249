/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Error types for navigable set operations.

/// A specialized Result type for navigable set operations.
pub type Result<T> = std::result::Result<T, NavigableError>;

/// Errors that can occur when querying or mutating an [`AvlSet`](crate::AvlSet)
/// or one of its views.
///
/// Inserting a value that is already present, or removing one that is
/// absent, is not an error: those operations report it through their
/// `bool` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum NavigableError {
    /// The set (or view) holds no element that satisfies the request.
    #[error("no such element")]
    NotFound,

    /// The value lies outside the bounds of the view it was given to.
    #[error("value is outside the bounds of the view")]
    OutOfRange,
}
