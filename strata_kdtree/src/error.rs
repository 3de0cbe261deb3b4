// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`KdTree`](crate::KdTree) queries.

/// Failure modes of tree queries.
///
/// Misses are not errors: [`KdTree::contains`](crate::KdTree::contains) returns `false` and
/// [`KdTree::range`](crate::KdTree::range) yields nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A nearest-point query ran against a tree with no points.
    #[error("tree is empty")]
    EmptyTree,
}

/// Result alias for tree queries.
pub type Result<T> = core::result::Result<T, Error>;
