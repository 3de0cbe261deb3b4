// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`OrderedMap`](crate::OrderedMap).

/// Failure modes of map accessors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `min`/`max` was called on a map with no entries.
    #[error("map is empty")]
    EmptyMap,
}

/// Result alias for map accessors.
pub type Result<T> = core::result::Result<T, Error>;
