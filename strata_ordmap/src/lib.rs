// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=strata_ordmap --heading-base-level=0

//! Strata Ordered Map: a left-leaning red-black tree with order statistics.
//!
//! - Insert or overwrite entries with [`OrderedMap::put`]; look them up with [`OrderedMap::get`].
//! - Query [`floor`](OrderedMap::floor) and [`ceiling`](OrderedMap::ceiling) keys.
//! - Count keys below a bound with [`rank`](OrderedMap::rank), or inside an inclusive interval
//!   with [`range_count`](OrderedMap::range_count).
//! - Walk entries in key order together with each entry's subtree size.
//!
//! Keys only need [`Ord`]. There is no removal: the map grows monotonically.
//!
//! # Example
//!
//! ```rust
//! use strata_ordmap::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! for k in [5, 3, 8, 1, 4, 7, 9] {
//!     map.put(k, k * 10);
//! }
//!
//! assert_eq!(map.get(&4), Some(&40));
//! assert_eq!(map.rank(&6), 4);
//! assert_eq!(map.floor(&6), Some(&5));
//! assert_eq!(map.ceiling(&6), Some(&7));
//! assert_eq!(map.range_count(&3, &8), 5);
//! assert_eq!(map.min(), Ok(&10));
//!
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, [1, 3, 4, 5, 7, 8, 9]);
//! ```
//!
//! ## Errors
//!
//! Only [`min`](OrderedMap::min)/[`max`](OrderedMap::max) (and their `_key` variants) can fail,
//! with [`Error::EmptyMap`]. Missing keys are ordinary `None` results, and `range_count`
//! performs plain arithmetic on ranks without checking that `lo <= hi`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod map;

pub use error::{Error, Result};
pub use map::{Iter, OrderedMap};
