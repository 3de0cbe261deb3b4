// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=strata_kdtree --heading-base-level=0

//! Strata Kd-Tree: a 2D search tree over points with alternating x/y discrimination.
//!
//! - Insert points (duplicates are kept as separate nodes).
//! - Test membership of an exact point.
//! - Query every point inside an axis-aligned rectangle, bounds included.
//! - Ask for the nearest point along the query's descent path.
//!
//! The root compares x coordinates, its children compare y, and so on down the tree.
//! Every operation routes with the same rule: a coordinate less than or equal to the node's goes
//! left, a greater one goes right.
//!
//! It is generic over the coordinate type `T` (see [`Scalar`]) and does not depend on any
//! geometry crate. Enable the `kurbo` feature for conversions from Kurbo points and rectangles.
//!
//! # Example
//!
//! ```rust
//! use strata_kdtree::{KdTree, Point, Rectangle};
//!
//! let mut tree: KdTree<i64> = KdTree::new();
//! for (x, y) in [(2, 3), (5, 4), (9, 6), (4, 7), (8, 1), (7, 2)] {
//!     tree.insert(Point::new(x, y));
//! }
//! assert_eq!(tree.len(), 6);
//! assert!(tree.contains(&Point::new(4, 7)));
//! assert!(!tree.contains(&Point::new(4, 8)));
//!
//! let mut hits: Vec<_> = tree.range(&Rectangle::new(0, 0, 6, 4)).collect();
//! hits.sort_by_key(|p| (p.x, p.y));
//! assert_eq!(hits, [Point::new(2, 3), Point::new(5, 4)]);
//!
//! assert_eq!(tree.nearest(&Point::new(9, 5)).unwrap(), Point::new(9, 6));
//! ```
//!
//! ## Nearest point semantics
//!
//! [`KdTree::nearest`] walks a single root-to-leaf path (the one [`KdTree::insert`] would take
//! for the query point) and returns the closest point seen on it. It does not backtrack into
//! sibling subtrees, so it may miss the globally closest point and always costs a full descent.
//! Distances are rounded to 4 fractional digits before comparison; on ties the candidate closest
//! to the root wins.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. A NaN never compares less than
//! or equal, so it routes right on insert and is never reported by queries.
//!
//! This crate is `no_std` and uses `alloc`; distance math needs either the `std` (default) or
//! the `libm` feature.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod tree;
pub mod types;

pub use error::{Error, Result};
pub use tree::KdTree;
pub use types::{Axis, Point, Rectangle, Scalar};
