// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kd-tree basics.
//!
//! Insert a handful of points, then run membership, range, and nearest queries.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p strata_demos --example kdtree_basics`

use strata_kdtree::{KdTree, Point, Rectangle};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut tree: KdTree<i64> = KdTree::new();
    for (x, y) in [(2, 3), (5, 4), (9, 6), (4, 7), (8, 1), (7, 2)] {
        tree.insert(Point::new(x, y));
    }
    log::info!("{tree:?}");

    assert!(tree.contains(&Point::new(4, 7)));
    assert!(!tree.contains(&Point::new(4, 8)));

    // Bounds are inclusive: (7, 2) sits on the right edge.
    let mut hits: Vec<_> = tree.range(&Rectangle::new(0, 0, 7, 4)).collect();
    hits.sort_by_key(|p| (p.x, p.y));
    log::info!("range hits: {hits:?}");
    assert_eq!(hits, [Point::new(2, 3), Point::new(5, 4), Point::new(7, 2)]);

    // Nearest only looks along the descent path of the query point.
    let target = Point::new(6, 3);
    let path: Vec<_> = tree.path(target).collect();
    let (best, dist) = tree
        .nearest_with_distance(&target)
        .expect("tree has points");
    log::info!("path to {target:?}: {path:?}");
    log::info!("nearest: {best:?} at {dist}");
}
