// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kd-tree visible set using a Kurbo viewport.
//!
//! Scatter markers on a canvas and collect the ones inside a viewport rectangle,
//! a building block for virtualization.
//!
//! Run:
//! - `cargo run -p strata_demos --example kdtree_viewport`

use kurbo::{Point as KPoint, Rect};
use strata_kdtree::{KdTree, Point, Rectangle};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut tree: KdTree<f64> = KdTree::new();
    for i in 0..20_u32 {
        let t = f64::from(i);
        tree.insert(Point::from(KPoint::new(t * 37.0 % 500.0, t * 53.0 % 500.0)));
    }

    let viewport = Rect::new(100.0, 100.0, 300.0, 300.0);
    let rect = Rectangle::from(viewport);
    let visible: Vec<_> = tree.range(&rect).collect();
    log::info!("{} of {} markers visible in {viewport:?}", visible.len(), tree.len());
    assert_eq!(visible.len(), tree.iter().filter(|p| rect.contains(p)).count());
}
