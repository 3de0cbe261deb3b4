// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered map order statistics.
//!
//! Rank, floor/ceiling, and inclusive range counts over a small key set.
//!
//! Run:
//! - `cargo run -p strata_demos --example ordmap_order_stats`

use strata_ordmap::OrderedMap;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let map: OrderedMap<i32, i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().map(|k| (k, k)).collect();

    log::info!("rank(6) = {}", map.rank(&6));
    log::info!("floor(6) = {:?}, ceiling(6) = {:?}", map.floor(&6), map.ceiling(&6));
    log::info!("range_count(3, 8) = {}", map.range_count(&3, &8));
    assert_eq!(map.rank(&6), 4);
    assert_eq!(map.range_count(&3, &8), 5);

    // Reversed bounds are not rejected; the result is plain rank arithmetic.
    log::info!("range_count(8, 3) = {}", map.range_count(&8, &3));

    let empty: OrderedMap<i32, i32> = OrderedMap::new();
    match empty.min() {
        Ok(v) => log::warn!("unexpected min {v}"),
        Err(e) => log::info!("min on empty map: {e}"),
    }
}
