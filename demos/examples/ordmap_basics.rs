// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered map basics.
//!
//! Fill a map from a seeded sample of 20 distinct keys below 1000 and walk it in order.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p strata_demos --example ordmap_basics`

use strata_ordmap::OrderedMap;

struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = Rng(17);
    let mut map = OrderedMap::new();
    while map.len() < 20 {
        let k = rng.next_u64() % 1000;
        map.put(k, k);
    }
    log::info!("{map:?}");

    for (key, value, subtree) in &map {
        log::info!("{key:>4} => {value:<4} (subtree of {subtree})");
    }
    log::info!("min {:?}, max {:?}", map.min(), map.max());
}
