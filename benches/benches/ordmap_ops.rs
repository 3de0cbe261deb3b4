// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use strata_ordmap::OrderedMap;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn gen_random_keys(count: usize) -> Vec<u64> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count).map(|_| rng.next_u64() % (count as u64 * 4)).collect()
}

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordmap_put");
    for &n in &[1024usize, 16384] {
        let keys = gen_random_keys(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter_batched(
                OrderedMap::<u64, u64>::new,
                |mut map| {
                    for &k in &keys {
                        map.put(k, k);
                    }
                    black_box(map.len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("ascending_n{}", n), |b| {
            b.iter_batched(
                OrderedMap::<u64, u64>::new,
                |mut map| {
                    for k in 0..n as u64 {
                        map.put(k, k);
                    }
                    black_box(map.len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("btreemap_random_n{}", n), |b| {
            b.iter_batched(
                BTreeMap::<u64, u64>::new,
                |mut map| {
                    for &k in &keys {
                        map.insert(k, k);
                    }
                    black_box(map.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_order_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordmap_order_stats");
    let keys = gen_random_keys(16384);
    let map: OrderedMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
    let queries = &keys[..1024];
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("get", |b| {
        b.iter(|| {
            for k in queries {
                black_box(map.get(k));
            }
        })
    });
    group.bench_function("rank", |b| {
        b.iter(|| {
            for k in queries {
                black_box(map.rank(k));
            }
        })
    });
    group.bench_function("floor_ceiling", |b| {
        b.iter(|| {
            for k in queries {
                black_box((map.floor(k), map.ceiling(k)));
            }
        })
    });
    group.bench_function("range_count", |b| {
        b.iter(|| {
            for w in queries.windows(2) {
                black_box(map.range_count(&w[0].min(w[1]), &w[0].max(w[1])));
            }
        })
    });
    group.throughput(Throughput::Elements(map.len() as u64));
    group.bench_function("iter", |b| {
        b.iter(|| {
            let total: usize = map.iter().map(|(_, _, n)| n).sum();
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_put, bench_order_stats);
criterion_main!(benches);
