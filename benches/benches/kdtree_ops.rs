// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use strata_kdtree::{KdTree, Point, Rectangle};

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, max_w: f64, max_h: f64) -> Vec<Point<f64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        out.push(Point::new(rng.next_f64() * max_w, rng.next_f64() * max_h));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

// Row-major grid: a worst case for the alternating split, since every row shares a y.
fn gen_grid_points_i64(n: usize, cell: i64) -> Vec<Point<i64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as i64 * cell, y as i64 * cell));
        }
    }
    out
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_insert");
    for &n in &[1024usize, 4096, 16384] {
        let points = gen_random_points(n, 2000.0, 2000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter_batched(
                KdTree::<f64>::new,
                |mut tree| {
                    tree.extend(points.iter().copied());
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_grid_points_i64(32, 10);
    group.bench_function("grid_i64_n32", |b| {
        b.iter_batched(
            KdTree::<i64>::new,
            |mut tree| {
                tree.extend(points.iter().copied());
                black_box(tree.height());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_query");
    let points = gen_clustered_points(32, 256, 200.0);
    let tree: KdTree<f64> = points.iter().copied().collect();
    let queries = gen_random_points(256, 2000.0, 2000.0);

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("contains_hits", |b| {
        b.iter(|| {
            let hits = points[..256].iter().filter(|p| tree.contains(p)).count();
            black_box(hits);
        })
    });
    group.bench_function("contains_misses", |b| {
        b.iter(|| {
            let hits = queries.iter().filter(|p| tree.contains(p)).count();
            black_box(hits);
        })
    });
    group.bench_function("nearest_path", |b| {
        b.iter(|| {
            for p in &queries {
                black_box(tree.nearest(p).ok());
            }
        })
    });

    group.throughput(Throughput::Elements(1));
    for &side in &[50.0_f64, 200.0, 800.0] {
        let rect = Rectangle::new(600.0, 600.0, 600.0 + side, 600.0 + side);
        group.bench_function(format!("range_side{}", side), |b| {
            b.iter(|| {
                let hits = tree.range(&rect).count();
                black_box(hits);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_queries);
criterion_main!(benches);
