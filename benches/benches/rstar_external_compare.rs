// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::DVec3;
use terrane_aabb::BoxTree;
use terrane_geom::Aabb3;

use rstar::RTree;

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

fn gen_points(count: usize, extent: f64, seed: u64) -> Vec<DVec3> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| DVec3::new(rng.next_f64(), rng.next_f64(), rng.next_f64()) * extent)
        .collect()
}

fn bench_nearest_point_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_point_external_compare");
    for &count in &[4_096usize, 65_536] {
        let points = gen_points(count, 2000.0, 0xCAFE_F00D_DEAD_BEEF);
        let queries = gen_points(256, 2200.0, 0xFACE_FEED_CAFE_BABE);
        group.throughput(Throughput::Elements(queries.len() as u64));

        // Points as degenerate boxes makes the two structures answer the
        // same question.
        let boxes: Vec<Aabb3> = points.iter().map(|&p| Aabb3::new(p, p)).collect();
        group.bench_function(format!("terrane_build_query_n{count}"), |b| {
            b.iter_batched(
                || boxes.clone(),
                |boxes| {
                    let tree = BoxTree::new(&boxes);
                    let mut acc = 0.0;
                    for &q in &queries {
                        acc += tree.nearest_box(q).distance;
                    }
                    black_box(acc);
                },
                BatchSize::SmallInput,
            )
        });

        let coords: Vec<[f64; 3]> = points.iter().map(|p| [p.x, p.y, p.z]).collect();
        group.bench_function(format!("rstar_build_query_bulk_n{count}"), |b| {
            b.iter_batched(
                || coords.clone(),
                |coords| {
                    let tree = RTree::bulk_load(coords);
                    let mut acc = 0.0;
                    for &q in &queries {
                        let nearest = tree
                            .nearest_neighbor(&[q.x, q.y, q.z])
                            .expect("tree is non-empty");
                        acc += q.distance(DVec3::from_array(*nearest));
                    }
                    black_box(acc);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest_point_external_compare);
criterion_main!(benches);
