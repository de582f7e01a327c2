// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::DVec3;
use terrane_aabb::{BoxTree, CellKind, SurfaceMesh, SurfaceTree, VolumeMesh, VolumeTree};
use terrane_geom::{Aabb3, point_triangle_distance};

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
    fn next_point(&mut self, scale: f64) -> DVec3 {
        DVec3::new(self.next_f64(), self.next_f64(), self.next_f64()) * scale
    }
}

fn gen_uniform_boxes(count: usize, extent: f64, size: f64) -> Vec<Aabb3> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let lo = rng.next_point(extent);
            Aabb3::new(lo, lo + DVec3::splat(size))
        })
        .collect()
}

fn gen_clustered_boxes(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Aabb3> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let centers: Vec<DVec3> = (0..n_clusters).map(|_| rng.next_point(2000.0)).collect();
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for c in centers {
        for _ in 0..per_cluster {
            let lo = c + (rng.next_point(spread) - DVec3::splat(spread * 0.5));
            out.push(Aabb3::new(lo, lo + DVec3::splat(12.0)));
        }
    }
    out
}

fn gen_queries(count: usize, extent: f64, seed: u64) -> Vec<DVec3> {
    let mut rng = Rng::new(seed);
    (0..count).map(|_| rng.next_point(extent)).collect()
}

struct TriSoup {
    tris: Vec<[DVec3; 3]>,
}

impl SurfaceMesh for TriSoup {
    fn polygon_count(&self) -> usize {
        self.tris.len()
    }
    fn polygon_vertex_count(&self, _polygon: usize) -> usize {
        3
    }
    fn polygon_vertex(&self, polygon: usize, vertex: usize) -> DVec3 {
        self.tris[polygon][vertex]
    }
}

/// Height-field terrain: an n x n vertex grid, two triangles per quad.
fn gen_terrain(n: usize, cell: f64) -> TriSoup {
    let height = |x: usize, y: usize| ((x as f64 * 0.3).sin() + (y as f64 * 0.4).cos()) * 5.0;
    let v = |x: usize, y: usize| DVec3::new(x as f64 * cell, y as f64 * cell, height(x, y));
    let mut tris = Vec::with_capacity(2 * (n - 1) * (n - 1));
    for y in 0..n - 1 {
        for x in 0..n - 1 {
            tris.push([v(x, y), v(x + 1, y), v(x + 1, y + 1)]);
            tris.push([v(x, y), v(x + 1, y + 1), v(x, y + 1)]);
        }
    }
    TriSoup { tris }
}

struct TetGrid {
    vertices: Vec<DVec3>,
    tets: Vec<[usize; 4]>,
}

impl VolumeMesh for TetGrid {
    fn cell_count(&self) -> usize {
        self.tets.len()
    }
    fn cell_vertex_count(&self, _cell: usize) -> usize {
        4
    }
    fn cell_vertex(&self, cell: usize, vertex: usize) -> DVec3 {
        self.vertices[self.tets[cell][vertex]]
    }
    fn cell_kind(&self, _cell: usize) -> CellKind {
        CellKind::Tetrahedron
    }
}

/// An n x n x n grid of unit cubes, six tetrahedra each.
fn gen_tet_grid(n: usize) -> TetGrid {
    let stride = n + 1;
    let vid = |x: usize, y: usize, z: usize| (z * stride + y) * stride + x;
    let vertices = (0..stride.pow(3))
        .map(|i| {
            DVec3::new(
                (i % stride) as f64,
                ((i / stride) % stride) as f64,
                (i / (stride * stride)) as f64,
            )
        })
        .collect();
    let mut tets = Vec::with_capacity(6 * n * n * n);
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                let c = [
                    vid(x, y, z),
                    vid(x + 1, y, z),
                    vid(x, y + 1, z),
                    vid(x + 1, y + 1, z),
                    vid(x, y, z + 1),
                    vid(x + 1, y, z + 1),
                    vid(x, y + 1, z + 1),
                    vid(x + 1, y + 1, z + 1),
                ];
                for path in [
                    [0, 1, 3, 7],
                    [0, 3, 2, 7],
                    [0, 2, 6, 7],
                    [0, 6, 4, 7],
                    [0, 4, 5, 7],
                    [0, 5, 1, 7],
                ] {
                    tets.push([c[path[0]], c[path[1]], c[path[2]], c[path[3]]]);
                }
            }
        }
    }
    TetGrid { vertices, tets }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &count in &[1_024usize, 16_384] {
        let boxes = gen_uniform_boxes(count, 2000.0, 12.0);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("uniform_n{count}"), |b| {
            b.iter_batched(
                || boxes.clone(),
                |boxes| black_box(BoxTree::new(&boxes)),
                BatchSize::SmallInput,
            )
        });
    }
    let boxes = gen_clustered_boxes(16, 1_024, 128.0);
    group.throughput(Throughput::Elements(boxes.len() as u64));
    group.bench_function("clustered_16x1024", |b| {
        b.iter_batched(
            || boxes.clone(),
            |boxes| black_box(BoxTree::new(&boxes)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_nearest_box(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_box");
    for &count in &[1_024usize, 16_384] {
        let boxes = gen_uniform_boxes(count, 2000.0, 12.0);
        let tree = BoxTree::new(&boxes);
        let queries = gen_queries(256, 2200.0, 0xFACE_FEED_CAFE_BABE);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("tree_n{count}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &q in &queries {
                    acc += tree.nearest_box(q).distance;
                }
                black_box(acc);
            })
        });
        group.bench_function(format!("brute_n{count}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &q in &queries {
                    acc += boxes
                        .iter()
                        .map(|bx| q.distance(bx.closest_point(q)))
                        .fold(f64::MAX, f64::min);
                }
                black_box(acc);
            })
        });
    }
    group.finish();
}

fn bench_nearest_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_triangle");
    for &n in &[32usize, 96] {
        let mesh = gen_terrain(n, 2.0);
        let tree = SurfaceTree::new(&mesh);
        let queries = gen_queries(256, n as f64 * 2.0, 0xBADC_F00D_1234_5678);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("tree_terrain_n{n}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &q in &queries {
                    acc += tree.nearest_triangle(q).distance;
                }
                black_box(acc);
            })
        });
        group.bench_function(format!("brute_terrain_n{n}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &q in &queries {
                    acc += mesh
                        .tris
                        .iter()
                        .map(|t| point_triangle_distance(q, t[0], t[1], t[2]).1)
                        .fold(f64::MAX, f64::min);
                }
                black_box(acc);
            })
        });
    }
    group.finish();
}

fn bench_containing_cell(c: &mut Criterion) {
    let mut group = c.benchmark_group("containing_cell");
    for &n in &[8usize, 16] {
        let mesh = gen_tet_grid(n);
        let tree = VolumeTree::new(&mesh);
        // Half the queries land inside the grid, half outside.
        let queries = gen_queries(256, n as f64 * 2.0, 0x5EED_5EED_5EED_5EED);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("tet_grid_n{n}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for &q in &queries {
                    hits += usize::from(tree.containing_cell(q).is_some());
                }
                black_box(hits);
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_nearest_box,
    bench_nearest_triangle,
    bench_containing_cell,
);
criterion_main!(benches);
