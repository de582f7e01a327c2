// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-triangle queries against a terrain mesh.
//!
//! Build a height-field surface, index its triangles, and project a few
//! probe points onto it.
//!
//! Run:
//! - `cargo run -p terrane_demos --example nearest_surface`

use glam::DVec3;
use terrane_aabb::{SurfaceMesh, SurfaceTree};

/// A height field over an n x n vertex grid, two triangles per quad.
struct Terrain {
    n: usize,
    cell: f64,
}

impl Terrain {
    fn vertex(&self, x: usize, y: usize) -> DVec3 {
        let height = ((x as f64 * 0.3).sin() + (y as f64 * 0.4).cos()) * 5.0;
        DVec3::new(x as f64 * self.cell, y as f64 * self.cell, height)
    }
}

impl SurfaceMesh for Terrain {
    fn polygon_count(&self) -> usize {
        2 * (self.n - 1) * (self.n - 1)
    }

    fn polygon_vertex_count(&self, _polygon: usize) -> usize {
        3
    }

    fn polygon_vertex(&self, polygon: usize, vertex: usize) -> DVec3 {
        let quad = polygon / 2;
        let (x, y) = (quad % (self.n - 1), quad / (self.n - 1));
        let corners = if polygon % 2 == 0 {
            [(x, y), (x + 1, y), (x + 1, y + 1)]
        } else {
            [(x, y), (x + 1, y + 1), (x, y + 1)]
        };
        let (cx, cy) = corners[vertex];
        self.vertex(cx, cy)
    }
}

fn main() {
    let terrain = Terrain { n: 64, cell: 2.0 };
    let tree = SurfaceTree::new(&terrain);
    println!(
        "indexed {} triangles, root box {:?}",
        tree.tree().element_count(),
        tree.tree().root_box()
    );

    // Probe points above, below, and far off the surface.
    let probes = [
        DVec3::new(30.0, 30.0, 40.0),
        DVec3::new(63.0, 10.0, -20.0),
        DVec3::new(-50.0, -50.0, 0.0),
    ];
    for probe in probes {
        let hit = tree.nearest_triangle(probe);
        println!(
            "probe {probe}: triangle {} at {} (distance {:.3})",
            hit.element, hit.point, hit.distance
        );
        assert!((probe.distance(hit.point) - hit.distance).abs() < 1e-9);
    }
}
