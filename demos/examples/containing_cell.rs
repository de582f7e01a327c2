// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point location in a tetrahedral mesh, plus a tree dump.
//!
//! Tile a block of space with tetrahedra, locate a few points, and write
//! the tree's per-level boxes as OBJ wireframes for inspection.
//!
//! Run:
//! - `cargo run -p terrane_demos --example containing_cell`

use glam::DVec3;
use terrane_aabb::{CellKind, VolumeMesh, VolumeTree, dump};

/// An n x n x n grid of unit cubes, each split into six tetrahedra around
/// the cube's main diagonal.
struct TetGrid {
    n: usize,
}

const CUBE_TETS: [[usize; 4]; 6] = [
    [0, 1, 3, 7],
    [0, 3, 2, 7],
    [0, 2, 6, 7],
    [0, 6, 4, 7],
    [0, 4, 5, 7],
    [0, 5, 1, 7],
];

impl VolumeMesh for TetGrid {
    fn cell_count(&self) -> usize {
        6 * self.n.pow(3)
    }

    fn cell_vertex_count(&self, _cell: usize) -> usize {
        4
    }

    fn cell_vertex(&self, cell: usize, vertex: usize) -> DVec3 {
        let cube = cell / 6;
        let origin = DVec3::new(
            (cube % self.n) as f64,
            ((cube / self.n) % self.n) as f64,
            (cube / (self.n * self.n)) as f64,
        );
        let corner = CUBE_TETS[cell % 6][vertex];
        origin
            + DVec3::new(
                (corner & 1) as f64,
                ((corner >> 1) & 1) as f64,
                ((corner >> 2) & 1) as f64,
            )
    }

    fn cell_kind(&self, _cell: usize) -> CellKind {
        CellKind::Tetrahedron
    }
}

fn main() {
    let mesh = TetGrid { n: 8 };
    let tree = VolumeTree::new(&mesh);
    println!("indexed {} tetrahedra", tree.tree().element_count());

    let probes = [
        DVec3::new(0.2, 0.3, 0.4),
        DVec3::new(7.9, 7.9, 7.9),
        DVec3::new(4.0, 4.0, 4.0),
        DVec3::new(20.0, 1.0, 1.0),
    ];
    for probe in probes {
        match tree.containing_cell(probe) {
            Some(cell) => println!("{probe} is in cell {cell}"),
            None => println!("{probe} is outside the mesh"),
        }
    }

    let dir = std::env::temp_dir().join("terrane_tet_grid");
    std::fs::create_dir_all(&dir).expect("create dump directory");
    dump::save_levels(tree.tree(), &dir, "tet_grid").expect("write dump");
    println!("tree levels dumped to {}", dir.display());
}
