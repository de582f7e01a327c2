// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index over the cells of a volumetric mesh.

use alloc::vec::Vec;
use core::fmt;

use glam::DVec3;
use terrane_geom::{Aabb3, point_inside_tetra};

use crate::mesh::{CellKind, VolumeMesh};
use crate::tree::{AabbTree, ElementContainment};

/// An index over the cells of a borrowed [`VolumeMesh`].
///
/// Answers point-location queries: which cell contains a given point.
pub struct VolumeTree<'m, M: VolumeMesh> {
    tree: AabbTree,
    mesh: &'m M,
}

impl<'m, M: VolumeMesh> VolumeTree<'m, M> {
    /// Build over every cell of `mesh`.
    ///
    /// # Panics
    ///
    /// Panics if the mesh has no cells.
    pub fn new(mesh: &'m M) -> Self {
        let bboxes: Vec<Aabb3> = (0..mesh.cell_count())
            .map(|c| {
                Aabb3::from_points((0..mesh.cell_vertex_count(c)).map(|v| mesh.cell_vertex(c, v)))
            })
            .collect();
        Self {
            tree: AabbTree::new(&bboxes),
            mesh,
        }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &AabbTree {
        &self.tree
    }

    /// The cell containing `query`, if any.
    ///
    /// The test is closed, so a point on a face shared by two cells is in
    /// both; the cell earliest in Morton order is reported.
    ///
    /// # Panics
    ///
    /// Panics if the traversal reaches a cell whose [`CellKind`] has no
    /// exact containment test yet. Only [`CellKind::Tetrahedron`] is
    /// supported; a wrong answer would be worse than a loud failure.
    pub fn containing_cell(&self, query: DVec3) -> Option<usize> {
        self.tree
            .containing_element(query, &CellContainment { mesh: self.mesh })
    }
}

impl<M: VolumeMesh> fmt::Debug for VolumeTree<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VolumeTree")
            .field("cells", &self.tree.element_count())
            .finish_non_exhaustive()
    }
}

struct CellContainment<'m, M> {
    mesh: &'m M,
}

impl<M: VolumeMesh> ElementContainment for CellContainment<'_, M> {
    fn contains(&self, query: DVec3, element: usize) -> bool {
        match self.mesh.cell_kind(element) {
            CellKind::Tetrahedron => {
                debug_assert_eq!(self.mesh.cell_vertex_count(element), 4);
                point_inside_tetra(
                    query,
                    self.mesh.cell_vertex(element, 0),
                    self.mesh.cell_vertex(element, 1),
                    self.mesh.cell_vertex(element, 2),
                    self.mesh.cell_vertex(element, 3),
                )
            }
            kind => unimplemented!("no exact point-in-cell test for {kind:?} cells"),
        }
    }
}
