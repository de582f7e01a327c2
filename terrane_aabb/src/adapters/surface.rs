// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index over the polygons of a surface mesh.

use alloc::vec::Vec;
use core::fmt;

use glam::DVec3;
use terrane_geom::{Aabb3, point_triangle_distance};

use crate::mesh::SurfaceMesh;
use crate::tree::{AabbTree, ElementDistance, Nearest};

/// An index over the polygons of a borrowed [`SurfaceMesh`].
///
/// Bounding boxes cover each polygon's full vertex ring, but the exact
/// distance test reads only the first three vertices. Triangulate
/// non-triangle polygons upstream if exact distances to them matter.
pub struct SurfaceTree<'m, M: SurfaceMesh> {
    tree: AabbTree,
    mesh: &'m M,
}

impl<'m, M: SurfaceMesh> SurfaceTree<'m, M> {
    /// Build over every polygon of `mesh`.
    ///
    /// # Panics
    ///
    /// Panics if the mesh has no polygons.
    pub fn new(mesh: &'m M) -> Self {
        let bboxes: Vec<Aabb3> = (0..mesh.polygon_count())
            .map(|p| {
                Aabb3::from_points(
                    (0..mesh.polygon_vertex_count(p)).map(|v| mesh.polygon_vertex(p, v)),
                )
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

    /// The triangle closest to `query`, the closest point on it, and the
    /// distance.
    pub fn nearest_triangle(&self, query: DVec3) -> Nearest {
        self.tree
            .nearest(query, &TriangleDistance { mesh: self.mesh })
    }
}

impl<M: SurfaceMesh> fmt::Debug for SurfaceTree<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceTree")
            .field("polygons", &self.tree.element_count())
            .finish_non_exhaustive()
    }
}

struct TriangleDistance<'m, M> {
    mesh: &'m M,
}

impl<M: SurfaceMesh> ElementDistance for TriangleDistance<'_, M> {
    fn nearest_point(&self, query: DVec3, element: usize) -> (DVec3, f64) {
        let (point, distance, _) = point_triangle_distance(
            query,
            self.mesh.polygon_vertex(element, 0),
            self.mesh.polygon_vertex(element, 1),
            self.mesh.polygon_vertex(element, 2),
        );
        (point, distance)
    }

    fn hint_point(&self, _bbox: &Aabb3, element: usize) -> DVec3 {
        self.mesh.polygon_vertex(element, 0)
    }
}
