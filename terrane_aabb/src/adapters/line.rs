// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index over the edges of a line mesh.

use alloc::vec::Vec;
use core::fmt;

use glam::DVec3;
use terrane_geom::{Aabb3, point_segment_distance};

use crate::mesh::LineMesh;
use crate::tree::{AabbTree, ElementDistance, Nearest};

/// An index over the edges of a borrowed [`LineMesh`].
///
/// Answers nearest-edge queries; the mesh must not change while the index
/// exists.
pub struct LineTree<'m, M: LineMesh> {
    tree: AabbTree,
    mesh: &'m M,
}

impl<'m, M: LineMesh> LineTree<'m, M> {
    /// Build over every edge of `mesh`.
    ///
    /// # Panics
    ///
    /// Panics if the mesh has no edges.
    pub fn new(mesh: &'m M) -> Self {
        let bboxes: Vec<Aabb3> = (0..mesh.edge_count())
            .map(|e| Aabb3::from_points([mesh.edge_vertex(e, 0), mesh.edge_vertex(e, 1)]))
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

    /// The edge closest to `query`, the closest point on it, and the
    /// distance. Distances clamp to the segment, so an endpoint can be the
    /// closest point.
    pub fn nearest_edge(&self, query: DVec3) -> Nearest {
        self.tree.nearest(query, &EdgeDistance { mesh: self.mesh })
    }
}

impl<M: LineMesh> fmt::Debug for LineTree<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineTree")
            .field("edges", &self.tree.element_count())
            .finish_non_exhaustive()
    }
}

struct EdgeDistance<'m, M> {
    mesh: &'m M,
}

impl<M: LineMesh> ElementDistance for EdgeDistance<'_, M> {
    fn nearest_point(&self, query: DVec3, element: usize) -> (DVec3, f64) {
        point_segment_distance(
            query,
            self.mesh.edge_vertex(element, 0),
            self.mesh.edge_vertex(element, 1),
        )
    }

    fn hint_point(&self, _bbox: &Aabb3, element: usize) -> DVec3 {
        self.mesh.edge_vertex(element, 0)
    }
}
