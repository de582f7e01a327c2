// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mesh access traits.
//!
//! The index never owns geometry. Each adapter borrows a mesh through one of
//! these traits, reads it once at construction to collect bounding boxes,
//! and reads it again during queries for the exact tests at the leaves. The
//! mesh must stay unchanged for the lifetime of the adapter; the borrow
//! makes that hard to get wrong.
//!
//! Element and vertex numbering is the implementor's own and is reported
//! back unchanged in query results.

use glam::DVec3;

/// Topological type of a volumetric cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Four vertices, four triangular faces.
    Tetrahedron,
    /// Eight vertices, six quad faces.
    Hexahedron,
    /// Six vertices, two triangular and three quad faces.
    Prism,
    /// Five vertices, one quad and four triangular faces.
    Pyramid,
}

/// A mesh of line segments.
pub trait LineMesh {
    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Position of endpoint `vertex` (0 or 1) of `edge`.
    fn edge_vertex(&self, edge: usize, vertex: usize) -> DVec3;
}

/// A surface mesh of polygons.
///
/// Exact distance tests assume triangles and read the first three vertices
/// of each polygon; triangulate other polygons upstream.
pub trait SurfaceMesh {
    /// Number of polygons.
    fn polygon_count(&self) -> usize;

    /// Number of vertices of `polygon`.
    fn polygon_vertex_count(&self, polygon: usize) -> usize;

    /// Position of the `vertex`-th vertex of `polygon`.
    fn polygon_vertex(&self, polygon: usize, vertex: usize) -> DVec3;
}

/// A volumetric mesh of cells.
pub trait VolumeMesh {
    /// Number of cells.
    fn cell_count(&self) -> usize;

    /// Number of vertices of `cell`.
    fn cell_vertex_count(&self, cell: usize) -> usize;

    /// Position of the `vertex`-th vertex of `cell`.
    fn cell_vertex(&self, cell: usize, vertex: usize) -> DVec3;

    /// Topological type of `cell`.
    fn cell_kind(&self, cell: usize) -> CellKind;
}
