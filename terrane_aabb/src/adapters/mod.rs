// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-geometry-kind front ends over the generic tree.
//!
//! Each adapter collects one bounding box per element from the borrowed
//! mesh, builds an [`AabbTree`](crate::tree::AabbTree), and supplies the
//! exact strategy the generic traversals delegate to at the leaves.

mod boxes;
mod line;
mod surface;
mod volume;

pub use boxes::BoxTree;
pub use line::LineTree;
pub use surface::SurfaceTree;
pub use volume::VolumeTree;
