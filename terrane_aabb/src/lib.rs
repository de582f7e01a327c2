// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terrane AABB: a balanced spatial index over mesh elements.
//!
//! The engine answers two questions about a mesh:
//!
//! - **Nearest element**: which edge/triangle/box is closest to a query
//!   point, where on it, and how far away ([`AabbTree::nearest`]).
//! - **Containment**: which volumetric cell, if any, contains a query point
//!   ([`AabbTree::containing_element`]).
//!
//! # Structure
//!
//! The index is a complete binary tree of axis-aligned bounding boxes stored
//! in a flat array with implicit topology: the root is slot 1 and the
//! children of slot `i` are `2 * i` and `2 * i + 1`. There are no child
//! pointers and no per-node element lists; a node's element range is derived
//! from the recursion alone. Elements are first permuted into Morton order
//! ([`morton_sort`]) so that contiguous ranges are spatially coherent, which
//! is what makes the implicit median splits produce tight boxes.
//!
//! The tree never stores geometry beyond the boxes. Exact tests at the
//! leaves are delegated to a strategy ([`ElementDistance`],
//! [`ElementContainment`]), and the mesh adapters in [`adapters`] wire those
//! strategies to the mesh access traits in [`mesh`].
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use terrane_aabb::BoxTree;
//! use terrane_geom::Aabb3;
//!
//! // Eight unit boxes spread along the axes.
//! let boxes: Vec<Aabb3> = (0..8)
//!     .map(|i| {
//!         let corner =
//!             DVec3::new(f64::from(i % 2), f64::from((i / 2) % 2), f64::from(i / 4)) * 10.0;
//!         Aabb3::new(corner, corner + DVec3::ONE)
//!     })
//!     .collect();
//! let tree = BoxTree::new(&boxes);
//!
//! let hit = tree.nearest_box(DVec3::new(-1.0, 0.5, 0.5));
//! assert_eq!(hit.element, 0);
//! assert!((hit.distance - 1.0).abs() < 1e-12);
//! ```
//!
//! # Features
//!
//! - `std` (default): enables the [`dump`] diagnostic module.
//! - `libm`: float math for `no_std` targets.

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod adapters;
#[cfg(feature = "std")]
pub mod dump;
pub mod mesh;
pub mod morton;
pub mod tree;

pub use adapters::{BoxTree, LineTree, SurfaceTree, VolumeTree};
pub use mesh::{CellKind, LineMesh, SurfaceMesh, VolumeMesh};
pub use morton::morton_sort;
pub use tree::{AabbTree, ElementContainment, ElementDistance, Nearest};
