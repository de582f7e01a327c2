// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terrane Geom: 3D geometric primitives for spatial indexing.
//!
//! Terrane Geom is the foundation crate of the Terrane workspace. It provides
//! the vocabulary the tree engine is built from:
//!
//! - [`Aabb3`]: an axis-aligned bounding volume with union, containment, and
//!   signed point-box distance.
//! - Exact point-element tests: [`point_segment_distance`],
//!   [`point_triangle_distance`] (with barycentric coordinates), and
//!   [`point_inside_tetra`].
//!
//! Coordinates are `f64` throughout, using [`glam::DVec3`] as the point/vector
//! type. Inputs are assumed finite (no NaNs); debug builds may assert.
//!
//! This crate is `no_std`. Float math is routed through glam, so `no_std`
//! builds work with the `libm` feature enabled.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod aabb;
pub mod contains;
pub mod distance;

pub use aabb::Aabb3;
pub use contains::point_inside_tetra;
pub use distance::{point_segment_distance, point_triangle_distance};
