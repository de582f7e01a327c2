// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding volumes.

use glam::DVec3;

/// Axis-aligned bounding box in 3D.
///
/// A box is either the union of the points added to it, or [`Aabb3::EMPTY`]
/// if no point has ever been added. The empty box has inverted corners
/// (`min > max` on every axis), so it is the identity for [`Aabb3::union`]
/// and contains nothing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb3 {
    /// The empty (inverted) box: no point has been added yet.
    pub const EMPTY: Self = Self {
        min: DVec3::INFINITY,
        max: DVec3::NEG_INFINITY,
    };

    /// Create a box from min/max corners.
    pub const fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// The smallest box covering all the given points.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Self {
        let mut b = Self::EMPTY;
        for p in points {
            b.add_point(p);
        }
        b
    }

    /// Grow the box to cover `p`.
    pub fn add_point(&mut self, p: DVec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// The smallest box covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Whether `p` lies within `[min, max]` on every axis (closed interval).
    ///
    /// Always false for the empty box.
    pub fn contains(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// True if the box is empty or inverted on some axis. Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Componentwise midpoint.
    pub fn center(&self) -> DVec3 {
        0.5 * (self.min + self.max)
    }

    /// Extents along the three axes.
    pub fn diagonal(&self) -> DVec3 {
        self.max - self.min
    }

    /// Extent along the x axis.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along the y axis.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extent along the z axis.
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// The point of the box closest to `p` (componentwise clamp).
    ///
    /// Returns `p` itself when the box contains it.
    pub fn closest_point(&self, p: DVec3) -> DVec3 {
        p.clamp(self.min, self.max)
    }

    /// Signed distance from `p` to the box boundary.
    ///
    /// Negative inside: the magnitude is the minimum distance from `p` to any
    /// of the six faces. Positive outside: the Euclidean norm of the per-axis
    /// clamp residuals (each axis contributes only if `p` violates its bound).
    /// This is the lower bound used for nearest-neighbour pruning: no point
    /// inside the box can be closer to `p` than this value.
    pub fn signed_distance(&self, p: DVec3) -> f64 {
        let outside = (self.min - p).max(p - self.max).max(DVec3::ZERO);
        if outside == DVec3::ZERO {
            -self.inner_distance(p)
        } else {
            outside.length()
        }
    }

    /// Minimum distance from an interior point to any face.
    fn inner_distance(&self, p: DVec3) -> f64 {
        debug_assert!(self.contains(p), "point must be inside the box");
        (p - self.min).min(self.max - p).min_element()
    }
}

impl Default for Aabb3 {
    fn default() -> Self {
        Self::EMPTY
    }
}
