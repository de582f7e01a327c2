// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact point-to-primitive distance.
//!
//! These are the routines the tree's nearest-element refinement delegates to
//! at the leaves. Each returns the closest point on the primitive together
//! with the Euclidean distance to it.

use glam::DVec3;

/// Closest point on segment `[a, b]` to `p`, and the distance to it.
///
/// A degenerate segment (`a == b`) behaves as the single point `a`.
pub fn point_segment_distance(p: DVec3, a: DVec3, b: DVec3) -> (DVec3, f64) {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return (a, p.distance(a));
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    let nearest = a + ab * t;
    (nearest, p.distance(nearest))
}

/// Closest point on triangle `(a, b, c)` to `p`.
///
/// Returns the nearest point, the distance, and the barycentric coordinates
/// of the nearest point with respect to `(a, b, c)`.
///
/// Region walk from Ericson, "Real-Time Collision Detection": classify `p`
/// against the vertex, edge, and face Voronoi regions of the triangle and
/// project accordingly.
pub fn point_triangle_distance(p: DVec3, a: DVec3, b: DVec3, c: DVec3) -> (DVec3, f64, [f64; 3]) {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let d1 = ab.dot(ap);
    let d2 = ac.dot(ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        // Vertex region A.
        return (a, p.distance(a), [1.0, 0.0, 0.0]);
    }

    let bp = p - b;
    let d3 = ab.dot(bp);
    let d4 = ac.dot(bp);
    if d3 >= 0.0 && d4 <= d3 {
        // Vertex region B.
        return (b, p.distance(b), [0.0, 1.0, 0.0]);
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        // Edge region AB.
        let v = d1 / (d1 - d3);
        let q = a + ab * v;
        return (q, p.distance(q), [1.0 - v, v, 0.0]);
    }

    let cp = p - c;
    let d5 = ab.dot(cp);
    let d6 = ac.dot(cp);
    if d6 >= 0.0 && d5 <= d6 {
        // Vertex region C.
        return (c, p.distance(c), [0.0, 0.0, 1.0]);
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        // Edge region AC.
        let w = d2 / (d2 - d6);
        let q = a + ac * w;
        return (q, p.distance(q), [1.0 - w, 0.0, w]);
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        // Edge region BC.
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        let q = b + (c - b) * w;
        return (q, p.distance(q), [0.0, 1.0 - w, w]);
    }

    // Face region.
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    let q = a + ab * v + ac * w;
    (q, p.distance(q), [1.0 - v - w, v, w])
}
