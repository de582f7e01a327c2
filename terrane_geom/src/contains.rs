// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact point-in-cell tests.

use glam::DVec3;

/// Whether `p` lies inside the tetrahedron `(v0, v1, v2, v3)`.
///
/// The test is orientation-free (either winding of the tetrahedron works)
/// and closed: a point exactly on a face, edge, or vertex tests inside.
/// A degenerate (zero-volume) tetrahedron contains nothing.
pub fn point_inside_tetra(p: DVec3, v0: DVec3, v1: DVec3, v2: DVec3, v3: DVec3) -> bool {
    same_side(v0, v1, v2, v3, p)
        && same_side(v0, v1, v3, v2, p)
        && same_side(v0, v2, v3, v1, p)
        && same_side(v1, v2, v3, v0, p)
}

/// `p` on the same (closed) side of plane `(a, b, c)` as `apex`.
///
/// False when the apex is coplanar with the face, which rejects degenerate
/// tetrahedra instead of reporting everything inside.
fn same_side(a: DVec3, b: DVec3, c: DVec3, apex: DVec3, p: DVec3) -> bool {
    let n = (b - a).cross(c - a);
    let dv = n.dot(apex - a);
    let dp = n.dot(p - a);
    dv != 0.0 && dv * dp >= 0.0
}
