// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Morton-order spatial sort.
//!
//! Rather than computing interleaved-bit keys, the sort applies recursive
//! median splits directly: each level partitions a range into eight octant
//! sub-ranges with seven `select_nth_unstable_by` calls keyed on box centers
//! (one on the primary axis, two on the secondary, four on the tertiary),
//! then recurses into the eight sub-ranges with the axis roles rotated per
//! octant. The result approximates a Z-order curve without ever quantizing
//! coordinates.

use alloc::vec::Vec;
use core::cmp::Ordering;

use terrane_geom::Aabb3;

/// Sort element indices into Morton order by bounding-box center.
///
/// Returns the permutation as a vector of element indices: position `k` in
/// the result holds the element that comes `k`-th along the space-filling
/// curve. The input is not moved.
///
/// The sort is deterministic for a given input: ties between equal center
/// coordinates are broken by the (deterministic) partition, so repeated
/// calls yield the same permutation.
pub fn morton_sort(bboxes: &[Aabb3]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..bboxes.len()).collect();
    sort_octants(bboxes, &mut order, 0);
    order
}

/// Recursively partition `range` into octants, with `x` as the primary axis.
fn sort_octants(bboxes: &[Aabb3], range: &mut [usize], x: usize) {
    if range.len() <= 1 {
        return;
    }
    let y = (x + 1) % 3;
    let z = (y + 1) % 3;

    let (h0, h1) = split(bboxes, range, x);
    let (q0, q1) = split(bboxes, h0, y);
    let (q2, q3) = split(bboxes, h1, y);
    let (o0, o1) = split(bboxes, q0, z);
    let (o2, o3) = split(bboxes, q1, z);
    let (o4, o5) = split(bboxes, q2, z);
    let (o6, o7) = split(bboxes, q3, z);

    // Axis roles rotate per octant so that consecutive octants share a face,
    // which is what keeps the curve continuous.
    sort_octants(bboxes, o0, z);
    sort_octants(bboxes, o1, y);
    sort_octants(bboxes, o2, y);
    sort_octants(bboxes, o3, x);
    sort_octants(bboxes, o4, x);
    sort_octants(bboxes, o5, y);
    sort_octants(bboxes, o6, y);
    sort_octants(bboxes, o7, z);
}

/// Median-partition `range` on `axis` and return the two halves.
///
/// After the call every element of the lower half has a center coordinate on
/// `axis` less than or equal to every element of the upper half.
fn split<'r>(
    bboxes: &[Aabb3],
    range: &'r mut [usize],
    axis: usize,
) -> (&'r mut [usize], &'r mut [usize]) {
    let mid = range.len() / 2;
    if range.len() > 1 {
        range.select_nth_unstable_by(mid, |&a, &b| center_cmp(bboxes, a, b, axis));
    }
    range.split_at_mut(mid)
}

fn center_cmp(bboxes: &[Aabb3], a: usize, b: usize, axis: usize) -> Ordering {
    let ca = bboxes[a].center()[axis];
    let cb = bboxes[b].center()[axis];
    // Finite inputs assumed; NaN would compare as equal.
    ca.partial_cmp(&cb).unwrap_or(Ordering::Equal)
}
