// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index over bare boxes.

use alloc::vec::Vec;

use glam::DVec3;
use terrane_geom::Aabb3;

use crate::tree::{AabbTree, ElementDistance, Nearest};

/// An index over a set of boxes with no geometry behind them.
///
/// The boxes are both the bounding volumes and the elements: the exact
/// distance at a leaf is the clamp distance to the box itself. Useful when
/// the elements genuinely are boxes (tiles, chunks, coarse proxies) or when
/// box-level precision is enough.
#[derive(Clone, Debug)]
pub struct BoxTree {
    tree: AabbTree,
    boxes: Vec<Aabb3>,
}

impl BoxTree {
    /// Build over a snapshot of the given boxes.
    ///
    /// # Panics
    ///
    /// Panics if `bboxes` is empty.
    pub fn new(bboxes: &[Aabb3]) -> Self {
        Self {
            tree: AabbTree::new(bboxes),
            boxes: bboxes.to_vec(),
        }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &AabbTree {
        &self.tree
    }

    /// The box closest to `query`, its closest point, and the distance.
    ///
    /// A query inside a box reports that box at distance zero.
    pub fn nearest_box(&self, query: DVec3) -> Nearest {
        self.tree.nearest(query, &BoxDistance { boxes: &self.boxes })
    }
}

struct BoxDistance<'b> {
    boxes: &'b [Aabb3],
}

impl ElementDistance for BoxDistance<'_> {
    fn nearest_point(&self, query: DVec3, element: usize) -> (DVec3, f64) {
        let point = self.boxes[element].closest_point(query);
        (point, query.distance(point))
    }

    // No geometry to sample, so the box center is the representative.
    fn hint_point(&self, bbox: &Aabb3, _element: usize) -> DVec3 {
        bbox.center()
    }
}
