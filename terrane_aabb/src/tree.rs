// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The implicit array-backed AABB tree and its generic traversals.

use alloc::vec;
use alloc::vec::Vec;

use glam::DVec3;
use terrane_geom::Aabb3;

use crate::morton::morton_sort;

/// Slot of the root node; slot 0 is unused padding.
const ROOT_INDEX: usize = 1;

/// Exact-distance strategy for one element kind.
///
/// The tree prunes with box distances; when a traversal reaches a leaf it
/// delegates to this trait for the exact answer on the underlying geometry.
pub trait ElementDistance {
    /// Closest point on `element` to `query`, and the distance to it.
    fn nearest_point(&self, query: DVec3, element: usize) -> (DVec3, f64);

    /// A cheap representative point of `element`, used to seed the search
    /// with a finite starting distance. `bbox` is the element's leaf box.
    ///
    /// Any point on or near the element works; a tighter hint only makes
    /// pruning during refinement more effective.
    fn hint_point(&self, bbox: &Aabb3, element: usize) -> DVec3;
}

/// Exact point-in-element test for one element kind.
pub trait ElementContainment {
    /// Whether `query` lies inside `element` (closed: boundary counts).
    fn contains(&self, query: DVec3, element: usize) -> bool;
}

/// Result of a nearest-element query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest {
    /// Index of the winning element, in the caller's numbering.
    pub element: usize,
    /// The closest point on that element.
    pub point: DVec3,
    /// Euclidean distance from the query to `point`.
    pub distance: f64,
}

/// A balanced binary tree of bounding boxes over Morton-ordered elements.
///
/// Nodes live in a flat array with implicit topology: the root is slot 1 and
/// the children of slot `i` are `2 * i` and `2 * i + 1`. Each node covers a
/// contiguous range of the Morton permutation; the range is re-derived
/// during traversal by the same midpoint splits used at construction, so no
/// per-node ranges are stored. A leaf covers exactly one element.
///
/// The tree is immutable once built. To reflect changed geometry, build a
/// new tree; construction is `O(n log n)` and allocation-light.
#[derive(Clone, Debug)]
pub struct AabbTree {
    /// Node boxes, 1-indexed. Slots past the last leaf of a short bottom
    /// level stay [`Aabb3::EMPTY`].
    nodes: Vec<Aabb3>,
    /// Morton permutation: leaf position to element index.
    order: Vec<usize>,
}

impl AabbTree {
    /// Build a tree over one bounding box per element.
    ///
    /// `bboxes[e]` must bound element `e` in the caller's numbering; the
    /// tree keeps that numbering in all query results.
    ///
    /// # Panics
    ///
    /// Panics if `bboxes` is empty. An index over nothing has no valid
    /// query answers, so this is a caller error, not a query-time case.
    pub fn new(bboxes: &[Aabb3]) -> Self {
        assert!(!bboxes.is_empty(), "cannot index zero elements");
        let order = morton_sort(bboxes);
        let node_count = 1 + max_node_index(ROOT_INDEX, 0, bboxes.len());
        let mut nodes = vec![Aabb3::EMPTY; node_count];
        init_node(&mut nodes, bboxes, &order, ROOT_INDEX, 0, bboxes.len());
        Self { nodes, order }
    }

    /// Number of indexed elements.
    pub fn element_count(&self) -> usize {
        self.order.len()
    }

    /// The box covering every element.
    pub fn root_box(&self) -> &Aabb3 {
        &self.nodes[ROOT_INDEX]
    }

    /// The Morton permutation: position `k` holds the element that comes
    /// `k`-th along the space-filling curve.
    pub fn morton_order(&self) -> &[usize] {
        &self.order
    }

    /// The raw 1-indexed node array, for diagnostics.
    #[cfg(feature = "std")]
    pub(crate) fn node_slots(&self) -> &[Aabb3] {
        &self.nodes
    }

    /// Nearest element to `query` under the exact-distance strategy
    /// `metric`.
    ///
    /// Runs in two stages. A descent pass walks from the root to one leaf,
    /// at each node entering the child whose box center is closer to the
    /// query; the hint point of that leaf's element bounds the answer. A
    /// refinement pass then traverses the tree branch-and-bound style,
    /// visiting the closer child first and skipping any subtree whose
    /// signed box distance is not strictly below the current best. On exact
    /// distance ties the first candidate found is kept.
    pub fn nearest<D: ElementDistance>(&self, query: DVec3, metric: &D) -> Nearest {
        let mut best = self.descend_to_hint(query, metric);
        self.refine_nearest(query, metric, ROOT_INDEX, 0, self.element_count(), &mut best);
        best
    }

    /// Greedy root-to-leaf descent producing the initial candidate.
    fn descend_to_hint<D: ElementDistance>(&self, query: DVec3, metric: &D) -> Nearest {
        let mut node = ROOT_INDEX;
        let mut begin = 0;
        let mut end = self.element_count();
        while !is_leaf(begin, end) {
            let (mid, left, right) = child_ranges(node, begin, end);
            let left_d2 = self.nodes[left].center().distance_squared(query);
            let right_d2 = self.nodes[right].center().distance_squared(query);
            if left_d2 < right_d2 {
                node = left;
                end = mid;
            } else {
                node = right;
                begin = mid;
            }
        }
        let element = self.order[begin];
        let point = metric.hint_point(&self.nodes[node], element);
        Nearest {
            element,
            point,
            distance: query.distance(point),
        }
    }

    fn refine_nearest<D: ElementDistance>(
        &self,
        query: DVec3,
        metric: &D,
        node: usize,
        begin: usize,
        end: usize,
        best: &mut Nearest,
    ) {
        if is_leaf(begin, end) {
            let element = self.order[begin];
            let (point, distance) = metric.nearest_point(query, element);
            if distance < best.distance {
                *best = Nearest {
                    element,
                    point,
                    distance,
                };
            }
            return;
        }
        let (mid, left, right) = child_ranges(node, begin, end);
        let left_d = self.nodes[left].signed_distance(query);
        let right_d = self.nodes[right].signed_distance(query);
        // Closer child first, so the other side is more likely pruned.
        if left_d < right_d {
            if left_d < best.distance {
                self.refine_nearest(query, metric, left, begin, mid, best);
            }
            if right_d < best.distance {
                self.refine_nearest(query, metric, right, mid, end, best);
            }
        } else {
            if right_d < best.distance {
                self.refine_nearest(query, metric, right, mid, end, best);
            }
            if left_d < best.distance {
                self.refine_nearest(query, metric, left, begin, mid, best);
            }
        }
    }

    /// The element containing `query` under the containment strategy
    /// `test`, if any.
    ///
    /// Prunes any subtree whose box does not contain the query. When
    /// several elements contain the point (shared faces, coincident cells)
    /// the one earliest in Morton order wins, deterministically.
    pub fn containing_element<C: ElementContainment>(
        &self,
        query: DVec3,
        test: &C,
    ) -> Option<usize> {
        self.containing_recursive(query, test, ROOT_INDEX, 0, self.element_count())
    }

    fn containing_recursive<C: ElementContainment>(
        &self,
        query: DVec3,
        test: &C,
        node: usize,
        begin: usize,
        end: usize,
    ) -> Option<usize> {
        if !self.nodes[node].contains(query) {
            return None;
        }
        if is_leaf(begin, end) {
            let element = self.order[begin];
            return test.contains(query, element).then_some(element);
        }
        let (mid, left, right) = child_ranges(node, begin, end);
        self.containing_recursive(query, test, left, begin, mid)
            .or_else(|| self.containing_recursive(query, test, right, mid, end))
    }
}

/// A range is a leaf when it spans exactly one element.
#[inline]
fn is_leaf(begin: usize, end: usize) -> bool {
    begin + 1 == end
}

/// Midpoint of `[begin, end)` and the child slots covering each half.
#[inline]
fn child_ranges(node: usize, begin: usize, end: usize) -> (usize, usize, usize) {
    (begin + (end - begin) / 2, 2 * node, 2 * node + 1)
}

/// Largest slot the recursion over `[begin, end)` rooted at `node` touches.
fn max_node_index(node: usize, begin: usize, end: usize) -> usize {
    debug_assert!(end > begin);
    if is_leaf(begin, end) {
        return node;
    }
    let (mid, left, right) = child_ranges(node, begin, end);
    usize::max(
        max_node_index(left, begin, mid),
        max_node_index(right, mid, end),
    )
}

/// Bottom-up box fill: leaves copy their element's box, interior nodes take
/// the union of their children.
fn init_node(
    nodes: &mut [Aabb3],
    bboxes: &[Aabb3],
    order: &[usize],
    node: usize,
    begin: usize,
    end: usize,
) {
    debug_assert!(node < nodes.len());
    if is_leaf(begin, end) {
        nodes[node] = bboxes[order[begin]];
        return;
    }
    let (mid, left, right) = child_ranges(node, begin, end);
    init_node(nodes, bboxes, order, left, begin, mid);
    init_node(nodes, bboxes, order, right, mid, end);
    nodes[node] = nodes[left].union(&nodes[right]);
}
