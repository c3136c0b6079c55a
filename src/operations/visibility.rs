use log::debug;

use crate::geometry::Polygon;
use crate::graph::NavGraph;
use crate::math::predicates::segments_intersect;
use crate::math::{Point2, TOLERANCE};

/// An unordered pair of points that can see each other with respect to a
/// given polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityPair {
    pub a: Point2,
    pub b: Point2,
}

fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}

/// Tests whether `v1` and `v2` are mutually visible around `polygon`.
///
/// The two points see each other iff the open segment between them
/// intersects no polygon edge; the scan short-circuits on the first
/// blocking edge. An edge that shares an endpoint with the sight segment
/// is exempt: when a candidate point is itself a polygon vertex, its
/// incident edges touch the segment at that vertex without obstructing it.
#[must_use]
pub fn can_see_each_other(v1: &Point2, v2: &Point2, polygon: &Polygon) -> bool {
    for (e0, e1) in polygon.edges() {
        if points_coincide(e0, v1)
            || points_coincide(e0, v2)
            || points_coincide(e1, v1)
            || points_coincide(e1, v2)
        {
            continue;
        }
        if segments_intersect(v1, v2, e0, e1) {
            return false;
        }
    }
    true
}

/// Computes every mutually visible unordered pair of candidate points.
///
/// No self-pairs and no duplicate pairs are emitted; candidate points with
/// coincident coordinates are treated as the same point.
///
/// Runs in O(k²·n) for k candidates and n polygon edges. That is a known
/// scaling limit of the predicate layer: callers with large candidate sets
/// should pre-filter (typically to the polygon's concave vertices) before
/// calling this.
#[must_use]
pub fn find_visible_points(points: &[Point2], polygon: &Polygon) -> Vec<VisibilityPair> {
    let mut pairs = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points_coincide(&points[i], &points[j]) {
                continue;
            }
            if can_see_each_other(&points[i], &points[j], polygon) {
                pairs.push(VisibilityPair {
                    a: points[i],
                    b: points[j],
                });
            }
        }
    }
    debug!(
        "visibility: {} of {} candidate pairs visible",
        pairs.len(),
        points.len() * points.len().saturating_sub(1) / 2
    );
    pairs
}

/// Builds a navigation graph whose nodes are the candidate points and whose
/// edges are the mutually visible pairs.
///
/// Every candidate gets a node even when it sees nothing, so a path-search
/// collaborator can always look up its start and goal.
#[must_use]
pub fn visibility_graph(points: &[Point2], polygon: &Polygon) -> NavGraph<Point2> {
    let mut graph = NavGraph::new();
    for &point in points {
        graph.add_node(point);
    }
    for pair in find_visible_points(points, polygon) {
        let a = graph.add_node(pair.a);
        let b = graph.add_node(pair.b);
        graph.add_edge(a, b);
    }
    graph
}
