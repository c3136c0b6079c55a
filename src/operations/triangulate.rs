use log::{debug, trace};

use crate::error::{Result, TriangulationError};
use crate::geometry::{Polygon, Winding};
use crate::math::polygon_2d::rightmost_vertex_index;
use crate::math::predicates::{orientation, vertex_angle, Orientation};
use crate::math::{Point2, TOLERANCE};

/// A triangle emitted by [`Triangulate`], its corners taken verbatim from
/// the input polygon's vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle {
    /// Enclosed area (shoelace formula).
    #[must_use]
    pub fn area(&self) -> f64 {
        let u = self.b - self.a;
        let v = self.c - self.a;
        (u.x * v.y - u.y * v.x).abs() * 0.5
    }
}

/// Decomposes a simple polygon into triangles by iterative removal of the
/// vertex with the smallest ear angle.
///
/// Each round picks the vertex whose winding-normalized angle is globally
/// smallest, emits the triangle formed with its two neighbours, removes the
/// vertex, and recomputes the angles of the two former neighbours. A valid
/// n-vertex input yields exactly `n − 2` triangles covering the polygon.
///
/// Self-intersecting input is out of contract: the reduction is bounded by
/// the initial vertex count and reports [`TriangulationError::Incomplete`]
/// rather than looping, but the emitted triangles are unspecified.
pub struct Triangulate {
    polygon: Polygon,
}

impl Triangulate {
    /// Creates a new `Triangulate` operation for the given polygon.
    #[must_use]
    pub fn new(polygon: Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the ear reduction, returning the triangle list.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::TooFewVertices`] for fewer than 3
    /// distinct vertices, and [`TriangulationError::Incomplete`] if the
    /// reduction stalls before emitting `n − 2` triangles (degenerate or
    /// self-intersecting input).
    pub fn execute(&self) -> Result<Vec<Triangle>> {
        let mut work = self.polygon.vertices.clone();
        // Drop a duplicated closing vertex if the polygon was built around
        // `Polygon::new` (which already strips it).
        if work.len() > 1 {
            let first = work[0];
            if let Some(last) = work.last() {
                if (last.x - first.x).abs() < TOLERANCE && (last.y - first.y).abs() < TOLERANCE {
                    work.pop();
                }
            }
        }

        let n = work.len();
        if n < 3 {
            return Err(TriangulationError::TooFewVertices(n).into());
        }

        let overall = winding_at_hull(&work);
        debug!("triangulating {n} vertices, winding {overall:?}");

        let mut ear_angles: Vec<f64> = (0..n).map(|i| ear_angle(&work, i, overall)).collect();

        let expected = n - 2;
        let mut triangles = Vec::with_capacity(expected);
        // Bounded by the initial vertex count so degenerate input cannot
        // spin forever.
        for _ in 0..n {
            if triangles.len() == expected || work.len() < 3 {
                break;
            }

            let mut tip = 0;
            for (i, &angle) in ear_angles.iter().enumerate() {
                if angle < ear_angles[tip] {
                    tip = i;
                }
            }

            let m = work.len();
            let prev = (tip + m - 1) % m;
            let next = (tip + 1) % m;
            trace!(
                "ear at index {tip} ({:.1}°), {} vertices left",
                ear_angles[tip],
                m - 1
            );
            triangles.push(Triangle {
                a: work[prev],
                b: work[tip],
                c: work[next],
            });

            work.remove(tip);
            ear_angles.remove(tip);

            // The former neighbours' neighbour sets changed; recompute them.
            let m = work.len();
            if m >= 3 {
                let prev = if prev > tip { prev - 1 } else { prev };
                let next = if next > tip { next - 1 } else { next };
                ear_angles[prev] = ear_angle(&work, prev, overall);
                ear_angles[next] = ear_angle(&work, next, overall);
            }
        }

        if triangles.len() != expected {
            return Err(TriangulationError::Incomplete {
                emitted: triangles.len(),
                expected,
            }
            .into());
        }
        Ok(triangles)
    }
}

/// Overall polygon winding, probed at the convex hull.
///
/// The rightmost vertex is guaranteed to lie on the hull, so the
/// orientation of its two neighbours cannot be fooled by a reflex vertex.
fn winding_at_hull(points: &[Point2]) -> Winding {
    let i = rightmost_vertex_index(points);
    let m = points.len();
    let prev = &points[(i + m - 1) % m];
    let next = &points[(i + 1) % m];
    match orientation(prev, &points[i], next) {
        Orientation::Clockwise => Winding::Clockwise,
        Orientation::CounterClockwise | Orientation::Collinear => Winding::CounterClockwise,
    }
}

/// Ear angle at vertex `i` of the working loop.
///
/// [`vertex_angle`] is reversed (360° − angle) whenever the local triple's
/// orientation differs from the overall winding, so every ear angle is
/// measured in the same sense regardless of which way the polygon was
/// authored.
fn ear_angle(points: &[Point2], i: usize, overall: Winding) -> f64 {
    let m = points.len();
    let prev = &points[(i + m - 1) % m];
    let curr = &points[i];
    let next = &points[(i + 1) % m];
    let angle = vertex_angle(prev, curr, next);
    let differs = matches!(
        (orientation(prev, curr, next), overall),
        (Orientation::Clockwise, Winding::CounterClockwise)
            | (Orientation::CounterClockwise, Winding::Clockwise)
    );
    if differs {
        360.0 - angle
    } else {
        angle
    }
}

/// The deduplicated corner-edge set of a triangle list.
///
/// Shared edges between adjacent triangles appear once. Feeding the result
/// to [`crate::graph::NavGraph::from_edge_list`] projects the triangulation
/// onto a navigation graph.
#[must_use]
pub fn triangle_edge_list(triangles: &[Triangle]) -> Vec<(Point2, Point2)> {
    let mut edges: Vec<(Point2, Point2)> = Vec::new();
    for tri in triangles {
        for (a, b) in [(tri.a, tri.b), (tri.b, tri.c), (tri.c, tri.a)] {
            let seen = edges
                .iter()
                .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a));
            if !seen {
                edges.push((a, b));
            }
        }
    }
    edges
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::graph::NavGraph;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn notched_square() -> Polygon {
        Polygon::new(vec![
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(10.0, 10.0),
            p(5.0, 5.0),
            p(0.0, 10.0),
        ])
    }

    fn total_area(triangles: &[Triangle]) -> f64 {
        triangles.iter().map(Triangle::area).sum()
    }

    #[test]
    fn notched_square_yields_three_triangles() {
        let polygon = notched_square();
        let expected_area = polygon.area();
        let triangles = Triangulate::new(polygon).execute().unwrap();

        assert_eq!(triangles.len(), 3);
        for tri in &triangles {
            assert!(tri.area() > TOLERANCE, "degenerate triangle {tri:?}");
        }
        assert_relative_eq!(total_area(&triangles), expected_area, epsilon = 1e-9);
    }

    #[test]
    fn notched_square_triangles_cover_every_vertex() {
        let polygon = notched_square();
        let vertices = polygon.vertices.clone();
        let triangles = Triangulate::new(polygon).execute().unwrap();
        for vertex in &vertices {
            let covered = triangles
                .iter()
                .any(|t| t.a == *vertex || t.b == *vertex || t.c == *vertex);
            assert!(covered, "vertex {vertex:?} missing from triangulation");
        }
    }

    #[test]
    fn convex_square_either_winding() {
        for vertices in [
            vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)],
            vec![p(0.0, 0.0), p(0.0, 4.0), p(4.0, 4.0), p(4.0, 0.0)],
        ] {
            let triangles = Triangulate::new(Polygon::new(vertices)).execute().unwrap();
            assert_eq!(triangles.len(), 2);
            assert_relative_eq!(total_area(&triangles), 16.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn closed_ring_input_drops_duplicate_vertex() {
        let ring = Polygon::from_points(&[
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 4.0),
            p(0.0, 4.0),
            p(0.0, 0.0),
        ]);
        let triangles = Triangulate::new(ring).execute().unwrap();
        assert_eq!(triangles.len(), 2);
    }

    #[test]
    fn too_few_vertices_is_an_error() {
        let degenerate = Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)]);
        assert!(Triangulate::new(degenerate).execute().is_err());
    }

    #[test]
    fn triangle_is_returned_as_is() {
        let triangles = Triangulate::new(Polygon::new(vec![
            p(0.0, 0.0),
            p(3.0, 0.0),
            p(0.0, 3.0),
        ]))
        .execute()
        .unwrap();
        assert_eq!(triangles.len(), 1);
        assert!((triangles[0].area() - 4.5).abs() < 1e-9);
    }

    #[test]
    fn edge_list_dedupes_shared_edges() {
        let triangles = Triangulate::new(notched_square()).execute().unwrap();
        let edges = triangle_edge_list(&triangles);
        // 3 triangles carry 9 corner edges, 2 of them shared.
        assert_eq!(edges.len(), 7);
    }

    #[test]
    fn triangulation_projects_onto_a_navigation_graph() {
        let triangles = Triangulate::new(notched_square()).execute().unwrap();
        let graph = NavGraph::from_edge_list(triangle_edge_list(&triangles));
        assert_eq!(graph.len(), 5);
        // Every vertex of every triangle is connected to the other two.
        for tri in &triangles {
            let a = graph.lookup(&tri.a).unwrap();
            let b = graph.lookup(&tri.b).unwrap();
            let c = graph.lookup(&tri.c).unwrap();
            assert!(graph.has_edge(a, b));
            assert!(graph.has_edge(b, c));
            assert!(graph.has_edge(c, a));
        }
    }
}
