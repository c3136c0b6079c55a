use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::predicates::vertex_angle;
use crate::math::{Point2, TOLERANCE};

/// Winding order of a polygon's vertex sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Negative signed area.
    Clockwise,
    /// Positive signed area.
    CounterClockwise,
}

/// A simple (non-self-intersecting) closed polygon.
///
/// Vertices are stored in boundary order without a duplicated closing
/// vertex; the edge from the last vertex back to the first is implicit.
/// Predicates and concavity queries are meaningful only for polygons with
/// at least 3 vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from a vertex sequence.
    ///
    /// If the last vertex coincides with the first (a closed ring as
    /// exported by many authoring tools), the duplicate is dropped.
    #[must_use]
    pub fn new(mut vertices: Vec<Point2>) -> Self {
        if vertices.len() > 1 {
            let first = vertices[0];
            if let Some(last) = vertices.last() {
                if (last.x - first.x).abs() < TOLERANCE && (last.y - first.y).abs() < TOLERANCE {
                    vertices.pop();
                }
            }
        }
        Self { vertices }
    }

    /// Creates a polygon by copying a point slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        Self::new(points.to_vec())
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates the boundary edges, including the closing edge from the
    /// last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Checks that the polygon is well-formed enough for the predicates,
    /// concavity queries, and triangulation to be meaningful.
    ///
    /// The predicates themselves do not re-validate; callers feeding
    /// untrusted vertex data are expected to call this first.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] for fewer than 3 vertices
    /// and [`GeometryError::Degenerate`] when the enclosed area vanishes.
    pub fn validate(&self) -> Result<()> {
        if self.vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: self.vertices.len(),
                required: 3,
            }
            .into());
        }
        if self.area() < TOLERANCE {
            return Err(GeometryError::Degenerate("polygon encloses no area".into()).into());
        }
        Ok(())
    }

    /// Signed area (shoelace formula); positive for counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Absolute enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Winding order, derived from the sign of the shoelace area.
    ///
    /// Both concavity detectors normalize their sign tests against this,
    /// so they agree regardless of the order the vertices were authored in.
    #[must_use]
    pub fn winding(&self) -> Winding {
        if self.signed_area() < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Concave (reflex) vertices, detected by interior-angle threshold.
    ///
    /// A vertex is concave when its winding-normalized interior angle
    /// exceeds 180°.
    #[must_use]
    pub fn concave_vertices_by_angle(&self) -> Vec<Point2> {
        let n = self.vertices.len();
        if n < 3 {
            return Vec::new();
        }
        let winding = self.winding();
        let mut concave = Vec::new();
        for i in 0..n {
            let prev = &self.vertices[(i + n - 1) % n];
            let next = &self.vertices[(i + 1) % n];
            let mut angle = vertex_angle(prev, &self.vertices[i], next);
            if winding == Winding::Clockwise {
                angle = 360.0 - angle;
            }
            if angle > 180.0 + TOLERANCE {
                concave.push(self.vertices[i]);
            }
        }
        concave
    }

    /// Concave (reflex) vertices, detected by cross-product sign.
    ///
    /// Independent of [`Self::concave_vertices_by_angle`]: a vertex is
    /// concave when the cross product of `prev→vertex` and `vertex→next`
    /// opposes the polygon's winding sign. The two detectors agree on any
    /// polygon because both normalize against [`Self::winding`].
    #[must_use]
    pub fn concave_vertices_by_cross(&self) -> Vec<Point2> {
        let n = self.vertices.len();
        if n < 3 {
            return Vec::new();
        }
        let winding = self.winding();
        let mut concave = Vec::new();
        for i in 0..n {
            let prev = &self.vertices[(i + n - 1) % n];
            let curr = &self.vertices[i];
            let next = &self.vertices[(i + 1) % n];
            let u = curr - prev;
            let v = next - curr;
            let cross = u.x * v.y - u.y * v.x;
            let reflex = match winding {
                Winding::CounterClockwise => cross < -TOLERANCE,
                Winding::Clockwise => cross > TOLERANCE,
            };
            if reflex {
                concave.push(*curr);
            }
        }
        concave
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

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

    #[test]
    fn closing_duplicate_dropped() {
        let poly = Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)]);
        assert_eq!(poly.len(), 3);
    }

    #[test]
    fn edges_wrap_around() {
        let poly = Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].0, &p(1.0, 1.0));
        assert_eq!(edges[2].1, &p(0.0, 0.0));
    }

    #[test]
    fn winding_from_vertex_order() {
        let ccw = Polygon::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]);
        assert_eq!(ccw.winding(), Winding::CounterClockwise);

        let cw = Polygon::new(vec![p(0.0, 0.0), p(0.0, 4.0), p(4.0, 4.0), p(4.0, 0.0)]);
        assert_eq!(cw.winding(), Winding::Clockwise);
    }

    #[test]
    fn notch_is_the_only_concave_vertex_by_angle() {
        let concave = notched_square().concave_vertices_by_angle();
        assert_eq!(concave, vec![p(5.0, 5.0)]);
    }

    #[test]
    fn notch_is_the_only_concave_vertex_by_cross() {
        let concave = notched_square().concave_vertices_by_cross();
        assert_eq!(concave, vec![p(5.0, 5.0)]);
    }

    #[test]
    fn detectors_agree_after_reversal() {
        // Same notched square authored clockwise.
        let mut vertices = notched_square().vertices;
        vertices.reverse();
        let poly = Polygon::new(vertices);
        assert_eq!(poly.winding(), Winding::Clockwise);
        assert_eq!(poly.concave_vertices_by_angle(), vec![p(5.0, 5.0)]);
        assert_eq!(poly.concave_vertices_by_cross(), vec![p(5.0, 5.0)]);
    }

    #[test]
    fn convex_polygon_has_no_concave_vertices() {
        let square = Polygon::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]);
        assert!(square.concave_vertices_by_angle().is_empty());
        assert!(square.concave_vertices_by_cross().is_empty());
    }

    #[test]
    fn validate_rejects_degenerate_shapes() {
        assert!(Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)]).validate().is_err());
        let flat = Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]);
        assert!(flat.validate().is_err());
        assert!(notched_square().validate().is_ok());
    }

    #[test]
    fn area_of_notched_square() {
        let poly = notched_square();
        assert!((poly.area() - 75.0).abs() < TOLERANCE);
    }
}
