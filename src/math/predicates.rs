use super::{Point2, TOLERANCE};

/// Orientation of an ordered point triple in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Counter-clockwise (left turn).
    CounterClockwise,
    /// Clockwise (right turn).
    Clockwise,
    /// Collinear (no turn).
    Collinear,
}

/// Determines the orientation of the triple `(p, q, r)`.
///
/// Computed from the sign of the 2-D cross product of `p→q` and `q→r`;
/// magnitudes below [`TOLERANCE`] are classified as collinear.
#[must_use]
pub fn orientation(p: &Point2, q: &Point2, r: &Point2) -> Orientation {
    let cross = (q.x - p.x) * (r.y - q.y) - (q.y - p.y) * (r.x - q.x);
    if cross > TOLERANCE {
        Orientation::CounterClockwise
    } else if cross < -TOLERANCE {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `q` lies within the bounding box of segment `p`–`r`.
///
/// Only meaningful when the three points are already known to be collinear;
/// used as the fallback branch of [`segments_intersect`].
#[must_use]
pub fn on_segment(p: &Point2, q: &Point2, r: &Point2) -> bool {
    q.x <= p.x.max(r.x) + TOLERANCE
        && q.x >= p.x.min(r.x) - TOLERANCE
        && q.y <= p.y.max(r.y) + TOLERANCE
        && q.y >= p.y.min(r.y) - TOLERANCE
}

/// Bounded segment-segment intersection test.
///
/// Segments `p1`–`p2` and `p3`–`p4` intersect when the endpoints of each
/// straddle the line through the other (the four-orientation test), or in
/// the collinear cases when an endpoint of one lies on the other segment.
/// Touching endpoints and overlapping collinear segments both count as
/// intersections.
#[must_use]
pub fn segments_intersect(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> bool {
    let o1 = orientation(p1, p2, p3);
    let o2 = orientation(p1, p2, p4);
    let o3 = orientation(p3, p4, p1);
    let o4 = orientation(p3, p4, p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear fallbacks: an endpoint of one segment lying on the other.
    (o1 == Orientation::Collinear && on_segment(p1, p3, p2))
        || (o2 == Orientation::Collinear && on_segment(p1, p4, p2))
        || (o3 == Orientation::Collinear && on_segment(p3, p1, p4))
        || (o4 == Orientation::Collinear && on_segment(p3, p2, p4))
}

/// Even-odd ray-casting point-in-polygon test.
///
/// Casts a horizontal ray from `point` toward +x and counts crossings with
/// the edges `(prev(i), i)` of the closed vertex loop. Odd parity means
/// inside.
///
/// Points on the boundary have implementation-defined classification, the
/// standard ray-casting ambiguity; callers that need a deterministic answer
/// for boundary points must test those separately.
#[must_use]
pub fn point_in_polygon(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let pi = &polygon[i];
        let pj = &polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Angle in degrees at `p2` between the incoming edge `p1→p2` and the
/// outgoing edge `p2→p3`, measured as `180 − atan2(cross, dot)·180/π`.
///
/// A straight (collinear, non-reflex) vertex reads 180°. For a polygon
/// wound counter-clockwise this is the interior angle, with reflex vertices
/// reading above 180°; clockwise winding flips the reading to
/// `360° − interior`.
#[must_use]
pub fn vertex_angle(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    let u = p2 - p1;
    let v = p3 - p2;
    let cross = u.x * v.y - u.y * v.x;
    let dot = u.x * v.x + u.y * v.y;
    180.0 - cross.atan2(dot).to_degrees()
}
