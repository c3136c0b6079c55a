use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the index of the rightmost vertex (largest x), breaking ties by
/// smallest index.
///
/// The rightmost vertex is always on the convex hull, so the orientation of
/// its two neighbours gives the winding of the whole polygon.
#[must_use]
pub fn rightmost_vertex_index(points: &[Point2]) -> usize {
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        if pt.x > points[best].x + TOLERANCE {
            best = i;
        }
    }
    best
}
