use super::Point;

/// z-component of `(b - a) × (c - a)`; positive for a counterclockwise turn.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Arithmetic mean of `points`, or `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Orthogonal projection of `p` onto the line through `a` and `b`.
///
/// Returns `a` when the line is degenerate (`a == b`).
pub fn project_onto_line(p: Point, a: Point, b: Point) -> Point {
    let d = b - a;
    let len2 = d.norm_squared();
    if len2 == 0.0 {
        return a;
    }
    a + d * ((p - a).dot(&d) / len2)
}

/// Convexity of the closed polygon `points` taken in the given cyclic order.
///
/// All non-zero turns must share one sign; collinear triples are ignored.
/// Fewer than three points never form a convex polygon.
pub fn is_convex(points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut positive = false;
    let mut negative = false;
    for i in 0..n {
        let turn = cross(points[i], points[(i + 1) % n], points[(i + 2) % n]);
        if turn > 0.0 {
            positive = true;
        } else if turn < 0.0 {
            negative = true;
        }
        if positive && negative {
            return false;
        }
    }
    true
}
