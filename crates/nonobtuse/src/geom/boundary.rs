//! Region boundary polygon and point classification.

use super::Point;

/// Location of a point relative to the boundary polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Inside,
    OnBoundary,
    Outside,
}

/// Closed simple polygon bounding the region (vertices in cyclic order).
#[derive(Clone, Debug)]
pub struct Boundary {
    vertices: Vec<Point>,
}

impl Boundary {
    /// `None` when fewer than three vertices are given.
    pub fn new(vertices: Vec<Point>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        Some(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Closed edges `(v_i, v_{i+1})`, last one wrapping to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Crossing-number classification with an exact on-edge check.
    pub fn classify(&self, p: Point) -> Side {
        if self.edges().any(|(a, b)| on_segment(p, a, b)) {
            return Side::OnBoundary;
        }
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        if inside {
            Side::Inside
        } else {
            Side::Outside
        }
    }

    #[inline]
    pub fn contains_strictly(&self, p: Point) -> bool {
        self.classify(p) == Side::Inside
    }
}

fn on_segment(p: Point, a: Point, b: Point) -> bool {
    if super::cross(a, b, p) != 0.0 {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}
