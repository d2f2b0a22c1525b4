//! Triangle value type with the shape predicates the search relies on.

use super::{util, Point};

/// Three points of a kernel face, re-derived on every scan and never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Vertex at index `i` (0 → a, 1 → b, 2 → c).
    #[inline]
    pub fn vertex(&self, i: usize) -> Point {
        self.vertices()[i % 3]
    }

    /// Index of the obtuse vertex, if any.
    ///
    /// Angles are checked at b, then a, then c; the first obtuse one wins.
    pub fn obtuse_vertex(&self) -> Option<usize> {
        let [a, b, c] = self.vertices();
        if is_obtuse_at(b, a, c) {
            Some(1)
        } else if is_obtuse_at(a, b, c) {
            Some(0)
        } else if is_obtuse_at(c, a, b) {
            Some(2)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_obtuse(&self) -> bool {
        self.obtuse_vertex().is_some()
    }

    /// Edge opposite vertex `i`: 0 → (b, c), 1 → (c, a), 2 → (a, b).
    #[inline]
    pub fn opposite_edge(&self, i: usize) -> (Point, Point) {
        match i % 3 {
            0 => (self.b, self.c),
            1 => (self.c, self.a),
            _ => (self.a, self.b),
        }
    }

    /// Twice the signed area (positive for counterclockwise order).
    #[inline]
    pub fn doubled_area(&self) -> f64 {
        util::cross(self.a, self.b, self.c)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.doubled_area() == 0.0
    }

    pub fn centroid(&self) -> Point {
        (self.a + self.b + self.c) / 3.0
    }

    /// Circumcenter, or `None` for collinear vertices.
    pub fn circumcenter(&self) -> Option<Point> {
        let d = 2.0 * self.doubled_area();
        if d == 0.0 {
            return None;
        }
        let b = self.b - self.a;
        let c = self.c - self.a;
        let b2 = b.norm_squared();
        let c2 = c.norm_squared();
        let ux = (c.y * b2 - b.y * c2) / d;
        let uy = (b.x * c2 - c.x * b2) / d;
        Some(self.a + Point::new(ux, uy))
    }

    /// Midpoint of the longest edge; ties resolve in the order ab, bc, ca.
    pub fn longest_edge_midpoint(&self) -> Point {
        let ab = (self.a - self.b).norm_squared();
        let bc = (self.b - self.c).norm_squared();
        let ca = (self.c - self.a).norm_squared();
        if ab >= bc && ab >= ca {
            (self.a + self.b) / 2.0
        } else if bc >= ab && bc >= ca {
            (self.b + self.c) / 2.0
        } else {
            (self.c + self.a) / 2.0
        }
    }

    /// Shape descriptor ρ: circumradius over the height onto the longest side.
    ///
    /// Zero-area triangles report the sentinel `-1.0`.
    pub fn shape_ratio(&self) -> f64 {
        let la = (self.b - self.c).norm();
        let lb = (self.a - self.c).norm();
        let lc = (self.a - self.b).norm();
        let area = self.doubled_area().abs() / 2.0;
        if area == 0.0 || !area.is_finite() {
            tracing::warn!(a = ?self.a, b = ?self.b, c = ?self.c, "degenerate triangle");
            return -1.0;
        }
        let circumradius = la * lb * lc / (4.0 * area);
        let longest = la.max(lb).max(lc);
        let height = 2.0 * area / longest;
        circumradius / height
    }

    /// Barycentric inside test, boundary included.
    pub fn contains_barycentric(&self, p: Point) -> bool {
        let [a, b, c] = self.vertices();
        let den = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
        if den == 0.0 {
            return false;
        }
        let l1 = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / den;
        let l2 = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / den;
        let l3 = 1.0 - l1 - l2;
        l1 >= 0.0 && l2 >= 0.0 && l3 >= 0.0
    }
}

/// Angle at `v` between `v→p` and `v→q` exceeds 90°.
#[inline]
fn is_obtuse_at(v: Point, p: Point, q: Point) -> bool {
    (p - v).dot(&(q - v)) < 0.0
}
