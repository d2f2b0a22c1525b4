//! `GeometryKernel` over spade's constrained Delaunay triangulation.

use spade::handles::{FixedVertexHandle, VertexHandle};
use spade::{ConstrainedDelaunayTriangulation, Point2, Triangulation};

use super::{GeometryKernel, KernelError};
use crate::geom::{Point, Triangle};

type Cdt = ConstrainedDelaunayTriangulation<Point2<f64>>;

/// Constrained Delaunay triangulation of the instance points.
#[derive(Clone)]
pub struct CdtKernel {
    cdt: Cdt,
}

impl std::fmt::Debug for CdtKernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CdtKernel")
            .field("vertices", &self.cdt.num_vertices())
            .field("faces", &self.cdt.num_inner_faces())
            .field("constraints", &self.cdt.num_constraints())
            .finish()
    }
}

#[inline]
fn to_spade(p: Point) -> Point2<f64> {
    Point2::new(p.x, p.y)
}

#[inline]
fn from_spade(p: Point2<f64>) -> Point {
    Point::new(p.x, p.y)
}

fn position<DE, UE, F>(v: VertexHandle<'_, Point2<f64>, DE, UE, F>) -> Point {
    from_spade(v.position())
}

impl Default for CdtKernel {
    fn default() -> Self {
        Self { cdt: Cdt::new() }
    }
}

impl CdtKernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from instance points, extra constraints (index pairs) and the
    /// region boundary given as a closed cycle of point indices.
    pub fn from_parts(
        points: &[Point],
        constraints: &[(usize, usize)],
        boundary: &[usize],
    ) -> Result<Self, KernelError> {
        let mut kernel = Self::new();
        for &p in points {
            kernel.insert(p)?;
        }
        let at = |i: usize| points.get(i).copied().ok_or(KernelError::UnknownVertex(i));
        for &(i, j) in constraints {
            kernel.insert_constraint(at(i)?, at(j)?)?;
        }
        let n = boundary.len();
        for k in 0..n {
            kernel.insert_constraint(at(boundary[k])?, at(boundary[(k + 1) % n])?)?;
        }
        Ok(kernel)
    }

    pub fn num_vertices(&self) -> usize {
        self.cdt.num_vertices()
    }

    fn handle(&self, p: Point) -> Option<FixedVertexHandle> {
        self.cdt.locate_vertex(to_spade(p)).map(|v| v.fix())
    }

    fn insert_handle(&mut self, p: Point) -> Result<FixedVertexHandle, KernelError> {
        self.cdt
            .insert(to_spade(p))
            .map_err(|_| KernelError::Rejected { x: p.x, y: p.y })
    }

    /// Sorted canonical edge list with constraint flags.
    fn canonical_edges(&self) -> Vec<([f64; 2], [f64; 2], bool)> {
        let mut edges: Vec<_> = self
            .cdt
            .undirected_edges()
            .map(|e| {
                let [u, v] = e.vertices();
                let (p, q) = (position(u), position(v));
                let (p, q) = if lex(p, q).is_le() { (p, q) } else { (q, p) };
                ([p.x, p.y], [q.x, q.y], self.cdt.is_constraint_edge(e.fix()))
            })
            .collect();
        edges.sort_by(|a, b| {
            cmp2(a.0, b.0)
                .then_with(|| cmp2(a.1, b.1))
                .then_with(|| a.2.cmp(&b.2))
        });
        edges
    }
}

fn lex(p: Point, q: Point) -> std::cmp::Ordering {
    cmp2([p.x, p.y], [q.x, q.y])
}

fn cmp2(a: [f64; 2], b: [f64; 2]) -> std::cmp::Ordering {
    a[0].total_cmp(&b[0]).then_with(|| a[1].total_cmp(&b[1]))
}

impl GeometryKernel for CdtKernel {
    fn insert(&mut self, p: Point) -> Result<(), KernelError> {
        self.insert_handle(p).map(|_| ())
    }

    fn insert_constraint(&mut self, a: Point, b: Point) -> Result<(), KernelError> {
        let conflict = KernelError::ConstraintConflict {
            from: [a.x, a.y],
            to: [b.x, b.y],
        };
        // Probe on a copy so a rejected constraint leaves no stray endpoints.
        let mut next = self.clone();
        let va = next.insert_handle(a)?;
        let vb = next.insert_handle(b)?;
        if va == vb {
            return Ok(());
        }
        if !next.cdt.can_add_constraint(va, vb) {
            return Err(conflict);
        }
        next.cdt.add_constraint(va, vb);
        *self = next;
        Ok(())
    }

    fn remove(&mut self, p: Point) -> bool {
        match self.handle(p) {
            Some(v) => {
                self.cdt.remove(v);
                true
            }
            None => false,
        }
    }

    fn faces(&self) -> Vec<Triangle> {
        self.cdt
            .inner_faces()
            .map(|f| {
                let [a, b, c] = f.vertices();
                Triangle::new(position(a), position(b), position(c))
            })
            .collect()
    }

    fn has_face(&self, tri: &Triangle) -> bool {
        let (Some(va), Some(vb)) = (self.handle(tri.a), self.handle(tri.b)) else {
            return false;
        };
        let Some(edge) = self.cdt.get_edge_from_neighbors(va, vb) else {
            return false;
        };
        [edge, edge.rev()].into_iter().any(|d| {
            d.face().as_inner().is_some()
                && d.opposite_vertex().map(position) == Some(tri.c)
        })
    }

    fn vertices(&self) -> Vec<Point> {
        self.cdt.vertices().map(position).collect()
    }

    fn edges(&self) -> Vec<(Point, Point)> {
        self.cdt
            .undirected_edges()
            .map(|e| {
                let [u, v] = e.vertices();
                (position(u), position(v))
            })
            .collect()
    }

    fn neighbor(&self, tri: &Triangle, i: usize) -> Option<(Triangle, usize)> {
        let (x, y) = tri.opposite_edge(i);
        let own = tri.vertex(i);
        let edge = self.cdt.get_edge_from_neighbors(self.handle(x)?, self.handle(y)?)?;
        for d in [edge, edge.rev()] {
            let Some(opp) = d.opposite_vertex() else {
                continue;
            };
            let opp = position(opp);
            if opp == own {
                continue;
            }
            let face = d.face().as_inner()?;
            let [a, b, c] = face.vertices();
            let t = Triangle::new(position(a), position(b), position(c));
            let idx = t.vertices().iter().position(|&p| p == opp)?;
            return Some((t, idx));
        }
        None
    }

    fn is_constrained_edge(&self, a: Point, b: Point) -> bool {
        let (Some(va), Some(vb)) = (self.handle(a), self.handle(b)) else {
            return false;
        };
        self.cdt
            .get_edge_from_neighbors(va, vb)
            .is_some_and(|e| self.cdt.is_constraint_edge(e.as_undirected().fix()))
    }

    fn same_as(&self, other: &Self) -> bool {
        if self.cdt.num_vertices() != other.cdt.num_vertices()
            || self.cdt.num_undirected_edges() != other.cdt.num_undirected_edges()
        {
            return false;
        }
        let mut mine: Vec<[f64; 2]> = self.vertices().iter().map(|p| [p.x, p.y]).collect();
        let mut theirs: Vec<[f64; 2]> = other.vertices().iter().map(|p| [p.x, p.y]).collect();
        mine.sort_by(|a, b| cmp2(*a, *b));
        theirs.sort_by(|a, b| cmp2(*a, *b));
        mine == theirs && self.canonical_edges() == other.canonical_edges()
    }
}
