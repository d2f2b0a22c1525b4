//! Desirability model: triangle shape → per-strategy preference in [0, 1].
//!
//! All functions are pure. A negative or non-finite ρ (the degenerate
//! sentinel) expresses no preference and scores 0.

use crate::strategy::Strategy;

/// Shape features of one triangle, recomputed per evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeFeatures {
    /// Circumradius over height onto the longest side; `-1` if degenerate.
    pub rho: f64,
    /// Finite obtuse faces across unconstrained edges.
    pub adjacent_obtuse: usize,
}

#[inline]
fn valid(rho: f64) -> bool {
    rho.is_finite() && rho >= 0.0
}

pub fn vertex_projection(rho: f64) -> f64 {
    if !valid(rho) || rho <= 1.0 {
        return 0.0;
    }
    ((rho - 1.0) / rho).max(0.0)
}

pub fn circumcenter(rho: f64) -> f64 {
    if !valid(rho) {
        return 0.0;
    }
    rho / (2.0 + rho)
}

pub fn midpoint(rho: f64) -> f64 {
    if !valid(rho) || rho >= 1.5 {
        return 0.0;
    }
    ((3.0 - 2.0 * rho) / 3.0).max(0.0)
}

pub fn adjacent_obtuse(count: usize) -> f64 {
    if count >= 2 {
        1.0
    } else {
        0.0
    }
}

/// Heuristic value η for `strategy` on a triangle with `features`.
pub fn desirability(strategy: Strategy, features: ShapeFeatures) -> f64 {
    match strategy {
        Strategy::MaxEdgeMidpoint => midpoint(features.rho),
        Strategy::Circumcenter => circumcenter(features.rho),
        Strategy::ConvexHullCentroid => adjacent_obtuse(features.adjacent_obtuse),
        Strategy::VertexProjection => vertex_projection(features.rho),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rho_two_scores() {
        assert!((vertex_projection(2.0) - 0.5).abs() < 1e-12);
        assert!((circumcenter(2.0) - 0.5).abs() < 1e-12);
        assert_eq!(midpoint(2.0), 0.0);
    }

    #[test]
    fn thresholds() {
        assert_eq!(vertex_projection(1.0), 0.0);
        assert_eq!(midpoint(1.5), 0.0);
        assert!((midpoint(0.75) - 0.5).abs() < 1e-12);
        assert_eq!(adjacent_obtuse(1), 0.0);
        assert_eq!(adjacent_obtuse(3), 1.0);
    }

    #[test]
    fn degenerate_sentinel_has_no_preference() {
        let f = ShapeFeatures {
            rho: -1.0,
            adjacent_obtuse: 0,
        };
        for s in Strategy::ALL {
            let h = desirability(s, f);
            assert_eq!(h, 0.0, "{s}");
        }
        assert_eq!(circumcenter(f64::NAN), 0.0);
    }

    #[test]
    fn unmapped_strategies_score_zero() {
        let f = ShapeFeatures {
            rho: 3.0,
            adjacent_obtuse: 2,
        };
        assert_eq!(desirability(Strategy::Centroid, f), 0.0);
        assert_eq!(desirability(Strategy::RandomInterior, f), 0.0);
        assert_eq!(desirability(Strategy::ConvexHullCentroid, f), 1.0);
    }
}
