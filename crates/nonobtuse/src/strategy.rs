//! Steiner-point placement strategies (closed set of tags).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where to place a Steiner point for an obtuse triangle.
///
/// Declaration order is significant: local search breaks ties between equally
/// good strategies in favor of the earlier variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Midpoint of the longest edge.
    MaxEdgeMidpoint,
    /// Circumcenter, unless the edge opposite the obtuse angle is constrained.
    Circumcenter,
    /// Centroid of the convex region grown over obtuse neighbors.
    ConvexHullCentroid,
    /// Foot of the altitude from the obtuse vertex.
    VertexProjection,
    Centroid,
    /// Never yields a candidate.
    Bisection,
    /// Never yields a candidate.
    Altitude,
    /// Gaussian sample around the barycenter, rejected until inside.
    RandomInterior,
    None,
}

impl Strategy {
    pub const ALL: [Strategy; 9] = [
        Strategy::MaxEdgeMidpoint,
        Strategy::Circumcenter,
        Strategy::ConvexHullCentroid,
        Strategy::VertexProjection,
        Strategy::Centroid,
        Strategy::Bisection,
        Strategy::Altitude,
        Strategy::RandomInterior,
        Strategy::None,
    ];

    /// Default list for local search, annealing and the restart descent; the
    /// colony uses the first four.
    pub const STANDARD: [Strategy; 5] = [
        Strategy::MaxEdgeMidpoint,
        Strategy::Circumcenter,
        Strategy::ConvexHullCentroid,
        Strategy::VertexProjection,
        Strategy::Centroid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::MaxEdgeMidpoint => "max_edge_midpoint",
            Strategy::Circumcenter => "circumcenter",
            Strategy::ConvexHullCentroid => "convex_hull_centroid",
            Strategy::VertexProjection => "vertex_projection",
            Strategy::Centroid => "centroid",
            Strategy::Bisection => "bisection",
            Strategy::Altitude => "altitude",
            Strategy::RandomInterior => "random_interior",
            Strategy::None => "none",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    /// Accepts the snake_case names plus the short aliases used by instance files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let found = match s.as_str() {
            "max_edge" | "midpoint" => Some(Strategy::MaxEdgeMidpoint),
            "pericenter" => Some(Strategy::Circumcenter),
            "polygon" | "hull" => Some(Strategy::ConvexHullCentroid),
            "projection" => Some(Strategy::VertexProjection),
            "random" => Some(Strategy::RandomInterior),
            other => Strategy::ALL.into_iter().find(|st| st.name() == other),
        };
        found.ok_or_else(|| format!("unknown strategy `{s}`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_and_aliases_resolve() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>().unwrap(), s);
        }
        assert_eq!("PERICENTER".parse::<Strategy>().unwrap(), Strategy::Circumcenter);
        assert_eq!("polygon".parse::<Strategy>().unwrap(), Strategy::ConvexHullCentroid);
        assert!("spiral".parse::<Strategy>().is_err());
    }

    #[test]
    fn enumeration_order_drives_ties() {
        assert!(Strategy::MaxEdgeMidpoint < Strategy::Circumcenter);
        assert!(Strategy::ConvexHullCentroid < Strategy::VertexProjection);
    }
}
