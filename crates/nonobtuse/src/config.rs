//! Search parameters.
//!
//! Field names on the wire follow the instance-file convention (`L`, `xi`),
//! and every field is optional thanks to `#[serde(default)]`.

use serde::{Deserialize, Serialize};

use crate::energy::Energy;
use crate::error::SearchError;
use crate::strategy::Strategy;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCfg {
    /// Iteration cap `L`; also the annealing schedule length.
    #[serde(rename = "L")]
    pub iteration_cap: usize,
    /// Weight of the obtuse count in the energy.
    pub alpha: f64,
    /// Weight of the Steiner count in the energy.
    pub beta: f64,
    /// Pheromone exponent χ.
    #[serde(rename = "xi", alias = "chi")]
    pub chi: f64,
    /// Heuristic exponent ψ.
    pub psi: f64,
    /// Evaporation rate λ, in `[0, 1)`.
    pub lambda: f64,
    /// Ants per colony iteration.
    pub kappa: usize,
    /// Accept candidates that land exactly on the boundary.
    pub allow_boundary_points: bool,
    /// Run the randomized restart when a search stalls.
    pub restart: bool,
    /// Random insertions budget per restart.
    pub restart_retries: usize,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            iteration_cap: 50,
            alpha: 5.0,
            beta: 0.2,
            chi: 1.0,
            psi: 1.0,
            lambda: 0.2,
            kappa: 5,
            allow_boundary_points: false,
            restart: true,
            restart_retries: 10,
        }
    }
}

impl SearchCfg {
    pub fn energy(&self) -> Energy {
        Energy::new(self.alpha, self.beta)
    }

    /// Rejects parameter sets no search can run with.
    pub fn validate(&self, strategies: &[Strategy]) -> Result<(), SearchError> {
        let bad = |msg: String| Err(SearchError::InvalidConfig(msg));
        if !(0.0..1.0).contains(&self.lambda) {
            return bad(format!("evaporation rate {} must lie in [0, 1)", self.lambda));
        }
        if self.iteration_cap == 0 {
            return bad("iteration cap L must be at least 1".into());
        }
        if self.kappa == 0 {
            return bad("colony size kappa must be at least 1".into());
        }
        for (name, w) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("chi", self.chi),
            ("psi", self.psi),
        ] {
            if !w.is_finite() || w < 0.0 {
                return bad(format!("{name} = {w} must be finite and non-negative"));
            }
        }
        if strategies.is_empty() {
            return bad("strategy list is empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        SearchCfg::default()
            .validate(&[Strategy::Centroid])
            .unwrap();
    }

    #[test]
    fn lambda_outside_unit_interval_is_rejected() {
        for lambda in [1.0, 1.5, -0.1, f64::NAN] {
            let cfg = SearchCfg {
                lambda,
                ..SearchCfg::default()
            };
            assert!(matches!(
                cfg.validate(&[Strategy::Centroid]),
                Err(SearchError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn empty_strategy_list_is_rejected() {
        assert!(SearchCfg::default().validate(&[]).is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: SearchCfg = serde_json::from_str(r#"{"L": 7, "xi": 2.0}"#).unwrap();
        assert_eq!(cfg.iteration_cap, 7);
        assert_eq!(cfg.chi, 2.0);
        assert_eq!(cfg.kappa, 5);
    }
}
