//! Ant-colony learning state: one pheromone level per configured strategy.
//!
//! Purpose
//! - Turn pheromone levels τ and heuristic values η into a roulette-wheel
//!   distribution over strategies, and update τ after each colony iteration.
//!
//! Conventions
//! - Index `k` of the table refers to `strategies[k]` of the search that owns
//!   it. Lengths are checked by the caller.
//! - A zero denominator yields all-zero probabilities; roulette selection then
//!   falls back to the last strategy.

use crate::error::SearchError;

/// Starting level for every strategy.
pub const INITIAL_PHEROMONE: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneTable {
    levels: Vec<f64>,
}

impl PheromoneTable {
    pub fn new(strategies: usize) -> Self {
        Self {
            levels: vec![INITIAL_PHEROMONE; strategies],
        }
    }

    #[inline]
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// `P_k = τ_k^χ · η_k^ψ / Σ_j τ_j^χ · η_j^ψ` for each strategy.
    pub fn probabilities(&self, heuristics: &[f64], chi: f64, psi: f64) -> Vec<f64> {
        debug_assert_eq!(heuristics.len(), self.levels.len());
        let weights: Vec<f64> = self
            .levels
            .iter()
            .zip(heuristics)
            .map(|(&tau, &eta)| weight(tau, eta, chi, psi))
            .collect();
        let total: f64 = weights.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return vec![0.0; weights.len()];
        }
        weights.into_iter().map(|w| w / total).collect()
    }

    /// Evaporate every level by λ and deposit `delta`.
    pub fn update(&mut self, delta: f64, lambda: f64) -> Result<(), SearchError> {
        for tau in &mut self.levels {
            *tau = evaporate(*tau, delta, lambda)?;
        }
        Ok(())
    }
}

#[inline]
fn weight(tau: f64, eta: f64, chi: f64, psi: f64) -> f64 {
    tau.powf(chi) * eta.powf(psi)
}

/// Deposit Δτ after a committed colony iteration.
pub fn reinforcement(reduced: bool, obtuse: usize, steiner: usize, alpha: f64, beta: f64) -> f64 {
    if reduced {
        1.0 / (1.0 + alpha * obtuse as f64 + beta * steiner as f64)
    } else {
        0.0
    }
}

/// `τ' = (1 − λ)·τ + Δτ`; λ must lie in `[0, 1)`.
pub fn evaporate(tau: f64, delta: f64, lambda: f64) -> Result<f64, SearchError> {
    if !(0.0..1.0).contains(&lambda) {
        return Err(SearchError::InvalidConfig(format!(
            "evaporation rate {lambda} must lie in [0, 1)"
        )));
    }
    Ok((1.0 - lambda) * tau + delta)
}

/// Running sums of `probabilities`.
pub fn cumulative(probabilities: &[f64]) -> Vec<f64> {
    probabilities
        .iter()
        .scan(0.0, |acc, p| {
            *acc += p;
            Some(*acc)
        })
        .collect()
}

/// First index whose cumulative value exceeds `draw`; last index if none does.
pub fn roulette(cumulative: &[f64], draw: f64) -> usize {
    cumulative
        .iter()
        .position(|&c| c > draw)
        .unwrap_or(cumulative.len().saturating_sub(1))
}
