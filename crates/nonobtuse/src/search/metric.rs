//! Empirical convergence rate of a run.
//!
//! For a move that took the Steiner count from `s - k` to `s` and the obtuse
//! count from `before` to `after`, the sample is
//! `ln(after / before) / ln(s / (s - k))`. Samples that would be undefined
//! (no previous Steiner points, an empty count, a zero step) are skipped.

#[derive(Clone, Debug, Default)]
pub struct ConvergenceLog {
    samples: Vec<f64>,
}

impl ConvergenceLog {
    /// Record one move; returns the sample if it was defined.
    pub fn record(&mut self, steiner: usize, step: usize, before: usize, after: usize) -> Option<f64> {
        let p = rate(steiner, step, before, after)?;
        self.samples.push(p);
        Some(p)
    }

    /// Mean of recorded samples.
    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }
}

pub fn rate(steiner: usize, step: usize, before: usize, after: usize) -> Option<f64> {
    if step == 0 || steiner <= step || before == 0 || after == 0 {
        return None;
    }
    let num = (after as f64 / before as f64).ln();
    let den = (steiner as f64 / (steiner - step) as f64).ln();
    let p = num / den;
    p.is_finite().then_some(p)
}
