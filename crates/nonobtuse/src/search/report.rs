//! Run summary returned by every search.

use serde::Serialize;

use super::metric::ConvergenceLog;
use crate::energy::Energy;
use crate::geom::Point;

/// What a run did, for logs and for the CLI's JSON output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub method: String,
    pub initial_obtuse: usize,
    pub final_obtuse: usize,
    pub steiner_points: usize,
    pub iterations: usize,
    /// The run ended with no obtuse face left.
    pub converged: bool,
    /// The run ended because no move improved the state.
    pub local_minimum: bool,
    pub restarts: usize,
    pub initial_energy: f64,
    pub final_energy: f64,
    /// Temperature of the last annealing iteration.
    pub final_temperature: Option<f64>,
    /// Mean empirical convergence rate.
    pub convergence_rate: Option<f64>,
}

impl Report {
    pub fn log(&self) {
        tracing::info!(
            method = %self.method,
            initial_obtuse = self.initial_obtuse,
            final_obtuse = self.final_obtuse,
            steiner = self.steiner_points,
            iterations = self.iterations,
            converged = self.converged,
            energy = self.final_energy,
            "search finished"
        );
    }

    /// Summary of running `self` and then `next` on the same kernel.
    pub fn then(self, next: Report) -> Report {
        let rate = match (self.convergence_rate, next.convergence_rate) {
            (Some(a), Some(b)) => Some((a + b) / 2.0),
            (a, b) => a.or(b),
        };
        Report {
            method: format!("{}+{}", self.method, next.method),
            initial_obtuse: self.initial_obtuse,
            final_obtuse: next.final_obtuse,
            steiner_points: self.steiner_points + next.steiner_points,
            iterations: self.iterations + next.iterations,
            converged: next.converged,
            local_minimum: next.local_minimum,
            restarts: self.restarts + next.restarts,
            initial_energy: self.initial_energy,
            final_energy: next.final_energy,
            final_temperature: self.final_temperature.or(next.final_temperature),
            convergence_rate: rate,
        }
    }
}

/// Inserted Steiner points (in insertion order) plus the run summary.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub steiner_points: Vec<Point>,
    pub report: Report,
}

impl Outcome {
    pub fn then(mut self, next: Outcome) -> Outcome {
        self.steiner_points.extend(next.steiner_points);
        Outcome {
            steiner_points: self.steiner_points,
            report: self.report.then(next.report),
        }
    }
}

/// Bookkeeping of a single run: counts, inserted points, metric samples.
#[derive(Debug)]
pub(crate) struct Tally {
    method: &'static str,
    energy: Energy,
    initial_obtuse: usize,
    pub obtuse: usize,
    pub steiner: Vec<Point>,
    pub log: ConvergenceLog,
    pub iterations: usize,
    pub restarts: usize,
    pub local_minimum: bool,
    pub final_temperature: Option<f64>,
}

impl Tally {
    pub fn start(method: &'static str, energy: Energy, obtuse: usize) -> Self {
        Self {
            method,
            energy,
            initial_obtuse: obtuse,
            obtuse,
            steiner: Vec::new(),
            log: ConvergenceLog::default(),
            iterations: 0,
            restarts: 0,
            local_minimum: false,
            final_temperature: None,
        }
    }

    /// Energy of the committed state.
    pub fn current_energy(&self) -> f64 {
        self.energy.eval(self.obtuse, self.steiner.len())
    }

    /// Energy after adding `added` points and reaching `obtuse` faces.
    pub fn energy_after(&self, obtuse: usize, added: usize) -> f64 {
        self.energy.eval(obtuse, self.steiner.len() + added)
    }

    /// Record a committed move.
    pub fn commit(&mut self, points: Vec<Point>, after: usize) {
        let step = points.len();
        self.steiner.extend(points);
        self.log.record(self.steiner.len(), step, self.obtuse, after);
        tracing::debug!(
            before = self.obtuse,
            after,
            steiner = self.steiner.len(),
            "move committed"
        );
        self.obtuse = after;
    }

    pub fn finish(self) -> Outcome {
        let report = Report {
            method: self.method.to_string(),
            initial_obtuse: self.initial_obtuse,
            final_obtuse: self.obtuse,
            steiner_points: self.steiner.len(),
            iterations: self.iterations,
            converged: self.obtuse == 0,
            local_minimum: self.local_minimum,
            restarts: self.restarts,
            initial_energy: self.energy.eval(self.initial_obtuse, 0),
            final_energy: self.current_energy(),
            final_temperature: self.final_temperature,
            convergence_rate: self.log.mean(),
        };
        Outcome {
            steiner_points: self.steiner,
            report,
        }
    }
}
