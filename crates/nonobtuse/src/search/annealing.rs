//! Simulated annealing with a linear cooling schedule.

use rand::Rng;

use super::report::{Outcome, Tally};
use super::restart::randomized_restart;
use super::Problem;
use crate::error::SearchError;
use crate::kernel::GeometryKernel;

/// `T = 1 − step / L`; exactly 0 at `step == L`.
#[inline]
pub fn temperature(step: usize, cap: usize) -> f64 {
    1.0 - step as f64 / cap as f64
}

/// Metropolis acceptance: improvements always, worse moves with
/// probability `exp(−ΔE / T)`, nothing worse once `T` reaches 0.
fn accept<R: Rng + ?Sized>(current: f64, next: f64, t: f64, rng: &mut R) -> bool {
    if next < current {
        return true;
    }
    if t <= 0.0 {
        return false;
    }
    rng.gen::<f64>() < (-(next - current) / t).exp()
}

/// Per iteration: a uniformly random strategy for each obtuse face, accepted
/// by the Metropolis rule. Runs while `T ≥ 0`, i.e. `L + 1` iterations unless
/// the obtuse count reaches zero first.
pub fn simulated_annealing<K, R>(
    kernel: &mut K,
    problem: &Problem<'_>,
    rng: &mut R,
) -> Result<Outcome, SearchError>
where
    K: GeometryKernel,
    R: Rng + ?Sized,
{
    let gen = problem.generator();
    let cap = problem.cfg.iteration_cap;
    let mut tally = Tally::start("annealing", problem.cfg.energy(), problem.count(kernel));
    let mut step = 0;
    while tally.obtuse > 0 && step <= cap {
        let t = temperature(step, cap);
        tally.final_temperature = Some(t);
        tally.iterations += 1;
        for tri in problem.obtuse_faces(kernel) {
            if !kernel.has_face(&tri) {
                continue;
            }
            let strategy = problem.strategies[rng.gen_range(0..problem.strategies.len())];
            let Some(candidate) = gen.propose(kernel, &tri, strategy, rng)? else {
                continue;
            };
            let Some(next) = gen.applied(kernel, &candidate) else {
                continue;
            };
            let after = problem.count(&next);
            if accept(tally.current_energy(), tally.energy_after(after, 1), t, rng) {
                *kernel = next;
                tally.commit(vec![candidate.point], after);
            }
        }
        tracing::debug!(step, temperature = t, obtuse = tally.obtuse, "annealing step");
        step += 1;
    }
    if tally.obtuse > 0 && problem.cfg.restart {
        if let Some(points) = randomized_restart(kernel, problem, rng)? {
            tally.restarts += 1;
            let after = problem.count(kernel);
            tally.commit(points, after);
        }
    }
    tally.local_minimum = tally.obtuse > 0;
    Ok(tally.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn schedule_hits_zero_at_cap() {
        assert_eq!(temperature(0, 10), 1.0);
        assert_eq!(temperature(10, 10), 0.0);
        assert!((temperature(5, 10) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn frozen_state_only_accepts_improvements() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(accept(5.0, 4.0, 0.0, &mut rng));
        assert!(!accept(5.0, 5.0, 0.0, &mut rng));
        assert!(!accept(5.0, 6.0, 0.0, &mut rng));
    }

    #[test]
    fn equal_energy_is_accepted_while_hot() {
        let mut rng = StdRng::seed_from_u64(0);
        // exp(0) = 1 beats every draw in [0, 1).
        assert!(accept(5.0, 5.0, 0.5, &mut rng));
    }
}
