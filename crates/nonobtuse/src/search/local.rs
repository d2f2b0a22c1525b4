//! Steepest-descent local search over all configured strategies.

use std::collections::BTreeMap;

use rand::Rng;

use super::report::{Outcome, Tally};
use super::restart::randomized_restart;
use super::Problem;
use crate::candidate::Candidate;
use crate::error::SearchError;
use crate::kernel::GeometryKernel;
use crate::strategy::Strategy;

/// Per iteration: take obtuse faces in order, score every strategy on a
/// scratch copy, and commit the best one on the first face where it strictly
/// lowers the obtuse count. A stall triggers the randomized restart when
/// enabled.
pub fn local_search<K, R>(
    kernel: &mut K,
    problem: &Problem<'_>,
    rng: &mut R,
) -> Result<Outcome, SearchError>
where
    K: GeometryKernel,
    R: Rng + ?Sized,
{
    descend(kernel, problem, rng, problem.cfg.restart)
}

pub(crate) fn descend<K, R>(
    kernel: &mut K,
    problem: &Problem<'_>,
    rng: &mut R,
    restart: bool,
) -> Result<Outcome, SearchError>
where
    K: GeometryKernel,
    R: Rng + ?Sized,
{
    let mut tally = Tally::start("local", problem.cfg.energy(), problem.count(kernel));
    while tally.obtuse > 0 && tally.iterations < problem.cfg.iteration_cap {
        tally.iterations += 1;
        if improve_once(kernel, problem, &mut tally, rng)? {
            continue;
        }
        tally.local_minimum = true;
        if !restart {
            break;
        }
        match randomized_restart(kernel, problem, rng)? {
            Some(points) => {
                tally.restarts += 1;
                tally.local_minimum = false;
                let after = problem.count(kernel);
                tally.commit(points, after);
            }
            None => break,
        }
    }
    Ok(tally.finish())
}

/// One pass over the obtuse faces; returns whether a move was committed.
fn improve_once<K, R>(
    kernel: &mut K,
    problem: &Problem<'_>,
    tally: &mut Tally,
    rng: &mut R,
) -> Result<bool, SearchError>
where
    K: GeometryKernel,
    R: Rng + ?Sized,
{
    let gen = problem.generator();
    let before = tally.obtuse;
    for tri in problem.obtuse_faces(kernel) {
        let mut scored: BTreeMap<Strategy, (usize, Candidate, K)> = BTreeMap::new();
        for &strategy in problem.strategies {
            let Some(candidate) = gen.propose(kernel, &tri, strategy, rng)? else {
                continue;
            };
            let Some(next) = gen.applied(kernel, &candidate) else {
                continue;
            };
            scored.insert(strategy, (problem.count(&next), candidate, next));
        }
        // Strict comparison: ties go to the earliest strategy.
        let best = scored
            .into_values()
            .reduce(|best, other| if other.0 < best.0 { other } else { best });
        let Some((after, candidate, next)) = best else {
            continue;
        };
        if after < before {
            tracing::trace!(strategy = %candidate.strategy, before, after, "local move");
            *kernel = next;
            tally.commit(vec![candidate.point], after);
            return Ok(true);
        }
    }
    Ok(false)
}
