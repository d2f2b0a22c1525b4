//! Ant-colony search: pheromone-weighted strategy choice by several agents.
//!
//! Each iteration samples up to `kappa` obtuse faces ("ants"). Every ant
//! rolls a strategy from the pheromone table and proposes a candidate on its
//! own scratch copy. Candidates whose effects depend on application order are
//! pruned pairwise, the survivors are applied together, and the result is
//! committed only if it lowers the energy. The table then evaporates and is
//! reinforced when the obtuse count actually dropped.

use rand::Rng;

use super::report::{Outcome, Tally};
use super::restart::randomized_restart;
use super::{scan, Problem};
use crate::candidate::{Candidate, CandidateGenerator};
use crate::error::SearchError;
use crate::geom::Triangle;
use crate::heuristic;
use crate::kernel::GeometryKernel;
use crate::pheromone::{self, PheromoneTable};
use crate::strategy::Strategy;

/// One agent's proposal for the current iteration.
#[derive(Debug)]
struct Ant {
    face: Triangle,
    strategy: Strategy,
    candidate: Option<Candidate>,
    /// Energy after applying the candidate alone; 0 without a candidate.
    energy: f64,
}

pub fn ant_colony<K, R>(
    kernel: &mut K,
    problem: &Problem<'_>,
    rng: &mut R,
) -> Result<Outcome, SearchError>
where
    K: GeometryKernel,
    R: Rng + ?Sized,
{
    let cfg = problem.cfg;
    let gen = problem.generator();
    let mut table = PheromoneTable::new(problem.strategies.len());
    let mut tally = Tally::start("ant_colony", cfg.energy(), problem.count(kernel));
    while tally.obtuse > 0 && tally.iterations < cfg.iteration_cap {
        tally.iterations += 1;
        let before = tally.obtuse;

        let faces = sample_faces(problem.obtuse_faces(kernel), cfg.kappa, rng);
        let mut ants = Vec::with_capacity(faces.len());
        for face in faces {
            ants.push(dispatch(kernel, problem, &gen, &table, &tally, face, rng)?);
        }
        resolve_conflicts(kernel, &gen, &mut ants);

        let mut combined = kernel.snapshot();
        let mut placed = Vec::new();
        for ant in &ants {
            let Some(candidate) = &ant.candidate else {
                continue;
            };
            if let Some(next) = gen.applied(&combined, candidate) {
                combined = next;
                placed.push(candidate.point);
            }
        }
        let after = problem.count(&combined);
        let gated = !placed.is_empty()
            && tally.energy_after(after, placed.len()) < tally.current_energy();
        if gated {
            *kernel = combined;
            tally.commit(placed, after);
            let delta = pheromone::reinforcement(
                after < before,
                after,
                tally.steiner.len(),
                cfg.alpha,
                cfg.beta,
            );
            table.update(delta, cfg.lambda)?;
        } else {
            table.update(0.0, cfg.lambda)?;
        }
        tracing::debug!(
            iteration = tally.iterations,
            ants = ants.len(),
            committed = gated,
            obtuse = tally.obtuse,
            pheromone = ?table.levels(),
            "colony iteration"
        );

        if tally.obtuse > 0 && tally.obtuse >= before && cfg.restart {
            if let Some(points) = randomized_restart(kernel, problem, rng)? {
                tally.restarts += 1;
                let after = problem.count(kernel);
                tally.commit(points, after);
            }
        }
    }
    Ok(tally.finish())
}

/// Draw `kappa` faces without replacement; all of them if there are fewer.
fn sample_faces<R: Rng + ?Sized>(mut pool: Vec<Triangle>, kappa: usize, rng: &mut R) -> Vec<Triangle> {
    let mut picked = Vec::with_capacity(kappa.min(pool.len()));
    while picked.len() < kappa && !pool.is_empty() {
        let i = rng.gen_range(0..pool.len());
        picked.push(pool.remove(i));
    }
    picked
}

/// Roll a strategy for `face` and evaluate its candidate in isolation.
fn dispatch<K, R>(
    kernel: &K,
    problem: &Problem<'_>,
    gen: &CandidateGenerator<'_>,
    table: &PheromoneTable,
    tally: &Tally,
    face: Triangle,
    rng: &mut R,
) -> Result<Ant, SearchError>
where
    K: GeometryKernel,
    R: Rng + ?Sized,
{
    let strategy = choose_strategy(kernel, problem, table, &face, rng);
    let mut ant = Ant {
        face,
        strategy,
        candidate: None,
        energy: 0.0,
    };
    if let Some(candidate) = gen.propose(kernel, &face, strategy, rng)? {
        if let Some(next) = gen.applied(kernel, &candidate) {
            ant.energy = tally.energy_after(problem.count(&next), 1);
            ant.candidate = Some(candidate);
        }
    }
    Ok(ant)
}

/// Roulette-wheel selection over the configured strategies.
pub(crate) fn choose_strategy<K, R>(
    kernel: &K,
    problem: &Problem<'_>,
    table: &PheromoneTable,
    face: &Triangle,
    rng: &mut R,
) -> Strategy
where
    K: GeometryKernel,
    R: Rng + ?Sized,
{
    let features = scan::features(kernel, face);
    let heuristics: Vec<f64> = problem
        .strategies
        .iter()
        .map(|&s| heuristic::desirability(s, features))
        .collect();
    let probabilities = table.probabilities(&heuristics, problem.cfg.chi, problem.cfg.psi);
    let wheel = pheromone::cumulative(&probabilities);
    let draw = rng.gen::<f64>();
    problem.strategies[pheromone::roulette(&wheel, draw)]
}

/// Drop, for every order-dependent pair, the ant with the higher energy.
fn resolve_conflicts<K: GeometryKernel>(kernel: &K, gen: &CandidateGenerator<'_>, ants: &mut [Ant]) {
    for i in 0..ants.len() {
        for j in (i + 1)..ants.len() {
            let (Some(ci), Some(cj)) = (&ants[i].candidate, &ants[j].candidate) else {
                continue;
            };
            let forward = gen.applied(kernel, ci).and_then(|k| gen.applied(&k, cj));
            let backward = gen.applied(kernel, cj).and_then(|k| gen.applied(&k, ci));
            let agree = matches!((&forward, &backward), (Some(f), Some(b)) if f.same_as(b));
            if agree {
                continue;
            }
            let drop = if ants[i].energy < ants[j].energy { j } else { i };
            tracing::trace!(
                kept = %ants[i + j - drop].strategy,
                dropped = %ants[drop].strategy,
                face = ?ants[drop].face,
                "ant conflict"
            );
            ants[drop].candidate = None;
            if drop == i {
                break;
            }
        }
    }
}
