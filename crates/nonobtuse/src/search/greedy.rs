//! Single-strategy greedy scan.

use rand::Rng;

use super::report::{Outcome, Tally};
use super::Problem;
use crate::error::SearchError;
use crate::kernel::GeometryKernel;
use crate::strategy::Strategy;

/// Apply `strategy` to every obtuse face, pass after pass.
///
/// Not every valid candidate is inserted: a move is kept only if it does not
/// raise the energy `α·obtuse + β·steiner`, so the final energy never exceeds
/// the initial one. With `β > α` a move that fixes a single obtuse face is
/// therefore refused. The run stops once a pass leaves the obtuse count where
/// it was, the count reaches zero, or `iteration_cap` passes have run.
pub fn simple_greedy<K, R>(
    kernel: &mut K,
    strategy: Strategy,
    problem: &Problem<'_>,
    rng: &mut R,
) -> Result<Outcome, SearchError>
where
    K: GeometryKernel,
    R: Rng + ?Sized,
{
    let gen = problem.generator();
    let mut tally = Tally::start("greedy", problem.cfg.energy(), problem.count(kernel));
    while tally.obtuse > 0 && tally.iterations < problem.cfg.iteration_cap {
        tally.iterations += 1;
        let before = tally.obtuse;
        for tri in problem.obtuse_faces(kernel) {
            // Earlier commits in this pass may have destroyed the face.
            if !kernel.has_face(&tri) {
                continue;
            }
            let Some(candidate) = gen.propose(kernel, &tri, strategy, rng)? else {
                continue;
            };
            let Some(next) = gen.applied(kernel, &candidate) else {
                continue;
            };
            let after = problem.count(&next);
            if tally.energy_after(after, 1) > tally.current_energy() {
                continue;
            }
            *kernel = next;
            tally.commit(vec![candidate.point], after);
        }
        tracing::debug!(iteration = tally.iterations, obtuse = tally.obtuse, "greedy pass");
        if tally.obtuse >= before {
            tally.local_minimum = tally.obtuse > 0;
            break;
        }
    }
    Ok(tally.finish())
}
