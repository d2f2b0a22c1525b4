//! Randomized restart: perturb with random interior points, then descend.

use rand::Rng;

use super::local::descend;
use super::Problem;
use crate::error::SearchError;
use crate::geom::Point;
use crate::kernel::GeometryKernel;
use crate::strategy::Strategy;

/// Try to escape a local minimum.
///
/// Works on a scratch copy: one `RandomInterior` point per obtuse face (at
/// most `restart_retries` in total), then a local search without restarts.
/// If the copy ends with fewer obtuse faces than `kernel`, it replaces
/// `kernel` and every point inserted on it is returned. Otherwise `kernel` is
/// left untouched and `None` is returned.
pub fn randomized_restart<K, R>(
    kernel: &mut K,
    problem: &Problem<'_>,
    rng: &mut R,
) -> Result<Option<Vec<Point>>, SearchError>
where
    K: GeometryKernel,
    R: Rng + ?Sized,
{
    let gen = problem.generator();
    let before = problem.count(kernel);
    let mut scratch = kernel.snapshot();
    let mut inserted = Vec::new();
    let mut budget = problem.cfg.restart_retries;
    for tri in problem.obtuse_faces(kernel) {
        if budget == 0 {
            break;
        }
        if !scratch.has_face(&tri) {
            continue;
        }
        let Some(candidate) = gen.propose(&scratch, &tri, Strategy::RandomInterior, rng)? else {
            continue;
        };
        if gen.apply(&mut scratch, &candidate).is_ok() {
            inserted.push(candidate.point);
            budget -= 1;
        }
    }
    let inner = problem.with_strategies(&Strategy::STANDARD);
    let outcome = descend(&mut scratch, &inner, rng, false)?;
    inserted.extend(outcome.steiner_points);
    let after = problem.count(&scratch);
    tracing::debug!(before, after, inserted = inserted.len(), "randomized restart");
    if after < before {
        *kernel = scratch;
        Ok(Some(inserted))
    } else {
        Ok(None)
    }
}
