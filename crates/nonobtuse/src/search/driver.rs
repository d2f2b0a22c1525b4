//! Entry point: pick a search by name and run it.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::report::Outcome;
use super::{ant_colony, local_search, simple_greedy, simulated_annealing, Problem};
use crate::config::SearchCfg;
use crate::error::SearchError;
use crate::geom::Boundary;
use crate::kernel::GeometryKernel;
use crate::strategy::Strategy;

/// Search method, including the chained variants that finish with a local
/// search on the same kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Greedy(Strategy),
    Local,
    Annealing,
    AntColony,
    AnnealingThenLocal,
    AntColonyThenLocal,
}

impl Default for Method {
    fn default() -> Self {
        Method::Greedy(Strategy::VertexProjection)
    }
}

impl Method {
    /// Strategy list used when the caller does not supply one.
    pub fn default_strategies(&self) -> Vec<Strategy> {
        match self {
            Method::Greedy(s) => vec![*s],
            Method::Local | Method::Annealing | Method::AnnealingThenLocal => {
                Strategy::STANDARD.to_vec()
            }
            Method::AntColony | Method::AntColonyThenLocal => Strategy::STANDARD[..4].to_vec(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Greedy(s) => write!(f, "greedy:{s}"),
            Method::Local => f.write_str("local"),
            Method::Annealing => f.write_str("sa"),
            Method::AntColony => f.write_str("ant"),
            Method::AnnealingThenLocal => f.write_str("sals"),
            Method::AntColonyThenLocal => f.write_str("acls"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    /// `legacy`/`greedy` (optionally `greedy:<strategy>`), `ls`/`local`,
    /// `sa`, `ant`, `sals`, `acls`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Some(rest) = s.strip_prefix("greedy:") {
            return rest.parse().map(Method::Greedy);
        }
        match s.as_str() {
            "legacy" | "greedy" => Ok(Method::default()),
            "ls" | "local" => Ok(Method::Local),
            "sa" | "annealing" => Ok(Method::Annealing),
            "ant" | "aco" => Ok(Method::AntColony),
            "sals" => Ok(Method::AnnealingThenLocal),
            "acls" => Ok(Method::AntColonyThenLocal),
            other => Err(format!("unknown method `{other}`")),
        }
    }
}

/// Run `method` on `kernel` and return the inserted points.
///
/// `cfg` is validated before anything touches the kernel. An empty
/// `strategies` slice selects `method.default_strategies()`; `Greedy` always
/// uses its own strategy.
pub fn refine<K, R>(
    method: Method,
    kernel: &mut K,
    boundary: &Boundary,
    strategies: &[Strategy],
    cfg: &SearchCfg,
    rng: &mut R,
) -> Result<Outcome, SearchError>
where
    K: GeometryKernel,
    R: Rng + ?Sized,
{
    let defaults = method.default_strategies();
    let strategies = match method {
        Method::Greedy(_) => &defaults[..],
        _ if strategies.is_empty() => &defaults[..],
        _ => strategies,
    };
    cfg.validate(strategies)?;
    let problem = Problem::new(boundary, strategies, cfg);
    tracing::info!(%method, strategies = ?strategies, "refinement started");

    let outcome = match method {
        Method::Greedy(s) => simple_greedy(kernel, s, &problem, rng)?,
        Method::Local => local_search(kernel, &problem, rng)?,
        Method::Annealing => simulated_annealing(kernel, &problem, rng)?,
        Method::AntColony => ant_colony(kernel, &problem, rng)?,
        Method::AnnealingThenLocal => {
            let first = simulated_annealing(kernel, &problem, rng)?;
            chain(first, local_search(kernel, &problem, rng)?, cfg)
        }
        Method::AntColonyThenLocal => {
            let first = ant_colony(kernel, &problem, rng)?;
            chain(first, local_search(kernel, &problem, rng)?, cfg)
        }
    };
    outcome.report.log();
    Ok(outcome)
}

fn chain(first: Outcome, second: Outcome, cfg: &SearchCfg) -> Outcome {
    let mut out = first.then(second);
    out.report.final_energy = cfg
        .energy()
        .eval(out.report.final_obtuse, out.report.steiner_points);
    out
}
