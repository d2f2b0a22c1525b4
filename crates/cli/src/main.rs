use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use nonobtuse::prelude::*;
use nonobtuse::search::scan;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod instance;
mod provenance;
mod solution;

use instance::Instance;
use solution::Solution;

#[derive(Parser)]
#[command(name = "nonobtuse")]
#[command(about = "Steiner-point refinement towards non-obtuse triangulations")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Refine an instance and write a CG:SHOP solution file
    Solve(SolveArgs),
    /// Print triangulation statistics of an instance as JSON
    Inspect {
        #[arg(long)]
        input: PathBuf,
    },
}

/// Command-line values override the instance file's `method`/`parameters`.
#[derive(Args, Debug, Default)]
struct SolveArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// legacy | ls | sa | ant | sals | acls | greedy:<strategy>
    #[arg(short, long)]
    method: Option<String>,
    /// Comma-separated strategy list; empty selects the method's defaults
    #[arg(long, value_delimiter = ',')]
    strategies: Vec<String>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(short = 'L', long)]
    iterations: Option<usize>,
    #[arg(short = 'a', long)]
    alpha: Option<f64>,
    #[arg(short = 'b', long)]
    beta: Option<f64>,
    #[arg(short = 'x', long)]
    chi: Option<f64>,
    #[arg(short = 'y', long)]
    psi: Option<f64>,
    #[arg(short = 'l', long)]
    lambda: Option<f64>,
    #[arg(short = 'k', long)]
    kappa: Option<usize>,
    #[arg(short = 'R', long)]
    restart: Option<bool>,
    #[arg(long)]
    allow_boundary: bool,
    /// Skip the provenance sidecar
    #[arg(long)]
    no_provenance: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve(args) => solve(&args).map(|_| ()),
        Action::Inspect { input } => inspect(&input),
    }
}

impl SolveArgs {
    fn config(&self, from_instance: Option<SearchCfg>) -> SearchCfg {
        let mut cfg = from_instance.unwrap_or_default();
        let set = |slot: &mut f64, v: Option<f64>| {
            if let Some(v) = v {
                *slot = v;
            }
        };
        if let Some(l) = self.iterations {
            cfg.iteration_cap = l;
        }
        set(&mut cfg.alpha, self.alpha);
        set(&mut cfg.beta, self.beta);
        set(&mut cfg.chi, self.chi);
        set(&mut cfg.psi, self.psi);
        set(&mut cfg.lambda, self.lambda);
        if let Some(k) = self.kappa {
            cfg.kappa = k;
        }
        if let Some(r) = self.restart {
            cfg.restart = r;
        }
        cfg.allow_boundary_points |= self.allow_boundary;
        cfg
    }
}

fn solve(args: &SolveArgs) -> Result<Report> {
    let instance = Instance::load(&args.input)?;
    let method: Method = args
        .method
        .as_deref()
        .or(instance.method.as_deref())
        .map(str::parse::<Method>)
        .transpose()
        .map_err(|e: String| anyhow!(e))?
        .unwrap_or_default();
    let strategies = args
        .strategies
        .iter()
        .map(|s| s.parse::<Strategy>().map_err(|e| anyhow!(e)))
        .collect::<Result<Vec<_>>>()?;
    let cfg = args.config(instance.parameters.clone());
    tracing::info!(
        instance = %instance.instance_uid,
        points = instance.num_points,
        %method,
        seed = args.seed,
        "solve"
    );

    let boundary = instance.boundary()?;
    let mut kernel = instance.kernel()?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let outcome = refine(method, &mut kernel, &boundary, &strategies, &cfg, &mut rng)?;

    let solution = Solution::from_kernel(&instance, &kernel, &boundary, &outcome.steiner_points);
    solution.write(&args.out)?;
    tracing::info!(
        out = %args.out.display(),
        steiner = solution.steiner_points_x.len(),
        edges = solution.edges.len(),
        "solution written"
    );
    if !args.no_provenance {
        let payload = provenance::Payload {
            instance_uid: instance.instance_uid.clone(),
            params: serde_json::json!({
                "input": args.input.to_string_lossy(),
                "method": method.to_string(),
                "strategies": strategies,
                "seed": args.seed,
                "config": cfg,
            }),
            report: serde_json::to_value(&outcome.report)?,
        };
        provenance::write_sidecar(&args.out, payload)?;
    }
    Ok(outcome.report)
}

fn inspect(input: &Path) -> Result<()> {
    let instance = Instance::load(input)?;
    let boundary = instance.boundary()?;
    let kernel = instance.kernel()?;
    let faces = scan::region_faces(&kernel, &boundary);
    let obtuse = faces.iter().filter(|t| t.is_obtuse()).count();
    let summary = serde_json::json!({
        "instance_uid": instance.instance_uid,
        "points": instance.num_points,
        "constraints": instance.num_constraints,
        "faces": faces.len(),
        "obtuse_faces": obtuse,
        "method": instance.method,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const FLAT: &str = r#"{
        "instance_uid": "flat",
        "num_points": 3,
        "points_x": [0, 4, 2],
        "points_y": [0, 0, 1],
        "region_boundary": [0, 1, 2],
        "num_constraints": 0,
        "additional_constraints": []
    }"#;

    #[test]
    fn cli_flags_override_instance_parameters() {
        let args = SolveArgs {
            iterations: Some(3),
            kappa: Some(2),
            restart: Some(false),
            ..SolveArgs::default()
        };
        let from_file = SearchCfg {
            alpha: 9.0,
            ..SearchCfg::default()
        };
        let cfg = args.config(Some(from_file));
        assert_eq!(cfg.iteration_cap, 3);
        assert_eq!(cfg.kappa, 2);
        assert_eq!(cfg.alpha, 9.0);
        assert!(!cfg.restart);
    }

    #[test]
    fn solve_writes_solution_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("flat.instance.json");
        fs::write(&input, FLAT).unwrap();
        let out = dir.path().join("out").join("flat.solution.json");
        let args = SolveArgs {
            input,
            out: out.clone(),
            allow_boundary: true,
            ..SolveArgs::default()
        };
        let report = solve(&args).unwrap();
        assert_eq!(report.final_obtuse, 0);

        let sol: Solution = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(sol.content_type, solution::CONTENT_TYPE);
        assert_eq!(sol.steiner_points_x, vec!["2"]);
        assert_eq!(sol.steiner_points_y, vec!["0"]);
        // Two right triangles share the altitude 2-3.
        assert_eq!(sol.edges.len(), 5);
        assert!(sol.edges.contains(&[2, 3]));
        assert!(out.with_file_name("flat.solution.provenance.json").exists());
    }

    #[test]
    fn unknown_method_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("flat.json");
        fs::write(&input, FLAT).unwrap();
        let args = SolveArgs {
            input,
            out: dir.path().join("o.json"),
            method: Some("tabu".into()),
            ..SolveArgs::default()
        };
        assert!(solve(&args).is_err());
    }
}
