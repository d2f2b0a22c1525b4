//! CG:SHOP 2025 instance files.

use std::fs;
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use nonobtuse::prelude::*;
use serde::Deserialize;

/// Input instance, optionally carrying a method name and search parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct Instance {
    pub instance_uid: String,
    pub num_points: usize,
    pub points_x: Vec<f64>,
    pub points_y: Vec<f64>,
    pub region_boundary: Vec<usize>,
    #[serde(default)]
    pub num_constraints: usize,
    #[serde(default)]
    pub additional_constraints: Vec<[usize; 2]>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub parameters: Option<SearchCfg>,
}

impl Instance {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let instance: Instance = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing instance {}", path.display()))?;
        instance.check()?;
        Ok(instance)
    }

    /// Count fields must agree with the arrays, and indices must be in range.
    pub fn check(&self) -> Result<()> {
        let n = self.points_x.len();
        ensure!(
            self.points_y.len() == n && self.num_points == n,
            "num_points = {} but got {} x and {} y coordinates",
            self.num_points,
            n,
            self.points_y.len()
        );
        ensure!(
            self.additional_constraints.len() == self.num_constraints,
            "num_constraints = {} but got {} constraints",
            self.num_constraints,
            self.additional_constraints.len()
        );
        if self.region_boundary.len() < 3 {
            bail!("region boundary needs at least 3 vertices");
        }
        let out_of_range = self
            .region_boundary
            .iter()
            .chain(self.additional_constraints.iter().flatten())
            .find(|&&i| i >= n);
        if let Some(i) = out_of_range {
            bail!("point index {i} out of range (num_points = {n})");
        }
        Ok(())
    }

    pub fn points(&self) -> Vec<Point> {
        self.points_x
            .iter()
            .zip(&self.points_y)
            .map(|(&x, &y)| Point::new(x, y))
            .collect()
    }

    pub fn boundary(&self) -> Result<Boundary> {
        let points = self.points();
        let cycle = self.region_boundary.iter().map(|&i| points[i]).collect();
        Boundary::new(cycle).context("degenerate region boundary")
    }

    /// Constrained triangulation of the points, boundary and extra constraints.
    pub fn kernel(&self) -> Result<CdtKernel> {
        let constraints: Vec<(usize, usize)> = self
            .additional_constraints
            .iter()
            .map(|&[i, j]| (i, j))
            .collect();
        CdtKernel::from_parts(&self.points(), &constraints, &self.region_boundary)
            .with_context(|| format!("triangulating instance {}", self.instance_uid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "instance_uid": "flat-sample",
        "num_points": 4,
        "points_x": [0, 8, 8, 4],
        "points_y": [0, 0, 1, 1],
        "region_boundary": [0, 1, 2, 3],
        "num_constraints": 0,
        "additional_constraints": [],
        "method": "ls",
        "parameters": {"L": 20, "alpha": 4.0}
    }"#;

    #[test]
    fn parses_instance_with_parameters() {
        let inst: Instance = serde_json::from_str(SAMPLE).unwrap();
        inst.check().unwrap();
        assert_eq!(inst.points().len(), 4);
        let cfg = inst.parameters.clone().unwrap();
        assert_eq!(cfg.iteration_cap, 20);
        assert_eq!(cfg.alpha, 4.0);
        assert_eq!(cfg.beta, SearchCfg::default().beta);
        let kernel = inst.kernel().unwrap();
        assert_eq!(kernel.vertices().len(), 4);
    }

    #[test]
    fn mismatched_counts_are_rejected() {
        let mut inst: Instance = serde_json::from_str(SAMPLE).unwrap();
        inst.num_points = 5;
        assert!(inst.check().is_err());
        inst.num_points = 4;
        inst.region_boundary = vec![0, 1, 9];
        assert!(inst.check().is_err());
    }
}
