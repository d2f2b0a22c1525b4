//! CG:SHOP 2025 solution files.
//!
//! Steiner coordinates are written as exact rationals. Every finite `f64` is a
//! dyadic rational, so the conversion is lossless whenever numerator and
//! denominator fit in 128 bits; otherwise the shortest decimal form is used.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use nonobtuse::prelude::*;
use serde::{Deserialize, Serialize};

use crate::instance::Instance;

pub const CONTENT_TYPE: &str = "CG_SHOP_2025_Solution";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub content_type: String,
    pub instance_uid: String,
    pub steiner_points_x: Vec<String>,
    pub steiner_points_y: Vec<String>,
    /// Index pairs over `[instance points.., steiner points..]`.
    pub edges: Vec<[usize; 2]>,
}

impl Solution {
    /// Collect Steiner points and region edges from a refined kernel.
    ///
    /// Steiner points are the kernel vertices that are not instance points,
    /// in `inserted` order first; anything left over follows in kernel order.
    pub fn from_kernel<K: GeometryKernel>(
        instance: &Instance,
        kernel: &K,
        boundary: &Boundary,
        inserted: &[Point],
    ) -> Self {
        let mut index: HashMap<(u64, u64), usize> = HashMap::new();
        for (i, p) in instance.points().into_iter().enumerate() {
            index.entry(key(p)).or_insert(i);
        }
        let present: Vec<Point> = kernel.vertices();
        let alive: std::collections::HashSet<(u64, u64)> = present.iter().map(|&p| key(p)).collect();
        let mut steiner = Vec::new();
        for &p in inserted.iter().chain(&present) {
            if !alive.contains(&key(p)) || index.contains_key(&key(p)) {
                continue;
            }
            index.insert(key(p), instance.num_points + steiner.len());
            steiner.push(p);
        }

        let mut edges: Vec<[usize; 2]> = kernel
            .edges()
            .into_iter()
            .filter(|&(a, b)| boundary.classify((a + b) / 2.0) != Side::Outside)
            .filter_map(|(a, b)| Some([*index.get(&key(a))?, *index.get(&key(b))?]))
            .map(|[i, j]| if i <= j { [i, j] } else { [j, i] })
            .collect();
        edges.sort_unstable();

        Self {
            content_type: CONTENT_TYPE.to_string(),
            instance_uid: instance.instance_uid.clone(),
            steiner_points_x: steiner.iter().map(|p| to_rational(p.x)).collect(),
            steiner_points_y: steiner.iter().map(|p| to_rational(p.y)).collect(),
            edges,
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }
}

#[inline]
fn key(p: Point) -> (u64, u64) {
    // Normalize -0.0 so it matches 0.0.
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

/// Exact `num/den` form of a finite `f64` (`num` alone for integers).
pub fn to_rational(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if !v.is_finite() {
        return v.to_string();
    }
    let bits = v.to_bits();
    let negative = bits >> 63 == 1;
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mut mantissa, mut exp) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    let shift = mantissa.trailing_zeros().min(exp.unsigned_abs()) as i32;
    if exp < 0 {
        mantissa >>= shift;
        exp += shift;
    }
    let sign = if negative { "-" } else { "" };
    if exp >= 0 {
        if exp <= 64 {
            return format!("{sign}{}", (mantissa as u128) << exp);
        }
    } else if exp > -128 {
        return format!("{sign}{mantissa}/{}", 1u128 << (-exp));
    }
    v.to_string()
}
