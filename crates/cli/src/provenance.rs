//! Provenance sidecars for solution files.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced a solution: instance, method, seed, parameters and report.
pub struct Payload {
    pub instance_uid: String,
    pub params: Value,
    pub report: Value,
}

/// Write `<solution stem>.provenance.json` next to the solution.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(solution: P, payload: Payload) -> Result<PathBuf> {
    let solution = solution.as_ref();
    let path = provenance_path(solution);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "crate_version": nonobtuse::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "instance_uid": payload.instance_uid,
        "params": payload.params,
        "report": payload.report,
        "outputs": [solution.to_string_lossy()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(solution: &Path) -> PathBuf {
    let mut name = solution
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("solution"));
    name.push(".provenance.json");
    solution.with_file_name(name)
}

/// `GIT_COMMIT` at build or run time, else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_solution() {
        let base = Path::new("/tmp/out/sol.json");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/out/sol.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_instance_and_outputs() {
        let dir = tempdir().unwrap();
        let solution = dir.path().join("s.json");
        fs::write(&solution, "{}").unwrap();
        let payload = Payload {
            instance_uid: "demo".into(),
            params: json!({"method": "ls"}),
            report: json!({"final_obtuse": 0}),
        };
        let path = write_sidecar(&solution, payload).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["instance_uid"], "demo");
        assert_eq!(doc["params"]["method"], "ls");
        assert_eq!(doc["outputs"][0], solution.to_string_lossy().as_ref());
    }
}
