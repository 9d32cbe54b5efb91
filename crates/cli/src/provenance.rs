//! Provenance sidecars for rendered artifacts.
//!
//! `out/scene.svg` gets `out/scene.provenance.json` recording the code revision,
//! the crate versions, where the write was requested from, and the parameters.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Debug, Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    shapes_version: &'static str,
    callsite: Callsite,
    params: &'a Value,
    outputs: Vec<String>,
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, params: &Value) -> Result<PathBuf> {
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: code_rev(),
        shapes_version: shapes::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params,
        outputs: vec![artifact.display().to_string()],
    };
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
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
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/figs/scene.svg")),
            Path::new("/tmp/figs/scene.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_params_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("demo.svg");
        fs::write(&artifact, "<svg/>").unwrap();
        let path = write_sidecar(&artifact, &json!({"format": "svg"})).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed["params"]["format"], "svg");
        assert_eq!(parsed["outputs"][0], artifact.display().to_string());
        assert_eq!(parsed["shapes_version"], shapes::VERSION);
        assert!(parsed["callsite"]["line"].as_u64().unwrap() > 0);
    }
}
