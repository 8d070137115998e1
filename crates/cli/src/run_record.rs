//! Run records written next to every CLI output (`<output>.run.json`).
//!
//! A record pins down what produced an output: build revision, library
//! version, the subcommand and its typed summary (solver config, hull size,
//! result area, timing grid).

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Build revision from `GIT_COMMIT` (compile time first, then runtime).
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}

/// What a subcommand did, in its own terms.
#[derive(Debug, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum RunSummary {
    Sample {
        kind: String,
        n: usize,
        radius: u32,
        seed: u64,
    },
    Solve {
        input: String,
        start: usize,
        max_depth: Option<usize>,
        input_points: usize,
        hull_vertices: usize,
        area: f64,
        elapsed_s: f64,
    },
    Compare {
        max_n: usize,
        window: usize,
        radius: u32,
        seed: u64,
        rows: usize,
    },
}

#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub code_rev: String,
    pub maxtri_version: &'static str,
    pub output: String,
    #[serde(flatten)]
    pub summary: RunSummary,
}

impl RunRecord {
    pub fn new(output: &Path, summary: RunSummary) -> Self {
        Self {
            code_rev: code_rev(),
            maxtri_version: maxtri::VERSION,
            output: output.to_string_lossy().into_owned(),
            summary,
        }
    }

    /// `result.json` → `result.run.json`, `points.csv` → `points.run.json`.
    pub fn path_for(output: &Path) -> PathBuf {
        output.with_extension("run.json")
    }

    /// Write the record next to its output and return the record's path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = Self::path_for(Path::new(&self.output));
        std::fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing run record {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn record_path_replaces_extension() {
        assert_eq!(
            RunRecord::path_for(Path::new("out/timings.csv")),
            Path::new("out/timings.run.json")
        );
        assert_eq!(
            RunRecord::path_for(Path::new("result")),
            Path::new("result.run.json")
        );
    }

    #[test]
    fn solve_record_carries_solver_summary() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("result.json");
        let record = RunRecord::new(
            &out,
            RunSummary::Solve {
                input: "pts.csv".into(),
                start: 2,
                max_depth: Some(4),
                input_points: 20,
                hull_vertices: 9,
                area: 12.5,
                elapsed_s: 0.0,
            },
        );
        let path = record.write().unwrap();
        assert_eq!(path, dir.path().join("result.run.json"));
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "solve");
        assert_eq!(parsed["max_depth"], 4);
        assert_eq!(parsed["hull_vertices"], 9);
        assert_eq!(parsed["area"], 12.5);
        assert_eq!(parsed["maxtri_version"], maxtri::VERSION);
        assert_eq!(parsed["output"], out.to_string_lossy().as_ref());
    }
}
