use crate::domain::models::RuntimePathsReport;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct PathsFile {
    runtime_root: PathBuf,
}

/// Standard runtime locations, all hanging off the runtime root declared in
/// `paths.json`. These names are the authoritative on-disk layout.
#[derive(Debug)]
pub struct RuntimePaths {
    pub runtime_root: PathBuf,
    pub incoming_raw: PathBuf,
    pub work_ai: PathBuf,
    pub assets_final: PathBuf,
    pub qc_needs_review: PathBuf,
    pub outgoing_ready: PathBuf,
    pub logs: PathBuf,
}

impl RuntimePaths {
    pub fn from_runtime_root(runtime_root: PathBuf) -> Self {
        Self {
            incoming_raw: runtime_root.join("incoming").join("raw"),
            work_ai: runtime_root.join("work").join("ai"),
            assets_final: runtime_root.join("assets").join("final"),
            qc_needs_review: runtime_root.join("qc").join("needs_review"),
            outgoing_ready: runtime_root.join("outgoing").join("ready_to_upload"),
            logs: runtime_root.join("logs"),
            runtime_root,
        }
    }

    pub fn report(&self) -> RuntimePathsReport {
        RuntimePathsReport {
            runtime_root: self.runtime_root.to_string_lossy().into_owned(),
            incoming_raw: self.incoming_raw.to_string_lossy().into_owned(),
            work_ai: self.work_ai.to_string_lossy().into_owned(),
            assets_final: self.assets_final.to_string_lossy().into_owned(),
            qc_needs_review: self.qc_needs_review.to_string_lossy().into_owned(),
            outgoing_ready: self.outgoing_ready.to_string_lossy().into_owned(),
            logs: self.logs.to_string_lossy().into_owned(),
        }
    }
}

pub fn load_runtime_paths(config_root: &Path) -> anyhow::Result<RuntimePaths> {
    let path = config_root.join("paths.json");
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("missing config file: {}", path.display()))?;
    let parsed: PathsFile =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(RuntimePaths::from_runtime_root(parsed.runtime_root))
}
