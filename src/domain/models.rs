use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Accumulated configuration problems. Empty means the tree is usable.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub failures: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct RuntimePathsReport {
    pub runtime_root: String,
    pub incoming_raw: String,
    pub work_ai: String,
    pub assets_final: String,
    pub qc_needs_review: String,
    pub outgoing_ready: String,
    pub logs: String,
}
