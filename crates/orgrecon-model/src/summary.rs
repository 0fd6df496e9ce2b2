use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Machine-readable summary of one reconciliation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub dataset_a_rows: usize,
    pub dataset_b_rows: usize,
    pub comparisons: u64,
    pub matches: usize,
    pub distinct_content: usize,
    pub unknown_state_codes: Vec<String>,
    /// RFC 3339 timestamp of when the summary was produced.
    pub generated_at: String,
    /// Path of the match report, when one was written.
    pub output: Option<PathBuf>,
}
