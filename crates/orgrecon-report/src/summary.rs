//! JSON run summary.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};

use orgrecon_core::ReconcileOutcome;
use orgrecon_model::RunSummary;

/// Assemble the machine-readable summary for a finished run.
pub fn build_run_summary(
    outcome: &ReconcileOutcome,
    dataset_a_rows: usize,
    dataset_b_rows: usize,
    output: Option<&Path>,
) -> RunSummary {
    RunSummary {
        dataset_a_rows,
        dataset_b_rows,
        comparisons: outcome.comparisons,
        matches: outcome.matches.len(),
        distinct_content: outcome.distinct_content,
        unknown_state_codes: outcome.unknown_state_codes.iter().cloned().collect(),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        output: output.map(Path::to_path_buf),
    }
}

/// Write the summary as pretty-printed JSON.
pub fn write_summary_json(path: &Path, summary: &RunSummary) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create run summary {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), summary)
        .with_context(|| format!("write run summary {}", path.display()))?;
    Ok(())
}
