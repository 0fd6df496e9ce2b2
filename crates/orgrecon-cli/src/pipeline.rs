//! Match pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read both source CSV files into records
//! 2. **Reconcile**: Sweep the cross product through the matching engine
//! 3. **Output**: Write the match report and optional JSON summary
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; the `commands` module orchestrates them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use orgrecon_core::{ReconcileOutcome, reconcile_with_progress};
use orgrecon_ingest::{ColumnSpec, load_records};
use orgrecon_model::{DatasetId, Record};
use orgrecon_report::{build_run_summary, write_matches, write_summary_json};

use crate::cli::MatchArgs;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    pub rows_a: Vec<Record>,
    pub rows_b: Vec<Record>,
}

/// Load both datasets in the order their rows appear on disk.
pub fn ingest(args: &MatchArgs) -> Result<IngestResult> {
    let spec_a = ColumnSpec {
        index: args.a_index.clone(),
        company: args.a_company.clone(),
        county: args.a_county.clone(),
        state: args.a_state.clone(),
    };
    let spec_b = ColumnSpec {
        index: args.b_index.clone(),
        company: args.b_company.clone(),
        county: args.b_county.clone(),
        state: args.b_state.clone(),
    };
    let rows_a = load_records(&args.dataset_a, DatasetId::A, &spec_a)
        .with_context(|| format!("load dataset A from {}", args.dataset_a.display()))?;
    let rows_b = load_records(&args.dataset_b, DatasetId::B, &spec_b)
        .with_context(|| format!("load dataset B from {}", args.dataset_b.display()))?;
    Ok(IngestResult { rows_a, rows_b })
}

// ============================================================================
// Stage 2: Reconcile
// ============================================================================

/// Run the cross-product sweep, driving a progress bar over dataset A's
/// outer loop when requested.
pub fn sweep(rows_a: &[Record], rows_b: &[Record], show_progress: bool) -> ReconcileOutcome {
    let bar = if show_progress {
        let bar = ProgressBar::new(rows_a.len() as u64);
        bar.set_style(progress_style());
        bar
    } else {
        ProgressBar::hidden()
    };
    let outcome = reconcile_with_progress(rows_a, rows_b, |_| bar.inc(1));
    bar.finish_and_clear();
    outcome
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rows ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Paths written by the output stage.
#[derive(Debug, Default)]
pub struct OutputPaths {
    pub matches: Option<PathBuf>,
    pub summary: Option<PathBuf>,
}

/// Write the match report and, when configured, the JSON run summary.
///
/// A dry run skips both files and returns empty paths.
pub fn output(
    args: &MatchArgs,
    outcome: &ReconcileOutcome,
    dataset_a_rows: usize,
    dataset_b_rows: usize,
) -> Result<OutputPaths> {
    if args.dry_run {
        info!("dry run, skipping outputs");
        return Ok(OutputPaths::default());
    }

    write_matches(&args.output, &outcome.matches, args.delimiter)?;

    let summary = match &args.summary_json {
        Some(path) => {
            let summary = build_run_summary(
                outcome,
                dataset_a_rows,
                dataset_b_rows,
                Some(args.output.as_path()),
            );
            write_summary_json(path, &summary)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(OutputPaths {
        matches: Some(args.output.clone()),
        summary,
    })
}
