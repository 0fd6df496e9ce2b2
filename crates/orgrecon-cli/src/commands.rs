use std::io::{self, IsTerminal};
use std::time::Instant;

use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use orgrecon_core::state_codes;

use crate::cli::MatchArgs;
use crate::pipeline::{IngestResult, ingest, output, sweep};
use crate::summary::{apply_table_style, header_cell};
use crate::types::MatchRunResult;

/// Print the jurisdiction code table.
pub fn run_states() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Name")]);
    apply_table_style(&mut table);
    for (code, name) in state_codes() {
        table.add_row(vec![code.to_string(), name.to_string()]);
    }
    println!("{table}");
}

/// Run the full match pipeline for one dataset pair.
pub fn run_match(args: &MatchArgs) -> Result<MatchRunResult> {
    let run_span = info_span!(
        "match",
        dataset_a = %args.dataset_a.display(),
        dataset_b = %args.dataset_b.display()
    );
    let _run_guard = run_span.enter();

    // =========================================================================
    // Stage 1: Ingest - Load both datasets into records
    // =========================================================================
    let ingest_span = info_span!("ingest");
    let ingest_start = Instant::now();
    let IngestResult { rows_a, rows_b } = ingest_span.in_scope(|| ingest(args))?;
    info!(
        rows_a = rows_a.len(),
        rows_b = rows_b.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Reconcile - Cross-product sweep through the matching engine
    // =========================================================================
    let show_progress = !args.no_progress && io::stderr().is_terminal();
    let sweep_span = info_span!("reconcile");
    let sweep_start = Instant::now();
    let outcome = sweep_span.in_scope(|| sweep(&rows_a, &rows_b, show_progress));
    info!(
        comparisons = outcome.comparisons,
        matches = outcome.matches.len(),
        distinct_content = outcome.distinct_content,
        duration_ms = sweep_start.elapsed().as_millis(),
        "reconcile complete"
    );

    // =========================================================================
    // Stage 3: Output - Match report and optional JSON summary
    // =========================================================================
    let output_span = info_span!("output");
    let paths = output_span.in_scope(|| output(args, &outcome, rows_a.len(), rows_b.len()))?;

    Ok(MatchRunResult {
        dataset_a: args.dataset_a.clone(),
        dataset_b: args.dataset_b.clone(),
        dataset_a_rows: rows_a.len(),
        dataset_b_rows: rows_b.len(),
        comparisons: outcome.comparisons,
        matches: outcome.matches.len(),
        distinct_content: outcome.distinct_content,
        unknown_state_codes: outcome.unknown_state_codes.into_iter().collect(),
        output: paths.matches,
        summary_json: paths.summary,
    })
}
