//! Reconciliation driver: the full cross-product sweep over both datasets.

use std::collections::BTreeSet;

use tracing::{debug, info};

use orgrecon_model::{MatchTuple, Record};

use crate::dedupe::{DedupeOutcome, Deduplicator};
use crate::matcher::match_pair;
use crate::states::StateNormalizer;

/// Everything a run produces: the deduplicated match set plus counters for
/// the operator-facing summary.
#[derive(Debug)]
pub struct ReconcileOutcome {
    pub matches: BTreeSet<MatchTuple>,
    pub comparisons: u64,
    pub distinct_content: usize,
    pub unknown_state_codes: BTreeSet<String>,
}

/// Compare every dataset A record against every dataset B record.
pub fn reconcile(rows_a: &[Record], rows_b: &[Record]) -> ReconcileOutcome {
    reconcile_with_progress(rows_a, rows_b, |_| {})
}

/// [`reconcile`], invoking `on_row` with the number of completed outer rows
/// after each dataset A record has been compared against all of dataset B.
///
/// Iteration order is load order, A outer and B inner, so runs are
/// deterministic. No blocking or candidate pruning happens here; every pair
/// goes through the matcher.
pub fn reconcile_with_progress(
    rows_a: &[Record],
    rows_b: &[Record],
    mut on_row: impl FnMut(usize),
) -> ReconcileOutcome {
    let mut states = StateNormalizer::new();
    let mut dedupe = Deduplicator::new();
    let mut comparisons: u64 = 0;

    for (row, a) in rows_a.iter().enumerate() {
        for b in rows_b {
            comparisons += 1;
            let Some(tuple) = match_pair(&mut states, a, b) else {
                continue;
            };
            let content = tuple.content();
            match dedupe.insert(tuple) {
                DedupeOutcome::NewContent => {
                    info!(
                        company_a = %content.company_a,
                        company_b = %content.company_b,
                        county_a = %content.county_a,
                        county_b = %content.county_b,
                        state = %content.state_a,
                        "new distinct match"
                    );
                }
                DedupeOutcome::NewPairing | DedupeOutcome::Duplicate => {}
            }
        }
        on_row(row + 1);
    }

    debug!(
        comparisons,
        matches = dedupe.len(),
        distinct_content = dedupe.distinct_content(),
        "reconciliation sweep complete"
    );

    let distinct_content = dedupe.distinct_content();
    let unknown_state_codes = states.unknown_codes().clone();
    ReconcileOutcome {
        matches: dedupe.into_matches(),
        comparisons,
        distinct_content,
        unknown_state_codes,
    }
}
