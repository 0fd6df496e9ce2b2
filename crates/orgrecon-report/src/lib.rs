//! Report generation for reconciliation runs.
//!
//! Two outputs: the match list as delimited text (one tuple per line, eight
//! fields each) and an optional JSON run summary for downstream tooling.

mod matches;
mod summary;

pub use matches::{DEFAULT_DELIMITER, render_match_line, write_matches};
pub use summary::{build_run_summary, write_summary_json};
