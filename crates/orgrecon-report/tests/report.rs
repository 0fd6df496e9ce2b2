//! Filesystem-backed report tests.

use std::fs;

use orgrecon_core::reconcile;
use orgrecon_model::Record;
use orgrecon_report::{DEFAULT_DELIMITER, build_run_summary, write_matches, write_summary_json};

fn run_outcome() -> orgrecon_core::ReconcileOutcome {
    let rows_a = vec![
        Record::new("1", "Acme Health LLC", "King", "WA"),
        Record::new("2", "Borealis Mining Co", "Elko", "NV"),
    ];
    let rows_b = vec![
        Record::new("9", "Acme Health, LLC", "Kings", "washington"),
        Record::new("10", "Borealis Mining Company", "Elko", "nevada"),
    ];
    reconcile(&rows_a, &rows_b)
}

#[test]
fn match_report_has_one_line_per_tuple() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("matches.txt");
    let outcome = run_outcome();

    write_matches(&path, &outcome.matches, DEFAULT_DELIMITER).expect("write");

    let contents = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), outcome.matches.len());
    for line in &lines {
        assert_eq!(line.split('\t').count(), 8);
    }
    // BTreeSet order: index_a "1" sorts before "2".
    assert!(lines[0].starts_with("1\t9\t"));
}

#[test]
fn summary_json_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let matches_path = dir.path().join("matches.txt");
    let summary_path = dir.path().join("summary.json");
    let outcome = run_outcome();

    let summary = build_run_summary(&outcome, 2, 2, Some(matches_path.as_path()));
    write_summary_json(&summary_path, &summary).expect("write summary");

    let contents = fs::read_to_string(&summary_path).expect("read back");
    let parsed: orgrecon_model::RunSummary =
        serde_json::from_str(&contents).expect("parse summary");
    assert_eq!(parsed.comparisons, 4);
    assert_eq!(parsed.matches, outcome.matches.len());
    assert_eq!(parsed.dataset_a_rows, 2);
    assert!(parsed.unknown_state_codes.is_empty());
    assert!(!parsed.generated_at.is_empty());
}
