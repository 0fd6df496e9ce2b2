//! End-to-end pipeline tests against real files.

use std::fs;
use std::path::{Path, PathBuf};

use orgrecon_cli::cli::MatchArgs;
use orgrecon_cli::commands::run_match;

fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

fn match_args(dir: &Path) -> MatchArgs {
    let dataset_a = write_csv(
        dir,
        "one.csv",
        ",Provider Name,County Name,State\n\
         0,Acme Health LLC,King,WA\n\
         1,Borealis Mining Co,Elko,NV\n\
         2,Cascade Dental,Pierce,ZZ\n",
    );
    let dataset_b = write_csv(
        dir,
        "two.csv",
        ", Local_Co_Name, County, State\n\
         0,\"Acme Health, LLC\",Kings,washington\n\
         1,\"Acme Health, LLC\",Kings,washington\n\
         2,Zenith Builders Inc,King,washington\n",
    );
    MatchArgs {
        dataset_a,
        dataset_b,
        output: dir.join("matches.txt"),
        delimiter: '\t',
        summary_json: None,
        dry_run: false,
        no_progress: true,
        a_index: None,
        a_company: None,
        a_county: None,
        a_state: None,
        b_index: None,
        b_company: None,
        b_county: None,
        b_state: None,
    }
}

#[test]
fn full_run_writes_match_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args = match_args(dir.path());

    let result = run_match(&args).expect("run pipeline");

    assert_eq!(result.dataset_a_rows, 3);
    assert_eq!(result.dataset_b_rows, 3);
    assert_eq!(result.comparisons, 9);
    // Acme matches both duplicate B listings; one distinct content.
    assert_eq!(result.matches, 2);
    assert_eq!(result.distinct_content, 1);
    assert_eq!(result.unknown_state_codes, vec!["ZZ".to_string()]);

    let contents = fs::read_to_string(dir.path().join("matches.txt")).expect("read report");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "0\t0\tAcme Health LLC\tAcme Health, LLC\tKing\tKings\twashington\twashington"
    );
    assert_eq!(
        lines[1],
        "0\t1\tAcme Health LLC\tAcme Health, LLC\tKing\tKings\twashington\twashington"
    );
}

#[test]
fn summary_json_is_written_when_requested() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut args = match_args(dir.path());
    args.summary_json = Some(dir.path().join("summary.json"));

    let result = run_match(&args).expect("run pipeline");
    assert_eq!(
        result.summary_json.as_deref(),
        Some(dir.path().join("summary.json").as_path())
    );

    let contents = fs::read_to_string(dir.path().join("summary.json")).expect("read summary");
    let parsed: orgrecon_model::RunSummary =
        serde_json::from_str(&contents).expect("parse summary");
    assert_eq!(parsed.matches, 2);
    assert_eq!(parsed.comparisons, 9);
    assert_eq!(parsed.unknown_state_codes, vec!["ZZ".to_string()]);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut args = match_args(dir.path());
    args.dry_run = true;
    args.summary_json = Some(dir.path().join("summary.json"));

    let result = run_match(&args).expect("run pipeline");

    assert_eq!(result.matches, 2);
    assert_eq!(result.output, None);
    assert_eq!(result.summary_json, None);
    assert!(!dir.path().join("matches.txt").exists());
    assert!(!dir.path().join("summary.json").exists());
}
