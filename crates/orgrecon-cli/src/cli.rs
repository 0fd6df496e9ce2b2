//! CLI argument definitions for the reconciliation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "orgrecon",
    version,
    about = "Reconcile two organization datasets by fuzzy matching",
    long_about = "Reconcile two independently-sourced organization tables.\n\n\
                  Pairs of records that plausibly describe the same company in the\n\
                  same county and state are reported for review. Dataset A carries\n\
                  two-letter state codes; dataset B carries free-text state names."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile two datasets and write the match report.
    Match(MatchArgs),

    /// List the known two-letter jurisdiction codes.
    States,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// CSV file for dataset A (two-letter state codes).
    #[arg(value_name = "DATASET_A")]
    pub dataset_a: PathBuf,

    /// CSV file for dataset B (free-text state names).
    #[arg(value_name = "DATASET_B")]
    pub dataset_b: PathBuf,

    /// Path of the match report.
    #[arg(long = "output", value_name = "PATH", default_value = "matches.txt")]
    pub output: PathBuf,

    /// Field delimiter for the match report.
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = '\t')]
    pub delimiter: char,

    /// Also write a JSON run summary to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Reconcile and summarize without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Disable the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Column holding dataset A's row identifier.
    #[arg(long = "a-index", value_name = "COLUMN")]
    pub a_index: Option<String>,

    /// Column holding dataset A's company name.
    #[arg(long = "a-company", value_name = "COLUMN")]
    pub a_company: Option<String>,

    /// Column holding dataset A's county name.
    #[arg(long = "a-county", value_name = "COLUMN")]
    pub a_county: Option<String>,

    /// Column holding dataset A's state code.
    #[arg(long = "a-state", value_name = "COLUMN")]
    pub a_state: Option<String>,

    /// Column holding dataset B's row identifier.
    #[arg(long = "b-index", value_name = "COLUMN")]
    pub b_index: Option<String>,

    /// Column holding dataset B's company name.
    #[arg(long = "b-company", value_name = "COLUMN")]
    pub b_company: Option<String>,

    /// Column holding dataset B's county name.
    #[arg(long = "b-county", value_name = "COLUMN")]
    pub b_county: Option<String>,

    /// Column holding dataset B's state name.
    #[arg(long = "b-state", value_name = "COLUMN")]
    pub b_state: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
