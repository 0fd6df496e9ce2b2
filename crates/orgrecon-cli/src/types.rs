use std::path::PathBuf;

#[derive(Debug)]
pub struct MatchRunResult {
    pub dataset_a: PathBuf,
    pub dataset_b: PathBuf,
    pub dataset_a_rows: usize,
    pub dataset_b_rows: usize,
    pub comparisons: u64,
    pub matches: usize,
    pub distinct_content: usize,
    pub unknown_state_codes: Vec<String>,
    pub output: Option<PathBuf>,
    pub summary_json: Option<PathBuf>,
}
