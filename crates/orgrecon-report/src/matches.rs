//! Delimited text output of the match set.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use orgrecon_model::MatchTuple;

/// Field separator used when none is configured.
pub const DEFAULT_DELIMITER: char = '\t';

/// Render one tuple as its eight fields joined by `delimiter`.
pub fn render_match_line(tuple: &MatchTuple, delimiter: char) -> String {
    let mut line = String::new();
    for (position, field) in tuple.fields().into_iter().enumerate() {
        if position > 0 {
            line.push(delimiter);
        }
        line.push_str(field);
    }
    line
}

/// Write the match set to `path`, one tuple per line, in set order.
pub fn write_matches(
    path: &Path,
    matches: &BTreeSet<MatchTuple>,
    delimiter: char,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create match report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for tuple in matches {
        writeln!(writer, "{}", render_match_line(tuple, delimiter))
            .with_context(|| format!("write match report {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush match report {}", path.display()))?;
    Ok(())
}
