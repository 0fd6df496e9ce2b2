//! Loading a source table into ordered records.

use std::path::Path;

use tracing::debug;

use orgrecon_model::{DatasetId, Record};

use crate::columns::{ColumnSpec, resolve_columns};
use crate::csv_table::read_csv_table;
use crate::error::Result;

/// Read one source CSV into records, in file order.
///
/// Ragged rows are tolerated; cells past the end of a short row read as
/// empty. When no index column resolves, rows are numbered by 0-based
/// position instead.
pub fn load_records(path: &Path, dataset: DatasetId, spec: &ColumnSpec) -> Result<Vec<Record>> {
    let table = read_csv_table(path)?;
    let columns = resolve_columns(&table.headers, dataset, spec)?;

    let mut records = Vec::with_capacity(table.rows.len());
    for (row_number, row) in table.rows.iter().enumerate() {
        let cell = |position: usize| row.get(position).map(String::as_str).unwrap_or_default();
        let index = match columns.index {
            Some(position) => cell(position).to_string(),
            None => row_number.to_string(),
        };
        records.push(Record::new(
            index,
            cell(columns.company),
            cell(columns.county),
            cell(columns.state),
        ));
    }

    debug!(
        dataset = %dataset,
        path = %path.display(),
        rows = records.len(),
        "loaded records"
    );
    Ok(records)
}
