//! Ingestion of the two source tables.
//!
//! Reads CSV files into plain string tables, resolves source-specific column
//! naming to the four semantic record fields, and hands the core ordered
//! `Record` collections. Source column names never travel past this crate.

pub mod columns;
pub mod csv_table;
pub mod error;
pub mod loader;

pub use columns::{ColumnSpec, ResolvedColumns, SemanticField, resolve_columns};
pub use csv_table::{CsvTable, read_csv_table};
pub use error::{IngestError, Result};
pub use loader::load_records;
