use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two source datasets a record came from.
///
/// The two sources encode jurisdictions differently: dataset A carries a
/// two-letter state code, dataset B carries a free-text state name. Loaders
/// and the matcher rely on this distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetId {
    A,
    B,
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetId::A => f.write_str("A"),
            DatasetId::B => f.write_str("B"),
        }
    }
}

/// One row of either source table, reduced to its four semantic fields.
///
/// Records are built once by the loader and never mutated; source-specific
/// column naming stops at the ingest boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Dataset-local identifier of the row.
    pub index: String,
    /// Free-text organization name.
    pub company: String,
    /// Free-text county name.
    pub county: String,
    /// Two-letter code (dataset A) or free-text name (dataset B).
    pub state: String,
}

impl Record {
    pub fn new(
        index: impl Into<String>,
        company: impl Into<String>,
        county: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            index: index.into(),
            company: company.into(),
            county: county.into(),
            state: state.into(),
        }
    }
}
