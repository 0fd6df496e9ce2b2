//! Resolution of source-specific column names to the four record fields.
//!
//! The two known sources name their columns differently (`Provider Name`
//! vs ` Local_Co_Name`, `County Name` vs ` County`, an unnamed row-index
//! column on both sides). Built-in aliases cover those; explicit names from
//! the operator always win over aliases.

use std::fmt;

use orgrecon_model::DatasetId;

use crate::error::{IngestError, Result};

/// Operator-provided column names, one per semantic field. `None` falls
/// back to the built-in aliases for that field.
#[derive(Debug, Clone, Default)]
pub struct ColumnSpec {
    pub index: Option<String>,
    pub company: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
}

/// The four semantic fields of a [`orgrecon_model::Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticField {
    Index,
    Company,
    County,
    State,
}

impl fmt::Display for SemanticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticField::Index => f.write_str("index"),
            SemanticField::Company => f.write_str("company"),
            SemanticField::County => f.write_str("county"),
            SemanticField::State => f.write_str("state"),
        }
    }
}

/// Positional column indices after resolution. The index column is optional;
/// rows without one are numbered by position.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColumns {
    pub index: Option<usize>,
    pub company: usize,
    pub county: usize,
    pub state: usize,
}

const INDEX_ALIASES: &[&str] = &["", "index", "id", "record id"];
const COMPANY_ALIASES: &[&str] = &[
    "company",
    "company name",
    "provider name",
    "local_co_name",
    "organization name",
];
const COUNTY_ALIASES: &[&str] = &["county", "county name"];
const STATE_ALIASES: &[&str] = &["state", "state code", "state name"];

/// Case-fold a header the same way for aliases and explicit names.
fn fold(header: &str) -> String {
    header.trim().to_lowercase()
}

fn find_column(headers: &[String], explicit: Option<&str>, aliases: &[&str]) -> Option<usize> {
    if let Some(name) = explicit {
        let wanted = fold(name);
        return headers.iter().position(|header| fold(header) == wanted);
    }
    for alias in aliases {
        if let Some(position) = headers.iter().position(|header| fold(header) == *alias) {
            return Some(position);
        }
    }
    None
}

/// Resolve all four fields against a header row.
///
/// The company, county, and state columns are required; a field that
/// resolves to no column is an error naming the dataset and the field.
pub fn resolve_columns(
    headers: &[String],
    dataset: DatasetId,
    spec: &ColumnSpec,
) -> Result<ResolvedColumns> {
    let require = |field: SemanticField, explicit: &Option<String>, aliases: &[&str]| {
        find_column(headers, explicit.as_deref(), aliases)
            .ok_or(IngestError::MissingColumn { dataset, field })
    };

    Ok(ResolvedColumns {
        index: find_column(headers, spec.index.as_deref(), INDEX_ALIASES),
        company: require(SemanticField::Company, &spec.company, COMPANY_ALIASES)?,
        county: require(SemanticField::County, &spec.county, COUNTY_ALIASES)?,
        state: require(SemanticField::State, &spec.state, STATE_ALIASES)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn dataset_a_columns_resolve_by_alias() {
        let headers = headers(&["", "Provider Name", "County Name", "State"]);
        let resolved =
            resolve_columns(&headers, DatasetId::A, &ColumnSpec::default()).expect("resolve");
        assert_eq!(resolved.index, Some(0));
        assert_eq!(resolved.company, 1);
        assert_eq!(resolved.county, 2);
        assert_eq!(resolved.state, 3);
    }

    #[test]
    fn dataset_b_columns_resolve_by_alias() {
        // Headers arrive already trimmed by the CSV reader.
        let headers = headers(&["", "Local_Co_Name", "County", "State"]);
        let resolved =
            resolve_columns(&headers, DatasetId::B, &ColumnSpec::default()).expect("resolve");
        assert_eq!(resolved.company, 1);
        assert_eq!(resolved.county, 2);
        assert_eq!(resolved.state, 3);
    }

    #[test]
    fn explicit_name_wins_over_alias() {
        let headers = headers(&["Company", "Org Title", "County", "State"]);
        let spec = ColumnSpec {
            company: Some("Org Title".to_string()),
            ..ColumnSpec::default()
        };
        let resolved = resolve_columns(&headers, DatasetId::A, &spec).expect("resolve");
        assert_eq!(resolved.company, 1);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let headers = headers(&["", "Provider Name", "County Name"]);
        let error = resolve_columns(&headers, DatasetId::A, &ColumnSpec::default())
            .expect_err("state column is required");
        assert_eq!(
            error.to_string(),
            "dataset A: no column for state".to_string()
        );
    }

    #[test]
    fn missing_index_column_is_not_an_error() {
        let headers = headers(&["Provider Name", "County Name", "State"]);
        let resolved =
            resolve_columns(&headers, DatasetId::A, &ColumnSpec::default()).expect("resolve");
        assert_eq!(resolved.index, None);
    }
}
