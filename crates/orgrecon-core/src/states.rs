//! Jurisdiction code normalization.
//!
//! Dataset A identifies states by two-letter code; dataset B carries the
//! full name as free text. Codes are resolved against a fixed table and the
//! resulting name is lowercased and trimmed; names are lowercased and
//! trimmed without any lookup. That asymmetry reflects the two data sources
//! and is deliberate.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use tracing::warn;

/// Two-letter codes for US states, territories, and armed-forces
/// designations, with their canonical full names.
const STATE_CODE_TO_NAME: &[(&str, &str)] = &[
    ("AA", "Armed Forces America"),
    ("AE", "Armed Forces"),
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AP", "Armed Forces Pacific"),
    ("AR", "Arkansas"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "Washington DC"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VI", "Virgin Islands"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

static STATE_CODES: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| STATE_CODE_TO_NAME.iter().copied().collect());

/// Look up the canonical full name for a two-letter jurisdiction code.
pub fn lookup_state_code(code: &str) -> Option<&'static str> {
    STATE_CODES.get(code).copied()
}

/// All known `(code, name)` pairs, sorted by code.
pub fn state_codes() -> impl Iterator<Item = (&'static str, &'static str)> {
    STATE_CODES.iter().map(|(code, name)| (*code, *name))
}

/// Lowercase and trim a free-text jurisdiction name. No table lookup.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Resolves dataset A state codes to normalized names, warning at most once
/// per distinct unknown code.
///
/// The warn-once set is owned by the normalizer rather than living in module
/// state, so the engine stays re-entrant across runs.
#[derive(Debug, Default)]
pub struct StateNormalizer {
    missing: BTreeSet<String>,
}

impl StateNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a two-letter code to its normalized canonical name.
    ///
    /// Returns `None` for a code missing from the table; the first miss per
    /// distinct code emits a warning, repeats stay silent.
    pub fn normalize_code(&mut self, code: &str) -> Option<String> {
        match lookup_state_code(code) {
            Some(name) => Some(normalize_name(name)),
            None => {
                if self.missing.insert(code.to_string()) {
                    warn!(code, "state code not found");
                }
                None
            }
        }
    }

    /// Unknown codes seen so far this run.
    pub fn unknown_codes(&self) -> &BTreeSet<String> {
        &self.missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_normalizes() {
        let mut states = StateNormalizer::new();
        assert_eq!(states.normalize_code("WA").as_deref(), Some("washington"));
        assert_eq!(
            states.normalize_code("DC").as_deref(),
            Some("washington dc")
        );
        assert!(states.unknown_codes().is_empty());
    }

    #[test]
    fn unknown_code_is_recorded_once() {
        let mut states = StateNormalizer::new();
        assert_eq!(states.normalize_code("ZZ"), None);
        assert_eq!(states.normalize_code("ZZ"), None);
        assert_eq!(states.normalize_code("QQ"), None);
        let codes: Vec<&str> = states.unknown_codes().iter().map(String::as_str).collect();
        assert_eq!(codes, vec!["QQ", "ZZ"]);
    }

    #[test]
    fn name_normalization_never_looks_up() {
        assert_eq!(normalize_name("  Washington "), "washington");
        // A code-shaped value on the name side is just lowercased.
        assert_eq!(normalize_name("WA"), "wa");
    }

    #[test]
    fn table_is_sorted_and_complete() {
        let codes: Vec<&str> = state_codes().map(|(code, _)| code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
        assert_eq!(codes.len(), 58);
    }
}
