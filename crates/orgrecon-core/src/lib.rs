//! Matching engine for cross-dataset organization reconciliation.
//!
//! Given two record sets describing organizations (company, county, state),
//! the engine finds pairs that plausibly refer to the same real-world
//! entity: state codes are normalized against a fixed jurisdiction table,
//! county and company names are compared with a fuzzy similarity ratio, and
//! the resulting matches are deduplicated at two tiers (exact tuple and
//! index-free content).

pub mod dedupe;
pub mod matcher;
pub mod reconcile;
pub mod similarity;
pub mod states;

pub use dedupe::{DedupeOutcome, Deduplicator};
pub use matcher::{SIMILARITY_THRESHOLD, match_pair};
pub use reconcile::{ReconcileOutcome, reconcile, reconcile_with_progress};
pub use similarity::similarity;
pub use states::{StateNormalizer, lookup_state_code, normalize_name, state_codes};
