//! Pairwise match decision between one record from each dataset.

use orgrecon_model::{MatchTuple, Record};

use crate::similarity::similarity;
use crate::states::{StateNormalizer, normalize_name};

/// Similarity cutoff applied independently to the county and company fields.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Decide whether records `a` and `b` describe the same organization.
///
/// Checks run cheapest-first and short-circuit:
/// 1. resolve A's state code (unknown code: no match, warn-once),
/// 2. normalize B's state name,
/// 3. normalized states must be exactly equal (never fuzzy),
/// 4. county similarity must reach the threshold,
/// 5. company similarity must reach the threshold.
///
/// On success the tuple carries the original company and county spellings
/// and the normalized state names.
pub fn match_pair(states: &mut StateNormalizer, a: &Record, b: &Record) -> Option<MatchTuple> {
    let state_a = states.normalize_code(&a.state)?;
    let state_b = normalize_name(&b.state);

    if state_a != state_b {
        return None;
    }
    if similarity(&a.county, &b.county) < SIMILARITY_THRESHOLD {
        return None;
    }
    if similarity(&a.company, &b.company) < SIMILARITY_THRESHOLD {
        return None;
    }

    Some(MatchTuple {
        index_a: a.index.clone(),
        index_b: b.index.clone(),
        company_a: a.company.clone(),
        company_b: b.company.clone(),
        county_a: a.county.clone(),
        county_b: b.county.clone(),
        state_a,
        state_b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_a() -> Record {
        Record::new("1", "Acme Health LLC", "King", "WA")
    }

    fn record_b() -> Record {
        Record::new("9", "Acme Health, LLC", "Kings", "washington")
    }

    #[test]
    fn close_records_match() {
        let mut states = StateNormalizer::new();
        let tuple = match_pair(&mut states, &record_a(), &record_b()).expect("match");
        assert_eq!(tuple.index_a, "1");
        assert_eq!(tuple.index_b, "9");
        assert_eq!(tuple.company_a, "Acme Health LLC");
        assert_eq!(tuple.company_b, "Acme Health, LLC");
        assert_eq!(tuple.state_a, "washington");
        assert_eq!(tuple.state_b, "washington");
    }

    #[test]
    fn unknown_state_code_never_matches() {
        let mut states = StateNormalizer::new();
        let mut a = record_a();
        a.state = "ZZ".to_string();
        assert!(match_pair(&mut states, &a, &record_b()).is_none());
        assert!(match_pair(&mut states, &a, &record_b()).is_none());
        assert_eq!(states.unknown_codes().len(), 1);
        assert!(states.unknown_codes().contains("ZZ"));
    }

    #[test]
    fn state_comparison_is_exact() {
        let mut states = StateNormalizer::new();
        let mut b = record_b();
        // "washington state" is close to "washington" but not equal.
        b.state = "washington state".to_string();
        assert!(match_pair(&mut states, &record_a(), &b).is_none());
    }

    #[test]
    fn dissimilar_county_never_matches() {
        let mut states = StateNormalizer::new();
        let mut b = record_b();
        b.county = "Pierce".to_string();
        assert!(match_pair(&mut states, &record_a(), &b).is_none());
    }

    #[test]
    fn dissimilar_company_never_matches() {
        let mut states = StateNormalizer::new();
        let mut b = record_b();
        b.company = "Zenith Builders Inc".to_string();
        assert!(match_pair(&mut states, &record_a(), &b).is_none());
    }
}
