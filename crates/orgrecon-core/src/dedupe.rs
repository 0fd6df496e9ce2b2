//! Two-tier deduplication of the match set.

use std::collections::BTreeSet;

use orgrecon_model::{ContentTuple, MatchTuple};

/// How a candidate tuple related to what the deduplicator had already seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupeOutcome {
    /// The exact eight-field tuple was already present; nothing changed.
    Duplicate,
    /// New index pair for a company/county/state combination seen before.
    NewPairing,
    /// First time this company/county/state combination appeared.
    NewContent,
}

/// Tracks every distinct match and, separately, every distinct match
/// content (indices ignored) within one run.
///
/// The full set is the report; the content set only exists so an operator
/// sees each semantically distinct match once, however many index pairs
/// produce it.
#[derive(Debug, Default)]
pub struct Deduplicator {
    matches: BTreeSet<MatchTuple>,
    content: BTreeSet<ContentTuple>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a candidate tuple and report how new it was.
    pub fn insert(&mut self, tuple: MatchTuple) -> DedupeOutcome {
        if self.matches.contains(&tuple) {
            return DedupeOutcome::Duplicate;
        }
        let content = tuple.content();
        self.matches.insert(tuple);
        if self.content.insert(content) {
            DedupeOutcome::NewContent
        } else {
            DedupeOutcome::NewPairing
        }
    }

    /// Number of distinct matches recorded.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of distinct content tuples recorded.
    pub fn distinct_content(&self) -> usize {
        self.content.len()
    }

    pub fn matches(&self) -> &BTreeSet<MatchTuple> {
        &self.matches
    }

    pub fn into_matches(self) -> BTreeSet<MatchTuple> {
        self.matches
    }
}
