//! Shared data model for the organization reconciliation engine.

pub mod record;
pub mod summary;
pub mod tuple;

pub use record::{DatasetId, Record};
pub use summary::RunSummary;
pub use tuple::{ContentTuple, MatchTuple};
