//! Citefold core — cross-source bibliographic record deduplication.

pub mod authors;
pub mod consolidate;
pub mod dedup;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod postprocess;
pub mod record;
pub mod similarity;
pub mod strategy;

pub use consolidate::Consolidated;
pub use dedup::{DedupOptions, DedupReport, deduplicate};
pub use error::{CitefoldError, Result};
pub use postprocess::SortKey;
pub use record::{Record, records_from_json};
pub use strategy::{KeepPreference, MatchParams, MatchStrategy};
