//! Orchestration: turn external configuration into matching parameters,
//! run the consolidation pass, and report how many duplicates were removed.

use tracing::{debug, info};

use crate::Result;
use crate::consolidate::consolidate;
use crate::record::Record;
use crate::strategy::{KeepPreference, MatchParams, MatchStrategy};

/// External configuration surface of the engine. All knobs are explicit;
/// the engine carries no process-wide state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DedupOptions {
    pub strategy: MatchStrategy,
    /// Primary title-similarity cutoff. `None` selects the default;
    /// `strict`/`loose` override whatever is supplied here.
    pub threshold: Option<f64>,
    pub keep: KeepPreference,
    pub merge: bool,
}

impl DedupOptions {
    /// Build options from raw string configuration, validating strategy and
    /// keep-preference names against the closed enumerations. Fails before
    /// any record is processed.
    pub fn parse(
        strategy: &str,
        threshold: Option<f64>,
        keep: &str,
        merge: bool,
    ) -> Result<Self> {
        Ok(Self {
            strategy: strategy.parse()?,
            threshold,
            keep: keep.parse()?,
            merge,
        })
    }
}

/// Outcome of a deduplication run.
#[derive(Debug, Clone, PartialEq)]
pub struct DedupReport {
    /// Unique representatives, in order of first occurrence.
    pub records: Vec<Record>,
    /// Count of duplicates folded away.
    pub removed: usize,
}

impl DedupReport {
    /// Human-readable line for caller-facing reporting.
    pub fn summary(&self) -> String {
        format!("Removed {} duplicate(s)", self.removed)
    }
}

/// Deduplicate `records` under `options`.
///
/// Validates the configuration (rejecting an out-of-range threshold rather
/// than clamping it), resolves strategy-fixed thresholds, and runs the
/// consolidation pass. Pure in-memory computation; performs no I/O.
pub fn deduplicate(records: &[Record], options: &DedupOptions) -> Result<DedupReport> {
    let params = MatchParams::new(options.strategy, options.threshold)?;
    debug!(
        strategy = %options.strategy,
        threshold = params.threshold,
        keep = %options.keep,
        merge = options.merge,
        total = records.len(),
        "starting deduplication pass"
    );

    let out = consolidate(records, &params, options.keep, options.merge);
    info!(kept = out.records.len(), removed = out.removed, "deduplication finished");

    Ok(DedupReport {
        records: out.records,
        removed: out.removed,
    })
}
