//! Post-consolidation utilities: ordering the surviving records and picking
//! individual entries by their 1-based display index.

use std::cmp::Ordering;
use std::str::FromStr;

use tracing::warn;

use crate::error::{CitefoldError, Result};
use crate::record::Record;

/// Field to order records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Year,
    Source,
}

impl FromStr for SortKey {
    type Err = CitefoldError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(Self::Title),
            "year" => Ok(Self::Year),
            "source" => Ok(Self::Source),
            other => Err(CitefoldError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Stable sort by the given key. Records with an empty key field sort last;
/// years compare numerically when both sides parse.
pub fn sort_records(records: &mut [Record], key: SortKey) {
    records.sort_by(|a, b| compare(a, b, key));
}

/// Pick records by 1-based indices, in the order the caller listed them.
/// Out-of-range indices are skipped with a warning.
pub fn select_records(records: &[Record], picks: &[usize]) -> Vec<Record> {
    let mut selected = Vec::with_capacity(picks.len());
    for &pick in picks {
        match pick.checked_sub(1).and_then(|idx| records.get(idx)) {
            Some(record) => selected.push(record.clone()),
            None => warn!(index = pick, total = records.len(), "invalid selection"),
        }
    }
    selected
}

fn compare(a: &Record, b: &Record, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => key_ordering(non_blank(&a.title), non_blank(&b.title)),
        SortKey::Source => key_ordering(
            a.source.as_deref().and_then(non_blank),
            b.source.as_deref().and_then(non_blank),
        ),
        SortKey::Year => {
            let year_a = a.year.as_deref().and_then(non_blank);
            let year_b = b.year.as_deref().and_then(non_blank);
            match (year_a, year_b) {
                (Some(ya), Some(yb)) => match (ya.parse::<i64>(), yb.parse::<i64>()) {
                    (Ok(na), Ok(nb)) => na.cmp(&nb),
                    _ => ya.cmp(yb),
                },
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }
    }
}

fn key_ordering(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
