use std::collections::HashSet;

use crate::normalize::normalize_author;

/// Overlap check between two author lists.
///
/// Every name is canonicalized via [`normalize_author`]; blank names are
/// discarded. Returns `true` iff both sides end up with at least one usable
/// name and the normalized sets share at least `min_common` entries.
pub fn authors_match(a: &[String], b: &[String], min_common: usize) -> bool {
    let set_a = normalized_set(a);
    if set_a.is_empty() {
        return false;
    }
    let set_b = normalized_set(b);
    if set_b.is_empty() {
        return false;
    }

    set_a.intersection(&set_b).count() >= min_common
}

fn normalized_set(names: &[String]) -> HashSet<String> {
    names
        .iter()
        .map(|name| normalize_author(name))
        .filter(|name| !name.is_empty())
        .collect()
}
