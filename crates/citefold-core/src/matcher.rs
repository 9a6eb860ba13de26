//! Pairwise duplicate decision. Identity between bibliographic records is
//! never guaranteed by a single key, so the decision is an ordered ladder of
//! imperfect signals; the first applicable rule decides.

use crate::authors::authors_match;
use crate::normalize::normalize_text;
use crate::record::Record;
use crate::similarity::{SECONDARY_TITLE_THRESHOLD, similarity_ratio};
use crate::strategy::{MatchParams, MatchStrategy};

/// Minimum shared authors required by the tertiary rule, capped at 3.
/// Empirically chosen constant, preserved for behavioral compatibility.
fn tertiary_min_common(a: &Record, b: &Record) -> usize {
    3.min(a.authors.len().min(b.authors.len()))
}

/// Decide whether two records describe the same publication.
pub fn is_duplicate(a: &Record, b: &Record, params: &MatchParams) -> bool {
    // Rule 1: DOI comparison, authoritative in both directions: equal
    // non-empty DOIs match regardless of titles and authors, unequal ones
    // short-circuit every later rule.
    if params.strategy != MatchStrategy::TitleOnly {
        let doi_a = normalize_text(a.doi.as_deref().unwrap_or_default());
        let doi_b = normalize_text(b.doi.as_deref().unwrap_or_default());
        if !doi_a.is_empty() && !doi_b.is_empty() {
            return doi_a == doi_b;
        }
        if params.strategy == MatchStrategy::DoiOnly {
            return false;
        }
    }

    let title_a = normalize_text(&a.title);
    let title_b = normalize_text(&b.title);
    if title_a.is_empty() || title_b.is_empty() {
        return false;
    }
    let ratio = similarity_ratio(&title_a, &title_b);

    if params.strategy == MatchStrategy::TitleOnly {
        return ratio >= params.threshold;
    }

    // Rule 2: title similarity, confirmed by author overlap when both
    // sides supply authors.
    if ratio >= params.threshold {
        if a.authors.is_empty() || b.authors.is_empty() {
            return true;
        }
        if authors_match(&a.authors, &b.authors, 1) {
            return true;
        }
    }

    // Rule 3: strong author overlap rescues preprint-vs-published title
    // drift at the fixed secondary threshold.
    if params.strategy.uses_tertiary_rule()
        && a.authors.len() >= 2
        && b.authors.len() >= 2
        && authors_match(&a.authors, &b.authors, tertiary_min_common(a, b))
        && ratio >= SECONDARY_TITLE_THRESHOLD
    {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto_params() -> MatchParams {
        MatchParams::new(MatchStrategy::Auto, None).unwrap()
    }

    fn params_for(strategy: MatchStrategy) -> MatchParams {
        MatchParams::new(strategy, None).unwrap()
    }

    fn record(title: &str, doi: &str, authors: &[&str]) -> Record {
        let mut record = Record::new(title);
        if !doi.is_empty() {
            record.doi = Some(doi.to_string());
        }
        record.authors = authors.iter().map(|s| s.to_string()).collect();
        record
    }

    #[test]
    fn equal_dois_match_despite_different_titles_and_authors() {
        let a = record("Preprint Title", "10.1234/example.001", &["Smith J"]);
        let b = record("Completely Unrelated Title", "10.1234/EXAMPLE.001", &["Other X"]);
        assert!(is_duplicate(&a, &b, &auto_params()));
    }

    #[test]
    fn unequal_dois_short_circuit_identical_titles() {
        let a = record("Same Title", "10.1/a", &["Smith J"]);
        let b = record("Same Title", "10.1/b", &["Smith J"]);
        assert!(!is_duplicate(&a, &b, &auto_params()));
    }

    #[test]
    fn doi_only_ignores_title_and_authors() {
        let a = record("Same Title", "", &["Smith J"]);
        let b = record("Same Title", "", &["Smith J"]);
        assert!(!is_duplicate(&a, &b, &params_for(MatchStrategy::DoiOnly)));

        let c = record("Title A", "10.1/x", &[]);
        let d = record("Title B", "10.1/x", &[]);
        assert!(is_duplicate(&c, &d, &params_for(MatchStrategy::DoiOnly)));
    }

    #[test]
    fn title_only_ignores_dois_and_authors() {
        // Disjoint authors and conflicting DOIs; only the titles count.
        let a = record("COVID-19 Vaccine Efficacy Study", "10.1/a", &["Wang X"]);
        let b = record("COVID-19 Vaccine Efficacy Study", "10.1/b", &["Miller P"]);
        assert!(is_duplicate(&a, &b, &params_for(MatchStrategy::TitleOnly)));
    }

    #[test]
    fn similar_titles_with_disjoint_authors_do_not_match() {
        let a = record("COVID-19 Vaccine Efficacy Study", "", &["Wang X", "Zhang Y"]);
        let b = record("COVID-19 Vaccine Efficacy Study", "", &["Miller P", "Garcia R"]);
        assert!(!is_duplicate(&a, &b, &auto_params()));
    }

    #[test]
    fn title_match_suffices_when_either_side_lacks_authors() {
        let a = record("Deep Learning for Medical Imaging", "", &[]);
        let b = record("Deep Learning for Medical Imaging", "", &["Johnson B"]);
        assert!(is_duplicate(&a, &b, &auto_params()));
    }

    #[test]
    fn tertiary_rule_catches_preprint_title_drift() {
        let a = record(
            "Novel Approach to Cancer Detection",
            "",
            &["Brown M", "Taylor R", "Wilson K"],
        );
        let b = record(
            "A Novel Approach to Cancer Detection Using AI",
            "",
            &["Brown M", "Taylor R", "Wilson K"],
        );
        // Passes under strict too, where the primary threshold alone would
        // reject the drifted title.
        assert!(is_duplicate(&a, &b, &auto_params()));
        assert!(is_duplicate(&a, &b, &params_for(MatchStrategy::Strict)));
    }

    #[test]
    fn tertiary_rule_requires_two_authors_per_side() {
        let a = record("Shared Phrase Study Alpha Beta Gamma", "", &["Brown M"]);
        let b = record("Shared Phrase Study Alpha Beta Delta", "", &["Brown M"]);
        // Single author each: rule 2 fails at 0.95, rule 3 is unavailable.
        assert!(!is_duplicate(&a, &b, &params_for(MatchStrategy::Strict)));
    }

    #[test]
    fn loose_strategy_accepts_lower_title_similarity() {
        let a = record("Graph Neural Networks for Molecules", "", &[]);
        let b = record("Graph Neural Networks for Molecule Design", "", &[]);
        assert!(is_duplicate(&a, &b, &params_for(MatchStrategy::Loose)));
    }

    #[test]
    fn empty_titles_never_match_without_dois() {
        let a = record("", "", &["Smith J", "Doe A"]);
        let b = record("", "", &["Smith J", "Doe A"]);
        assert!(!is_duplicate(&a, &b, &auto_params()));
    }
}
