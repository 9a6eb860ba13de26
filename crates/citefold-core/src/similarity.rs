//! Title similarity via the Ratcliff–Obershelp matching-blocks ratio:
//! twice the total length of matched blocks divided by the combined length
//! of both strings. Bounded [0, 1], 1.0 for identical inputs.

use crate::normalize::normalize_text;

/// Secondary threshold for the author-confirmed tertiary match rule,
/// independent of the strategy's primary threshold.
pub const SECONDARY_TITLE_THRESHOLD: f64 = 0.7;

/// Matching-blocks similarity ratio between two strings, over chars.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = matched_len(&a, &b);
    2.0 * matched as f64 / total as f64
}

/// True iff both titles are non-empty after normalization and their ratio
/// reaches `threshold` (inclusive).
pub fn titles_similar(a: &str, b: &str, threshold: f64) -> bool {
    let a = normalize_text(a);
    let b = normalize_text(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    similarity_ratio(&a, &b) >= threshold
}

/// Total length of matched blocks: the longest common substring, plus
/// matches found recursively on the unmatched flanks to either side.
fn matched_len(a: &[char], b: &[char]) -> usize {
    let (len, a_start, b_start) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matched_len(&a[..a_start], &b[..b_start])
        + matched_len(&a[a_start + len..], &b[b_start + len..])
}

fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0usize, 0usize, 0usize);
    let mut prev = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        let mut row = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                row[j + 1] = len;
                if len > best.0 {
                    best = (len, i + 1 - len, j + 1 - len);
                }
            }
        }
        prev = row;
    }

    best
}
