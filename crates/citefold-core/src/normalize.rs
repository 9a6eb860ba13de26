//! Field canonicalization for comparison. Titles and DOIs go through
//! [`normalize_text`]; author names through [`normalize_author`].

/// Lowercase, trim, and collapse internal whitespace runs to single spaces.
pub fn normalize_text(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonicalize an author name for set comparison.
///
/// Strips comma and period punctuation, lowercases, then sorts the name
/// tokens alphabetically so that "Smith John", "John Smith", and
/// "Smith, John" all compare equal across provider conventions. Known
/// limitation, accepted as an approximation: two distinct people whose name
/// tokens are permutations of each other normalize identically.
pub fn normalize_author(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c == ',' || c == '.' { ' ' } else { c })
        .collect();

    let mut tokens: Vec<String> = cleaned
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    tokens.sort();
    tokens.join(" ")
}
