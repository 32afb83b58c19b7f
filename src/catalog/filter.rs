//! Title search filter.
//!
//! The query is trimmed and lowercased, then matched as a plain substring of the
//! lowercased title. Lowercasing goes char by char so that the filter and the
//! highlight range always agree (a final `Σ` folds to `σ`, never `ς`). There is no word-boundary or accent folding: `é` only
//! matches `é`/`É`.

use crate::domain::Listing;

/// Trims and lowercases a raw query.
///
/// # Examples
///
/// ```
/// use favoris::catalog::normalize_query;
///
/// assert_eq!(normalize_query("  Ingénieur "), "ingénieur");
/// assert_eq!(normalize_query("   "), "");
/// ```
#[must_use]
pub fn normalize_query(query: &str) -> String {
    fold(query.trim())
}

/// Whether `title` contains the already-normalized query.
#[must_use]
pub fn matches_title(title: &str, normalized_query: &str) -> bool {
    normalized_query.is_empty() || fold(title).contains(normalized_query)
}

fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Returns the items whose title contains `query`, in their original order.
///
/// An empty or blank query returns every item.
pub fn filter<'a, T: Listing>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let normalized = normalize_query(query);
    let _span = tracing::debug_span!(
        "filter",
        total = items.len(),
        query_len = normalized.len()
    )
    .entered();

    if normalized.is_empty() {
        return items.iter().collect();
    }

    let filtered: Vec<&T> = items
        .iter()
        .filter(|item| matches_title(item.title(), &normalized))
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "search filter applied");
    filtered
}

/// Owned variant of [`filter`].
pub fn filter_cloned<T: Listing>(items: &[T], query: &str) -> Vec<T> {
    filter(items, query).into_iter().cloned().collect()
}

/// Character range `(start, end)` of the first match of `query` in `title`.
///
/// Used to highlight the match; `None` for blank queries or no match. Indices
/// count `char`s of the original title.
#[must_use]
pub fn match_range(title: &str, query: &str) -> Option<(usize, usize)> {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return None;
    }

    // Lowercasing may change byte lengths, so walk the title char by char and
    // compare the lowercased suffix at each position.
    let chars: Vec<char> = title.chars().collect();
    let needle: Vec<char> = normalized.chars().collect();

    for start in 0..chars.len() {
        let mut lowered = chars[start..].iter().flat_map(|c| c.to_lowercase());
        let matched = needle
            .iter()
            .take_while(|expected| lowered.next() == Some(**expected))
            .count();
        if matched == needle.len() {
            let end = original_end(&chars[start..], matched);
            return Some((start, start + end));
        }
    }

    None
}

/// Number of original chars needed to produce `lower_len` lowercased chars.
fn original_end(chars: &[char], lower_len: usize) -> usize {
    let mut produced = 0;
    for (i, c) in chars.iter().enumerate() {
        if produced >= lower_len {
            return i;
        }
        produced += c.to_lowercase().count();
    }
    chars.len()
}
