//! De-duplication of listings by identity.
//!
//! Two listings are duplicates when their [`Listing::id`] is equal, regardless of
//! their other fields. The first occurrence wins and keeps its position.

use std::collections::HashSet;

use crate::domain::Listing;

/// Keeps the first occurrence of every id, preserving order.
///
/// # Examples
///
/// ```
/// use favoris::{catalog::dedup_by_id, Job};
///
/// let jobs = vec![
///     Job::new("job-1", "Ingénieur"),
///     Job::new("job-2", "Chef de Projet"),
///     Job::new("job-1", "Ingénieur (copie)"),
/// ];
/// let unique = dedup_by_id(&jobs);
/// assert_eq!(unique.len(), 2);
/// assert_eq!(unique[0].poste, "Ingénieur");
/// ```
pub fn dedup_by_id<'a, T, I>(items: I) -> Vec<&'a T>
where
    T: Listing + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    let mut dropped = 0usize;

    for item in items {
        if seen.insert(item.id()) {
            unique.push(item);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        tracing::debug!(
            unique_count = unique.len(),
            dropped_count = dropped,
            "deduplicated listings"
        );
    }
    unique
}
