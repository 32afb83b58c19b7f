//! List presentation: de-duplication plus favourite state per entry.
//!
//! Both the catalogue and the favourites screen go through [`present`], and every
//! favourite button goes through [`toggle_with_feedback`], so the list, the detail
//! screen and the favourites screen always agree on membership.

use std::time::Instant;

use super::dedup::dedup_by_id;
use crate::domain::Listing;
use crate::favourites::{FavouritesManager, ToggleOutcome};
use crate::feedback::FeedbackBubble;

/// Label of the favourite button when the item is not a favourite.
pub const ADD_LABEL: &str = "Ajouter aux favoris";

/// Label of the favourite button when the item is a favourite.
pub const REMOVE_LABEL: &str = "Retirer des favoris";

/// One displayable entry of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry<'a, T> {
    pub item: &'a T,
    pub is_favourite: bool,
}

impl<T> ListEntry<'_, T> {
    /// Label of the favourite toggle button.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        toggle_label(self.is_favourite)
    }
}

/// Label of the favourite button for the given membership.
#[must_use]
pub const fn toggle_label(is_favourite: bool) -> &'static str {
    if is_favourite {
        REMOVE_LABEL
    } else {
        ADD_LABEL
    }
}

/// De-duplicates `items` by id and attaches their favourite state.
pub fn present<'a, T, I>(items: I, favourites: &FavouritesManager<T>) -> Vec<ListEntry<'a, T>>
where
    T: Listing + 'a,
    I: IntoIterator<Item = &'a T>,
{
    dedup_by_id(items)
        .into_iter()
        .map(|item| ListEntry {
            item,
            is_favourite: favourites.is_favourite(item.id()),
        })
        .collect()
}

/// Toggles `item` and reports the outcome on the feedback bubble.
pub fn toggle_with_feedback<T: Listing>(
    favourites: &mut FavouritesManager<T>,
    feedback: &mut FeedbackBubble,
    item: &T,
    now: Instant,
) -> ToggleOutcome {
    let outcome = favourites.toggle_favourite(item.clone());
    tracing::debug!(id = %item.id(), outcome = ?outcome, "favourite toggled");

    if let Some(message) = outcome.message() {
        feedback.show(message, now);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Job;

    #[test]
    fn present_deduplicates_and_flags_favourites() {
        let mut favourites = FavouritesManager::new();
        favourites.add_favourite(Job::new("job-2", "B"));

        let items = vec![
            Job::new("job-1", "A"),
            Job::new("job-2", "B"),
            Job::new("job-1", "A again"),
        ];
        let entries = present(&items, &favourites);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].item.poste, "A");
        assert!(!entries[0].is_favourite);
        assert_eq!(entries[0].toggle_label(), ADD_LABEL);
        assert!(entries[1].is_favourite);
        assert_eq!(entries[1].toggle_label(), REMOVE_LABEL);
    }

    #[test]
    fn favourites_screen_hides_direct_push_duplicates() {
        let mut favourites = FavouritesManager::new();
        favourites.store_mut().push(Job::new("job-1", "A"));
        favourites.store_mut().push(Job::new("job-1", "A"));

        let entries = present(favourites.favourites(), &favourites);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn toggle_reports_on_bubble() {
        let now = Instant::now();
        let mut favourites = FavouritesManager::new();
        let mut bubble = FeedbackBubble::default();
        let job = Job::new("job-1", "A");

        let outcome = toggle_with_feedback(&mut favourites, &mut bubble, &job, now);
        assert_eq!(outcome, ToggleOutcome::Added);
        assert_eq!(bubble.message(), Some("Ajouté aux favoris"));

        let outcome = toggle_with_feedback(&mut favourites, &mut bubble, &job, now);
        assert_eq!(outcome, ToggleOutcome::Removed);
        assert_eq!(bubble.message(), Some("Retiré des favoris"));
    }
}
