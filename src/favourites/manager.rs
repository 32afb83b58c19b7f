//! Idempotent facade over the favourites store.
//!
//! [`FavouritesManager`] is the public mutation entry point for favourites. Every
//! operation first checks membership by id, so adding an item that is already a
//! favourite, or removing one that is not, leaves the list untouched and reports
//! [`ToggleOutcome::Unchanged`].
//!
//! Membership uses a set of ids memoised against the store revision: it is rebuilt
//! lazily the first time it is queried after a mutation.

use std::cell::RefCell;
use std::collections::HashSet;

use super::store::{FavouritesState, FavouritesStore, SubscriptionId};
use crate::domain::Listing;

/// What a favourites operation did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    Unchanged,
}

impl ToggleOutcome {
    /// Feedback message for the user, `None` when nothing changed.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Added => Some("Ajouté aux favoris"),
            Self::Removed => Some("Retiré des favoris"),
            Self::Unchanged => None,
        }
    }
}

/// Memoised id set, valid for one store revision.
#[derive(Debug)]
struct IdCache<Id> {
    revision: u64,
    ids: HashSet<Id>,
}

/// Favourites facade with idempotent add/remove/toggle.
///
/// # Examples
///
/// ```
/// use favoris::{FavouritesManager, Job, ToggleOutcome};
///
/// let mut favourites = FavouritesManager::new();
/// let job = Job::new("job-1", "Ingénieur Logiciel");
///
/// assert_eq!(favourites.add_favourite(job.clone()), ToggleOutcome::Added);
/// assert_eq!(favourites.add_favourite(job.clone()), ToggleOutcome::Unchanged);
/// assert_eq!(favourites.toggle_favourite(job), ToggleOutcome::Removed);
/// assert!(favourites.is_empty());
/// ```
#[derive(Debug)]
pub struct FavouritesManager<T: Listing> {
    store: FavouritesStore<T>,
    cache: RefCell<Option<IdCache<T::Id>>>,
}

impl<T: Listing> Default for FavouritesManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Listing> FavouritesManager<T> {
    /// Creates a manager over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: FavouritesStore::new(),
            cache: RefCell::new(None),
        }
    }

    /// Read access to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &FavouritesStore<T> {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut FavouritesStore<T> {
        &mut self.store
    }

    /// Favourites in insertion order.
    #[must_use]
    pub fn favourites(&self) -> &[T] {
        self.store.list()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.list().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.list().is_empty()
    }

    /// Clones the current favourites state.
    #[must_use]
    pub fn snapshot(&self) -> FavouritesState<T> {
        self.store.snapshot()
    }

    /// Returns the favourite with the given id, if any.
    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.store.list().iter().find(|item| item.id() == id)
    }

    /// Whether an item with this id is in the favourites list.
    #[must_use]
    pub fn is_favourite(&self, id: &T::Id) -> bool {
        let revision = self.store.revision();
        let mut cache = self.cache.borrow_mut();

        let stale = cache.as_ref().map_or(true, |c| c.revision != revision);
        if stale {
            tracing::trace!(revision, "rebuilding favourite id set");
            *cache = Some(IdCache {
                revision,
                ids: self.store.list().iter().map(|item| item.id().clone()).collect(),
            });
        }

        cache.as_ref().is_some_and(|c| c.ids.contains(id))
    }

    /// Adds `item` unless its id is already a favourite.
    pub fn add_favourite(&mut self, item: T) -> ToggleOutcome {
        if self.is_favourite(item.id()) {
            tracing::debug!(id = %item.id(), "already a favourite");
            return ToggleOutcome::Unchanged;
        }

        self.store.push(item);
        ToggleOutcome::Added
    }

    /// Removes the favourite with this id, if present.
    pub fn remove_favourite(&mut self, id: &T::Id) -> ToggleOutcome {
        if !self.is_favourite(id) {
            tracing::debug!(id = %id, "not a favourite");
            return ToggleOutcome::Unchanged;
        }

        self.store.remove(id);
        ToggleOutcome::Removed
    }

    /// Removes `item` if it is a favourite, adds it otherwise.
    ///
    /// Never returns [`ToggleOutcome::Unchanged`].
    pub fn toggle_favourite(&mut self, item: T) -> ToggleOutcome {
        if self.is_favourite(item.id()) {
            self.store.remove(item.id());
            ToggleOutcome::Removed
        } else {
            self.store.push(item);
            ToggleOutcome::Added
        }
    }

    /// See [`FavouritesStore::subscribe`].
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&[T]) + 'static,
    {
        self.store.subscribe(subscriber)
    }

    /// See [`FavouritesStore::unsubscribe`].
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Job, Movie};

    fn job(id: &str) -> Job {
        Job::new(id, format!("Poste {id}"))
    }

    #[test]
    fn remove_is_idempotent() {
        let mut manager = FavouritesManager::new();
        manager.add_favourite(job("job-1"));

        let id = "job-1".to_string();
        assert_eq!(manager.remove_favourite(&id), ToggleOutcome::Removed);
        assert_eq!(manager.remove_favourite(&id), ToggleOutcome::Unchanged);
        assert!(manager.is_empty());
    }

    #[test]
    fn remove_on_empty_list_is_unchanged() {
        let mut manager: FavouritesManager<Job> = FavouritesManager::new();
        let id = "job-1".to_string();
        assert_eq!(manager.remove_favourite(&id), ToggleOutcome::Unchanged);
        assert_eq!(manager.remove_favourite(&id), ToggleOutcome::Unchanged);
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut manager = FavouritesManager::new();
        manager.add_favourite(job("other"));
        let item = job("job-1");
        let before = manager.snapshot();

        assert_eq!(manager.toggle_favourite(item.clone()), ToggleOutcome::Added);
        assert!(manager.is_favourite(&item.id));
        assert_eq!(manager.toggle_favourite(item.clone()), ToggleOutcome::Removed);
        assert!(!manager.is_favourite(&item.id));
        assert_eq!(manager.snapshot(), before);
    }

    #[test]
    fn add_through_manager_keeps_one_entry() {
        let mut manager = FavouritesManager::new();
        let item = job("job-1");

        assert_eq!(manager.add_favourite(item.clone()), ToggleOutcome::Added);
        assert_eq!(manager.add_favourite(item.clone()), ToggleOutcome::Unchanged);
        let count = manager.favourites().iter().filter(|j| j.id == "job-1").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn direct_store_push_duplicates() {
        let mut manager = FavouritesManager::new();
        let item = job("job-1");

        manager.store_mut().push(item.clone());
        manager.store_mut().push(item.clone());
        assert_eq!(manager.len(), 2);

        // The facade still reports membership and removes every copy.
        assert!(manager.is_favourite(&item.id));
        assert_eq!(manager.add_favourite(item.clone()), ToggleOutcome::Unchanged);
        assert_eq!(manager.remove_favourite(&item.id), ToggleOutcome::Removed);
        assert!(manager.is_empty());
    }

    #[test]
    fn removing_unknown_id_leaves_list_untouched() {
        let mut manager = FavouritesManager::new();
        manager.add_favourite(job("job-1"));
        manager.add_favourite(job("job-2"));
        let before = manager.snapshot();
        let revision = manager.store().revision();

        let outcome = manager.remove_favourite(&"does-not-exist".to_string());

        assert_eq!(outcome, ToggleOutcome::Unchanged);
        assert_eq!(manager.snapshot(), before);
        assert_eq!(manager.store().revision(), revision);
    }

    #[test]
    fn empty_id_is_an_ordinary_value() {
        let mut manager = FavouritesManager::new();
        assert_eq!(manager.add_favourite(job("")), ToggleOutcome::Added);
        assert!(manager.is_favourite(&String::new()));
        assert!(!manager.is_favourite(&"x".to_string()));
    }

    #[test]
    fn membership_cache_follows_mutations() {
        let mut manager = FavouritesManager::new();
        let movie = Movie::new(7, "Heat");

        assert!(!manager.is_favourite(&7));
        manager.add_favourite(movie);
        assert!(manager.is_favourite(&7));
        manager.remove_favourite(&7);
        assert!(!manager.is_favourite(&7));
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(ToggleOutcome::Added.message(), Some("Ajouté aux favoris"));
        assert_eq!(ToggleOutcome::Removed.message(), Some("Retiré des favoris"));
        assert_eq!(ToggleOutcome::Unchanged.message(), None);
    }
}
