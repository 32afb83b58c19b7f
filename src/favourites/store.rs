//! In-memory favourites store.
//!
//! [`FavouritesStore`] is the single owner of the favourites list. It accepts two
//! raw mutations, `push` and `remove`, neither of which checks for duplicates.
//! Both are crate-private: outside the crate the list can only be mutated through
//! [`FavouritesManager`](super::FavouritesManager), which is what makes adds
//! idempotent.
//!
//! Readers subscribe to committed changes and are notified synchronously, in
//! registration order, after every mutation that changed the list.

use crate::domain::Listing;
use serde::{Deserialize, Serialize};

/// Serializable shape of the favourites list.
///
/// ```json
/// { "value": [ { "id": "job-1", "poste": "..." } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavouritesState<T> {
    /// Favourited items in insertion order.
    pub value: Vec<T>,
}

impl<T> Default for FavouritesState<T> {
    fn default() -> Self {
        Self { value: Vec::new() }
    }
}

/// Handle returned by [`FavouritesStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&[T])>;

/// Authoritative, insertion-ordered list of favourited items.
pub struct FavouritesStore<T: Listing> {
    state: FavouritesState<T>,

    /// Bumped on every committed mutation.
    revision: u64,

    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_subscription: u64,
}

impl<T: Listing> Default for FavouritesStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Listing> std::fmt::Debug for FavouritesStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavouritesStore")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T: Listing> FavouritesStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FavouritesState::default(),
            revision: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current favourites in insertion order.
    #[must_use]
    pub fn list(&self) -> &[T] {
        &self.state.value
    }

    /// Revision of the list, incremented by every committed mutation.
    ///
    /// Two equal revisions observed on the same store guarantee the list did not
    /// change in between.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Clones the current state.
    #[must_use]
    pub fn snapshot(&self) -> FavouritesState<T> {
        self.state.clone()
    }

    /// Appends `item` unconditionally, even when its id is already present.
    pub(crate) fn push(&mut self, item: T) {
        let _span = tracing::debug_span!("favourites_push", id = %item.id()).entered();

        self.state.value.push(item);
        self.commit();
    }

    /// Removes every entry whose id equals `id`.
    ///
    /// Returns the number of removed entries. When nothing matches the list, the
    /// revision and subscribers are left untouched.
    pub(crate) fn remove(&mut self, id: &T::Id) -> usize {
        let _span = tracing::debug_span!("favourites_remove", id = %id).entered();

        let before = self.state.value.len();
        self.state.value.retain(|item| item.id() != id);
        let removed = before - self.state.value.len();

        if removed == 0 {
            tracing::debug!("no matching favourite, list unchanged");
        } else {
            self.commit();
        }
        removed
    }

    /// Registers a callback invoked with the new list after each committed mutation.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&[T]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        tracing::debug!(subscription = id.0, "favourites subscriber registered");
        id
    }

    /// Removes a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        before != self.subscribers.len()
    }

    fn commit(&mut self) {
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            count = self.state.value.len(),
            "favourites committed"
        );

        let list = &self.state.value;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(list);
        }
    }
}
