//! Favourites management.
//!
//! - [`store`]: the in-memory list and its raw, non-idempotent mutations
//! - [`manager`]: the idempotent facade used by every screen
//!
//! The list lives for the lifetime of the process; nothing is persisted.

pub mod manager;
pub mod store;

pub use manager::{FavouritesManager, ToggleOutcome};
pub use store::{FavouritesState, FavouritesStore, SubscriptionId};
