//! Domain layer for the favourites browser.
//!
//! This module contains the item shapes of both variants and the error type,
//! independent of any UI or platform concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: The `Listing` trait shared by both variants
//! - [`job`]: Job offer model
//! - [`movie`]: Movie model

pub mod error;
pub mod job;
pub mod listing;
pub mod movie;

pub use error::{FavorisError, Result};
pub use job::Job;
pub use listing::{ContactCard, Listing, ListingKind, IMAGE_NOT_FOUND};
pub use movie::Movie;
