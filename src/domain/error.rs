//! Error types for the favourites browser.
//!
//! This module defines the centralized error type [`FavorisError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. Favourites,
//! filtering and de-duplication are total and never fail; errors only arise at the
//! edges (fixture loading, configuration, link opening, events naming an unknown
//! listing).

use thiserror::Error;

/// The main error type for favoris operations.
///
/// # Examples
///
/// ```
/// use favoris::FavorisError;
///
/// fn validate_variant(name: &str) -> Result<(), FavorisError> {
///     Err(FavorisError::Config(format!("unknown variant: {name}")))
/// }
///
/// assert!(validate_variant("books").is_err());
/// ```
#[derive(Debug, Error)]
pub enum FavorisError {
    /// Fixture data has the wrong shape.
    ///
    /// The string names the fixture and what was wrong with it.
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when configuration values are malformed or a config file cannot be
    /// parsed. The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An event referenced a listing that is neither in the catalogue nor in the
    /// favourites list.
    #[error("Unknown listing: {0}")]
    UnknownListing(String),

    /// The platform refused to open a link.
    #[error("Link error: {0}")]
    Link(String),
}

/// A specialized `Result` type for favoris operations.
pub type Result<T> = std::result::Result<T, FavorisError>;
