//! Infrastructure layer for filesystem and platform interactions.
//!
//! - [`opener`]: hands contact URLs to the system URL handler
//! - [`paths`]: resolves user-supplied paths

pub mod opener;
pub mod paths;

pub use opener::SystemOpener;
pub use paths::expand_tilde;
