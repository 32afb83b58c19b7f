//! Read side of the browser: search, de-duplication and list presentation.
//!
//! ```text
//! fixtures → filter (query) → present (dedup + favourite flag) → view model
//! ```

pub mod dedup;
pub mod filter;
pub mod presenter;

pub use dedup::dedup_by_id;
pub use filter::{filter, filter_cloned, match_range, normalize_query};
pub use presenter::{present, toggle_label, toggle_with_feedback, ListEntry};
