//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information like highlight ranges, favourite flags and button labels.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use favoris::ui::viewmodel::{FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title: "0 offres disponibles".to_string(),
//!         favourites_button: Some("Favoris (0)".to_string()),
//!     },
//!     search_bar: None,
//!     display_items: vec![],
//!     empty_state: None,
//!     detail: None,
//!     feedback: None,
//!     footer: FooterInfo { keybindings: "quit".to_string() },
//! };
//! assert!(vm.display_items.is_empty());
//! ```

/// Complete UI view model for one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Header information (title, favourites shortcut).
    pub header: HeaderInfo,

    /// Search box, only on the catalogue of a searchable variant.
    pub search_bar: Option<SearchBarInfo>,

    /// Cards of the catalogue or favourites list, de-duplicated.
    pub display_items: Vec<DisplayItem>,

    /// Shown instead of the list when there is nothing to display.
    pub empty_state: Option<EmptyState>,

    /// Detail screen content.
    pub detail: Option<DetailView>,

    /// Message of the feedback bubble, while it is showing.
    pub feedback: Option<String>,

    /// Footer information (command hints).
    pub footer: FooterInfo,
}

/// Display information for one list card.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image_url: String,

    /// Labelled values shown under the title.
    pub fields: Vec<(String, String)>,

    /// Description excerpt.
    pub summary: String,

    pub is_favourite: bool,

    /// Label of the favourite button.
    pub toggle_label: String,

    /// Character ranges of the title to highlight (search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in char indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Detail screen of one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub fields: Vec<(String, String)>,
    pub is_favourite: bool,
    pub toggle_label: String,

    /// Contact block; empty for listings without contact details.
    pub contacts: Vec<ContactLine>,
}

/// One line of the contact block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLine {
    pub label: String,
    pub value: String,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// Label of the favourites shortcut, e.g. `Favoris (2)`.
    pub favourites_button: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text, as typed.
    pub query: String,

    /// Shown when the query is empty.
    pub placeholder: String,
}
