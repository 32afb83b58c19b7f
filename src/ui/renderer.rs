//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components. It picks the layout for the
//! current screen: list (catalogue, favourites) or detail.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Output is returned as a `String` so the caller decides where it goes.
//!
//! # Example
//!
//! ```rust
//! use favoris::app::AppState;
//! use favoris::contact::Platform;
//! use favoris::feedback::FeedbackBubble;
//! use favoris::ui::{render, Theme};
//! use favoris::Job;
//!
//! let state = AppState::new(
//!     vec![Job::new("job-1", "Chef de Projet")],
//!     FeedbackBubble::default(),
//!     Platform::Desktop,
//!     Theme::plain(),
//! );
//! assert!(render(&state, 80).contains("1 offres disponibles"));
//! ```

use crate::app::AppState;
use crate::domain::Listing;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the current screen of `state` for a terminal `cols` wide.
#[must_use]
pub fn render<T: Listing>(state: &AppState<T>, cols: usize) -> String {
    let _span = tracing::trace_span!("render", cols).entered();

    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a view model: the detail layout when it carries a detail page,
/// the list layout otherwise.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let lines = match &vm.detail {
        Some(detail) => components::render_detail_mode(vm, detail, theme, cols),
        None => components::render_list_mode(vm, theme, cols),
    };

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
