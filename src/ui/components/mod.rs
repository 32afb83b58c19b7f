//! Composable UI component renderers.
//!
//! Each component turns one part of the view model into text lines. The
//! layout functions at the bottom stack them into a screen.
//!
//! # Components
//!
//! - [`header`]: Title bar and favourites shortcut
//! - [`search`]: Search input box
//! - [`list`]: Catalogue and favourites cards
//! - [`detail`]: Detail page with contact block
//! - [`empty`]: Empty state message
//! - [`feedback`]: Feedback bubble
//! - [`footer`]: Command hints
//!
//! # Layout Modes
//!
//! - [`render_list_mode`]: Header + optional `SearchBar` + cards or empty state
//! - [`render_detail_mode`]: Header + detail page

mod detail;
mod empty;
mod feedback;
mod footer;
mod header;
mod list;
mod search;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use feedback::render_feedback;
use footer::render_footer;
use header::render_header;
use list::render_list;
use search::render_search_bar;

/// Renders a horizontal border line.
fn render_border(color: &str, theme: &Theme, cols: usize) -> String {
    format!("{}{}{}", theme.fg_code(color), "─".repeat(cols), theme.reset_code())
}

/// Renders the list layout.
///
/// ```text
/// [Header]
/// [Border]
/// [SearchBar - 3 lines, searchable catalogue only]
/// [Cards | Empty state]
/// [Feedback, while showing]
/// [Border]
/// [Footer]
/// ```
pub fn render_list_mode(vm: &UIViewModel, theme: &Theme, cols: usize) -> Vec<String> {
    let mut lines = render_header(&vm.header, theme, cols);
    lines.push(render_border(&theme.colors.border, theme, cols));

    if let Some(search) = &vm.search_bar {
        lines.extend(render_search_bar(search, theme, cols));
    }

    match &vm.empty_state {
        Some(empty) => lines.extend(render_empty_state(empty, theme, cols)),
        None => lines.extend(render_list(&vm.display_items, theme, cols)),
    }

    push_bottom(&mut lines, vm, theme, cols);
    lines
}

/// Renders the detail layout.
pub fn render_detail_mode(
    vm: &UIViewModel,
    detail: &DetailView,
    theme: &Theme,
    cols: usize,
) -> Vec<String> {
    let mut lines = render_header(&vm.header, theme, cols);
    lines.push(render_border(&theme.colors.border, theme, cols));
    lines.extend(render_detail(detail, theme, cols));

    push_bottom(&mut lines, vm, theme, cols);
    lines
}

fn push_bottom(lines: &mut Vec<String>, vm: &UIViewModel, theme: &Theme, cols: usize) {
    if let Some(message) = &vm.feedback {
        lines.push(String::new());
        lines.push(render_feedback(message, theme, cols));
    }
    lines.push(render_border(&theme.colors.border, theme, cols));
    lines.push(render_footer(&vm.footer, theme, cols));
}
