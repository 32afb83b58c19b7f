//! Search bar component renderer.
//!
//! Renders the search input box with a bordered frame. The placeholder is
//! shown dimmed while the query is empty.

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the 3-line search box.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────────┐
/// [margin] │ 🔍 Rechercher un... │
/// [margin] └─────────────────────┘
/// ```
pub fn render_search_bar(search: &SearchBarInfo, theme: &Theme, cols: usize) -> Vec<String> {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = theme.fg_code(&theme.colors.search_bar_border);
    let reset = theme.reset_code();

    let (text, text_color) = if search.query.is_empty() {
        (&search.placeholder, theme.fg_code(&theme.colors.text_dim))
    } else {
        (&search.query, theme.fg_code(&theme.colors.text_normal))
    };
    let search_text = truncate(&format!(" {text}"), inner_width);
    let padding = inner_width.saturating_sub(search_text.chars().count());

    vec![
        format!("{margin}{border}┌{}┐{reset}", "─".repeat(inner_width)),
        format!(
            "{margin}{border}│{text_color}{search_text}{}{border}│{reset}",
            " ".repeat(padding)
        ),
        format!("{margin}{border}└{}┘{reset}", "─".repeat(inner_width)),
    ]
}
