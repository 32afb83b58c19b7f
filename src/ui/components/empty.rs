//! Empty state component renderer.
//!
//! Shown instead of the list when the search matches nothing, when there are
//! no favourites yet, or when a detail screen lost its listing.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message, centered, after a blank line.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "{}{}{}",
            theme.fg_code(&theme.colors.empty_state_fg),
            center(&empty.message, cols),
            theme.reset_code()
        ),
        String::new(),
    ]
}
