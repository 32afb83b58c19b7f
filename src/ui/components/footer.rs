//! Footer component renderer.

use crate::ui::helpers::{center, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the command hints centered and dimmed.
///
/// Hints wider than the terminal are truncated to fit.
pub fn render_footer(footer: &FooterInfo, theme: &Theme, cols: usize) -> String {
    let help_text = truncate(&footer.keybindings, cols);

    format!(
        "{}{}{}",
        theme.fg_code(&theme.colors.text_dim),
        center(&help_text, cols),
        theme.reset_code()
    )
}
