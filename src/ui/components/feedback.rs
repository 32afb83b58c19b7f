//! Feedback bubble component renderer.

use crate::ui::theme::Theme;

/// Renders the transient message as a highlighted pill, centered on its
/// visible width.
pub fn render_feedback(message: &str, theme: &Theme, cols: usize) -> String {
    let pill = format!(" {message} ");
    let padding = cols.saturating_sub(pill.chars().count()) / 2;

    format!(
        "{}{}{}{}{pill}{}",
        " ".repeat(padding),
        theme.bold_code(),
        theme.fg_code(&theme.colors.feedback_fg),
        theme.bg_code(&theme.colors.feedback_bg),
        theme.reset_code()
    )
}
