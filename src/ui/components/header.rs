//! Header component renderer.
//!
//! Renders the screen title bar, centered and bold, followed by the
//! favourites shortcut when the screen has one.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header lines.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE
/// [left padding] ♥ Favoris (n)
/// ```
pub fn render_header(header: &HeaderInfo, theme: &Theme, cols: usize) -> Vec<String> {
    let mut style = String::from(theme.bold_code());
    style.push_str(&theme.fg_code(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        style.push_str(&theme.bg_code(bg));
    }

    let mut lines = vec![format!(
        "{style}{}{}",
        center(&header.title, cols),
        theme.reset_code()
    )];

    if let Some(button) = &header.favourites_button {
        lines.push(format!(
            "{}{}{}",
            theme.fg_code(&theme.colors.favourite_fg),
            center(&format!("♥ {button}"), cols),
            theme.reset_code()
        ));
    }
    lines
}
