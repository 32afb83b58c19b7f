//! Shared rendering utilities and helpers.
//!
//! Low-level text helpers used across the UI components: match highlighting
//! with proper ANSI escape sequence management, and width-aware padding.
//! Everything operates on char indices and char counts, never on bytes.

use crate::ui::theme::Theme;

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` char indices, start inclusive and end exclusive,
/// sorted and non-overlapping. Ranges beyond the text are clamped.
///
/// # Example
///
/// ```rust
/// use favoris::ui::helpers::highlight;
/// use favoris::ui::Theme;
///
/// assert_eq!(highlight("Chef de Projet", &[(0, 4)], &Theme::plain()), "Chef de Projet");
/// assert!(highlight("Chef", &[(0, 4)], &Theme::dark()).contains("\u{1b}[48;2;"));
/// ```
#[must_use]
pub fn highlight(text: &str, ranges: &[(usize, usize)], theme: &Theme) -> String {
    if ranges.is_empty() || theme.plain {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        out.extend(&chars[current_pos..start]);
        out.push_str(&theme.fg_code(&theme.colors.match_highlight_fg));
        out.push_str(&theme.bg_code(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(theme.reset_code());
        out.push_str(&theme.fg_code(&theme.colors.text_normal));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    out
}

/// Centers `text` in `cols` columns. Text wider than `cols` is left as is.
#[must_use]
pub fn center(text: &str, cols: usize) -> String {
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;
    format!("{}{text}", " ".repeat(padding))
}

/// Cuts `text` to at most `cols` chars.
#[must_use]
pub fn truncate(text: &str, cols: usize) -> String {
    text.chars().take(cols).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_wraps_only_the_range() {
        let theme = Theme::dark();
        let out = highlight("Développeur", &[(0, 3)], &theme);
        let hl_bg = Theme::bg(&theme.colors.match_highlight_bg);
        let (before, after) = out.split_once(&hl_bg).unwrap();
        assert!(before.ends_with(&Theme::fg(&theme.colors.match_highlight_fg)));
        assert!(after.starts_with("Dév"));
        assert!(after.ends_with("eloppeur"));
    }

    #[test]
    fn highlight_clamps_ranges() {
        let theme = Theme::dark();
        let out = highlight("abc", &[(1, 99)], &theme);
        assert!(out.starts_with('a'));
        assert!(out.contains("bc"));
    }

    #[test]
    fn center_and_truncate_count_chars() {
        assert_eq!(center("été", 7), "  été");
        assert_eq!(center("long text", 4), "long text");
        assert_eq!(truncate("éèê", 2), "éè");
    }
}
