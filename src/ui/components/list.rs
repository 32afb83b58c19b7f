//! List component renderer.
//!
//! Renders catalogue and favourites cards. Each card shows the favourite
//! marker, the title with search matches highlighted, the id to type in
//! commands, the subtitle, the card fields, the summary and the label of the
//! favourite button.

use crate::ui::helpers::{self, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Left indent of every line under the title.
const CARD_INDENT: &str = "    ";

/// Renders every card, separated by a blank line.
pub fn render_list(items: &[DisplayItem], theme: &Theme, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.extend(render_card(item, theme, cols));
    }
    lines
}

fn render_card(item: &DisplayItem, theme: &Theme, cols: usize) -> Vec<String> {
    let normal = theme.fg_code(&theme.colors.text_normal);
    let dim = theme.fg_code(&theme.colors.text_dim);
    let reset = theme.reset_code();
    let marker = if item.is_favourite { "♥" } else { "♡" };

    let mut lines = vec![format!(
        "{}{marker}{reset}  {}{normal}{}{reset}  {dim}[{}]{reset}",
        theme.fg_code(&theme.colors.favourite_fg),
        theme.bold_code(),
        helpers::highlight(&item.title, &item.highlight_ranges, theme),
        item.id,
    )];

    if !item.subtitle.is_empty() {
        lines.push(format!("{CARD_INDENT}{normal}{}{reset}", item.subtitle));
    }

    let fields = item
        .fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{label} : {value}"))
        .collect::<Vec<_>>()
        .join(" · ");
    if !fields.is_empty() {
        lines.push(format!("{CARD_INDENT}{dim}{fields}{reset}"));
    }

    if !item.summary.is_empty() {
        let width = cols.saturating_sub(CARD_INDENT.len());
        lines.push(format!("{CARD_INDENT}{dim}{}{reset}", truncate(&item.summary, width)));
    }

    lines.push(format!("{CARD_INDENT}{normal}[ {} ]{reset}", item.toggle_label));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(is_favourite: bool) -> DisplayItem {
        DisplayItem {
            id: "job-1".into(),
            title: "Chef de Projet".into(),
            subtitle: "Acme · Lyon".into(),
            image_url: String::new(),
            fields: vec![("Salaire".into(), "45 000 €".into()), ("Date".into(), String::new())],
            summary: String::new(),
            is_favourite,
            toggle_label: if is_favourite { "Retirer des favoris" } else { "Ajouter aux favoris" }.into(),
            highlight_ranges: vec![],
        }
    }

    #[test]
    fn card_lines() {
        let lines = render_list(&[item(false)], &Theme::plain(), 80);
        assert_eq!(
            lines,
            vec![
                "♡  Chef de Projet  [job-1]",
                "    Acme · Lyon",
                "    Salaire : 45 000 €",
                "    [ Ajouter aux favoris ]",
            ]
        );
    }

    #[test]
    fn cards_are_separated() {
        let lines = render_list(&[item(true), item(false)], &Theme::plain(), 80);
        assert!(lines[0].starts_with('♥'));
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with('♡'));
    }
}
