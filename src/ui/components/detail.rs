//! Detail screen component renderer.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Renders a listing's detail page: image, subtitle, fields, contacts and the
/// favourite button.
pub fn render_detail(detail: &DetailView, theme: &Theme, cols: usize) -> Vec<String> {
    let normal = theme.fg_code(&theme.colors.text_normal);
    let dim = theme.fg_code(&theme.colors.text_dim);
    let reset = theme.reset_code();

    let mut lines = vec![
        format!("{dim}{}{reset}", center(&detail.image_url, cols)),
        format!("{normal}{}{reset}", center(&detail.subtitle, cols)),
        String::new(),
    ];

    for (label, value) in detail.fields.iter().filter(|(_, value)| !value.is_empty()) {
        lines.push(format!("{}{label}{reset}", theme.bold_code()));
        lines.extend(value.lines().map(|line| format!("  {normal}{line}{reset}")));
    }

    if !detail.contacts.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}Contact{reset}", theme.bold_code()));
        for contact in &detail.contacts {
            let value = if contact.value.trim().is_empty() { "-" } else { contact.value.as_str() };
            lines.push(format!("  {dim}{} :{reset} {normal}{value}{reset}", contact.label));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{}{}{}{reset}",
        theme.fg_code(&theme.colors.favourite_fg),
        if detail.is_favourite { "♥ " } else { "♡ " },
        detail.toggle_label
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::ContactLine;

    #[test]
    fn contacts_and_button() {
        let detail = DetailView {
            id: "job-1".into(),
            title: "Chef de Projet".into(),
            subtitle: "Acme".into(),
            image_url: "img".into(),
            fields: vec![("Description".into(), "Ligne 1\nLigne 2".into())],
            is_favourite: true,
            toggle_label: "Retirer des favoris".into(),
            contacts: vec![
                ContactLine { label: "Téléphone".into(), value: "01".into() },
                ContactLine { label: "Email".into(), value: String::new() },
            ],
        };

        let lines = render_detail(&detail, &Theme::plain(), 10);
        assert_eq!(lines[0], "   img");
        assert_eq!(&lines[3..6], ["Description", "  Ligne 1", "  Ligne 2"]);
        assert!(lines.contains(&"  Email : -".to_string()));
        assert_eq!(lines.last().unwrap(), "♥ Retirer des favoris");
    }
}
