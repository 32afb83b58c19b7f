//! Job offer domain model.
//!
//! Job offers come from the bundled `jobs.json` fixture whose keys are French and
//! camelCased (`salaireAnnuel`, `codePostal`, ...). Dates are free-form strings and
//! are displayed as-is.

use serde::{Deserialize, Serialize};

use super::listing::{ContactCard, Listing, ListingKind, IMAGE_NOT_FOUND};

/// A job offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub poste: String,
    pub entreprise: String,
    pub ville: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub email: String,
    /// Gross annual salary, never negative in the fixtures.
    #[serde(default)]
    pub salaire_annuel: f64,
    #[serde(default)]
    pub numero_rue: String,
    #[serde(default)]
    pub rue: String,
    #[serde(default)]
    pub code_postal: Option<String>,
    /// Company photo URL, empty when the company has none.
    #[serde(default)]
    pub entreprise_photo: String,
}

impl Job {
    /// Creates a job with the given identity and title; every other field is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use favoris::Job;
    ///
    /// let job = Job::new("job-1", "Développeur Rust");
    /// assert_eq!(job.poste, "Développeur Rust");
    /// assert!(job.code_postal.is_none());
    /// ```
    pub fn new(id: impl Into<String>, poste: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            poste: poste.into(),
            entreprise: String::new(),
            ville: String::new(),
            description: String::new(),
            date: String::new(),
            telephone: String::new(),
            email: String::new(),
            salaire_annuel: 0.0,
            numero_rue: String::new(),
            rue: String::new(),
            code_postal: None,
            entreprise_photo: String::new(),
        }
    }

    /// Annual salary formatted the French way, e.g. `45 000 €`.
    ///
    /// Thousands are separated by a narrow no-break space and decimals (at most
    /// three) by a comma.
    #[must_use]
    pub fn formatted_salary(&self) -> String {
        format!("{} €", format_fr_number(self.salaire_annuel))
    }
}

/// Formats a non-negative number with French digit grouping.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_fr_number(value: f64) -> String {
    let rounded = (value.max(0.0) * 1000.0).round() / 1000.0;
    let int_part = rounded.trunc() as u64;
    let frac = ((rounded - rounded.trunc()) * 1000.0).round() as u64;

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{202F}');
        }
        grouped.push(ch);
    }

    if frac > 0 {
        let decimals = format!("{frac:03}");
        grouped.push(',');
        grouped.push_str(decimals.trim_end_matches('0'));
    }

    grouped
}

impl Listing for Job {
    type Id = String;

    const KIND: ListingKind = ListingKind::Job;
    const SEARCHABLE: bool = true;

    fn id(&self) -> &String {
        &self.id
    }

    fn title(&self) -> &str {
        &self.poste
    }

    fn subtitle(&self) -> String {
        format!("{} • {}", self.entreprise, self.ville)
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn image_url(&self) -> String {
        if self.entreprise_photo.trim().is_empty() {
            IMAGE_NOT_FOUND.to_string()
        } else {
            self.entreprise_photo.clone()
        }
    }

    fn card_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Publié le", self.date.clone()),
            ("Salaire annuel", self.formatted_salary()),
        ]
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Entreprise", self.entreprise.clone()),
            ("Ville", self.ville.clone()),
            ("Publié le", self.date.clone()),
            ("Salaire annuel", self.formatted_salary()),
            ("Description du poste", self.description.clone()),
        ]
    }

    fn contact_card(&self) -> Option<ContactCard> {
        Some(ContactCard {
            telephone: self.telephone.clone(),
            email: self.email.clone(),
            address_parts: vec![
                self.numero_rue.clone(),
                self.rue.clone(),
                self.code_postal.clone().unwrap_or_default(),
                self.ville.clone(),
            ],
        })
    }
}
