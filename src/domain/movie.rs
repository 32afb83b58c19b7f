//! Movie domain model.
//!
//! Movies come from paged TMDB-style fixtures (`{"results": [...]}`), keys are
//! snake_case and extra keys such as `adult` or `genre_ids` are ignored.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::listing::{Listing, ListingKind, IMAGE_NOT_FOUND};

/// Base URL prepended to `poster_path`.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// A popular movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub overview: String,
    /// Release date as found in the fixture, usually `YYYY-MM-DD`.
    #[serde(default)]
    pub release_date: String,
    /// Partial poster path (e.g. `/abc.jpg`), appended to [`POSTER_BASE_URL`].
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
}

impl Movie {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id,
            original_title: title.clone(),
            title,
            original_language: String::new(),
            overview: String::new(),
            release_date: String::new(),
            poster_path: None,
            vote_average: 0.0,
            vote_count: 0,
            popularity: 0.0,
        }
    }

    /// Year of release, or `None` when `release_date` is not an ISO date.
    ///
    /// # Examples
    ///
    /// ```
    /// use favoris::Movie;
    ///
    /// let mut movie = Movie::new(1, "Dune");
    /// movie.release_date = "2021-09-15".to_string();
    /// assert_eq!(movie.release_year(), Some(2021));
    ///
    /// movie.release_date = "bientôt".to_string();
    /// assert_eq!(movie.release_year(), None);
    /// ```
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(self.release_date.trim(), "%Y-%m-%d")
            .ok()
            .map(|date| date.year())
    }

    /// Average rating as displayed on cards, e.g. `7.8 / 10`.
    #[must_use]
    pub fn rating(&self) -> String {
        format!("{:.1} / 10", self.vote_average)
    }

    fn display_title(&self) -> &str {
        if self.original_title.is_empty() {
            &self.title
        } else {
            &self.original_title
        }
    }
}

impl Listing for Movie {
    type Id = i64;

    const KIND: ListingKind = ListingKind::Movie;
    const SEARCHABLE: bool = false;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn title(&self) -> &str {
        self.display_title()
    }

    fn subtitle(&self) -> String {
        self.release_date.clone()
    }

    fn summary(&self) -> &str {
        &self.overview
    }

    fn image_url(&self) -> String {
        match self.poster_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => format!("{POSTER_BASE_URL}{path}"),
            _ => IMAGE_NOT_FOUND.to_string(),
        }
    }

    fn card_fields(&self) -> Vec<(&'static str, String)> {
        vec![("Note", self.rating())]
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![];
        if self.title != self.original_title && !self.title.is_empty() {
            fields.push(("Titre", self.title.clone()));
        }
        fields.push(("Langue originale", self.original_language.clone()));
        fields.push(("Sortie", self.release_date.clone()));
        fields.push(("Note", format!("{} ({} votes)", self.rating(), self.vote_count)));
        fields.push(("Popularité", format!("{:.1}", self.popularity)));
        fields.push(("Synopsis", self.overview.clone()));
        fields
    }
}
