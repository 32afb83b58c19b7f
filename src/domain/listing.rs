//! The `Listing` abstraction shared by jobs and movies.
//!
//! Both variants of the browser (job offers and popular movies) share the same
//! catalogue, favourites and detail machinery. Everything that differs between the
//! two item shapes goes through this trait.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Image shown when a listing has no photo or poster.
pub const IMAGE_NOT_FOUND: &str = "https://freesvg.org/img/Image-Not-Found.png";

/// Which variant of the browser a listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Job,
    Movie,
}

impl ListingKind {
    /// Catalogue header for `count` visible listings.
    #[must_use]
    pub fn catalogue_title(self, count: usize) -> String {
        match self {
            Self::Job => format!("{count} offres disponibles"),
            Self::Movie => format!("{count} films populaires"),
        }
    }

    /// Message shown when the catalogue has nothing to display.
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Job => "Aucune offre ne correspond.",
            Self::Movie => "Aucun film à afficher.",
        }
    }

    /// Placeholder of the search box.
    #[must_use]
    pub const fn search_placeholder(self) -> &'static str {
        match self {
            Self::Job => "Rechercher un poste",
            Self::Movie => "Rechercher un film",
        }
    }
}

/// Contact details attached to a listing, used by the detail screen actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactCard {
    /// Raw phone number as entered in the fixture (may contain spaces, dots).
    pub telephone: String,
    pub email: String,
    /// Address parts in display order: street number, street, postcode, city.
    pub address_parts: Vec<String>,
}

/// An item that can be browsed, searched and favourited.
///
/// The identity used for membership checks and de-duplication is [`Listing::id`],
/// never the value of the whole item.
pub trait Listing: Clone + Debug {
    /// Stable unique identity of the listing.
    type Id: Clone + Eq + Hash + Debug + Display;

    /// Variant this listing belongs to.
    const KIND: ListingKind;

    /// Whether the catalogue of this variant offers a search box.
    const SEARCHABLE: bool;

    fn id(&self) -> &Self::Id;

    /// Title used for display and for the search filter.
    fn title(&self) -> &str;

    /// Secondary line shown under the title in lists.
    fn subtitle(&self) -> String;

    /// Short text shown on list cards.
    fn summary(&self) -> &str;

    /// Image URL, falling back to [`IMAGE_NOT_FOUND`].
    fn image_url(&self) -> String;

    /// Labelled fields shown on list cards (e.g. date and salary).
    fn card_fields(&self) -> Vec<(&'static str, String)>;

    /// Labelled fields shown on the detail screen, after the title block.
    fn detail_fields(&self) -> Vec<(&'static str, String)>;

    /// Contact details for the detail screen, if this variant has any.
    fn contact_card(&self) -> Option<ContactCard> {
        None
    }
}
