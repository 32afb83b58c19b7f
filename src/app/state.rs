//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container of the browser.
//! It owns the catalogue, the favourites, the feedback bubble and the navigation
//! stack, and turns them into a [`UIViewModel`] for the current screen.
//!
//! # State Components
//!
//! - **Catalogue**: every listing loaded from the fixtures, in fixture order
//! - **Filtered**: catalogue narrowed by the search query
//! - **Favourites**: the process-wide favourites list, behind its facade
//! - **Feedback**: the transient message bubble
//! - **Navigation**: stack of screens rooted at the catalogue

use crate::app::screens::{NavigationStack, Screen};
use crate::catalog::{self, ListEntry};
use crate::contact::Platform;
use crate::domain::{ContactCard, Listing};
use crate::favourites::FavouritesManager;
use crate::feedback::FeedbackBubble;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ContactLine, DetailView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo,
    UIViewModel,
};

/// Longest summary shown on a list card, in chars.
const SUMMARY_MAX_CHARS: usize = 160;

/// Central application state container.
#[derive(Debug)]
pub struct AppState<T: Listing> {
    /// Every listing from the fixtures, duplicates included.
    pub catalogue: Vec<T>,

    /// Listings matching the current search query.
    ///
    /// Recomputed by `apply_search_filter()`.
    pub filtered: Vec<T>,

    /// Raw search query as typed.
    pub search_query: String,

    pub favourites: FavouritesManager<T>,

    pub feedback: FeedbackBubble,

    pub navigation: NavigationStack<T::Id>,

    /// Decides which phone URL schemes are tried.
    pub platform: Platform,

    pub theme: Theme,
}

impl<T: Listing> AppState<T> {
    /// Creates the state for a freshly loaded catalogue.
    ///
    /// Favourites start empty and the catalogue screen is shown unfiltered.
    #[must_use]
    pub fn new(catalogue: Vec<T>, feedback: FeedbackBubble, platform: Platform, theme: Theme) -> Self {
        let filtered = catalogue.clone();
        Self {
            catalogue,
            filtered,
            search_query: String::new(),
            favourites: FavouritesManager::new(),
            feedback,
            navigation: NavigationStack::default(),
            platform,
            theme,
        }
    }

    /// Screen on top of the navigation stack.
    #[must_use]
    pub fn current_screen(&self) -> &Screen<T::Id> {
        self.navigation.current()
    }

    /// Recomputes `filtered` from the catalogue and the search query.
    pub fn apply_search_filter(&mut self) {
        self.filtered = catalog::filter_cloned(&self.catalogue, &self.search_query);
    }

    /// Finds a listing by id, in the catalogue first and then in the favourites.
    #[must_use]
    pub fn find_listing(&self, id: &T::Id) -> Option<&T> {
        self.catalogue
            .iter()
            .find(|item| item.id() == id)
            .or_else(|| self.favourites.get(id))
    }

    /// Contact card of the listing on the current detail screen.
    #[must_use]
    pub fn current_contact_card(&self) -> Option<ContactCard> {
        self.navigation
            .details_id()
            .and_then(|id| self.find_listing(id))
            .and_then(T::contact_card)
    }

    /// Computes the renderable view model of the current screen.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let mut vm = match self.current_screen() {
            Screen::Catalogue => self.catalogue_viewmodel(),
            Screen::Favourites => self.favourites_viewmodel(),
            Screen::Details(id) => self.details_viewmodel(id),
        };
        vm.feedback = self.feedback.message().map(String::from);
        vm
    }

    fn catalogue_viewmodel(&self) -> UIViewModel {
        let entries = catalog::present(&self.filtered, &self.favourites);
        let query = if T::SEARCHABLE { self.search_query.as_str() } else { "" };

        let display_items: Vec<DisplayItem> = entries
            .iter()
            .map(|entry| Self::compute_display_item(entry, query))
            .collect();

        let empty_state = display_items.is_empty().then(|| EmptyState {
            message: T::KIND.empty_message().to_string(),
        });

        UIViewModel {
            header: HeaderInfo {
                title: T::KIND.catalogue_title(display_items.len()),
                favourites_button: Some(self.favourites_button()),
            },
            search_bar: T::SEARCHABLE.then(|| SearchBarInfo {
                query: self.search_query.clone(),
                placeholder: T::KIND.search_placeholder().to_string(),
            }),
            display_items,
            empty_state,
            detail: None,
            feedback: None,
            footer: self.compute_footer(),
        }
    }

    fn favourites_viewmodel(&self) -> UIViewModel {
        let entries = catalog::present(self.favourites.favourites(), &self.favourites);

        let display_items: Vec<DisplayItem> = entries
            .iter()
            .map(|entry| Self::compute_display_item(entry, ""))
            .collect();

        let empty_state = display_items.is_empty().then(|| EmptyState {
            message: "Aucun favori pour le moment.".to_string(),
        });

        UIViewModel {
            header: HeaderInfo {
                title: format!("Favoris ({})", display_items.len()),
                favourites_button: None,
            },
            search_bar: None,
            display_items,
            empty_state,
            detail: None,
            feedback: None,
            footer: self.compute_footer(),
        }
    }

    fn details_viewmodel(&self, id: &T::Id) -> UIViewModel {
        let detail = self.find_listing(id).map(|item| {
            let is_favourite = self.favourites.is_favourite(item.id());
            DetailView {
                id: item.id().to_string(),
                title: item.title().to_string(),
                subtitle: item.subtitle(),
                image_url: item.image_url(),
                fields: owned_fields(item.detail_fields()),
                is_favourite,
                toggle_label: catalog::toggle_label(is_favourite).to_string(),
                contacts: item.contact_card().map_or_else(Vec::new, |card| contact_lines(&card)),
            }
        });

        let empty_state = detail.is_none().then(|| EmptyState {
            message: "Annonce introuvable.".to_string(),
        });

        UIViewModel {
            header: HeaderInfo {
                title: detail.as_ref().map_or_else(String::new, |d| d.title.clone()),
                favourites_button: None,
            },
            search_bar: None,
            display_items: vec![],
            empty_state,
            detail,
            feedback: None,
            footer: self.compute_footer(),
        }
    }

    fn compute_display_item(entry: &ListEntry<'_, T>, query: &str) -> DisplayItem {
        let item = entry.item;
        DisplayItem {
            id: item.id().to_string(),
            title: item.title().to_string(),
            subtitle: item.subtitle(),
            image_url: item.image_url(),
            fields: owned_fields(item.card_fields()),
            summary: excerpt(item.summary(), SUMMARY_MAX_CHARS),
            is_favourite: entry.is_favourite,
            toggle_label: entry.toggle_label().to_string(),
            highlight_ranges: catalog::match_range(item.title(), query).into_iter().collect(),
        }
    }

    fn favourites_button(&self) -> String {
        format!("Favoris ({})", self.favourites.len())
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.current_screen() {
            Screen::Catalogue if T::SEARCHABLE => {
                "search <texte>  open <id>  fav <id>  favs  quit"
            }
            Screen::Catalogue => "open <id>  fav <id>  favs  quit",
            Screen::Favourites => "open <id>  fav <id>  back  quit",
            Screen::Details(_) if self.current_contact_card().is_some() => {
                "fav  call  mail  map  back  quit"
            }
            Screen::Details(_) => "fav  back  quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

fn owned_fields(fields: Vec<(&'static str, String)>) -> Vec<(String, String)> {
    fields
        .into_iter()
        .map(|(label, value)| (label.to_string(), value))
        .collect()
}

fn contact_lines(card: &ContactCard) -> Vec<ContactLine> {
    let address = card
        .address_parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    vec![
        ContactLine {
            label: "Téléphone".to_string(),
            value: card.telephone.clone(),
        },
        ContactLine {
            label: "Email".to_string(),
            value: card.email.clone(),
        },
        ContactLine {
            label: "Adresse".to_string(),
            value: address,
        },
    ]
}

/// Shortens `text` to `max_chars`, ending with an ellipsis when cut.
fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}
