//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! runtime notifications, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the runtime one at a time, in dispatch order
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and the favourites facade
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `OpenDetails`, `OpenFavourites`, `Back`
//! - **Input**: `SearchChanged`, `ToggleFavourite`
//! - **Contact**: `CallPhone`, `SendEmail`, `OpenAddress`, `LinkFailed`
//! - **Runtime**: `Tick`, `Quit`

use std::time::Instant;

use crate::app::{Action, AppState, Screen};
use crate::catalog;
use crate::contact::{self, ContactRequest};
use crate::domain::{ContactCard, FavorisError, Listing, Result};

/// Events triggered by user input or the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<Id> {
    /// The search box text changed. Ignored by variants without search.
    SearchChanged(String),

    /// Favourite button pressed for a listing.
    ToggleFavourite(Id),

    /// Opens the detail screen of a listing.
    OpenDetails(Id),

    /// Opens the favourites screen.
    OpenFavourites,

    /// Returns to the previous screen.
    Back,

    /// Calls the phone number of the listing on the detail screen.
    CallPhone,

    /// Writes to the e-mail address of the listing on the detail screen.
    SendEmail,

    /// Shows the address of the listing on the detail screen on a map.
    OpenAddress,

    /// Reports that no candidate of an [`Action::OpenUrl`] could be opened.
    LinkFailed {
        /// The action's fallback message.
        message: String,
    },

    /// Lets time-based state (the feedback bubble) advance.
    Tick,

    /// Leaves the browser.
    Quit,
}

/// Which contact action to prepare.
#[derive(Debug, Clone, Copy)]
enum ContactKind {
    Phone,
    Email,
    Address,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the view must be re-rendered.
///
/// # Errors
///
/// Returns [`FavorisError::UnknownListing`] when an event names an id that is
/// neither in the catalogue nor in the favourites.
pub fn handle_event<T: Listing>(
    state: &mut AppState<T>,
    event: &Event<T::Id>,
    now: Instant,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchChanged(query) => {
            if !T::SEARCHABLE {
                tracing::debug!("search is not available for this variant");
                return Ok((false, vec![]));
            }

            let unchanged = catalog::normalize_query(query)
                == catalog::normalize_query(&state.search_query);
            state.search_query.clone_from(query);
            if unchanged {
                // The box still shows the raw text, the results are the same.
                return Ok((true, vec![]));
            }

            tracing::trace!(query = %state.search_query, "search query updated");
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::ToggleFavourite(id) => {
            let item = state
                .find_listing(id)
                .cloned()
                .ok_or_else(|| FavorisError::UnknownListing(id.to_string()))?;

            catalog::toggle_with_feedback(&mut state.favourites, &mut state.feedback, &item, now);
            Ok((true, vec![]))
        }
        Event::OpenDetails(id) => {
            if state.find_listing(id).is_none() {
                return Err(FavorisError::UnknownListing(id.to_string()));
            }

            let changed = state.navigation.push(Screen::Details(id.clone()));
            Ok((changed, vec![]))
        }
        Event::OpenFavourites => {
            let changed = state.navigation.push(Screen::Favourites);
            Ok((changed, vec![]))
        }
        Event::Back => Ok((state.navigation.pop(), vec![])),
        Event::CallPhone => Ok(handle_contact(state, ContactKind::Phone, now)),
        Event::SendEmail => Ok(handle_contact(state, ContactKind::Email, now)),
        Event::OpenAddress => Ok(handle_contact(state, ContactKind::Address, now)),
        Event::LinkFailed { message } => {
            tracing::debug!(message = %message, "no candidate URL could be opened");
            state.feedback.show(message.clone(), now);
            Ok((true, vec![]))
        }
        Event::Tick => Ok((state.feedback.tick(now), vec![])),
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

fn handle_contact<T: Listing>(
    state: &mut AppState<T>,
    kind: ContactKind,
    now: Instant,
) -> (bool, Vec<Action>) {
    let Some(card) = state.current_contact_card() else {
        tracing::debug!(kind = ?kind, "no contact details on this screen");
        return (false, vec![]);
    };

    match contact_request(&card, kind, state.platform) {
        ContactRequest::Unavailable { message } => {
            state.feedback.show(message, now);
            (true, vec![])
        }
        ContactRequest::Open {
            candidates,
            fallback_message,
        } if candidates.is_empty() => {
            state.feedback.show(fallback_message, now);
            (true, vec![])
        }
        ContactRequest::Open {
            candidates,
            fallback_message,
        } => (
            false,
            vec![Action::OpenUrl {
                candidates,
                fallback_message,
            }],
        ),
    }
}

fn contact_request(card: &ContactCard, kind: ContactKind, platform: contact::Platform) -> ContactRequest {
    match kind {
        ContactKind::Phone => contact::phone_request(card, platform),
        ContactKind::Email => contact::email_request(card),
        ContactKind::Address => contact::address_request(card),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Platform;
    use crate::domain::{Job, Movie};
    use crate::feedback::FeedbackBubble;
    use crate::ui::Theme;
    use std::time::Duration;

    fn state(platform: Platform) -> AppState<Job> {
        let mut job = Job::new("job-1", "Ingénieur Logiciel");
        job.telephone = "04 72 00 00 00".into();
        job.ville = "Lyon".into();
        let jobs = vec![job, Job::new("job-2", "Chef de Projet")];
        AppState::new(jobs, FeedbackBubble::default(), platform, Theme::plain())
    }

    #[test]
    fn search_filters_catalogue() {
        let mut state = state(Platform::Desktop);
        let now = Instant::now();

        let (render, actions) =
            handle_event(&mut state, &Event::SearchChanged("CHEF".into()), now).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.filtered.len(), 1);

        handle_event(&mut state, &Event::SearchChanged("   ".into()), now).unwrap();
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn search_is_ignored_for_movies() {
        let mut state = AppState::new(
            vec![Movie::new(1, "Heat"), Movie::new(2, "Alien")],
            FeedbackBubble::default(),
            Platform::Desktop,
            Theme::plain(),
        );
        let (render, _) =
            handle_event(&mut state, &Event::SearchChanged("heat".into()), Instant::now()).unwrap();
        assert!(!render);
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn toggle_shows_feedback_then_dismisses() {
        let mut state = state(Platform::Desktop);
        let now = Instant::now();

        handle_event(&mut state, &Event::ToggleFavourite("job-1".into()), now).unwrap();
        assert!(state.favourites.is_favourite(&"job-1".to_string()));
        assert_eq!(state.feedback.message(), Some("Ajouté aux favoris"));

        let later = now + state.feedback.display_duration();
        let (render, _) = handle_event(&mut state, &Event::Tick, later).unwrap();
        assert!(render);
        assert!(state.feedback.message().is_none());

        let (render, _) = handle_event(&mut state, &Event::Tick, later + Duration::from_secs(1)).unwrap();
        assert!(!render);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut state = state(Platform::Desktop);
        let now = Instant::now();

        let err = handle_event(&mut state, &Event::ToggleFavourite("nope".into()), now).unwrap_err();
        assert!(matches!(err, FavorisError::UnknownListing(id) if id == "nope"));
        assert!(handle_event(&mut state, &Event::OpenDetails("nope".into()), now).is_err());
    }

    #[test]
    fn favourite_stays_reachable_from_favourites_screen() {
        let mut state = state(Platform::Desktop);
        let now = Instant::now();

        handle_event(&mut state, &Event::ToggleFavourite("job-2".into()), now).unwrap();
        state.catalogue.retain(|j| j.id != "job-2");

        handle_event(&mut state, &Event::OpenFavourites, now).unwrap();
        handle_event(&mut state, &Event::OpenDetails("job-2".into()), now).unwrap();
        let vm = state.compute_viewmodel();
        assert_eq!(vm.detail.unwrap().toggle_label, "Retirer des favoris");

        handle_event(&mut state, &Event::ToggleFavourite("job-2".into()), now).unwrap();
        assert!(state.favourites.is_empty());
    }

    #[test]
    fn navigation_round_trip() {
        let mut state = state(Platform::Desktop);
        let now = Instant::now();

        assert!(handle_event(&mut state, &Event::OpenFavourites, now).unwrap().0);
        assert!(!handle_event(&mut state, &Event::OpenFavourites, now).unwrap().0);
        assert!(handle_event(&mut state, &Event::Back, now).unwrap().0);
        assert!(!handle_event(&mut state, &Event::Back, now).unwrap().0);
        assert_eq!(state.current_screen(), &Screen::Catalogue);
    }

    #[test]
    fn phone_on_details_emits_open_url() {
        let mut state = state(Platform::Ios);
        let now = Instant::now();
        handle_event(&mut state, &Event::OpenDetails("job-1".into()), now).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::CallPhone, now).unwrap();
        assert_eq!(
            actions,
            vec![Action::OpenUrl {
                candidates: vec!["telprompt:0472000000".into(), "tel:0472000000".into()],
                fallback_message: "Impossible d'ouvrir l'app téléphone".into(),
            }]
        );
    }

    #[test]
    fn missing_email_shows_message() {
        let mut state = state(Platform::Desktop);
        let now = Instant::now();
        handle_event(&mut state, &Event::OpenDetails("job-1".into()), now).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::SendEmail, now).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.feedback.message(), Some("Email indisponible"));
    }

    #[test]
    fn contact_outside_details_is_ignored() {
        let mut state = state(Platform::Desktop);
        let (render, actions) = handle_event(&mut state, &Event::OpenAddress, Instant::now()).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn link_failure_surfaces_fallback() {
        let mut state = state(Platform::Desktop);
        let event = Event::LinkFailed {
            message: "Impossible d'ouvrir l'app mail".into(),
        };
        handle_event(&mut state, &event, Instant::now()).unwrap();
        assert_eq!(state.feedback.message(), Some("Impossible d'ouvrir l'app mail"));
    }

    #[test]
    fn quit_emits_action() {
        let mut state = state(Platform::Desktop);
        let (_, actions) = handle_event(&mut state, &Event::Quit, Instant::now()).unwrap();
        assert_eq!(actions, vec![Action::Quit]);
    }
}
