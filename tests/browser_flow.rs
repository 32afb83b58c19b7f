//! End-to-end flows through the public API, on the bundled fixtures.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use favoris::contact::{open_with_fallback, LinkOpener, Platform};
use favoris::fixtures::{bundled_jobs, bundled_movies};
use favoris::ui::{render, Theme};
use favoris::{handle_event, initialize, Action, AppState, Config, Event, Job, Movie, Screen};

fn plain_config() -> Config {
    Config {
        theme_name: Some("plain".into()),
        ..Config::default()
    }
}

fn jobs_state() -> AppState<Job> {
    initialize(&plain_config(), bundled_jobs().unwrap())
}

/// Opener that refuses everything.
struct NoApps;

impl LinkOpener for NoApps {
    fn can_open(&mut self, _url: &str) -> bool {
        false
    }

    fn open(&mut self, url: &str) -> favoris::Result<()> {
        Err(favoris::FavorisError::Link(url.to_string()))
    }
}

#[test]
fn catalogue_search_and_favourite() {
    let mut state = jobs_state();
    let now = Instant::now();

    let screen = render(&state, 80);
    assert!(screen.contains("4 offres disponibles"));
    assert!(screen.contains("Favoris (0)"));
    assert_eq!(screen.matches("[job-1]").count(), 1);

    handle_event(&mut state, &Event::SearchChanged("  INGÉNIEUR ".into()), now).unwrap();
    let vm = state.compute_viewmodel();
    let ids: Vec<&str> = vm.display_items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["job-1", "job-3"]);
    assert_eq!(vm.header.title, "2 offres disponibles");

    handle_event(&mut state, &Event::ToggleFavourite("job-3".into()), now).unwrap();
    let screen = render(&state, 80);
    assert!(screen.contains("Favoris (1)"));
    assert!(screen.contains("Ajouté aux favoris"));
    assert!(screen.contains("[ Retirer des favoris ]"));

    handle_event(&mut state, &Event::SearchChanged("boulanger".into()), now).unwrap();
    assert!(render(&state, 80).contains("Aucune offre ne correspond."));
}

#[test]
fn favourites_screen_tracks_toggles_from_details() {
    let mut state = jobs_state();
    let now = Instant::now();

    handle_event(&mut state, &Event::OpenDetails("job-2".into()), now).unwrap();
    handle_event(&mut state, &Event::ToggleFavourite("job-2".into()), now).unwrap();
    handle_event(&mut state, &Event::ToggleFavourite("job-2".into()), now).unwrap();
    handle_event(&mut state, &Event::ToggleFavourite("job-2".into()), now).unwrap();
    assert_eq!(state.feedback.message(), Some("Ajouté aux favoris"));

    handle_event(&mut state, &Event::Back, now).unwrap();
    handle_event(&mut state, &Event::OpenFavourites, now).unwrap();
    assert_eq!(state.current_screen(), &Screen::Favourites);

    let vm = state.compute_viewmodel();
    assert_eq!(vm.header.title, "Favoris (1)");
    assert_eq!(vm.display_items.len(), 1);
    assert!(vm.display_items[0].is_favourite);

    handle_event(&mut state, &Event::ToggleFavourite("job-2".into()), now).unwrap();
    let vm = state.compute_viewmodel();
    assert_eq!(vm.empty_state.unwrap().message, "Aucun favori pour le moment.");
}

#[test]
fn subscribers_see_every_change_in_order() {
    let mut state = jobs_state();
    let now = Instant::now();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let subscription = state.favourites.subscribe(move |items: &[Job]| {
        sink.borrow_mut()
            .push(items.iter().map(|job| job.id.clone()).collect::<Vec<_>>());
    });

    for id in ["job-1", "job-4", "job-1"] {
        handle_event(&mut state, &Event::ToggleFavourite(id.into()), now).unwrap();
    }
    assert_eq!(
        *seen.borrow(),
        vec![
            vec!["job-1".to_string()],
            vec!["job-1".to_string(), "job-4".to_string()],
            vec!["job-4".to_string()],
        ]
    );

    assert!(state.favourites.unsubscribe(subscription));
    handle_event(&mut state, &Event::ToggleFavourite("job-2".into()), now).unwrap();
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn failed_contact_link_shows_fallback_then_expires() {
    let mut state = jobs_state();
    let now = Instant::now();

    handle_event(&mut state, &Event::OpenDetails("job-4".into()), now).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::CallPhone, now).unwrap();
    let [Action::OpenUrl { candidates, fallback_message }] = actions.as_slice() else {
        panic!("expected one OpenUrl action, got {actions:?}");
    };
    assert_eq!(candidates, &vec!["tel:+33491000000".to_string()]);

    assert_eq!(open_with_fallback(&mut NoApps, candidates), None);
    let failed = Event::LinkFailed {
        message: fallback_message.clone(),
    };
    handle_event(&mut state, &failed, now).unwrap();
    assert!(render(&state, 80).contains("Impossible d'ouvrir l'app téléphone"));

    let later = now + Duration::from_millis(1760);
    handle_event(&mut state, &Event::Tick, later).unwrap();
    assert!(!render(&state, 80).contains("Impossible d'ouvrir"));
}

#[test]
fn job_without_phone_reports_unavailable() {
    let mut state = jobs_state();
    let now = Instant::now();

    handle_event(&mut state, &Event::OpenDetails("job-3".into()), now).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::CallPhone, now).unwrap();
    assert!(actions.is_empty());
    assert_eq!(state.feedback.message(), Some("Numéro indisponible"));
}

#[test]
fn movies_browse_without_search() {
    let config = Config {
        platform: Platform::Ios,
        ..plain_config()
    };
    let mut state = initialize(&config, bundled_movies().unwrap());
    let now = Instant::now();

    let vm = state.compute_viewmodel();
    assert!(vm.search_bar.is_none());
    assert_eq!(vm.display_items.len(), 3);

    handle_event(&mut state, &Event::SearchChanged("dune".into()), now).unwrap();
    assert_eq!(state.compute_viewmodel().display_items.len(), 3);

    handle_event(&mut state, &Event::ToggleFavourite(693_134), now).unwrap();
    handle_event(&mut state, &Event::OpenDetails(693_134), now).unwrap();
    let detail = state.compute_viewmodel().detail.unwrap();
    assert!(detail.is_favourite);
    assert!(detail.contacts.is_empty());

    let (render_needed, actions) = handle_event(&mut state, &Event::CallPhone, now).unwrap();
    assert!(!render_needed);
    assert!(actions.is_empty());
}

#[test]
fn themed_output_uses_escapes() {
    let state = initialize(&Config::default(), vec![Movie::new(1, "Heat")]);
    assert_eq!(state.theme, Theme::dark());
    assert!(render(&state, 60).contains('\u{1b}'));
}
