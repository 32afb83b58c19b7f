//! Terminal entry point.
//!
//! This module is the thin integration layer between the favoris library and a
//! terminal: it parses flags into a [`Config`], loads the catalogue, and runs
//! a line-oriented command loop on stdin, printing the rendered screen after
//! every command.
//!
//! # Loop
//!
//! 1. **Load**: Parse config, initialize tracing, load fixtures, create `AppState`
//! 2. **Read**: One command per line
//! 3. **Update**: Translate the command to an [`Event`], delegate to [`handle_event`]
//! 4. **Execute**: Run returned actions; a link that cannot be opened comes back
//!    as [`Event::LinkFailed`]
//! 5. **Render**: Print the current screen
//!
//! # Commands
//!
//! - `search <text>`: Filter job offers by title (`search` alone clears)
//! - `open <id>`: Open a listing's detail screen
//! - `fav <id>`: Toggle a favourite (`fav` alone on a detail screen)
//! - `favs`: Show the favourites
//! - `back`: Previous screen
//! - `call` / `mail` / `map`: Contact actions on a job detail screen
//! - `quit`: Leave (end of input works too)

#![allow(clippy::multiple_crate_versions)]

mod cli;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use favoris::contact::{open_with_fallback, LinkOpener};
use favoris::observability::init_tracing;
use clap::Parser;
use favoris::{handle_event, Action, AppState, Config, Event, Listing, Screen, Variant};

use crate::cli::Cli;

/// Terminal width used when `COLUMNS` is unset.
const DEFAULT_COLUMNS: usize = 80;

fn main() -> ExitCode {
    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("favoris: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);
    tracing::debug!(config = ?config, "configuration loaded");

    let result = match config.variant {
        Variant::Jobs => favoris::load_jobs(&config).and_then(|jobs| run(&config, jobs)),
        Variant::Movies => favoris::load_movies(&config).and_then(|movies| run(&config, movies)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "favoris stopped");
            eprintln!("favoris: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run<T>(config: &Config, catalogue: Vec<T>) -> favoris::Result<()>
where
    T: Listing + 'static,
    T::Id: FromStr,
{
    let mut state = favoris::initialize(config, catalogue);
    let mut opener = favoris::link_opener(config);
    let cols = terminal_columns();

    state.favourites.subscribe(|items: &[T]| {
        tracing::info!(count = items.len(), "favourites changed");
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{}", favoris::ui::render(&state, cols))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let now = Instant::now();
        // Let an expired feedback message go before the next screen.
        handle_event(&mut state, &Event::Tick, now)?;

        let event = match parse_command::<T>(&line, state.current_screen()) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        if dispatch(&mut state, &event, &mut opener, now)? {
            break;
        }

        write!(stdout, "{}", favoris::ui::render(&state, cols))?;
        stdout.flush()?;
    }

    Ok(())
}

/// Handles one event and runs its actions. Returns `true` on quit.
fn dispatch<T, O>(
    state: &mut AppState<T>,
    event: &Event<T::Id>,
    opener: &mut O,
    now: Instant,
) -> favoris::Result<bool>
where
    T: Listing,
    O: LinkOpener,
{
    let actions = match handle_event(state, event, now) {
        Ok((_, actions)) => actions,
        Err(favoris::FavorisError::UnknownListing(id)) => {
            tracing::warn!(id = %id, "unknown listing");
            eprintln!("Aucune annonce avec l'identifiant « {id} »");
            return Ok(false);
        }
        Err(e) => return Err(e),
    };

    for action in actions {
        match action {
            Action::Quit => return Ok(true),
            Action::OpenUrl {
                candidates,
                fallback_message,
            } => {
                if open_with_fallback(opener, &candidates).is_none() {
                    let failed = Event::LinkFailed {
                        message: fallback_message,
                    };
                    handle_event(state, &failed, now)?;
                }
            }
        }
    }

    Ok(false)
}

/// Translates a command line into an event.
///
/// Blank lines yield `Ok(None)`; malformed commands yield a usage message.
fn parse_command<T>(line: &str, screen: &Screen<T::Id>) -> Result<Option<Event<T::Id>>, String>
where
    T: Listing,
    T::Id: FromStr,
{
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (command, argument) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    let event = match command {
        "search" => Event::SearchChanged(argument.to_string()),
        "open" => Event::OpenDetails(parse_id::<T>(argument)?),
        "fav" => match (argument, screen) {
            ("", Screen::Details(id)) => Event::ToggleFavourite(id.clone()),
            _ => Event::ToggleFavourite(parse_id::<T>(argument)?),
        },
        "favs" => Event::OpenFavourites,
        "back" => Event::Back,
        "call" => Event::CallPhone,
        "mail" => Event::SendEmail,
        "map" => Event::OpenAddress,
        "quit" | "q" => Event::Quit,
        other => return Err(format!("Commande inconnue : {other}")),
    };

    Ok(Some(event))
}

fn parse_id<T>(argument: &str) -> Result<T::Id, String>
where
    T: Listing,
    T::Id: FromStr,
{
    if argument.is_empty() {
        return Err("Identifiant manquant".to_string());
    }
    argument
        .parse()
        .map_err(|_| format!("Identifiant invalide : {argument}"))
}

fn terminal_columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .filter(|&c| c > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}
