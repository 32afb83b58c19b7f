//! Favoris: a job and movie listing browser with an in-memory favourites list.
//!
//! Favoris loads a catalogue of listings (job offers or popular movies) from
//! JSON fixtures and lets the user:
//! - Search job offers by title (case-insensitive substring)
//! - Open a detail screen, and call, e-mail or locate the employer
//! - Add and remove favourites from any screen, with a short feedback message
//! - Browse the favourites on their own screen
//!
//! Favourites live for the lifetime of the process; nothing is persisted.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalogue     │   │ Favourites    │
//! │ (ui/)         │   │ (catalog/)    │   │ (favourites/) │
//! │ - Rendering   │   │ - Search      │   │ - Store       │
//! │ - Theming     │   │ - Dedup       │   │ - Manager     │
//! │ - Components  │   │ - Presenter   │   │ - Subscribers │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Feedback, Contact, Fixtures, Infrastructure│
//! │  - Job / Movie listings (domain/)                   │
//! │  - Feedback bubble (feedback)                       │
//! │  - Phone / mail / maps URLs (contact)               │
//! │  - System link opener, paths (infrastructure/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber fmt layer on stderr           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Search filter, identity dedup and list presenter
//! - [`contact`]: Contact URLs and the open-with-fallback chain
//! - [`domain`]: Listing types and errors
//! - [`favourites`]: Favourites store and manager
//! - [`feedback`]: Transient feedback bubble
//! - [`fixtures`]: Fixture loading
//! - [`infrastructure`]: System link opener and path utilities
//! - [`observability`]: Tracing subscriber setup
//! - [`ui`]: Terminal rendering with theme support
//!
//! # Configuration
//!
//! The binary takes `--key value` flags, or a TOML file via `--config <path>`
//! with the same keys in snake case:
//!
//! ```toml
//! variant = "jobs"
//! jobs_file = "~/data/jobs.json"
//! theme = "light"
//! platform = "desktop"
//! feedback_ms = 1760
//! trace_level = "debug"
//! opener = "firefox"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::time::Instant;
//! use favoris::{handle_event, initialize, Config, Event, Job};
//!
//! let config = Config::default();
//! let jobs = vec![Job::new("job-1", "Chef de Projet"), Job::new("job-2", "Comptable")];
//! let mut state = initialize(&config, jobs);
//!
//! handle_event(&mut state, &Event::SearchChanged("chef".into()), Instant::now())?;
//! handle_event(&mut state, &Event::ToggleFavourite("job-1".into()), Instant::now())?;
//!
//! assert_eq!(state.filtered.len(), 1);
//! assert_eq!(state.favourites.len(), 1);
//! # Ok::<(), favoris::FavorisError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod contact;
pub mod domain;
pub mod favourites;
pub mod feedback;
pub mod fixtures;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Screen};
pub use contact::Platform;
pub use domain::{FavorisError, Job, Listing, Movie, Result};
pub use favourites::{FavouritesManager, ToggleOutcome};
pub use feedback::FeedbackBubble;
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use infrastructure::{expand_tilde, SystemOpener};

/// Which catalogue the browser shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Job offers, searchable, with contact actions.
    #[default]
    Jobs,
    /// Popular movies, browse only.
    Movies,
}

impl Variant {
    /// Parses `jobs` or `movies` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "jobs" => Some(Self::Jobs),
            "movies" => Some(Self::Movies),
            _ => None,
        }
    }
}

/// Browser configuration.
///
/// # Example
///
/// ```text
/// favoris --variant movies --movie-pages p1.json,p2.json --theme light
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalogue to show. Default: `jobs`
    pub variant: Variant,

    /// Job fixture file. The bundled fixture is used when unset or unreadable.
    pub jobs_file: Option<String>,

    /// Movie page files, concatenated in order. Bundled pages when empty.
    pub movie_pages: Vec<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `dark`, `light`, `plain`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `debug` or `favoris=trace`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Decides which phone URL schemes are tried. Default: `desktop`
    pub platform: Platform,

    /// How long a feedback message stays on screen.
    pub feedback_ms: u64,

    /// Program that opens contact links instead of the system default handler.
    pub opener: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            jobs_file: None,
            movie_pages: Vec::new(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            platform: Platform::default(),
            feedback_ms: duration_ms(feedback::DEFAULT_DISPLAY_DURATION),
            opener: None,
        }
    }
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `variant`: `jobs` | `movies` (falls back to `jobs`)
    /// - `jobs_file`: String → `Option<String>`
    /// - `movie_pages`: Comma-separated string → `Vec<String>` (filters empty values)
    /// - `theme`, `theme_file`, `trace_level`, `opener`: String → `Option<String>`
    /// - `platform`: `ios` | `android` | `desktop` (falls back to `desktop`)
    /// - `feedback_ms`: String → `u64` (falls back to 1760 on parse error)
    ///
    /// Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use favoris::{Config, Variant};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("variant".to_string(), "movies".to_string());
    /// map.insert("movie_pages".to_string(), "p1.json, p2.json".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.variant, Variant::Movies);
    /// assert_eq!(config.movie_pages, vec!["p1.json", "p2.json"]);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let variant = config.get("variant").map_or(defaults.variant, |name| {
            Variant::from_name(name).unwrap_or_else(|| {
                tracing::warn!(variant = %name, "unknown variant, using jobs");
                defaults.variant
            })
        });

        let platform = config.get("platform").map_or(defaults.platform, |name| {
            Platform::from_name(name).unwrap_or_else(|| {
                tracing::warn!(platform = %name, "unknown platform, using desktop");
                defaults.platform
            })
        });

        let movie_pages = config
            .get("movie_pages")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let feedback_ms = config
            .get("feedback_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.feedback_ms);

        Self {
            variant,
            jobs_file: non_empty(config.get("jobs_file")),
            movie_pages,
            theme_name: non_empty(config.get("theme")),
            theme_file: non_empty(config.get("theme_file")),
            trace_level: non_empty(config.get("trace_level")),
            platform,
            feedback_ms,
            opener: non_empty(config.get("opener")),
        }
    }

    /// Parses configuration from a TOML document with the same keys as
    /// [`Config::from_map`]. Arrays of strings are accepted for `movie_pages`.
    ///
    /// # Errors
    ///
    /// Returns [`FavorisError::Config`] if the document is not valid TOML or a
    /// value is a table.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(contents)
            .map_err(|e| FavorisError::Config(format!("failed to parse config TOML: {e}")))?;

        let mut map = BTreeMap::new();
        for (key, value) in table {
            map.insert(key.clone(), toml_value_to_string(&key, value)?);
        }
        Ok(Self::from_map(&map))
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`FavorisError::Io`] if the file cannot be read, or the errors of
    /// [`Config::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading config file");
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Display duration of the feedback bubble.
    #[must_use]
    pub const fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty()).map(String::from)
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn toml_value_to_string(key: &str, value: toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Array(items) => {
            let parts = items
                .into_iter()
                .map(|item| toml_value_to_string(key, item))
                .collect::<Result<Vec<_>>>()?;
            Ok(parts.join(","))
        }
        toml::Value::Datetime(_) | toml::Value::Table(_) => Err(FavorisError::Config(format!(
            "unsupported value for `{key}`"
        ))),
    }
}

/// Builds the link opener: the configured program, or the system handler.
#[must_use]
pub fn link_opener(config: &Config) -> SystemOpener {
    match &config.opener {
        Some(program) => {
            tracing::debug!(program = %program, "using configured link opener");
            SystemOpener::with_program(config.platform, program.as_str())
        }
        None => SystemOpener::new(config.platform),
    }
}

/// Resolves the theme: file first, then built-in name, then the default.
///
/// Load failures are logged and fall back to the default theme.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}

/// Loads the job catalogue named by the config, or the bundled one.
///
/// # Errors
///
/// Only fails if the bundled fixture is malformed.
pub fn load_jobs(config: &Config) -> Result<Vec<Job>> {
    if let Some(path) = &config.jobs_file {
        match fixtures::load_jobs(expand_tilde(path)) {
            Ok(jobs) => return Ok(jobs),
            Err(e) => tracing::warn!(path = %path, error = %e, "failed to load jobs, using bundled fixture"),
        }
    }
    fixtures::bundled_jobs()
}

/// Loads the movie pages named by the config, or the bundled ones.
///
/// # Errors
///
/// Only fails if a bundled fixture is malformed.
pub fn load_movies(config: &Config) -> Result<Vec<Movie>> {
    if !config.movie_pages.is_empty() {
        let paths: Vec<_> = config.movie_pages.iter().map(|p| expand_tilde(p)).collect();
        match fixtures::load_movie_pages(&paths) {
            Ok(movies) => return Ok(movies),
            Err(e) => tracing::warn!(error = %e, "failed to load movie pages, using bundled fixtures"),
        }
    }
    fixtures::bundled_movies()
}

/// Creates the application state for a loaded catalogue.
///
/// # Example
///
/// ```rust
/// use favoris::{initialize, Config, Movie};
///
/// let state = initialize(&Config::default(), vec![Movie::new(1, "Heat")]);
/// assert!(state.favourites.is_empty());
/// ```
#[must_use]
pub fn initialize<T: Listing>(config: &Config, catalogue: Vec<T>) -> AppState<T> {
    tracing::debug!(
        kind = ?T::KIND,
        count = catalogue.len(),
        "initializing favoris"
    );

    AppState::new(
        catalogue,
        FeedbackBubble::new(config.feedback_duration()),
        config.platform,
        load_theme(config),
    )
}
