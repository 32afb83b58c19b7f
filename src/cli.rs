use std::collections::BTreeMap;

use clap::Parser;
use favoris::infrastructure::expand_tilde;
use favoris::Config;

/// Browse job offers or popular movies and keep favourites
#[derive(Debug, Parser)]
#[command(name = "favoris")]
#[command(about = "Browse job offers or popular movies and keep favourites", long_about = None)]
pub struct Cli {
    /// TOML config file; the other flags are ignored when set
    #[arg(long)]
    pub config: Option<String>,

    /// Catalogue to browse
    #[arg(long, value_parser = ["jobs", "movies"])]
    pub variant: Option<String>,

    /// JSON array of job offers
    #[arg(long)]
    pub jobs_file: Option<String>,

    /// Comma-separated movie pages, concatenated in order
    #[arg(long)]
    pub movie_pages: Option<String>,

    /// Built-in theme
    #[arg(long, value_parser = ["dark", "light", "plain"])]
    pub theme: Option<String>,

    /// TOML theme file, takes precedence over --theme
    #[arg(long)]
    pub theme_file: Option<String>,

    /// Platform deciding which phone links are tried
    #[arg(long, value_parser = ["ios", "android", "desktop"])]
    pub platform: Option<String>,

    /// Feedback message duration in milliseconds
    #[arg(long)]
    pub feedback_ms: Option<u64>,

    /// Tracing filter, overridden by RUST_LOG
    #[arg(long)]
    pub trace_level: Option<String>,

    /// Program that opens contact links
    #[arg(long)]
    pub opener: Option<String>,
}

impl Cli {
    /// Resolves the configuration: the config file if given, the flags otherwise.
    pub fn into_config(self) -> favoris::Result<Config> {
        match &self.config {
            Some(path) => Config::from_file(expand_tilde(path)),
            None => Ok(Config::from_map(&self.to_map())),
        }
    }

    fn to_map(&self) -> BTreeMap<String, String> {
        let feedback_ms = self.feedback_ms.map(|ms| ms.to_string());
        [
            ("variant", self.variant.as_ref()),
            ("jobs_file", self.jobs_file.as_ref()),
            ("movie_pages", self.movie_pages.as_ref()),
            ("theme", self.theme.as_ref()),
            ("theme_file", self.theme_file.as_ref()),
            ("platform", self.platform.as_ref()),
            ("feedback_ms", feedback_ms.as_ref()),
            ("trace_level", self.trace_level.as_ref()),
            ("opener", self.opener.as_ref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v.clone())))
        .collect()
    }
}
