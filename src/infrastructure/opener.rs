//! Link opener backed by the desktop's URL handler.
//!
//! Hands URLs to the system default handler through the `open` crate. Which schemes are
//! accepted depends on the configured [`Platform`]: `telprompt:` only exists on
//! iOS, so a desktop opener reports it as unhandled and the fallback chain moves
//! on to `tel:`.

use url::Url;

use crate::contact::{LinkOpener, Platform};
use crate::domain::{FavorisError, Result};

/// [`LinkOpener`] that hands URLs to the system URL handler.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    platform: Platform,
    program: Option<String>,
}

impl SystemOpener {
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self {
            platform,
            program: None,
        }
    }

    /// Opens URLs with `program` instead of the default handler.
    #[must_use]
    pub fn with_program(platform: Platform, program: impl Into<String>) -> Self {
        Self {
            platform,
            program: Some(program.into()),
        }
    }

    fn handles_scheme(&self, scheme: &str) -> bool {
        match scheme {
            "tel" | "mailto" | "http" | "https" => true,
            "telprompt" => self.platform == Platform::Ios,
            _ => false,
        }
    }
}

impl LinkOpener for SystemOpener {
    fn can_open(&mut self, url: &str) -> bool {
        Url::parse(url).is_ok_and(|parsed| self.handles_scheme(parsed.scheme()))
    }

    fn open(&mut self, url: &str) -> Result<()> {
        let program = self.program.as_deref().unwrap_or("default");
        let _span = tracing::debug_span!("system_open", program = %program, url = %url).entered();

        let opened = match &self.program {
            Some(program) => open::with(url, program.as_str()),
            None => open::that(url),
        };
        opened.map_err(|e| FavorisError::Link(format!("{program} could not open {url}: {e}")))
    }
}
