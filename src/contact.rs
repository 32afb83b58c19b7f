//! Contact actions of the detail screen: call, e-mail, show on a map.
//!
//! Each action turns a [`ContactCard`] into an ordered list of URL candidates.
//! The caller hands them to a [`LinkOpener`] through [`open_with_fallback`],
//! which stops at the first candidate that opens. Missing data never reaches the
//! opener: it produces a [`ContactRequest::Unavailable`] message instead.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::{ContactCard, Result};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Characters escaped in a URI component: everything but `A-Za-z0-9-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Platform the browser runs on; decides which phone schemes are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    Ios,
    Android,
    #[default]
    Desktop,
}

impl Platform {
    /// Parses `ios`, `android` or `desktop` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ios" => Some(Self::Ios),
            "android" => Some(Self::Android),
            "desktop" => Some(Self::Desktop),
            _ => None,
        }
    }
}

/// Result of preparing a contact action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactRequest {
    /// URLs to try in order, and the message to show if none opens.
    Open {
        candidates: Vec<String>,
        fallback_message: String,
    },
    /// The listing lacks the data for this action.
    Unavailable { message: String },
}

/// Platform service able to open a URL in another app.
pub trait LinkOpener {
    /// Whether some installed app can handle this URL.
    fn can_open(&mut self, url: &str) -> bool;

    /// Opens the URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform fails to launch the handler.
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Keeps digits and `+` only.
///
/// # Examples
///
/// ```
/// use favoris::contact::sanitize_phone;
///
/// assert_eq!(sanitize_phone("+33 (0)4.72-00-00-00"), "+330472000000");
/// assert_eq!(sanitize_phone("n/c"), "");
/// ```
#[must_use]
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect()
}

/// Prepares a phone call.
#[must_use]
pub fn phone_request(card: &ContactCard, platform: Platform) -> ContactRequest {
    let phone = sanitize_phone(&card.telephone);
    tracing::debug!(sanitized = %phone, "sanitized phone");

    if phone.is_empty() {
        return ContactRequest::Unavailable {
            message: "Numéro indisponible".to_string(),
        };
    }

    let candidates = match platform {
        Platform::Ios => vec![format!("telprompt:{phone}"), format!("tel:{phone}")],
        Platform::Android | Platform::Desktop => vec![format!("tel:{phone}")],
    };

    ContactRequest::Open {
        candidates,
        fallback_message: "Impossible d'ouvrir l'app téléphone".to_string(),
    }
}

/// Prepares an e-mail.
#[must_use]
pub fn email_request(card: &ContactCard) -> ContactRequest {
    let email = card.email.trim();
    if email.is_empty() {
        return ContactRequest::Unavailable {
            message: "Email indisponible".to_string(),
        };
    }

    ContactRequest::Open {
        candidates: vec![format!("mailto:{email}")],
        fallback_message: "Impossible d'ouvrir l'app mail".to_string(),
    }
}

/// Prepares a map search for the listing's address.
#[must_use]
pub fn address_request(card: &ContactCard) -> ContactRequest {
    let parts: Vec<&str> = card
        .address_parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();
    tracing::debug!(parts = ?parts, "address parts");

    if parts.is_empty() {
        return ContactRequest::Unavailable {
            message: "Adresse indisponible".to_string(),
        };
    }

    let query = parts.join(" ");
    let candidates = vec![format!(
        "{MAPS_SEARCH_URL}?api=1&query={}",
        utf8_percent_encode(&query, URI_COMPONENT)
    )];

    ContactRequest::Open {
        candidates,
        fallback_message: "Impossible d'ouvrir l'app de cartographie".to_string(),
    }
}

/// Tries `candidates` in order and returns the first one that opened.
///
/// A candidate fails when the opener cannot handle it or returns an error.
/// `None` means every candidate failed.
pub fn open_with_fallback<O>(opener: &mut O, candidates: &[String]) -> Option<String>
where
    O: LinkOpener + ?Sized,
{
    let _span = tracing::debug_span!("open_with_fallback", candidates = candidates.len()).entered();

    for url in candidates {
        if !opener.can_open(url) {
            tracing::debug!(url = %url, "no handler for URL");
            continue;
        }

        match opener.open(url) {
            Ok(()) => {
                tracing::debug!(url = %url, "URL opened");
                return Some(url.clone());
            }
            Err(e) => tracing::debug!(url = %url, error = %e, "failed to open URL"),
        }
    }

    tracing::debug!("all URL attempts failed");
    None
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;
    use crate::domain::FavorisError;

    /// Opener that accepts a fixed set of schemes and records every attempt.
    #[derive(Default)]
    struct FakeOpener {
        schemes: Vec<&'static str>,
        failing: Vec<&'static str>,
        opened: Vec<String>,
        attempts: Vec<String>,
    }

    impl LinkOpener for FakeOpener {
        fn can_open(&mut self, url: &str) -> bool {
            self.attempts.push(url.to_string());
            self.schemes.iter().any(|s| url.starts_with(s))
        }

        fn open(&mut self, url: &str) -> Result<()> {
            if self.failing.iter().any(|s| url.starts_with(s)) {
                return Err(FavorisError::Link(format!("refused {url}")));
            }
            self.opened.push(url.to_string());
            Ok(())
        }
    }

    fn card() -> ContactCard {
        ContactCard {
            telephone: "04 72 10 20 30".into(),
            email: "rh@acme.fr".into(),
            address_parts: vec!["12".into(), " rue Garibaldi ".into(), String::new(), "Lyon".into()],
        }
    }

    #[test]
    fn ios_tries_telprompt_first() {
        let ContactRequest::Open { candidates, .. } = phone_request(&card(), Platform::Ios) else {
            panic!("expected candidates");
        };
        assert_eq!(candidates, vec!["telprompt:0472102030", "tel:0472102030"]);

        let ContactRequest::Open { candidates, .. } = phone_request(&card(), Platform::Android) else {
            panic!("expected candidates");
        };
        assert_eq!(candidates, vec!["tel:0472102030"]);
    }

    #[test]
    fn missing_data_is_reported() {
        let empty = ContactCard {
            telephone: " - ".into(),
            email: String::new(),
            address_parts: vec![" ".into(), String::new()],
        };
        assert_eq!(
            phone_request(&empty, Platform::Desktop),
            ContactRequest::Unavailable { message: "Numéro indisponible".into() }
        );
        assert_eq!(
            email_request(&empty),
            ContactRequest::Unavailable { message: "Email indisponible".into() }
        );
        assert_eq!(
            address_request(&empty),
            ContactRequest::Unavailable { message: "Adresse indisponible".into() }
        );
    }

    #[test]
    fn address_skips_blank_parts() {
        let ContactRequest::Open { candidates, fallback_message } = address_request(&card()) else {
            panic!("expected candidates");
        };
        assert_eq!(candidates.len(), 1);
        let url = Url::parse(&candidates[0]).unwrap();
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(query[0], ("api".to_string(), "1".to_string()));
        assert_eq!(query[1], ("query".to_string(), "12 rue Garibaldi Lyon".to_string()));
        assert!(candidates[0].ends_with("?api=1&query=12%20rue%20Garibaldi%20Lyon"));
        assert_eq!(fallback_message, "Impossible d'ouvrir l'app de cartographie");
    }

    #[test]
    fn address_is_encoded_as_uri_component() {
        let card = ContactCard {
            telephone: String::new(),
            email: String::new(),
            address_parts: vec!["Bât. A & B".into(), "Lyon (69)".into()],
        };
        let ContactRequest::Open { candidates, .. } = address_request(&card) else {
            panic!("expected candidates");
        };
        assert_eq!(
            candidates,
            vec!["https://www.google.com/maps/search/?api=1&query=B%C3%A2t.%20A%20%26%20B%20Lyon%20(69)"]
        );
    }

    #[test]
    fn fallback_stops_at_first_success() {
        let mut opener = FakeOpener {
            schemes: vec!["tel:", "telprompt:"],
            ..FakeOpener::default()
        };
        let candidates = vec!["telprompt:1".to_string(), "tel:1".to_string()];

        assert_eq!(open_with_fallback(&mut opener, &candidates), Some("telprompt:1".into()));
        assert_eq!(opener.attempts, vec!["telprompt:1"]);
    }

    #[test]
    fn fallback_skips_errors_and_reports_exhaustion() {
        let mut opener = FakeOpener {
            schemes: vec!["tel:", "telprompt:"],
            failing: vec!["telprompt:"],
            ..FakeOpener::default()
        };
        let candidates = vec!["telprompt:1".to_string(), "tel:1".to_string()];
        assert_eq!(open_with_fallback(&mut opener, &candidates), Some("tel:1".into()));
        assert_eq!(opener.opened, vec!["tel:1"]);

        let mut nothing = FakeOpener::default();
        assert_eq!(open_with_fallback(&mut nothing, &candidates), None);
        assert_eq!(nothing.attempts.len(), 2);
    }

    #[test]
    fn platform_names() {
        assert_eq!(Platform::from_name("iOS"), Some(Platform::Ios));
        assert_eq!(Platform::from_name("windows"), None);
    }
}
