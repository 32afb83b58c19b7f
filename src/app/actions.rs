//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never talks to the platform itself. Opening a phone, mail
//! or maps app is returned as an [`Action`] and executed by the binary, which
//! reports total failure back as [`Event::LinkFailed`](super::Event::LinkFailed).

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Tries each URL in order until one opens.
    OpenUrl {
        /// Candidate URLs, most specific first.
        candidates: Vec<String>,
        /// Message to show if no candidate opens.
        fallback_message: String,
    },

    /// Leaves the browser.
    Quit,
}
