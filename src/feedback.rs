//! Transient feedback bubble.
//!
//! The bubble shows one short message at a time ("Ajouté aux favoris",
//! "Impossible d'ouvrir l'app mail", ...) and hides itself after a fixed display
//! duration. It is a two-state machine:
//!
//! ```text
//!            show(msg)                      tick(now) after duration
//!   Idle ─────────────────▶ Showing(msg, t) ─────────────────────────▶ Idle
//!                             │    ▲
//!                             └────┘ show(msg') supersedes, restarts the timer
//! ```
//!
//! Time is passed in by the caller so the machine stays deterministic.

use std::time::{Duration, Instant};

/// Fade-in, hold and fade-out of the bubble, end to end.
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_millis(160 + 1400 + 200);

/// Current state of the bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BubbleState {
    Idle,
    Showing {
        message: String,
        /// Strictly increasing across `show` calls.
        token: u64,
        shown_at: Instant,
    },
}

/// Feedback bubble state machine.
#[derive(Debug, Clone)]
pub struct FeedbackBubble {
    state: BubbleState,
    display_duration: Duration,
    next_token: u64,
}

impl Default for FeedbackBubble {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_DURATION)
    }
}

impl FeedbackBubble {
    #[must_use]
    pub const fn new(display_duration: Duration) -> Self {
        Self {
            state: BubbleState::Idle,
            display_duration,
            next_token: 1,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &BubbleState {
        &self.state
    }

    #[must_use]
    pub const fn display_duration(&self) -> Duration {
        self.display_duration
    }

    /// Message currently on screen.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            BubbleState::Idle => None,
            BubbleState::Showing { message, .. } => Some(message),
        }
    }

    /// Shows `message`, replacing whatever was displayed and restarting the timer.
    ///
    /// Returns the token identifying this display.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        let message = message.into();
        let token = self.next_token;
        self.next_token += 1;

        if let BubbleState::Showing { token: previous, .. } = &self.state {
            tracing::debug!(previous, token, "superseding feedback message");
        }
        tracing::debug!(token, message = %message, "showing feedback");

        self.state = BubbleState::Showing {
            message,
            token,
            shown_at: now,
        };
        token
    }

    /// Dismisses the bubble if its display duration has elapsed.
    ///
    /// Returns `true` when this call changed the state.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = match &self.state {
            BubbleState::Idle => false,
            BubbleState::Showing { shown_at, .. } => {
                now.saturating_duration_since(*shown_at) >= self.display_duration
            }
        };

        if expired {
            tracing::trace!("feedback dismissed");
            self.state = BubbleState::Idle;
        }
        expired
    }
}
