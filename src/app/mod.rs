//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the runtime (main.rs) and the domain, favourites
//! and catalogue layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────────── LinkFailed ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`screens`]: Screens and the navigation stack
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod screens;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use screens::{NavigationStack, Screen};
pub use state::AppState;
