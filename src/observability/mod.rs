//! Structured logging for the library and the binary.
//!
//! Every mutation path of the crate opens a `tracing` span or emits an event;
//! this module installs the subscriber that prints them.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
