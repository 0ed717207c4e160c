//! CLI command handlers.
//!
//! Handlers invoked by main.rs; they return `anyhow::Result` so startup
//! failures carry context to the user.

mod session;

pub use session::{connect_backend, prepare_config, run_session, CliOverrides};
