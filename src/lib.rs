//! **Browse CloudFront distributions and manage cache invalidations from the terminal.**
//!
//! `cfinval` lists the distributions of an AWS account, shows the invalidation
//! history of the selected one, creates new invalidations by path pattern and
//! opens invalidation details in the AWS console.
//!
//! ## Core Concepts & Modules
//!
//! - **[`cloudfront`]**: the [`CloudFrontApi`] seam with the live
//!   [`SdkCloudFront`] client and the [`InMemoryCloudFront`] backend used by
//!   tests and `--demo`.
//! - **[`tui`]**: the [`App`] state machine driving the three screens, the
//!   event loop and the ratatui views.
//! - **[`config`]**: YAML configuration with discovery, validation and
//!   CLI-over-file merging.
//! - **[`cli`]**: command handlers used by the binary.
//!
//! ## Driving a session without a terminal
//!
//! ```
//! use cfinval::cloudfront::{Distribution, InMemoryCloudFront};
//! use cfinval::tui::{App, AppSettings, Screen};
//!
//! let backend = InMemoryCloudFront::new();
//! backend.add_distribution(Distribution::new("E1", ["a.com", "b.com"]));
//!
//! let mut app = App::load(Box::new(backend.clone()), AppSettings::default()).unwrap();
//! assert_eq!(app.entries().len(), 2);
//!
//! app.select_distribution();
//! assert!(matches!(app.screen(), Screen::Table(_)));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize↔u16 casts are pervasive in TUI layout math and
    // all values are bounded by the terminal size
    clippy::cast_possible_truncation,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    // Variable names like `rows`/`row` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod cloudfront;
pub mod config;
pub mod error;
pub mod tui;

// Re-export main types for convenience
pub use cloudfront::{
    CloudFrontApi, Distribution, DistributionEntry, InMemoryCloudFront, Invalidation,
    SdkCloudFront,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use error::{Error, RemoteOperation, Result};
pub use tui::App;
