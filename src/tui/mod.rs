//! Interactive terminal UI using ratatui.
//!
//! Three screens share one [`App`] value:
//! - the distribution list, one entry per (distribution, alias) pair
//! - the invalidation table of the selected distribution
//! - the path-input form for a new invalidation
//!
//! # Architecture
//!
//! [`events`](handle_event) maps (screen, key) to a transition on [`App`];
//! transitions call the [`CloudFrontApi`](crate::cloudfront::CloudFrontApi)
//! synchronously. Views in `views` are pure functions of `&App`.

mod app;
mod app_impl_nav;
pub(crate) mod browser;
pub(crate) mod constants;
mod events;
pub mod state;
pub mod status;
pub mod theme;
mod ui;
mod views;
pub(crate) mod widgets;

pub use app::{
    App, AppSettings, BrowserOpener, DistributionListState, InputScreen, Screen, TableScreen,
};
pub use events::{handle_event, handle_key_event, Event, EventHandler};
pub use state::{ListNavigation, ListState};
pub use status::{StatusKind, StatusMessage};
pub use theme::{set_theme, Theme};
pub use ui::{render, run_tui};
pub use widgets::TextInput;
