//! Transient status line shared by all screens.

use std::time::{Duration, Instant};

/// How long a message stays visible before it is cleared on a tick.
pub const STATUS_TTL: Duration = Duration::from_secs(5);

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Manages temporary status messages with auto-clear.
///
/// Errors from remote calls during interaction land here instead of
/// aborting the session.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    message: Option<(StatusKind, String)>,
    set_at: Option<Instant>,
    auto_clear_after: Duration,
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::with_auto_clear(STATUS_TTL)
    }
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: duration,
        }
    }

    pub fn info(&mut self, msg: impl Into<String>) {
        self.set(StatusKind::Info, msg);
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.set(StatusKind::Error, msg);
    }

    fn set(&mut self, kind: StatusKind, msg: impl Into<String>) {
        self.message = Some((kind, msg.into()));
        self.set_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Drop the message once it has outlived its duration.
    pub fn expire(&mut self) {
        if self
            .set_at
            .is_some_and(|set_at| set_at.elapsed() >= self.auto_clear_after)
        {
            self.clear();
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<(StatusKind, &str)> {
        self.message
            .as_ref()
            .map(|(kind, text)| (*kind, text.as_str()))
    }
}
