//! Caller-reference generation for invalidation batches.

use std::sync::{Mutex, PoisonError};

/// Prefix used when none is configured.
pub const DEFAULT_CALLER_REFERENCE_PREFIX: &str = "aws-cf-invalidation-";

/// Issues caller references of the form `<prefix><unix-seconds>`.
///
/// References stay unique for the lifetime of the generator: a second call
/// within the same wall-clock second gets a `-<n>` suffix.
#[derive(Debug)]
pub struct CallerReferenceGenerator {
    prefix: String,
    last: Mutex<Option<(i64, u32)>>,
}

impl Default for CallerReferenceGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CALLER_REFERENCE_PREFIX)
    }
}

impl CallerReferenceGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last: Mutex::new(None),
        }
    }

    /// Next reference derived from the current time.
    pub fn next(&self) -> String {
        self.next_at(chrono::Utc::now().timestamp())
    }

    /// Next reference for a given Unix timestamp in seconds.
    pub fn next_at(&self, unix_secs: i64) -> String {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        let (secs, seq) = match *last {
            // Clock went backwards or stood still: stay on the last second
            Some((prev, seq)) if unix_secs <= prev => (prev, seq + 1),
            _ => (unix_secs, 0),
        };
        *last = Some((secs, seq));

        if seq == 0 {
            format!("{}{secs}", self.prefix)
        } else {
            format!("{}{secs}-{seq}", self.prefix)
        }
    }
}
