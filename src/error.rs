//! Unified error types for cfinval.
//!
//! Remote failures are recoverable while the TUI is running and fatal only
//! during bootstrap; the caller decides which.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cfinval operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// AWS credentials could not be resolved through the provider chain
    #[error("Unable to resolve AWS credentials: {0}")]
    Credentials(String),

    /// A CloudFront API call failed
    #[error("CloudFront {operation} failed: {message}")]
    Remote {
        operation: RemoteOperation,
        message: String,
    },

    /// The system browser could not be launched
    #[error("Failed to open browser: {0}")]
    Browser(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Terminal setup, draw or teardown failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// The three remote operations the adapter performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOperation {
    ListDistributions,
    ListInvalidations,
    CreateInvalidation,
}

impl std::fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ListDistributions => "ListDistributions",
            Self::ListInvalidations => "ListInvalidations",
            Self::CreateInvalidation => "CreateInvalidation",
        };
        f.write_str(name)
    }
}

/// Convenient Result type for cfinval operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a remote error from any displayable failure.
    pub fn remote(operation: RemoteOperation, message: impl Into<String>) -> Self {
        Self::Remote {
            operation,
            message: message.into(),
        }
    }

    /// Create a credentials error
    pub fn credentials(message: impl Into<String>) -> Self {
        Self::Credentials(message.into())
    }

    /// Create a browser launch error
    pub fn browser(message: impl Into<String>) -> Self {
        Self::Browser(message.into())
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }
}
