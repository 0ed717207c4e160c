//! Configuration validation for cfinval.

use super::types::{AppConfig, AwsConfig, InvalidationConfig, LoggingConfig, TuiConfig};
use crate::tui::theme::{canonical_theme_name, THEME_NAMES};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.aws.validate());
        errors.extend(self.invalidation.validate());
        errors.extend(self.tui.validate());
        errors.extend(self.logging.validate());
        errors
    }
}

fn is_region_like(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl Validatable for AwsConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(region) = &self.region {
            if !is_region_like(region) {
                errors.push(ConfigError::new(
                    "aws.region",
                    format!("'{region}' is not a valid region name"),
                ));
            }
        }
        if !is_region_like(&self.console_region) {
            errors.push(ConfigError::new(
                "aws.console_region",
                format!("'{}' is not a valid region name", self.console_region),
            ));
        }
        if self.profile.as_deref().is_some_and(str::is_empty) {
            errors.push(ConfigError::new("aws.profile", "profile name must not be empty"));
        }
        errors
    }
}

impl Validatable for InvalidationConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.caller_reference_prefix.is_empty() {
            errors.push(ConfigError::new(
                "invalidation.caller_reference_prefix",
                "prefix must not be empty",
            ));
        }
        if !(1..=4096).contains(&self.max_path_length) {
            errors.push(ConfigError::new(
                "invalidation.max_path_length",
                format!("{} is out of range (1-4096)", self.max_path_length),
            ));
        }
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if canonical_theme_name(&self.theme).is_none() {
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    THEME_NAMES.join(", ")
                ),
            ));
        }
        if !(1..=200).contains(&self.table_height) {
            errors.push(ConfigError::new(
                "tui.table_height",
                format!("{} is out of range (1-200)", self.table_height),
            ));
        }
        if !(10..=10_000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                format!("{} is out of range (10-10000)", self.tick_rate_ms),
            ));
        }
        errors
    }
}

impl Validatable for LoggingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if tracing_subscriber::EnvFilter::try_new(&self.level).is_err() {
            vec![ConfigError::new(
                "logging.level",
                format!("'{}' is not a valid log filter", self.level),
            )]
        } else {
            Vec::new()
        }
    }
}
