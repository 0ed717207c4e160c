//! Configuration types for cfinval.

use crate::cloudfront::{DEFAULT_CALLER_REFERENCE_PREFIX, DEFAULT_CONSOLE_REGION};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a config file and overridden by CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// AWS connection settings
    pub aws: AwsConfig,
    /// Invalidation request settings
    pub invalidation: InvalidationConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
    /// Log destination and level
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Start a builder from this config, e.g. to layer CLI flags over a file.
    pub fn into_builder(self) -> AppConfigBuilder {
        AppConfigBuilder { config: self }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.aws.region = Some(region.into());
        self
    }

    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.config.aws.profile = Some(profile.into());
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    pub fn log_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.config.logging.file = Some(file.into());
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// AWS
// ============================================================================

/// AWS connection settings. Unset values defer to the SDK provider chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AwsConfig {
    /// Region for API calls
    pub region: Option<String>,
    /// Named profile from the shared AWS config files
    pub profile: Option<String>,
    /// Region used in console deep links
    pub console_region: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            console_region: DEFAULT_CONSOLE_REGION.to_string(),
        }
    }
}

// ============================================================================
// Invalidation
// ============================================================================

/// Settings for new invalidation requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InvalidationConfig {
    /// Prefix of the generated caller reference
    pub caller_reference_prefix: String,
    /// Placeholder shown in the empty path field
    pub placeholder: String,
    /// Maximum number of characters accepted by the path field
    #[schemars(range(min = 1, max = 4096))]
    pub max_path_length: usize,
}

impl Default for InvalidationConfig {
    fn default() -> Self {
        Self {
            caller_reference_prefix: DEFAULT_CALLER_REFERENCE_PREFIX.to_string(),
            placeholder: "/*".to_string(),
            max_path_length: 156,
        }
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Visible rows in the invalidation table
    #[schemars(range(min = 1, max = 200))]
    pub table_height: u16,
    /// Tick interval of the input thread in milliseconds
    #[schemars(range(min = 10, max = 10000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            table_height: 7,
            tick_rate_ms: 250,
        }
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Logging configuration. The TUI owns the terminal, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path (defaults to the user cache directory)
    pub file: Option<PathBuf>,
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    #[must_use]
    pub fn effective_file(&self) -> Option<PathBuf> {
        self.file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("cfinval").join("cfinval.log")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.aws.console_region, "us-east-1");
        assert_eq!(config.invalidation.placeholder, "/*");
        assert_eq!(config.invalidation.max_path_length, 156);
        assert_eq!(
            config.invalidation.caller_reference_prefix,
            "aws-cf-invalidation-"
        );
        assert_eq!(config.tui.table_height, 7);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .region("eu-west-1")
            .profile("prod")
            .theme("light")
            .log_level("debug")
            .build();
        assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.aws.profile.as_deref(), Some("prod"));
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_into_builder_keeps_unset_values() {
        let mut base = AppConfig::default();
        base.tui.table_height = 9;
        base.tui.theme = "light".to_string();

        let config = base.into_builder().profile("prod").build();
        assert_eq!(config.aws.profile.as_deref(), Some("prod"));
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.tui.table_height, 9);
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let logging = LoggingConfig {
            file: Some(PathBuf::from("/tmp/x.log")),
            ..LoggingConfig::default()
        };
        assert_eq!(logging.effective_file(), Some(PathBuf::from("/tmp/x.log")));
    }
}
