//! Configuration module for cfinval.
//!
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - A builder for layering CLI flags over a loaded file
//!
//! # Configuration File
//!
//! Place a `.cfinval.yaml` file in the current directory or `~/.config/cfinval/`:
//!
//! ```yaml
//! aws:
//!   profile: prod
//!   console_region: eu-west-1
//! tui:
//!   theme: light
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, AwsConfig, InvalidationConfig, LoggingConfig, TuiConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
