//! Interactive session handler.
//!
//! Resolves the effective configuration, connects the backend, fetches the
//! distribution list and runs the TUI.

use crate::cloudfront::{CloudFrontApi, InMemoryCloudFront, SdkClientConfig, SdkCloudFront};
use crate::config::{load_config_file, load_or_default, AppConfig, ConfigError, Validatable};
use crate::tui::{run_tui, set_theme, App, AppSettings, Theme};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Values given on the command line; `None` defers to the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub theme: Option<String>,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl CliOverrides {
    /// Overwrite every value of `config` that was given on the command line.
    fn apply(&self, config: AppConfig) -> AppConfig {
        let mut builder = config.into_builder();
        if let Some(region) = &self.region {
            builder = builder.region(region.as_str());
        }
        if let Some(profile) = &self.profile {
            builder = builder.profile(profile.as_str());
        }
        if let Some(theme) = &self.theme {
            builder = builder.theme(theme.as_str());
        }
        if let Some(file) = &self.log_file {
            builder = builder.log_file(file.as_path());
        }
        if self.verbose {
            builder = builder.log_level("debug");
        }
        builder.build()
    }
}

/// Load the config file, layer the CLI values on top and validate.
pub fn prepare_config(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<(AppConfig, Option<PathBuf>)> {
    let (config, loaded_from) = match config_path {
        // An explicit file must load; discovered files fall back to defaults
        Some(path) => {
            let config = load_config_file(path)
                .with_context(|| format!("cannot use config file {}", path.display()))?;
            (config, Some(path.to_path_buf()))
        }
        None => load_or_default(None),
    };
    let config = overrides.apply(config);

    let errors = config.validate();
    if !errors.is_empty() {
        bail!("invalid configuration:\n{}", format_errors(&errors));
    }
    Ok((config, loaded_from))
}

fn format_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the backend: the in-memory demo data or the live AWS client.
pub fn connect_backend(config: &AppConfig, demo: bool) -> Result<Box<dyn CloudFrontApi>> {
    if demo {
        tracing::info!("Using in-memory demo backend");
        return Ok(Box::new(InMemoryCloudFront::demo()));
    }

    let client_config = SdkClientConfig {
        region: config.aws.region.clone(),
        profile: config.aws.profile.clone(),
        caller_reference_prefix: config.invalidation.caller_reference_prefix.clone(),
    };
    let client = SdkCloudFront::connect(&client_config).context("failed to set up AWS access")?;
    Ok(Box::new(client))
}

/// Run the interactive session until the user quits.
pub fn run_session(config: &AppConfig, demo: bool) -> Result<()> {
    set_theme(Theme::from_name(&config.tui.theme));

    let backend = connect_backend(config, demo)?;
    let mut app = App::load(backend, AppSettings::from(config))
        .context("failed to list CloudFront distributions")?;

    run_tui(&mut app, config.tui.tick_rate_ms).context("terminal UI failed")?;
    Ok(())
}
