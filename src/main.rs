//! cfinval: CloudFront invalidation TUI
//!
//! Browse distributions, inspect invalidations and create new ones.

use anyhow::{Context, Result};
use cfinval::{
    cli::{self, CliOverrides},
    config::{self, AppConfig},
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cfinval")]
#[command(version)]
#[command(about = "Browse CloudFront distributions and manage cache invalidations", long_about = None)]
#[command(after_help = "KEYS:
    List       enter select • / filter • q quit
    Table      n new • r refresh • o open in browser • backspace back
    Input      enter submit • esc cancel
    Anywhere   ctrl+c quit

EXAMPLES:
    # Use the default AWS credential chain
    cfinval

    # Pick a named profile and region
    cfinval --profile prod --region eu-west-1

    # Try the interface without an AWS account
    cfinval --demo")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// AWS region for API calls
    #[arg(long, env = "CFINVAL_REGION")]
    region: Option<String>,

    /// AWS shared-config profile
    #[arg(long, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// Color theme: dark, light or high-contrast
    #[arg(long)]
    theme: Option<String>,

    /// Log file (defaults to the user cache directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run against an in-memory backend with sample data
    #[arg(long)]
    demo: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .cfinval.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        region: cli.region.clone(),
        profile: cli.profile.clone(),
        theme: cli.theme.clone(),
        log_file: cli.log_file.clone(),
        verbose: cli.verbose,
    };

    match cli.command {
        None => {
            let (config, loaded_from) = cli::prepare_config(cli.config.as_deref(), &overrides)?;
            init_logging(&config)?;
            if let Some(path) = &loaded_from {
                tracing::info!(path = %path.display(), "Loaded config");
            }
            cli::run_session(&config, cli.demo)
        }

        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "cfinval", &mut io::stdout());
            Ok(())
        }

        Some(Commands::ConfigSchema { output }) => {
            let schema = config::generate_json_schema().context("failed to build schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    cli::prepare_config(cli.config.as_deref(), &overrides)?;
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".cfinval.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}

/// Send logs to a file; the TUI owns the terminal.
fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.logging.level))
        .context("invalid log level")?;

    let Some(path) = config.logging.effective_file() else {
        // No cache directory on this platform: run without logs
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}
