//! CLI command handlers

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use sitestyle::config::{embedded_presets, get_config_value};
use sitestyle::{ConfigLoader, StyleConfig, StyleConfigProvider};

/// Where to read the declaration from
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Declaration file (defaults to $SITESTYLE_CONFIG or ./sitestyle.yaml)
    #[arg(long, short = 'f', conflicts_with = "preset")]
    pub file: Option<PathBuf>,

    /// Embedded preset name (e.g. "site", "minimal")
    #[arg(long, short = 'p')]
    pub preset: Option<String>,
}

/// Output format for resolved configurations
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
    /// Short human-readable overview
    Summary,
}

/// Main commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the declaration and print the result
    Resolve {
        #[command(flatten)]
        source: SourceArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Validate the declaration
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Get a resolved value (e.g. "darkMode", "plugins", "theme.colors.stone.900")
    Get {
        key: String,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List embedded presets
    Presets,
    /// Show version information
    Version,
}

/// Handle a subcommand
pub fn handle_command(cmd: Command) -> Result<()> {
    match cmd {
        Command::Resolve { source, format } => {
            let config = resolve(&source)?;
            let output = match format {
                OutputFormat::Yaml => serde_yaml::to_string(&config)
                    .context("Failed to serialize configuration")?,
                OutputFormat::Json => {
                    let mut json = serde_json::to_string_pretty(&config)
                        .context("Failed to serialize configuration")?;
                    json.push('\n');
                    json
                }
                OutputFormat::Summary => format!("{}\n", config.summary()),
            };
            print!("{}", output);
        }
        Command::Validate { source } => match resolve(&source) {
            Ok(_) => {
                println!("Configuration is valid");
            }
            Err(e) => {
                eprintln!("Configuration validation failed: {:#}", e);
                std::process::exit(1);
            }
        },
        Command::Get { key, source } => {
            let config = resolve(&source)?;
            let value = get_config_value(&config, &key)?;
            println!("{}", value.trim_end());
        }
        Command::Presets => {
            println!("Available presets:");
            for preset in embedded_presets::list_embedded_presets() {
                println!("  - {}", preset);
            }
        }
        Command::Version => super::display_version(),
    }

    Ok(())
}

/// Load and resolve the declaration named by `source`
fn resolve(source: &SourceArgs) -> Result<StyleConfig> {
    let root = std::env::current_dir().context("Failed to determine working directory")?;
    let origin = ConfigLoader::discover(source.file.as_deref(), source.preset.as_deref(), &root);
    let declaration = ConfigLoader::load(&origin)?;
    declaration
        .resolve()
        .with_context(|| format!("Failed to resolve style configuration from {}", origin))
}
