//! sitestyle - style configuration provider for static-site builds
//!
//! Resolves a style declaration (content patterns, safelist, dark mode,
//! theme extensions, variants, plugins) and prints it for the CSS generation
//! engine.

mod cli;

use anyhow::Result;
use clap::Parser;

/// sitestyle - style configuration provider for static-site builds
#[derive(Parser, Debug)]
#[command(name = "sitestyle")]
#[command(about = "Resolve and validate static-site style configuration", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() -> Result<()> {
    let args = Args::parse();

    cli::init_logging(args.debug);
    tracing::debug!("Debug logging enabled");

    cli::handle_command(args.command)
}
