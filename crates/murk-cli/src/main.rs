//! Murk CLI - offline renderer and inspector for the murk drum machine.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "murk")]
#[command(author, version, about = "Murk drum machine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the test sequence or explicit hits to a WAV file
    Render(commands::render::RenderArgs),

    /// List the kit's parameters
    Params(commands::params::ParamsArgs),

    /// List, show, and export factory kits
    Presets(commands::presets::PresetsArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => commands::render::run(&args),
        Commands::Params(args) => commands::params::run(&args),
        Commands::Presets(args) => commands::presets::run(&args),
    }
}
