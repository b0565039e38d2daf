//! Reverie CLI - offline host for the reverie reverb engine.

mod commands;
mod wav;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reverie")]
#[command(author, version, about = "Reverie stereo reverb CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a WAV file through the reverb
    Process(commands::process::ProcessArgs),

    /// Render the reverb's impulse response to a WAV file
    Impulse(commands::impulse::ImpulseArgs),

    /// List the engine parameters with their ranges and defaults
    Params(commands::params::ParamsArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Impulse(args) => commands::impulse::run(args),
        Commands::Params(args) => commands::params::run(args),
    }
}
