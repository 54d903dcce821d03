//! showtape - Showtape container tool
//!
//! # Commands
//!
//! - `showtape convert show.rshw` - binary container to archive (or back)
//! - `showtape unpack show.rshz` - write audioData.wav + signalData.json
//! - `showtape pack show.rshw` - build a container from the loose files
//! - `showtape test show.rshw` - decode, validate, and print a summary
//! - `showtape version`
//!
//! Settings are read from `showtape.toml` in the working directory, or the
//! file named by `--config`. See the `config` module for the keys.

mod config;
mod convert;
mod inspect;
mod loose;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, Settings};

#[derive(Parser)]
#[command(name = "showtape")]
#[command(about = "Convert, pack, unpack, and inspect showtape containers")]
#[command(version)]
struct Cli {
    /// Config file (default: showtape.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Require the reference footer after the binary terminator
    #[arg(long, global = true)]
    strict: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tool version
    Version,

    /// Decode a container and print its contents
    Test(inspect::TestArgs),

    /// Convert between .shw and .shz
    Convert(convert::ConvertArgs),

    /// Build a container from loose audio and signal files
    Pack(loose::PackArgs),

    /// Extract a container into loose audio and signal files
    Unpack(loose::UnpackArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Commands::Version = cli.command {
        println!("showtape - v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::discover(cli.config.as_deref())?;
    let settings = Settings::new(config, cli.strict);
    tracing::debug!("Settings: {:?}", settings);

    match cli.command {
        Commands::Version => Ok(()),
        Commands::Test(args) => inspect::execute(args, &settings),
        Commands::Convert(args) => convert::execute(args, &settings),
        Commands::Pack(args) => loose::pack(args, &settings),
        Commands::Unpack(args) => loose::unpack(args, &settings),
    }
}
