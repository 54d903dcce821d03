//! Pack and unpack commands - containers <-> loose audio/signal files

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use showtape_format::{read_container, write_container};

use crate::config::Settings;
use crate::convert::detect_format;

/// Arguments for the unpack command
#[derive(Args)]
pub struct UnpackArgs {
    /// Container to unpack (.shw or .shz)
    pub input: PathBuf,

    /// Directory for the loose files (overrides config)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// Arguments for the pack command
#[derive(Args)]
pub struct PackArgs {
    /// Container to create; its extension picks the format
    pub output: PathBuf,

    /// Directory holding the loose files (overrides config)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// Execute the unpack command
pub fn unpack(args: UnpackArgs, settings: &Settings) -> Result<()> {
    let detected = detect_format(&args.input)?;
    let files = settings.loose_files(args.dir.as_deref());

    tracing::info!(
        "Unpacking {} -> {}, {}",
        args.input.display(),
        files.audio.display(),
        files.signal.display()
    );

    let doc = read_container(&args.input, detected.kind, &settings.read)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    if let Some(trailer) = &doc.trailer {
        tracing::debug!("Trailer ({} bytes) is not kept in loose files", trailer.len());
    }
    files.write(&doc).context("Failed to write loose files")?;

    tracing::info!("Done!");
    Ok(())
}

/// Execute the pack command
pub fn pack(args: PackArgs, settings: &Settings) -> Result<()> {
    let detected = detect_format(&args.output)?;
    let files = settings.loose_files(args.dir.as_deref());

    tracing::info!(
        "Packing {}, {} -> {} ({})",
        files.audio.display(),
        files.signal.display(),
        args.output.display(),
        detected.kind
    );

    let doc = files
        .read(settings.read.max_input_bytes)
        .context("Failed to read loose files")?
        .validated()
        .with_context(|| format!("Invalid audio file: {}", files.audio.display()))?;
    write_container(&args.output, detected.kind, &doc)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    tracing::info!("Done!");
    Ok(())
}
