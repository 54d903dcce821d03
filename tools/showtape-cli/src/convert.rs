//! Convert command - binary container <-> archive container

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use showtape_format::{DetectedFormat, classify, read_container, write_container};

use crate::config::Settings;

/// Arguments for the convert command
#[derive(Args)]
pub struct ConvertArgs {
    /// Input .shw or .shz file (a variant prefix like .rshw is allowed)
    pub input: PathBuf,

    /// Output file (default: input with the extension's last letter swapped)
    pub output: Option<PathBuf>,
}

/// Classify a path by its extension or fail with a user-facing error.
pub fn detect_format(path: &Path) -> Result<DetectedFormat> {
    let name = path
        .to_str()
        .with_context(|| format!("File name is not valid UTF-8: {}", path.display()))?;
    classify(name).with_context(|| {
        format!(
            "Cannot infer format from file extension: {} (use .shw or .shz)",
            path.display()
        )
    })
}

/// Execute the convert command
pub fn execute(args: ConvertArgs, settings: &Settings) -> Result<()> {
    let detected = detect_format(&args.input)?;
    let target = detected.kind.other();

    let output = match args.output {
        Some(output) => {
            if let Ok(named) = detect_format(&output) {
                anyhow::ensure!(
                    named.kind == target,
                    "Output {} names a {} container, but converting {} produces {}",
                    output.display(),
                    named.kind,
                    args.input.display(),
                    target
                );
            }
            output
        }
        None => detected.output_path(&args.input, target),
    };

    tracing::info!(
        "Converting {} -> {} ({} -> {})",
        args.input.display(),
        output.display(),
        detected.kind,
        target
    );

    let doc = read_container(&args.input, detected.kind, &settings.read)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    write_container(&output, target, &doc)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!("Done!");
    Ok(())
}
