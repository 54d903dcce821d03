//! Test command - decode a container and print what is inside

use anyhow::{Context, Result};
use clap::Args;
use std::fmt;
use std::path::PathBuf;

use showtape_format::{ShowtapeDocument, SignalStats, WavInfo, read_container};

use crate::config::Settings;
use crate::convert::detect_format;

/// Arguments for the test command
#[derive(Args)]
pub struct TestArgs {
    /// Container to inspect (.shw or .shz)
    pub input: PathBuf,
}

/// Sibling video check for variants that ship with one
#[derive(Debug, Clone, PartialEq)]
pub struct VideoCheck {
    pub path: PathBuf,
    pub exists: bool,
}

/// Summary of a decoded showtape.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub audio: WavInfo,
    pub signal: SignalStats,
    pub trailer: Option<Vec<u8>>,
    pub video: Option<VideoCheck>,
}

impl Report {
    pub fn new(doc: &ShowtapeDocument, video: Option<VideoCheck>) -> Result<Self> {
        let audio = WavInfo::probe(&doc.audio).context("Audio is not a readable WAV")?;
        Ok(Self {
            audio,
            signal: doc.signal_stats(),
            trailer: doc.trailer.clone(),
            video,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Audio Info:")?;
        writeln!(f, "  Channels:        {}", self.audio.channels)?;
        writeln!(f, "  Sample width:    {} bytes", self.audio.sample_width)?;
        writeln!(f, "  Frame rate:      {} Hz", self.audio.sample_rate)?;
        writeln!(f, "  Frames:          {}", self.audio.frames)?;
        writeln!(f, "  Duration:        {:.2} s", self.audio.duration_secs())?;

        writeln!(f, "Signal Info:")?;
        writeln!(f, "  Frames:          {}", self.signal.frames)?;
        writeln!(f, "  Max channel:     {}", self.signal.max_channel)?;
        writeln!(f, "  Duration:        {:.2} s", self.signal.duration_secs())?;

        writeln!(f, "Trailer Info:")?;
        match &self.trailer {
            Some(trailer) => writeln!(f, "  {}", trailer.escape_ascii())?,
            None => writeln!(f, "  (none)")?,
        }

        if let Some(video) = &self.video {
            writeln!(f, "Video Info:")?;
            let state = if video.exists { "found" } else { "missing" };
            writeln!(f, "  {}: {}", video.path.display(), state)?;
        }
        Ok(())
    }
}

/// Execute the test command
pub fn execute(args: TestArgs, settings: &Settings) -> Result<()> {
    let detected = detect_format(&args.input)?;
    tracing::info!("Testing {} ({})", args.input.display(), detected.kind);

    let doc = read_container(&args.input, detected.kind, &settings.read)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let video = detected.video_path(&args.input).map(|path| VideoCheck {
        exists: path.is_file(),
        path,
    });
    if let Some(video) = video.as_ref().filter(|v| !v.exists) {
        tracing::warn!("Expected video file is missing: {}", video.path.display());
    }

    let report = Report::new(&doc, video)?;
    print!("{}", report);
    Ok(())
}
