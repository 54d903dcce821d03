//! Tool configuration (showtape.toml)
//!
//! Every key is optional:
//!
//! ```toml
//! [binary]
//! trailer = "strict"        # or "permissive" (default)
//!
//! [loose]
//! dir = "work"              # where pack/unpack look for loose files
//! audio = "audioData.wav"
//! signal = "signalData.json"
//!
//! [limits]
//! max_input_bytes = 1073741824
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use showtape_format::constants::{LOOSE_AUDIO_FILE, LOOSE_SIGNAL_FILE};
use showtape_format::fs::MAX_INPUT_BYTES;
use showtape_format::{LooseFiles, ReadOptions, TrailerMode};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "showtape.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub binary: BinarySection,
    #[serde(default)]
    pub loose: LooseSection,
    #[serde(default)]
    pub limits: LimitsSection,
}

/// Binary container settings
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinarySection {
    /// How bytes after the terminator are checked on read
    #[serde(default)]
    pub trailer: TrailerMode,
}

/// Loose file names and location
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LooseSection {
    #[serde(default = "default_loose_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_audio_name")]
    pub audio: String,
    #[serde(default = "default_signal_name")]
    pub signal: String,
}

impl Default for LooseSection {
    fn default() -> Self {
        Self {
            dir: default_loose_dir(),
            audio: default_audio_name(),
            signal: default_signal_name(),
        }
    }
}

fn default_loose_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_audio_name() -> String {
    LOOSE_AUDIO_FILE.to_string()
}

fn default_signal_name() -> String {
    LOOSE_SIGNAL_FILE.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsSection {
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: u64,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

fn default_max_input_bytes() -> u64 {
    MAX_INPUT_BYTES
}

impl Config {
    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse config from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse showtape.toml")
    }

    /// Load the explicit config, else `showtape.toml` if present, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            tracing::debug!("Using {}", default_path.display());
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Effective settings after command-line overrides.
#[derive(Debug)]
pub struct Settings {
    pub read: ReadOptions,
    pub loose: LooseSection,
}

impl Settings {
    pub fn new(config: Config, strict: bool) -> Self {
        let trailer_mode = if strict {
            TrailerMode::Strict
        } else {
            config.binary.trailer
        };
        Self {
            read: ReadOptions {
                trailer_mode,
                max_input_bytes: config.limits.max_input_bytes,
            },
            loose: config.loose,
        }
    }

    /// Loose file pair, in `dir` if given, else the configured directory.
    pub fn loose_files(&self, dir: Option<&Path>) -> LooseFiles {
        let dir = dir.unwrap_or(&self.loose.dir);
        LooseFiles::new(dir.join(&self.loose.audio), dir.join(&self.loose.signal))
    }
}
