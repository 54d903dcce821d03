//! Showtape container codecs
//!
//! A showtape bundles a RIFF/WAV recording with a per-frame integer signal
//! track that drives show-control playback. This crate converts between the
//! three encodings of that pair:
//!
//! - **Binary container** (`.shw`): fixed-layout serialized record with
//!   constant framing, see [`binary`] and [`constants`].
//! - **Archive container** (`.shz`): stored archive with the audio and a
//!   deflated inner archive holding the signal as JSON, see [`archive`].
//! - **Loose files**: `audioData.wav` + `signalData.json`, see [`loose`].
//!
//! # Usage
//!
//! ```no_run
//! use showtape_format::{ContainerKind, ReadOptions, classify, read_container, write_container};
//! use std::path::Path;
//!
//! let input = "show.rshw";
//! let detected = classify(input).expect("cannot infer format");
//! let doc = read_container(Path::new(input), detected.kind, &ReadOptions::default())?;
//!
//! let output = detected.output_path(Path::new(input), ContainerKind::Archive);
//! write_container(&output, ContainerKind::Archive, &doc)?;
//! # Ok::<(), showtape_format::ShowtapeError>(())
//! ```

pub mod archive;
pub mod binary;
pub mod constants;
mod container;
mod detect;
mod document;
mod error;
pub mod fs;
pub mod loose;
mod wav;

pub use binary::TrailerMode;
pub use container::ContainerKind;
pub use detect::{DetectedFormat, classify};
pub use document::{ShowtapeDocument, SignalStats, signal_from_json, signal_to_json};
pub use error::{ErrorKind, Result, ShowtapeError};
pub use fs::{ReadOptions, read_container, write_container};
pub use loose::LooseFiles;
pub use wav::{WavInfo, validate_wav};
