//! RIFF size check/repair and WAV header probe
//!
//! The audio blob is passed through untouched apart from the RIFF chunk size
//! at offset 4, which some tools write incorrectly. Everything else is opaque.

use std::borrow::Cow;
use std::io::Cursor;

use crate::constants::RIFF_MAGIC;
use crate::document::ShowtapeDocument;
use crate::error::{Result, ShowtapeError};

const SIZE_OFFSET: usize = 4;
const CHUNK_HEADER: usize = 8;

/// Check the RIFF magic and declared chunk size of an audio blob.
///
/// Returns the input unchanged when `declared + 8 == len`. Otherwise returns a
/// copy with only bytes 4..8 rewritten to `len - 8` and logs a warning.
///
/// # Errors
/// * `NotRiff` - first four bytes are not `RIFF`
/// * `Truncated` - blob too short to hold the size field
/// * `TooLarge` - blob length does not fit a 32-bit chunk size
pub fn validate_wav(audio: &[u8]) -> Result<Cow<'_, [u8]>> {
    if audio.len() < RIFF_MAGIC.len() || &audio[..RIFF_MAGIC.len()] != RIFF_MAGIC {
        return Err(ShowtapeError::NotRiff);
    }
    if audio.len() < CHUNK_HEADER {
        return Err(ShowtapeError::truncated(
            "RIFF chunk size",
            CHUNK_HEADER,
            audio.len(),
        ));
    }

    let declared = declared_size(audio);
    let actual = audio.len() - CHUNK_HEADER;
    if declared as usize == actual {
        return Ok(Cow::Borrowed(audio));
    }

    let corrected = u32::try_from(actual).map_err(|_| ShowtapeError::TooLarge {
        field: "RIFF chunk size",
        len: actual,
    })?;
    tracing::warn!(
        "RIFF chunk size incorrect ({} declared, {} actual), repairing",
        declared,
        corrected
    );

    let mut repaired = audio.to_vec();
    repaired[SIZE_OFFSET..CHUNK_HEADER].copy_from_slice(&corrected.to_le_bytes());
    Ok(Cow::Owned(repaired))
}

/// Chunk size stored at offset 4. Caller guarantees at least 8 bytes.
fn declared_size(audio: &[u8]) -> u32 {
    u32::from_le_bytes([audio[4], audio[5], audio[6], audio[7]])
}

impl ShowtapeDocument {
    /// Run [`validate_wav`] on the audio blob, keeping the corrected bytes.
    pub fn validated(mut self) -> Result<Self> {
        if let Cow::Owned(repaired) = validate_wav(&self.audio)? {
            self.audio = repaired;
        }
        Ok(self)
    }
}

/// Format summary read from a WAV header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavInfo {
    pub channels: u16,
    /// Bytes per sample
    pub sample_width: u16,
    pub sample_rate: u32,
    pub frames: u32,
}

impl WavInfo {
    /// Parse the `fmt ` and `data` chunk headers of an audio blob.
    pub fn probe(audio: &[u8]) -> Result<Self> {
        let reader = hound::WavReader::new(Cursor::new(audio))?;
        let spec = reader.spec();
        Ok(Self {
            channels: spec.channels,
            sample_width: spec.bits_per_sample.div_ceil(8),
            sample_rate: spec.sample_rate,
            frames: reader.duration(),
        })
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames as f64 / self.sample_rate as f64
    }
}
