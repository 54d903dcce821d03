//! In-memory showtape exchanged between codecs

use crate::constants::SIGNAL_FRAME_RATE;
use crate::error::Result;

/// A decoded showtape: audio blob, signal track, and optional binary trailer.
///
/// Built by exactly one decoder and consumed by one encoder; lengths written
/// to any container are always derived from these fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShowtapeDocument {
    /// RIFF/WAV container bytes
    pub audio: Vec<u8>,
    /// Per-frame signal values in playback order
    pub signal: Vec<i32>,
    /// Bytes after the terminator, only set when decoded from a binary container
    pub trailer: Option<Vec<u8>>,
}

impl ShowtapeDocument {
    pub fn new(audio: Vec<u8>, signal: Vec<i32>) -> Self {
        Self {
            audio,
            signal,
            trailer: None,
        }
    }

    /// Same payloads with the trailer dropped.
    pub fn without_trailer(self) -> Self {
        Self {
            trailer: None,
            ..self
        }
    }

    pub fn signal_stats(&self) -> SignalStats {
        SignalStats::from_track(&self.signal)
    }
}

/// Serialize a signal track as a compact JSON integer array.
pub fn signal_to_json(signal: &[i32]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(signal)?)
}

/// Parse a JSON integer array into a signal track.
///
/// Anything other than an array of 32-bit integers is rejected.
pub fn signal_from_json(json: &[u8]) -> Result<Vec<i32>> {
    Ok(serde_json::from_slice(json)?)
}

/// Summary of a signal track.
///
/// A zero value closes a frame; the other values are channel numbers active in it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignalStats {
    pub frames: usize,
    pub max_channel: i32,
}

impl SignalStats {
    pub fn from_track(track: &[i32]) -> Self {
        let frames = track.iter().filter(|&&v| v == 0).count();
        let max_channel = track.iter().copied().max().unwrap_or(0).max(0);
        Self {
            frames,
            max_channel,
        }
    }

    /// Playback length at the fixed signal frame rate.
    pub fn duration_secs(&self) -> f64 {
        self.frames as f64 / SIGNAL_FRAME_RATE
    }
}
