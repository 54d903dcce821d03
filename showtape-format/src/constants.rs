//! Format constants shared by both directions of every codec.
//!
//! The binary container is a serialized object graph for a single
//! `rshwFormat` record with three members (`audioData`, `signalData`,
//! `videoData`). Everything except the two array payloads is fixed, so the
//! framing is stored here as reference bytes and compared exactly.
//!
//! # Binary layout
//! ```text
//! 0x000: HEADER              (221 bytes)
//! 0x0DD: audio length        i32 LE
//!        AUDIO_TAG           u8 (0x02, byte array)
//!        audio payload       (length bytes, RIFF/WAV)
//!        SEPARATOR           (5 bytes)
//!        sample count        i32 LE
//!        SIGNAL_TAG          u8 (0x08, i32 array)
//!        signal payload      (count * 4 bytes, i32 LE)
//!        TERMINATOR          u8 (0x0B)
//!        trailer             (remaining bytes, REFERENCE_FOOTER when strict)
//! ```

/// Object-graph preamble preceding the audio array record.
///
/// Ends with the array record opener for object id 3 (the audio bytes).
pub const HEADER: &[u8; 221] = b"\x00\x01\x00\x00\x00\xff\xff\xff\xff\x01\x00\x00\x00\x00\x00\x00\x00\x0c\x02\x00\x00\x00\
    FAssembly-CSharp, Version=0.0.0.0, Culture=neutral, PublicKeyToken=null\
    \x05\x01\x00\x00\x00\x0arshwFormat\x03\x00\x00\x00\
    \x1a<audioData>k__BackingField\
    \x1b<signalData>k__BackingField\
    \x1a<videoData>k__BackingField\
    \x07\x07\x07\x02\x08\x02\x02\x00\x00\x00\x09\x03\x00\x00\x00\x09\x04\x00\x00\x00\x0a\
    \x0f\x03\x00\x00\x00";

/// Size of a length/count record: i32 LE + type tag.
pub const RECORD_SIZE: usize = 5;

/// Primitive type tag of the audio array (bytes).
pub const AUDIO_TAG: u8 = 0x02;

/// Array record opener for object id 4 (the signal integers).
pub const SEPARATOR: &[u8; 5] = b"\x0f\x04\x00\x00\x00";

/// Primitive type tag of the signal array (32-bit signed integers).
pub const SIGNAL_TAG: u8 = 0x08;

/// Message-end record closing the object graph.
pub const TERMINATOR: u8 = 0x0b;

/// Version/config string written after the terminator by current tooling.
pub const REFERENCE_FOOTER: &[u8; 52] = b"v1.4,App=shw_to_rshw,ShwFps=40,Map=DefaultNonLinear\x00";

/// Total size of the fixed framing around the two payloads, excluding the trailer.
pub const FRAMING_SIZE: usize = HEADER.len() + RECORD_SIZE + SEPARATOR.len() + RECORD_SIZE + 1;

/// RIFF magic at the start of every audio blob.
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";

/// Outer archive entry holding the raw WAV bytes.
pub const ARCHIVE_AUDIO_ENTRY: &str = "audioData.wav";

/// Outer archive entry holding the nested signal archive.
pub const ARCHIVE_SIGNAL_ENTRY: &str = "signalData.zip";

/// Sole entry of the nested signal archive.
pub const SIGNAL_JSON_ENTRY: &str = "signalData.json";

/// Default loose audio file name.
pub const LOOSE_AUDIO_FILE: &str = "audioData.wav";

/// Default loose signal file name.
pub const LOOSE_SIGNAL_FILE: &str = "signalData.json";

/// Signal frames per second used for duration estimates.
pub const SIGNAL_FRAME_RATE: f64 = 60.0;
