//! Nested-archive container (.shz)
//!
//! # Layout
//! ```text
//! outer archive (stored)
//! ├── audioData.wav      raw RIFF/WAV bytes
//! └── signalData.zip     inner archive (deflated)
//!     └── signalData.json    JSON integer array
//! ```
//!
//! There is no trailer slot, so a binary trailer does not survive a trip
//! through this container.

use std::io::{Cursor, Read, Seek, Write};

use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::constants::{ARCHIVE_AUDIO_ENTRY, ARCHIVE_SIGNAL_ENTRY, SIGNAL_JSON_ENTRY};
use crate::document::{ShowtapeDocument, signal_from_json, signal_to_json};
use crate::error::{Result, ShowtapeError};

/// Decode an archive container. The returned document has no trailer.
pub fn decode(data: &[u8]) -> Result<ShowtapeDocument> {
    let mut outer = ZipArchive::new(Cursor::new(data))?;
    warn_unknown_entries(&outer, &[ARCHIVE_AUDIO_ENTRY, ARCHIVE_SIGNAL_ENTRY]);

    let audio = read_entry(&mut outer, ARCHIVE_AUDIO_ENTRY)?;
    let nested = read_entry(&mut outer, ARCHIVE_SIGNAL_ENTRY)?;

    let mut inner = ZipArchive::new(Cursor::new(nested.as_slice()))?;
    let json = read_entry(&mut inner, SIGNAL_JSON_ENTRY)?;
    let signal = signal_from_json(&json)?;
    tracing::debug!(
        "archive: {} audio bytes, {} signal samples",
        audio.len(),
        signal.len()
    );

    Ok(ShowtapeDocument::new(audio, signal))
}

/// Encode a document as an archive container.
pub fn encode(doc: &ShowtapeDocument) -> Result<Vec<u8>> {
    if doc.trailer.is_some() {
        tracing::debug!("archive container has no trailer slot, dropping trailer");
    }

    let json = signal_to_json(&doc.signal)?;
    let nested = write_archive(
        &[(SIGNAL_JSON_ENTRY, json.as_slice())],
        CompressionMethod::Deflated,
    )?;

    write_archive(
        &[
            (ARCHIVE_AUDIO_ENTRY, doc.audio.as_slice()),
            (ARCHIVE_SIGNAL_ENTRY, nested.as_slice()),
        ],
        CompressionMethod::Stored,
    )
}

/// Read a whole entry, mapping an absent name to `MissingEntry`.
fn read_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &'static str,
) -> Result<Vec<u8>> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(ShowtapeError::MissingEntry(name)),
        Err(e) => return Err(e.into()),
    };
    let mut buf = Vec::new();
    entry
        .read_to_end(&mut buf)
        .map_err(|e| ShowtapeError::Archive(ZipError::Io(e)))?;
    Ok(buf)
}

fn warn_unknown_entries<R: Read + Seek>(archive: &ZipArchive<R>, expected: &[&str]) {
    for name in archive.file_names() {
        if !expected.contains(&name) {
            tracing::warn!("ignoring unexpected archive entry '{}'", name);
        }
    }
}

/// Build an archive holding `entries` in order, all with the same method.
pub(crate) fn write_archive(
    entries: &[(&str, &[u8])],
    method: CompressionMethod,
) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        let options = SimpleFileOptions::default().compression_method(method);
        writer.start_file(*name, options)?;
        writer.write_all(data)?;
    }
    Ok(writer.finish()?.into_inner())
}
