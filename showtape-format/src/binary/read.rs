//! Binary container decoding

use crate::binary::TrailerMode;
use crate::constants::{
    AUDIO_TAG, HEADER, RECORD_SIZE, REFERENCE_FOOTER, SEPARATOR, SIGNAL_TAG, TERMINATOR,
};
use crate::document::ShowtapeDocument;
use crate::error::{Result, ShowtapeError};

/// Decode a binary container.
///
/// # Arguments
/// * `data` - Complete container bytes
/// * `mode` - Trailer handling (see [`TrailerMode`])
///
/// # Returns
/// * `Ok(ShowtapeDocument)` - with `trailer` set to the bytes after the terminator
/// * `Err(ShowtapeError)` - first structural mismatch found
pub fn decode(data: &[u8], mode: TrailerMode) -> Result<ShowtapeDocument> {
    let mut reader = ByteReader::new(data);

    if reader.take(HEADER.len(), "header")? != HEADER {
        return Err(ShowtapeError::HeaderMismatch);
    }

    let audio_len = reader.read_record("audio record", AUDIO_TAG)?;
    let audio = reader.take(audio_len, "audio payload")?.to_vec();
    tracing::debug!("audio payload: {} bytes", audio_len);

    if reader.take(SEPARATOR.len(), "separator")? != SEPARATOR {
        return Err(ShowtapeError::SeparatorMismatch);
    }

    let count = reader.read_record("signal record", SIGNAL_TAG)?;
    let byte_len = count
        .checked_mul(4)
        .ok_or_else(|| ShowtapeError::truncated("signal payload", usize::MAX, reader.remaining()))?;
    let signal: Vec<i32> = reader
        .take(byte_len, "signal payload")?
        .chunks_exact(4)
        .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    tracing::debug!("signal payload: {} samples", count);

    let terminator = reader.read_u8("terminator")?;
    if terminator != TERMINATOR {
        return Err(ShowtapeError::TerminatorMismatch(terminator));
    }

    let trailer = reader.rest();
    if mode == TrailerMode::Strict {
        check_strict_trailer(trailer)?;
    }

    Ok(ShowtapeDocument {
        audio,
        signal,
        trailer: Some(trailer.to_vec()),
    })
}

/// Strict variant: reference footer followed by end of file.
fn check_strict_trailer(trailer: &[u8]) -> Result<()> {
    if trailer.len() < REFERENCE_FOOTER.len() {
        return Err(ShowtapeError::truncated(
            "footer",
            REFERENCE_FOOTER.len(),
            trailer.len(),
        ));
    }
    let (footer, extra) = trailer.split_at(REFERENCE_FOOTER.len());
    if footer != REFERENCE_FOOTER {
        return Err(ShowtapeError::FooterMismatch);
    }
    if !extra.is_empty() {
        return Err(ShowtapeError::TrailingBytes(extra.len()));
    }
    Ok(())
}

/// Forward-only reader over the container bytes.
pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Take exactly `len` bytes or fail naming `field`.
    pub(crate) fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(ShowtapeError::truncated(field, len, self.remaining()));
        }
        let chunk = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(chunk)
    }

    pub(crate) fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        Ok(self.take(1, field)?[0])
    }

    /// Read an `i32 LE + tag` record and return the non-negative length.
    pub(crate) fn read_record(&mut self, field: &'static str, tag: u8) -> Result<usize> {
        let record = self.take(RECORD_SIZE, field)?;
        let value = i32::from_le_bytes([record[0], record[1], record[2], record[3]]);
        if record[4] != tag {
            return Err(ShowtapeError::UnexpectedTag {
                field,
                expected: tag,
                found: record[4],
            });
        }
        usize::try_from(value).map_err(|_| ShowtapeError::NegativeLength { field, value })
    }

    pub(crate) fn rest(&mut self) -> &'a [u8] {
        let rest = &self.data[self.pos..];
        self.pos = self.data.len();
        rest
    }
}
