//! Binary container encoding

use crate::constants::{
    AUDIO_TAG, FRAMING_SIZE, HEADER, REFERENCE_FOOTER, SEPARATOR, SIGNAL_TAG, TERMINATOR,
};
use crate::document::ShowtapeDocument;
use crate::error::{Result, ShowtapeError};

/// Encode a document as a binary container.
///
/// Length prefixes come from the in-memory payloads. The trailer is the
/// document's stored trailer when present, otherwise the reference footer.
pub fn encode(doc: &ShowtapeDocument) -> Result<Vec<u8>> {
    let audio_len = length_prefix("audio data", doc.audio.len())?;
    let count = length_prefix("signal data", doc.signal.len())?;

    let mut output = Vec::with_capacity(encoded_len(doc));

    // Helpers to write little-endian values
    let write_record = |out: &mut Vec<u8>, len: i32, tag: u8| {
        out.extend_from_slice(&len.to_le_bytes());
        out.push(tag);
    };

    output.extend_from_slice(HEADER);
    write_record(&mut output, audio_len, AUDIO_TAG);
    output.extend_from_slice(&doc.audio);

    output.extend_from_slice(SEPARATOR);
    write_record(&mut output, count, SIGNAL_TAG);
    for value in &doc.signal {
        output.extend_from_slice(&value.to_le_bytes());
    }

    output.push(TERMINATOR);
    output.extend_from_slice(trailer_bytes(doc));

    Ok(output)
}

/// Exact size of [`encode`]'s output for `doc`.
pub fn encoded_len(doc: &ShowtapeDocument) -> usize {
    FRAMING_SIZE + doc.audio.len() + doc.signal.len() * 4 + trailer_bytes(doc).len()
}

fn trailer_bytes(doc: &ShowtapeDocument) -> &[u8] {
    doc.trailer.as_deref().unwrap_or(REFERENCE_FOOTER)
}

/// Payload lengths are stored as signed 32-bit prefixes.
fn length_prefix(field: &'static str, len: usize) -> Result<i32> {
    i32::try_from(len).map_err(|_| ShowtapeError::TooLarge { field, len })
}
