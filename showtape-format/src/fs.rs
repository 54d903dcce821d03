//! Filesystem helpers and the container read/write pipeline.
//!
//! Outputs are never overwritten and never left half-written: the encoded
//! bytes are built in memory, written to a temporary file in the output
//! directory, then moved into place only if nothing exists there.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::{NamedTempFile, PersistError};

use crate::binary::TrailerMode;
use crate::container::ContainerKind;
use crate::document::ShowtapeDocument;
use crate::error::{Result, ShowtapeError};

/// Default cap on a single input file.
pub const MAX_INPUT_BYTES: u64 = 1024 * 1024 * 1024; // 1 GiB

/// Options for reading containers and loose files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    pub trailer_mode: TrailerMode,
    pub max_input_bytes: u64,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            trailer_mode: TrailerMode::default(),
            max_input_bytes: MAX_INPUT_BYTES,
        }
    }
}

/// Read a file into memory with a size cap.
pub fn read_file_with_limit(path: &Path, max_bytes: u64) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(ShowtapeError::NotFound(path.to_path_buf()));
    }
    let len = fs::metadata(path)?.len();
    if len > max_bytes {
        return Err(ShowtapeError::FileTooLarge {
            path: path.to_path_buf(),
            len,
            max: max_bytes,
        });
    }
    tracing::info!("Reading {}...", path.display());
    Ok(fs::read(path)?)
}

/// Fail with `AlreadyExists` if `path` is present.
pub fn ensure_absent(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(ShowtapeError::AlreadyExists(path.to_path_buf()));
    }
    Ok(())
}

/// Write `data` to a new file at `path`.
///
/// Refuses to replace an existing file. The bytes land in a uniquely named
/// temporary file in the same directory first, which is then moved into
/// place without replacing anything, so a failure never leaves a truncated
/// file at `path` and never touches unrelated files.
pub fn write_new_file(path: &Path, data: &[u8]) -> Result<()> {
    ensure_absent(path)?;
    tracing::info!("Writing {}...", path.display());

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".showtape-")
        .suffix(".tmp")
        .tempfile_in(dir)?;

    if let Err(e) = tmp.write_all(data).and_then(|()| tmp.as_file().sync_all()) {
        discard_temp(tmp);
        return Err(e.into());
    }

    match tmp.persist_noclobber(path) {
        Ok(_) => Ok(()),
        Err(PersistError { error, file }) => {
            discard_temp(file);
            if error.kind() == io::ErrorKind::AlreadyExists {
                Err(ShowtapeError::AlreadyExists(path.to_path_buf()))
            } else {
                Err(error.into())
            }
        }
    }
}

/// Remove a temporary file, logging when that fails.
fn discard_temp(tmp: NamedTempFile) {
    let tmp_path = tmp.path().to_path_buf();
    if let Err(e) = tmp.close() {
        tracing::warn!(
            "Failed to remove temporary file {}: {}",
            tmp_path.display(),
            e
        );
    }
}

/// Read, decode, and validate a container file.
pub fn read_container(
    path: &Path,
    kind: ContainerKind,
    options: &ReadOptions,
) -> Result<ShowtapeDocument> {
    let data = read_file_with_limit(path, options.max_input_bytes)?;
    kind.decode(&data, options.trailer_mode)?.validated()
}

/// Encode a document and write it to a new container file.
pub fn write_container(path: &Path, kind: ContainerKind, doc: &ShowtapeDocument) -> Result<()> {
    ensure_absent(path)?;
    let data = kind.encode(doc)?;
    write_new_file(path, &data)
}
