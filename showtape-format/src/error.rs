//! Showtape codec error types

use std::path::PathBuf;

/// Failure class of a [`ShowtapeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structural mismatch inside a container
    Format,
    /// Input missing or output already present
    Existence,
    /// Underlying I/O failure
    Io,
}

/// Showtape codec error types
#[derive(Debug, thiserror::Error)]
pub enum ShowtapeError {
    #[error("header does not match the reference preamble")]
    HeaderMismatch,

    #[error("truncated {field}: needed {needed} bytes, {available} available")]
    Truncated {
        field: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("unexpected {field} type tag 0x{found:02X} (expected 0x{expected:02X})")]
    UnexpectedTag {
        field: &'static str,
        expected: u8,
        found: u8,
    },

    #[error("negative {field} prefix: {value}")]
    NegativeLength { field: &'static str, value: i32 },

    #[error("separator marker does not match")]
    SeparatorMismatch,

    #[error("terminator byte 0x{0:02X} is not the message-end marker")]
    TerminatorMismatch(u8),

    #[error("trailer does not match the reference footer")]
    FooterMismatch,

    #[error("{0} unexpected bytes after the footer")]
    TrailingBytes(usize),

    #[error("{field} too large to encode: {len} (max {max})", max = i32::MAX)]
    TooLarge { field: &'static str, len: usize },

    #[error("audio data is not a RIFF file")]
    NotRiff,

    #[error("unreadable WAV header: {0}")]
    Wav(#[from] hound::Error),

    #[error("archive entry '{0}' is missing")]
    MissingEntry(&'static str),

    #[error("malformed archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("malformed signal data: {0}")]
    SignalJson(#[from] serde_json::Error),

    #[error("file {} doesn't exist", .0.display())]
    NotFound(PathBuf),

    #[error("file {} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("file too large: {} ({len} bytes, max {max} bytes)", .path.display())]
    FileTooLarge { path: PathBuf, len: u64, max: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShowtapeError {
    /// Classify this error into the format / existence / I/O taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShowtapeError::NotFound(_) | ShowtapeError::AlreadyExists(_) => ErrorKind::Existence,
            ShowtapeError::Io(_) | ShowtapeError::FileTooLarge { .. } => ErrorKind::Io,
            _ => ErrorKind::Format,
        }
    }

    pub(crate) fn truncated(field: &'static str, needed: usize, available: usize) -> Self {
        ShowtapeError::Truncated {
            field,
            needed,
            available,
        }
    }
}

/// Result alias used throughout the codecs.
pub type Result<T> = std::result::Result<T, ShowtapeError>;
