//! Loose-file form: a WAV file plus a JSON signal file side by side.
//!
//! This is the editable form of a showtape, so existing files are never
//! replaced. Both outputs are checked before either is written.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{LOOSE_AUDIO_FILE, LOOSE_SIGNAL_FILE};
use crate::document::{ShowtapeDocument, signal_from_json, signal_to_json};
use crate::error::Result;
use crate::fs::{ensure_absent, read_file_with_limit, write_new_file};

/// Paths of the two loose payload files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LooseFiles {
    pub audio: PathBuf,
    pub signal: PathBuf,
}

impl LooseFiles {
    pub fn new(audio: impl Into<PathBuf>, signal: impl Into<PathBuf>) -> Self {
        Self {
            audio: audio.into(),
            signal: signal.into(),
        }
    }

    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(LOOSE_AUDIO_FILE), dir.join(LOOSE_SIGNAL_FILE))
    }

    /// Load both payloads. The audio blob is returned unvalidated.
    pub fn read(&self, max_bytes: u64) -> Result<ShowtapeDocument> {
        let audio = read_file_with_limit(&self.audio, max_bytes)?;
        let json = read_file_with_limit(&self.signal, max_bytes)?;
        let signal = signal_from_json(&json)?;
        Ok(ShowtapeDocument::new(audio, signal))
    }

    /// Write both payloads; the trailer is not part of the loose form.
    pub fn write(&self, doc: &ShowtapeDocument) -> Result<()> {
        ensure_absent(&self.audio)?;
        ensure_absent(&self.signal)?;
        let json = signal_to_json(&doc.signal)?;

        write_new_file(&self.audio, &doc.audio)?;
        if let Err(e) = write_new_file(&self.signal, &json) {
            // Do not leave half a pair behind
            if let Err(cleanup) = fs::remove_file(&self.audio) {
                tracing::warn!(
                    "Failed to remove {} after error: {}",
                    self.audio.display(),
                    cleanup
                );
            }
            return Err(e);
        }
        Ok(())
    }
}

impl Default for LooseFiles {
    fn default() -> Self {
        Self::in_dir(Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ShowtapeError};
    use crate::fs::MAX_INPUT_BYTES;
    use tempfile::tempdir;

    fn sample_doc() -> ShowtapeDocument {
        ShowtapeDocument {
            audio: b"RIFF\x04\x00\x00\x00WAVE".to_vec(),
            signal: vec![4, 9, 0, 0, 1],
            trailer: Some(b"dropped".to_vec()),
        }
    }

    #[test]
    fn test_default_names() {
        let files = LooseFiles::in_dir(Path::new("work"));
        assert_eq!(files.audio, Path::new("work").join("audioData.wav"));
        assert_eq!(files.signal, Path::new("work").join("signalData.json"));
        assert_eq!(LooseFiles::default(), LooseFiles::in_dir(Path::new(".")));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let files = LooseFiles::in_dir(dir.path());
        let doc = sample_doc();
        files.write(&doc).unwrap();

        assert_eq!(fs::read(&files.audio).unwrap(), doc.audio);
        assert_eq!(fs::read_to_string(&files.signal).unwrap(), "[4,9,0,0,1]");

        let read = files.read(MAX_INPUT_BYTES).unwrap();
        assert_eq!(read, doc.without_trailer());
    }

    #[test]
    fn test_refuses_existing_signal() {
        let dir = tempdir().unwrap();
        let files = LooseFiles::in_dir(dir.path());
        fs::write(&files.signal, "[1]").unwrap();

        let err = files.write(&sample_doc()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Existence);
        // Nothing written before the check failed
        assert!(!files.audio.exists());
        assert_eq!(fs::read_to_string(&files.signal).unwrap(), "[1]");
    }

    #[test]
    fn test_refuses_existing_audio() {
        let dir = tempdir().unwrap();
        let files = LooseFiles::in_dir(dir.path());
        fs::write(&files.audio, b"mine").unwrap();

        assert!(matches!(
            files.write(&sample_doc()),
            Err(ShowtapeError::AlreadyExists(_))
        ));
        assert!(!files.signal.exists());
    }

    #[test]
    fn test_failed_signal_write_removes_audio() {
        let dir = tempdir().unwrap();
        let files = LooseFiles::new(
            dir.path().join("a.wav"),
            dir.path().join("missing").join("s.json"),
        );

        let err = files.write(&sample_doc()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!files.audio.exists());
        assert!(!files.signal.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_read_missing_signal() {
        let dir = tempdir().unwrap();
        let files = LooseFiles::in_dir(dir.path());
        fs::write(&files.audio, b"RIFF").unwrap();
        assert!(matches!(
            files.read(MAX_INPUT_BYTES),
            Err(ShowtapeError::NotFound(p)) if p == files.signal
        ));
    }

    #[test]
    fn test_read_malformed_json() {
        let dir = tempdir().unwrap();
        let files = LooseFiles::new(dir.path().join("a.wav"), dir.path().join("s.json"));
        fs::write(&files.audio, b"RIFF").unwrap();
        fs::write(&files.signal, "[1, 2,").unwrap();
        assert!(matches!(
            files.read(MAX_INPUT_BYTES),
            Err(ShowtapeError::SignalJson(_))
        ));
    }
}
