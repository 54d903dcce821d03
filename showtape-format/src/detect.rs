//! Container kind detection from file names
//!
//! Extensions are `shw`/`shz`, optionally preceded by a single letter naming
//! the show variant (`rshw`, `cshz`, ...). Matching is case-insensitive.

use std::path::{Path, PathBuf};

use crate::container::ContainerKind;

/// Names shorter than this cannot carry a recognizable extension.
const MIN_NAME_LEN: usize = 6;

/// Lowercase extension stem to container kind.
const STEMS: [(&str, ContainerKind); 2] = [
    ("shw", ContainerKind::Binary),
    ("shz", ContainerKind::Archive),
];

/// Show variants whose tapes ship with a sibling `.mp4`.
const VIDEO_VARIANTS: [char; 2] = ['r', 's'];

/// Result of classifying a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedFormat {
    pub kind: ContainerKind,
    /// Lowercased variant prefix, if the extension has one
    pub variant: Option<char>,
    /// Final extension character as written (case preserved)
    pub last: char,
}

/// Classify a file name by its extension.
///
/// Returns `None` when the name is too short or the extension is not one of
/// the recognized stems; callers treat that as "cannot infer format".
pub fn classify(filename: &str) -> Option<DetectedFormat> {
    if filename.chars().count() < MIN_NAME_LEN {
        return None;
    }
    let ext = Path::new(filename).extension()?.to_str()?;
    let lower = ext.to_ascii_lowercase();
    let last = ext.chars().last()?;

    let (variant, stem) = match lower.len() {
        3 => (None, lower.as_str()),
        4 => {
            let prefix = lower.chars().next()?;
            if !prefix.is_ascii_alphabetic() {
                return None;
            }
            (Some(prefix), &lower[1..])
        }
        _ => return None,
    };

    STEMS
        .iter()
        .find(|(s, _)| *s == stem)
        .map(|&(_, kind)| DetectedFormat {
            kind,
            variant,
            last,
        })
}

impl DetectedFormat {
    /// Default output path when converting to `target`: the final extension
    /// letter is swapped, keeping its case and any variant prefix.
    pub fn output_path(&self, input: &Path, target: ContainerKind) -> PathBuf {
        let ext = input
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or(target.stem());
        let mut swapped = ext.to_string();
        swapped.pop();
        if self.last.is_ascii_uppercase() {
            swapped.push(target.letter().to_ascii_uppercase());
        } else {
            swapped.push(target.letter());
        }
        input.with_extension(swapped)
    }

    /// Sibling video path for variants that carry one.
    pub fn video_path(&self, input: &Path) -> Option<PathBuf> {
        match self.variant {
            Some(v) if VIDEO_VARIANTS.contains(&v) => Some(input.with_extension("mp4")),
            _ => None,
        }
    }
}
