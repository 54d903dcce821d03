//! Container kinds and codec dispatch

use std::fmt;

use crate::binary::TrailerMode;
use crate::document::ShowtapeDocument;
use crate::error::Result;
use crate::{archive, binary};

/// The two on-disk container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Fixed-layout single file (.shw)
    Binary,
    /// Nested archive (.shz)
    Archive,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 2] = [ContainerKind::Binary, ContainerKind::Archive];

    /// Lowercase extension stem without variant prefix.
    pub fn stem(self) -> &'static str {
        match self {
            ContainerKind::Binary => "shw",
            ContainerKind::Archive => "shz",
        }
    }

    /// Final extension letter distinguishing the kinds.
    pub fn letter(self) -> char {
        match self {
            ContainerKind::Binary => 'w',
            ContainerKind::Archive => 'z',
        }
    }

    /// Conversion target for this kind.
    pub fn other(self) -> Self {
        match self {
            ContainerKind::Binary => ContainerKind::Archive,
            ContainerKind::Archive => ContainerKind::Binary,
        }
    }

    pub fn decode(self, data: &[u8], mode: TrailerMode) -> Result<ShowtapeDocument> {
        match self {
            ContainerKind::Binary => binary::decode(data, mode),
            ContainerKind::Archive => archive::decode(data),
        }
    }

    pub fn encode(self, doc: &ShowtapeDocument) -> Result<Vec<u8>> {
        match self {
            ContainerKind::Binary => binary::encode(doc),
            ContainerKind::Archive => archive::encode(doc),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Binary => write!(f, "binary (.{})", self.stem()),
            ContainerKind::Archive => write!(f, "archive (.{})", self.stem()),
        }
    }
}
