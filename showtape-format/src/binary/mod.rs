//! Fixed-layout binary container (.shw)
//!
//! See [`crate::constants`] for the byte layout. Decoding checks every fixed
//! field against the constants table and fails on the first mismatch.

mod read;
mod write;


use serde::Deserialize;

pub use read::decode;
pub use write::{encode, encoded_len};

/// How bytes after the terminator are treated on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailerMode {
    /// Keep whatever follows the terminator as opaque trailer bytes
    #[default]
    Permissive,
    /// Require exactly the reference footer and end of file
    Strict,
}
