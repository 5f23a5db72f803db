//! Error types for snapshot save and load

use std::io;
use thiserror::Error;

/// Snapshot error type
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Byte stream is not one full grid followed by one flag byte
    #[error("Malformed snapshot: expected {expected} bytes, found {actual}")]
    Malformed { expected: usize, actual: usize },

    /// A cell or flag byte is neither 0 nor 1
    #[error("Malformed snapshot: invalid byte {value:#04x} at offset {offset}")]
    InvalidByte { offset: usize, value: u8 },

    /// Storage could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SnapshotError {
    /// True for structural problems in the byte stream, false for I/O.
    pub fn is_malformed(&self) -> bool {
        matches!(self, SnapshotError::Malformed { .. } | SnapshotError::InvalidByte { .. })
    }
}

/// Result type for snapshot operations
pub type Result<T> = std::result::Result<T, SnapshotError>;
