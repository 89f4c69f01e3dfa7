//! Custom error types for the dbpf-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Parsing is fail-fast and non-recovering: any of these aborts the whole
/// open operation and no partial header or index is exposed. Retrying
/// cannot change the outcome, so callers should treat every variant as
/// "not a valid archive".
#[derive(Debug, Error)]
pub enum DbpfError {
    /// The buffer is structurally invalid: wrong magic, or a field
    /// combination the format does not permit.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// The buffer ends before a region's declared fixed extent.
    #[error("truncated {region}: need {needed} bytes, buffer holds {available}")]
    Truncated {
        region: &'static str,
        needed: usize,
        available: usize,
    },

    /// A computed offset + length range falls outside the buffer. Raised
    /// for the header's index pointer, the index table extent, and record
    /// payload ranges.
    #[error("{region} out of bounds: {len} bytes at offset {offset} exceed buffer of {buffer_len} bytes")]
    OutOfBounds {
        region: &'static str,
        offset: u64,
        len: u64,
        buffer_len: usize,
    },
}

/// A convenience `Result` type alias using the crate's `DbpfError` type.
pub type Result<T> = std::result::Result<T, DbpfError>;
