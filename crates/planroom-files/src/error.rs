//! Error types for planroom-files.

use crate::encoding::EncodingError;
use thiserror::Error;

/// Result type alias using planroom-files [`FileError`].
pub type Result<T> = std::result::Result<T, FileError>;

/// Errors produced by the storage adapters.
///
/// These stay inside the subsystem: the [`FileService`](crate::FileService)
/// facade logs them and converts them to
/// [`FileOutcome`](crate::FileOutcome) values, so callers never need
/// try/catch around storage calls.
#[derive(Debug, Error)]
pub enum FileError {
    /// The operation is not offered on the current platform.
    #[error("capability `{0}` is not available on this platform")]
    CapabilityUnavailable(&'static str),

    /// The underlying platform call failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Base64 conversion failed.
    #[error("encoding failure: {0}")]
    Encoding(#[from] EncodingError),

    /// The request itself is malformed (empty or traversing file name).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
