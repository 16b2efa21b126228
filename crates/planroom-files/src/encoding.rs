//! Binary <-> base64 conversion.
//!
//! The native filesystem bridge writes text payloads, so binary data is
//! carried as base64 across that boundary. The conversion is an exact
//! round-trip for every byte sequence; malformed input surfaces as an
//! [`EncodingError`], never a silent truncation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Base64 conversion failure.
#[derive(Debug, Error)]
#[error("malformed base64 payload: {0}")]
pub struct EncodingError(#[from] base64::DecodeError);

/// Encode a binary payload as base64 text.
pub fn binary_to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 text back into bytes.
pub fn base64_to_binary(text: &str) -> std::result::Result<Vec<u8>, EncodingError> {
    STANDARD.decode(text).map_err(EncodingError)
}
