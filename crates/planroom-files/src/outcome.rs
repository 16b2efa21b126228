//! The outcome type crossing the facade boundary.

use crate::error::FileError;

/// Why an operation failed, without the platform-specific detail.
///
/// The detail has already been logged at the adapter boundary; callers
/// only need enough to choose a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The underlying platform call failed (disk full, permission denied,
    /// path not found where that matters).
    Io,
    /// Base64 conversion failed on a payload.
    Encoding,
    /// The request itself was malformed.
    InvalidRequest,
}

/// Result of a facade operation.
///
/// `Unavailable` is deliberately distinct from `Failed`: "this platform
/// does not offer the operation" should suppress retry UI, while a
/// failure may warrant one. The facade never panics and never returns a
/// raw error; this enum is the whole contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome<T> {
    /// The operation completed.
    Ok(T),
    /// The current platform does not offer this operation.
    Unavailable,
    /// The operation was attempted and failed.
    Failed(FailureKind),
}

impl<T> FileOutcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, FileOutcome::Ok(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, FileOutcome::Unavailable)
    }

    /// The success value, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            FileOutcome::Ok(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn from_error(error: &FileError) -> Self {
        match error {
            FileError::CapabilityUnavailable(_) => FileOutcome::Unavailable,
            FileError::Io(_) => FileOutcome::Failed(FailureKind::Io),
            FileError::Encoding(_) => FileOutcome::Failed(FailureKind::Encoding),
            FileError::InvalidRequest(_) => FileOutcome::Failed(FailureKind::InvalidRequest),
        }
    }
}

/// Successful save result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    /// Addressable URI of the stored file. Present on native; `None` on
    /// web, where success only means "download triggered".
    pub resource_locator: Option<String>,
}
