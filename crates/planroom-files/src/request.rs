//! Storage requests and file-name validation.

use crate::error::{FileError, Result};
use planroom_platform::LogicalDirectory;
use std::path::{Component, Path, PathBuf};

/// MIME type used when the caller supplies none.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// File contents to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// UTF-8 text, written as-is.
    Text(String),
    /// Arbitrary bytes, base64-encoded for the native bridge.
    Binary(Vec<u8>),
}

/// One save operation, validated at construction and immutable after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRequest {
    file_name: String,
    payload: Payload,
    mime_type: String,
    directory: LogicalDirectory,
}

impl StorageRequest {
    /// Build a request, rejecting empty or traversing file names.
    ///
    /// Relative subpaths like `reports/week-32.pdf` are allowed; absolute
    /// paths and `..` segments are not.
    pub fn new(
        file_name: impl Into<String>,
        payload: Payload,
        directory: LogicalDirectory,
    ) -> Result<Self> {
        let file_name = file_name.into();
        sanitize_relative(&file_name)?;
        Ok(Self {
            file_name,
            payload,
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            directory,
        })
    }

    /// Override the MIME type (used only for web Blob construction;
    /// native adapters ignore it).
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn directory(&self) -> LogicalDirectory {
        self.directory
    }
}

/// Validate a caller-supplied relative path and normalize it.
///
/// Rejects empty input, absolute paths, and any `..` segment, so a
/// resolved directory root can never be escaped.
pub(crate) fn sanitize_relative(path: &str) -> Result<PathBuf> {
    if path.is_empty() {
        return Err(FileError::InvalidRequest("empty file name".to_string()));
    }

    let candidate = Path::new(path);
    let mut normalized = PathBuf::new();
    for component in candidate.components() {
        match component {
            Component::Normal(name) => normalized.push(name),
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(FileError::InvalidRequest(format!(
                    "path traversal in `{path}`"
                )));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(FileError::InvalidRequest(format!(
                    "absolute path not allowed: `{path}`"
                )));
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(FileError::InvalidRequest(format!(
            "`{path}` does not name a file"
        )));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mime_type_to_octet_stream() {
        let request = StorageRequest::new(
            "photo.jpg",
            Payload::Binary(vec![0xff, 0xd8]),
            LogicalDirectory::Downloads,
        )
        .unwrap();
        assert_eq!(request.mime_type(), DEFAULT_MIME_TYPE);

        let request = request.with_mime_type("image/jpeg");
        assert_eq!(request.mime_type(), "image/jpeg");
    }

    #[test]
    fn allows_relative_subpaths() {
        let request = StorageRequest::new(
            "reports/week-32.pdf",
            Payload::Text(String::new()),
            LogicalDirectory::Documents,
        );
        assert!(request.is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let err = StorageRequest::new(
            "",
            Payload::Text("x".into()),
            LogicalDirectory::Documents,
        )
        .unwrap_err();
        assert!(matches!(err, FileError::InvalidRequest(_)));
    }

    #[test]
    fn rejects_traversal_and_absolute_paths() {
        for name in ["../escape.txt", "a/../../b.txt", "/etc/passwd"] {
            assert!(
                sanitize_relative(name).is_err(),
                "`{name}` should be rejected"
            );
        }
    }

    #[test]
    fn normalizes_cur_dir_segments() {
        assert_eq!(
            sanitize_relative("./a/./b.txt").unwrap(),
            PathBuf::from("a/b.txt")
        );
        assert!(sanitize_relative(".").is_err());
    }
}
