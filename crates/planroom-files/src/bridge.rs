//! Host bridge traits.
//!
//! These traits are the subsystem's external interface: a native shell
//! provides a filesystem and a share sheet, a browser provides the
//! object-URL download machinery. Adapters are written against the
//! traits so tests (and hosts without a real bridge) can substitute
//! their own implementations.

use async_trait::async_trait;
use planroom_platform::DirectoryRoot;
use std::io;
use std::path::Path;

/// Text encoding of a payload crossing the filesystem bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// The payload is the file's UTF-8 text.
    Utf8,
    /// The payload is base64 text; the file holds the decoded bytes.
    Base64,
}

/// Native filesystem bridge: write/read/delete/list keyed by
/// (directory root, relative path, encoding).
///
/// Errors are raw `io::Error`s; policy (idempotent delete, empty listing
/// for absent directories) lives in
/// [`NativeStorageAdapter`](crate::NativeStorageAdapter), not here.
#[async_trait]
pub trait FilesystemBridge: Send + Sync {
    /// Write a file, creating parent directories, and return its URI.
    async fn write_file(
        &self,
        root: &DirectoryRoot,
        path: &Path,
        data: &str,
        encoding: TextEncoding,
    ) -> io::Result<String>;

    /// Read a file as text in the requested encoding.
    async fn read_file(
        &self,
        root: &DirectoryRoot,
        path: &Path,
        encoding: TextEncoding,
    ) -> io::Result<String>;

    /// Delete a file.
    async fn delete_file(&self, root: &DirectoryRoot, path: &Path) -> io::Result<()>;

    /// List the entry names directly under a directory (non-recursive).
    async fn read_dir(&self, root: &DirectoryRoot, path: &Path) -> io::Result<Vec<String>>;
}

/// Native share sheet bridge.
#[async_trait]
pub trait ShareBridge: Send + Sync {
    /// Present the share sheet for the given file paths.
    async fn share(&self, paths: &[String], title: Option<&str>) -> io::Result<()>;
}

/// In-memory stand-in for a browser `Blob`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Browser download surface: object URLs and a synthesized anchor click.
///
/// Synchronous by nature — these calls return as soon as the browser has
/// queued the download; there is nothing to await.
pub trait DownloadBridge: Send + Sync {
    /// Create an object URL for a blob.
    fn create_object_url(&self, blob: &Blob) -> io::Result<String>;

    /// Click a transient anchor pointing at the URL, with the download
    /// attribute set to `file_name`.
    fn click_anchor(&self, url: &str, file_name: &str) -> io::Result<()>;

    /// Release the object URL. Must be called once per created URL,
    /// whether or not the click succeeded.
    fn revoke_object_url(&self, url: &str);
}
