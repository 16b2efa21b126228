//! Native storage: a std::fs-backed bridge and the adapter on top of it.

use crate::bridge::{FilesystemBridge, TextEncoding};
use crate::encoding;
use crate::error::{FileError, Result};
use crate::request::{sanitize_relative, Payload, StorageRequest};
use async_trait::async_trait;
use planroom_platform::{
    capabilities, DirectoryResolver, DirectoryRoot, LogicalDirectory, PlatformContext,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;

/// Filesystem bridge backed by `std::fs`.
///
/// Blocking calls are offloaded with `tokio::spawn_blocking` so the async
/// runtime is never blocked on disk I/O.
#[derive(Debug, Clone, Default)]
pub struct LocalFilesystemBridge;

impl LocalFilesystemBridge {
    pub fn new() -> Self {
        Self
    }

    fn resolve(root: &DirectoryRoot, path: &Path) -> PathBuf {
        root.path().join(path)
    }
}

#[async_trait]
impl FilesystemBridge for LocalFilesystemBridge {
    async fn write_file(
        &self,
        root: &DirectoryRoot,
        path: &Path,
        data: &str,
        encoding: TextEncoding,
    ) -> io::Result<String> {
        let target = Self::resolve(root, path);
        let bytes = match encoding {
            TextEncoding::Utf8 => data.as_bytes().to_vec(),
            TextEncoding::Base64 => encoding::base64_to_binary(data)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        };

        task::spawn_blocking(move || {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&target, bytes)?;
            Ok(format!("file://{}", target.display()))
        })
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }

    async fn read_file(
        &self,
        root: &DirectoryRoot,
        path: &Path,
        encoding: TextEncoding,
    ) -> io::Result<String> {
        let target = Self::resolve(root, path);
        task::spawn_blocking(move || {
            let bytes = std::fs::read(&target)?;
            match encoding {
                TextEncoding::Utf8 => String::from_utf8(bytes)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
                TextEncoding::Base64 => Ok(encoding::binary_to_base64(&bytes)),
            }
        })
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }

    async fn delete_file(&self, root: &DirectoryRoot, path: &Path) -> io::Result<()> {
        let target = Self::resolve(root, path);
        task::spawn_blocking(move || std::fs::remove_file(&target))
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }

    async fn read_dir(&self, root: &DirectoryRoot, path: &Path) -> io::Result<Vec<String>> {
        let target = Self::resolve(root, path);
        task::spawn_blocking(move || {
            let mut names = Vec::new();
            for entry in std::fs::read_dir(&target)? {
                names.push(entry?.file_name().to_string_lossy().into_owned());
            }
            names.sort();
            Ok(names)
        })
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }
}

/// Storage adapter for native shells.
///
/// Every operation first checks the platform context: outside a native
/// runtime, or without the `filesystem` capability, it refuses with
/// [`FileError::CapabilityUnavailable`] instead of degrading silently.
#[derive(Clone)]
pub struct NativeStorageAdapter {
    ctx: PlatformContext,
    resolver: DirectoryResolver,
    bridge: Arc<dyn FilesystemBridge>,
}

impl NativeStorageAdapter {
    pub fn new(
        ctx: PlatformContext,
        resolver: DirectoryResolver,
        bridge: Arc<dyn FilesystemBridge>,
    ) -> Self {
        Self {
            ctx,
            resolver,
            bridge,
        }
    }

    fn require_filesystem(&self) -> Result<()> {
        if self.ctx.is_native_runtime()
            && self.ctx.is_capability_available(capabilities::FILESYSTEM)
        {
            Ok(())
        } else {
            Err(FileError::CapabilityUnavailable(capabilities::FILESYSTEM))
        }
    }

    fn root(&self, directory: LogicalDirectory) -> DirectoryRoot {
        self.resolver.resolve(directory, &self.ctx)
    }

    /// Write the request's payload and return the resulting URI.
    ///
    /// Binary payloads cross the bridge as base64 text; text payloads are
    /// written as-is.
    pub async fn write(&self, request: &StorageRequest) -> Result<String> {
        self.require_filesystem()?;
        let root = self.root(request.directory());
        let path = sanitize_relative(request.file_name())?;

        let uri = match request.payload() {
            Payload::Text(text) => {
                self.bridge
                    .write_file(&root, &path, text, TextEncoding::Utf8)
                    .await?
            }
            Payload::Binary(bytes) => {
                let encoded = encoding::binary_to_base64(bytes);
                self.bridge
                    .write_file(&root, &path, &encoded, TextEncoding::Base64)
                    .await?
            }
        };
        Ok(uri)
    }

    /// Read a file as text.
    ///
    /// Content that is not valid UTF-8 is returned as its base64 text;
    /// decoding is the caller's responsibility via
    /// [`encoding::base64_to_binary`].
    pub async fn read(&self, path: &str, directory: LogicalDirectory) -> Result<String> {
        self.require_filesystem()?;
        let root = self.root(directory);
        let relative = sanitize_relative(path)?;

        match self
            .bridge
            .read_file(&root, &relative, TextEncoding::Utf8)
            .await
        {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                // Binary file: hand back the encoded form.
                Ok(self
                    .bridge
                    .read_file(&root, &relative, TextEncoding::Base64)
                    .await?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a file.
    ///
    /// Idempotent by contract: deleting a path that does not exist is
    /// treated as success, so callers can retry deletes safely.
    pub async fn remove(&self, path: &str, directory: LogicalDirectory) -> Result<()> {
        self.require_filesystem()?;
        let root = self.root(directory);
        let relative = sanitize_relative(path)?;

        match self.bridge.delete_file(&root, &relative).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// List entry names directly under `path` (non-recursive).
    ///
    /// An absent or empty directory yields an empty list, not an error.
    pub async fn list(&self, path: &str, directory: LogicalDirectory) -> Result<Vec<String>> {
        self.require_filesystem()?;
        let root = self.root(directory);
        // An empty path lists the bucket root itself.
        let relative = if path.is_empty() {
            PathBuf::new()
        } else {
            sanitize_relative(path)?
        };

        match self.bridge.read_dir(&root, &relative).await {
            Ok(names) => Ok(names),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}
