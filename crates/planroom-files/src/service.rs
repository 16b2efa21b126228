//! The file persistence facade.

use crate::bridge::{DownloadBridge, FilesystemBridge, ShareBridge};
use crate::error::FileError;
use crate::native::NativeStorageAdapter;
use crate::outcome::{FileOutcome, SavedFile};
use crate::request::StorageRequest;
use crate::share::ShareAdapter;
use crate::web::WebStorageAdapter;
use planroom_platform::{capabilities, DirectoryResolver, LogicalDirectory, PlatformContext};
use std::sync::Arc;
use tracing::{debug, warn};

/// The single storage entry point the rest of the application depends on.
///
/// Dispatch is deterministic: native runtime with the capability present
/// goes to the native adapter (share adapter for [`share_file`]); anywhere
/// else, [`save_file`] falls back to the web download path and every other
/// operation answers [`FileOutcome::Unavailable`].
///
/// No method panics or returns a raw error; storage failures are logged
/// here and surfaced as [`FileOutcome`] values.
///
/// Concurrent calls against the same path are not coordinated by this
/// layer; callers needing exclusivity on a path must serialize calls
/// themselves.
///
/// [`save_file`]: FileService::save_file
/// [`share_file`]: FileService::share_file
#[derive(Clone)]
pub struct FileService {
    ctx: PlatformContext,
    native: NativeStorageAdapter,
    web: WebStorageAdapter,
    share: Option<ShareAdapter>,
}

impl FileService {
    pub fn new(
        ctx: PlatformContext,
        resolver: DirectoryResolver,
        filesystem: Arc<dyn FilesystemBridge>,
        downloads: Arc<dyn DownloadBridge>,
    ) -> Self {
        Self {
            native: NativeStorageAdapter::new(ctx.clone(), resolver, filesystem),
            web: WebStorageAdapter::new(downloads),
            share: None,
            ctx,
        }
    }

    /// Attach a share-sheet bridge. Without one, `share_file` answers
    /// `Unavailable` everywhere.
    pub fn with_share_bridge(mut self, bridge: Arc<dyn ShareBridge>) -> Self {
        self.share = Some(ShareAdapter::new(self.ctx.clone(), bridge));
        self
    }

    fn native_filesystem_available(&self) -> bool {
        self.ctx.is_native_runtime()
            && self.ctx.is_capability_available(capabilities::FILESYSTEM)
    }

    /// Persist a file.
    ///
    /// Native: writes into the resolved directory and returns the URI.
    /// Web: triggers a browser download; the outcome succeeds with no
    /// resource locator.
    pub async fn save_file(&self, request: &StorageRequest) -> FileOutcome<SavedFile> {
        if self.native_filesystem_available() {
            match self.native.write(request).await {
                Ok(uri) => FileOutcome::Ok(SavedFile {
                    resource_locator: Some(uri),
                }),
                Err(e) => log_failure("save_file", request.file_name(), &e),
            }
        } else {
            match self.web.save(request) {
                Ok(()) => FileOutcome::Ok(SavedFile {
                    resource_locator: None,
                }),
                Err(e) => log_failure("save_file", request.file_name(), &e),
            }
        }
    }

    /// Read a file as text. Binary content comes back base64-encoded.
    pub async fn read_file(&self, path: &str, directory: LogicalDirectory) -> FileOutcome<String> {
        if !self.native_filesystem_available() {
            debug!(path, %directory, "read_file not offered on this platform");
            return FileOutcome::Unavailable;
        }
        match self.native.read(path, directory).await {
            Ok(text) => FileOutcome::Ok(text),
            Err(e) => log_failure("read_file", path, &e),
        }
    }

    /// Delete a file. Deleting an absent path succeeds (idempotent).
    pub async fn delete_file(&self, path: &str, directory: LogicalDirectory) -> FileOutcome<()> {
        if !self.native_filesystem_available() {
            debug!(path, %directory, "delete_file not offered on this platform");
            return FileOutcome::Unavailable;
        }
        match self.native.remove(path, directory).await {
            Ok(()) => FileOutcome::Ok(()),
            Err(e) => log_failure("delete_file", path, &e),
        }
    }

    /// List entry names directly under `path` (non-recursive). An absent
    /// or empty directory yields an empty list.
    pub async fn list_files(
        &self,
        path: &str,
        directory: LogicalDirectory,
    ) -> FileOutcome<Vec<String>> {
        if !self.native_filesystem_available() {
            debug!(path, %directory, "list_files not offered on this platform");
            return FileOutcome::Unavailable;
        }
        match self.native.list(path, directory).await {
            Ok(names) => FileOutcome::Ok(names),
            Err(e) => log_failure("list_files", path, &e),
        }
    }

    /// Present the native share sheet for a stored file.
    pub async fn share_file(&self, path: &str, title: Option<&str>) -> FileOutcome<()> {
        let Some(share) = &self.share else {
            debug!(path, "share_file has no bridge attached");
            return FileOutcome::Unavailable;
        };
        match share.share(path, title).await {
            Ok(()) => FileOutcome::Ok(()),
            Err(e) => log_failure("share_file", path, &e),
        }
    }
}

/// Log an adapter error with context and convert it to an outcome.
///
/// Capability refusals are expected on web and logged at debug; real
/// failures are warnings.
fn log_failure<T>(operation: &str, path: &str, error: &FileError) -> FileOutcome<T> {
    match error {
        FileError::CapabilityUnavailable(capability) => {
            debug!(operation, path, capability, "operation not offered on this platform");
        }
        FileError::Encoding(e) => {
            warn!(operation, path, error = %e, "payload encoding failed");
        }
        e => {
            warn!(operation, path, error = %e, "storage operation failed");
        }
    }
    FileOutcome::from_error(error)
}
