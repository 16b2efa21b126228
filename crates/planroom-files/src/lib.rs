//! Cross-platform file persistence for Planroom.
//!
//! The rest of the application talks to one type, [`FileService`], and
//! never learns whether it is running inside a native shell or a browser
//! tab. The facade picks an adapter per operation:
//!
//! ```text
//! caller ──► FileService ──► PlatformContext (decide adapter)
//!                 │
//!                 ├──► NativeStorageAdapter ──► FilesystemBridge
//!                 ├──► WebStorageAdapter ─────► DownloadBridge
//!                 └──► ShareAdapter ──────────► ShareBridge
//! ```
//!
//! Results cross the facade boundary as [`FileOutcome`], never as panics
//! or raw errors: a storage failure must not crash the caller, and
//! "this platform doesn't offer that" ([`FileOutcome::Unavailable`]) is
//! reported distinctly from "the operation failed" so UI can hide rather
//! than retry.
//!
//! # Example
//!
//! ```
//! use planroom_files::{FileService, Payload, RecordingDownloadBridge, StorageRequest};
//! use planroom_platform::{DirectoryResolver, LogicalDirectory, PlatformContext};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! // Browser tab: saving degrades to a triggered download.
//! let service = FileService::new(
//!     PlatformContext::browser(),
//!     DirectoryResolver::platform_default(),
//!     Arc::new(planroom_files::LocalFilesystemBridge::new()),
//!     Arc::new(RecordingDownloadBridge::new()),
//! );
//!
//! let request = StorageRequest::new(
//!     "site-report.txt",
//!     Payload::Text("all clear".into()),
//!     LogicalDirectory::Documents,
//! )
//! .unwrap();
//!
//! let outcome = service.save_file(&request).await;
//! assert!(outcome.is_ok());
//!
//! // Reading back is not a thing a browser can do.
//! assert!(service
//!     .read_file("site-report.txt", LogicalDirectory::Documents)
//!     .await
//!     .is_unavailable());
//! # }
//! ```

mod bridge;
mod error;
mod native;
mod outcome;
mod request;
mod service;
mod share;
mod web;

pub mod encoding;

pub use bridge::{Blob, DownloadBridge, FilesystemBridge, ShareBridge, TextEncoding};
pub use encoding::EncodingError;
pub use error::{FileError, Result};
pub use native::{LocalFilesystemBridge, NativeStorageAdapter};
pub use outcome::{FailureKind, FileOutcome, SavedFile};
pub use request::{Payload, StorageRequest, DEFAULT_MIME_TYPE};
pub use service::FileService;
pub use share::ShareAdapter;
pub use web::{RecordingDownloadBridge, WebStorageAdapter};
