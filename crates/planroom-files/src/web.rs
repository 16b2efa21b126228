//! Web storage: trigger a browser download.

use crate::bridge::{Blob, DownloadBridge};
use crate::error::Result;
use crate::request::{Payload, StorageRequest};
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// Storage adapter for browser tabs.
///
/// A browser can only do one storage thing unprompted: hand the user a
/// download. `save` builds a blob, creates an object URL, synthesizes the
/// anchor click, and revokes the URL. Success means "download was
/// triggered" — there is no addressable path to return, which is a
/// deliberate asymmetry versus the native adapter.
///
/// Read, delete, list, and share do not exist on this adapter at all;
/// the facade answers `Unavailable` for them on web.
#[derive(Clone)]
pub struct WebStorageAdapter {
    bridge: Arc<dyn DownloadBridge>,
}

impl WebStorageAdapter {
    pub fn new(bridge: Arc<dyn DownloadBridge>) -> Self {
        Self { bridge }
    }

    /// Trigger a client-side download of the request's payload.
    pub fn save(&self, request: &StorageRequest) -> Result<()> {
        let blob = Blob {
            bytes: match request.payload() {
                Payload::Text(text) => text.as_bytes().to_vec(),
                Payload::Binary(bytes) => bytes.clone(),
            },
            mime_type: request.mime_type().to_string(),
        };

        let url = self.bridge.create_object_url(&blob)?;
        let clicked = self.bridge.click_anchor(&url, request.file_name());
        // The URL is revoked whether or not the click dispatch succeeded;
        // a leaked object URL pins the blob for the life of the tab.
        self.bridge.revoke_object_url(&url);
        clicked?;
        Ok(())
    }
}

/// In-memory download bridge.
///
/// Stands in for the DOM in hosts without one and records every call, so
/// tests can assert the revoke count matches the create count.
#[derive(Debug, Default)]
pub struct RecordingDownloadBridge {
    state: Mutex<RecordingState>,
    fail_clicks: bool,
}

#[derive(Debug, Default)]
struct RecordingState {
    next_url: usize,
    created: usize,
    revoked: usize,
    downloads: Vec<(String, Blob)>,
}

impl RecordingDownloadBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bridge whose anchor clicks always fail (popup blocked, detached
    /// document), for exercising the release-on-failure path.
    pub fn failing_clicks() -> Self {
        Self {
            state: Mutex::new(RecordingState::default()),
            fail_clicks: true,
        }
    }

    /// Number of object URLs created so far.
    pub fn created_urls(&self) -> usize {
        self.state.lock().created
    }

    /// Number of object URLs revoked so far.
    pub fn revoked_urls(&self) -> usize {
        self.state.lock().revoked
    }

    /// Downloads triggered so far, as (file name, blob) pairs.
    pub fn downloads(&self) -> Vec<(String, Blob)> {
        self.state.lock().downloads.clone()
    }
}

impl DownloadBridge for RecordingDownloadBridge {
    fn create_object_url(&self, blob: &Blob) -> io::Result<String> {
        let mut state = self.state.lock();
        let url = format!("blob:planroom/{}", state.next_url);
        state.next_url += 1;
        state.created += 1;
        state.downloads.push((url.clone(), blob.clone()));
        Ok(url)
    }

    fn click_anchor(&self, url: &str, file_name: &str) -> io::Result<()> {
        if self.fail_clicks {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "anchor click dispatch failed",
            ));
        }
        let mut state = self.state.lock();
        if let Some(entry) = state.downloads.iter_mut().find(|(u, _)| u == url) {
            entry.0 = file_name.to_string();
        }
        Ok(())
    }

    fn revoke_object_url(&self, _url: &str) {
        self.state.lock().revoked += 1;
    }
}
