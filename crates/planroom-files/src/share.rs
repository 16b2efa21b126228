//! Native share sheet adapter.

use crate::bridge::ShareBridge;
use crate::error::{FileError, Result};
use planroom_platform::{capabilities, PlatformContext};
use std::sync::Arc;

/// Invokes the platform share sheet for a stored file.
#[derive(Clone)]
pub struct ShareAdapter {
    ctx: PlatformContext,
    bridge: Arc<dyn ShareBridge>,
}

impl ShareAdapter {
    pub fn new(ctx: PlatformContext, bridge: Arc<dyn ShareBridge>) -> Self {
        Self { ctx, bridge }
    }

    /// Present the share sheet for `path` with an optional title.
    ///
    /// Requires a native runtime with the `share` capability; anywhere
    /// else it refuses with [`FileError::CapabilityUnavailable`].
    pub async fn share(&self, path: &str, title: Option<&str>) -> Result<()> {
        if !self.ctx.is_native_runtime()
            || !self.ctx.is_capability_available(capabilities::SHARE)
        {
            return Err(FileError::CapabilityUnavailable(capabilities::SHARE));
        }
        self.bridge.share(&[path.to_string()], title).await?;
        Ok(())
    }
}
