//! Injectable platform context.

use crate::capability::{capabilities, BrowserProbe, CapabilityProbe, ShellProbe};
use std::sync::Arc;

/// Process-wide platform facts, read at call time.
///
/// The context holds a probe and forwards every query to it without
/// caching, so a capability that appears after startup (a host plugin
/// loading asynchronously) is observed on the next query rather than
/// going stale.
///
/// Constructed once and passed into the storage facade explicitly; there
/// is no ambient "is native" global.
#[derive(Clone)]
pub struct PlatformContext {
    probe: Arc<dyn CapabilityProbe>,
}

impl PlatformContext {
    /// Wrap an arbitrary probe (the seam tests use).
    pub fn new(probe: Arc<dyn CapabilityProbe>) -> Self {
        Self { probe }
    }

    /// Context for a native shell offering filesystem and share.
    pub fn native_shell() -> Self {
        Self::new(Arc::new(ShellProbe::with_capabilities([
            capabilities::FILESYSTEM,
            capabilities::SHARE,
        ])))
    }

    /// Context for a plain browser tab.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserProbe))
    }

    /// Whether the process is running inside a native shell.
    pub fn is_native_runtime(&self) -> bool {
        self.probe.is_native_runtime()
    }

    /// Whether the named capability is currently available.
    pub fn is_capability_available(&self, name: &str) -> bool {
        self.probe.is_capability_available(name)
    }
}

impl std::fmt::Debug for PlatformContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformContext")
            .field("native", &self.is_native_runtime())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_requeries_the_probe() {
        let probe = Arc::new(ShellProbe::new());
        let ctx = PlatformContext::new(probe.clone());

        assert!(!ctx.is_capability_available(capabilities::FILESYSTEM));
        probe.register(capabilities::FILESYSTEM);
        assert!(ctx.is_capability_available(capabilities::FILESYSTEM));
    }

    #[test]
    fn bundled_contexts() {
        let native = PlatformContext::native_shell();
        assert!(native.is_native_runtime());
        assert!(native.is_capability_available(capabilities::SHARE));

        let web = PlatformContext::browser();
        assert!(!web.is_native_runtime());
        assert!(!web.is_capability_available(capabilities::FILESYSTEM));
    }
}
