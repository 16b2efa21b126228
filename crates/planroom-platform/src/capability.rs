//! Capability probing for the host runtime.

use parking_lot::RwLock;
use std::collections::HashSet;

/// Capability names understood by the bundled probes.
///
/// Probes are keyed by string rather than an enum so that callers never
/// need to enumerate valid names: an unknown name simply answers `false`.
pub mod capabilities {
    /// Native filesystem access (write/read/delete/list).
    pub const FILESYSTEM: &str = "filesystem";
    /// Native share sheet.
    pub const SHARE: &str = "share";
}

/// Answers "is this a native shell" and "is capability X present".
///
/// Pure query surface: implementations must have no side effects and must
/// never panic. Unknown capability names answer `false` (closed-world
/// default-deny), not an error.
pub trait CapabilityProbe: Send + Sync {
    /// Whether the process is running inside a native shell.
    fn is_native_runtime(&self) -> bool;

    /// Whether the named capability is currently available.
    fn is_capability_available(&self, name: &str) -> bool;
}

/// Probe for a native shell host.
///
/// The capability set is mutable behind a lock because host plugins can
/// load asynchronously after startup; a capability registered late becomes
/// visible to every existing [`PlatformContext`](crate::PlatformContext)
/// on its next query.
#[derive(Debug, Default)]
pub struct ShellProbe {
    capabilities: RwLock<HashSet<String>>,
}

impl ShellProbe {
    /// Create a probe with no capabilities registered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a probe with an initial capability set.
    pub fn with_capabilities<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            capabilities: RwLock::new(names.into_iter().map(Into::into).collect()),
        }
    }

    /// Mark a capability as available (e.g. when the host plugin finishes
    /// loading).
    pub fn register(&self, name: impl Into<String>) {
        self.capabilities.write().insert(name.into());
    }

    /// Mark a capability as unavailable again.
    pub fn revoke(&self, name: &str) {
        self.capabilities.write().remove(name);
    }
}

impl CapabilityProbe for ShellProbe {
    fn is_native_runtime(&self) -> bool {
        true
    }

    fn is_capability_available(&self, name: &str) -> bool {
        self.capabilities.read().contains(name)
    }
}

/// Probe for a plain browser tab: not native, no native capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserProbe;

impl CapabilityProbe for BrowserProbe {
    fn is_native_runtime(&self) -> bool {
        false
    }

    fn is_capability_available(&self, _name: &str) -> bool {
        false
    }
}
