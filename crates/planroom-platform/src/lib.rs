//! Platform facts for Planroom's file persistence layer.
//!
//! This crate answers two questions the storage adapters depend on:
//!
//! - Is the process running inside a native shell, and which optional
//!   capabilities (filesystem, share) does the host actually offer?
//! - Where does an abstract storage bucket (`documents`, `data`, `cache`,
//!   `downloads`) live on this platform?
//!
//! Both answers are injected explicitly rather than read from ambient
//! globals, so tests can substitute a fake context without environment
//! detection hacks.
//!
//! # Example
//!
//! ```
//! use planroom_platform::{DirectoryResolver, LogicalDirectory, PlatformContext};
//!
//! let ctx = PlatformContext::browser();
//! assert!(!ctx.is_native_runtime());
//!
//! let resolver = DirectoryResolver::platform_default();
//! // Resolution is total: every bucket maps to a root on every platform.
//! let root = resolver.resolve(LogicalDirectory::Cache, &ctx);
//! assert!(!root.path().as_os_str().is_empty());
//! ```

mod capability;
mod context;
mod directory;

pub use capability::{capabilities, BrowserProbe, CapabilityProbe, ShellProbe};
pub use context::PlatformContext;
pub use directory::{DirectoryResolver, DirectoryRoot, LogicalDirectory};
