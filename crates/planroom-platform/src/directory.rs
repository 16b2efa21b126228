//! Logical storage buckets and their platform roots.

use crate::PlatformContext;
use std::fmt;
use std::path::{Path, PathBuf};

/// Subdirectory that scopes app-private buckets under shared OS roots.
const APP_DIR: &str = "planroom";

/// An abstract storage bucket, independent of platform paths.
///
/// There is no ordering relationship between the values; each resolves
/// independently per platform through [`DirectoryResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalDirectory {
    /// User-visible persistent documents.
    Documents,
    /// App-private persistent data.
    Data,
    /// App-private volatile cache.
    Cache,
    /// Shared/external downloads root (native only; ignored on web).
    Downloads,
}

impl LogicalDirectory {
    /// All bucket values, for totality checks.
    pub const ALL: [LogicalDirectory; 4] = [
        LogicalDirectory::Documents,
        LogicalDirectory::Data,
        LogicalDirectory::Cache,
        LogicalDirectory::Downloads,
    ];

    /// Stable lowercase name, used in logs and virtual web paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalDirectory::Documents => "documents",
            LogicalDirectory::Data => "data",
            LogicalDirectory::Cache => "cache",
            LogicalDirectory::Downloads => "downloads",
        }
    }
}

impl fmt::Display for LogicalDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform directory token produced by [`DirectoryResolver::resolve`].
///
/// On native this is a real filesystem root; on web it is a virtual token
/// the web path never dereferences, kept so the interface stays symmetric
/// across platforms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryRoot(PathBuf);

impl DirectoryRoot {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Maps a [`LogicalDirectory`] to its platform root.
///
/// Resolution is total and deterministic for the lifetime of the process:
/// every bucket resolves on every platform, falling back to the system
/// temp directory when the OS offers no dedicated root.
#[derive(Debug, Clone, Default)]
pub struct DirectoryResolver {
    /// When set, every bucket resolves under this base (tests, sandboxed
    /// hosts). Otherwise the OS user directories are used.
    base: Option<PathBuf>,
}

impl DirectoryResolver {
    /// Resolver backed by the OS user directories.
    pub fn platform_default() -> Self {
        Self { base: None }
    }

    /// Resolver that maps every bucket under one base directory.
    pub fn rooted_at(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    /// Resolve a bucket to a platform root.
    ///
    /// Accepts any context: a web context still gets a (virtual) token,
    /// which the web storage path ignores.
    pub fn resolve(&self, directory: LogicalDirectory, _ctx: &PlatformContext) -> DirectoryRoot {
        if let Some(base) = &self.base {
            return DirectoryRoot(base.join(directory.as_str()));
        }

        let fallback = || std::env::temp_dir().join(APP_DIR);
        let path = match directory {
            LogicalDirectory::Documents => dirs::document_dir()
                .map(|p| p.join(APP_DIR))
                .unwrap_or_else(fallback),
            LogicalDirectory::Data => dirs::data_dir()
                .map(|p| p.join(APP_DIR))
                .unwrap_or_else(fallback),
            LogicalDirectory::Cache => dirs::cache_dir()
                .map(|p| p.join(APP_DIR))
                .unwrap_or_else(fallback),
            // Downloads is the one shared root: no app subdirectory, the
            // user is expected to see these files.
            LogicalDirectory::Downloads => dirs::download_dir().unwrap_or_else(fallback),
        };
        DirectoryRoot(path)
    }
}
