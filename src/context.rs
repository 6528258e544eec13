//! Service context bundling the port trait objects commands run against.

use crate::adapters::live::LiveFileSystem;
use crate::ports::filesystem::FileSystem;

/// Access to the environment for command handlers.
///
/// The resolver port is not part of the context: it is constructed from
/// the site map each command loads explicitly, while the filesystem is an
/// ambient capability every command shares.
pub struct ServiceContext {
    /// Filesystem for field and site map I/O.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a context backed by the real filesystem.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context with the given filesystem implementation.
    #[must_use]
    pub fn with_fs(fs: Box<dyn FileSystem>) -> Self {
        Self { fs }
    }
}
