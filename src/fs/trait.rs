//! Read-only view of a source tree

use anyhow::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks, sockets and anything else the scanner ignores
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

/// The handful of file operations repository scanning needs, mockable in tests
pub trait FileSystem: Send + Sync {
    fn is_dir(&self, path: &Path) -> bool;

    /// Fails for missing, unreadable or non-UTF-8 files
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Lists one directory level without following symlinks, in no particular order
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;
}
