//! File system access for repository scanning

mod mock;
mod real;
mod r#trait;
mod walk;

pub use mock::MockFileSystem;
pub use r#trait::{DirEntry, EntryKind, FileSystem};
pub use real::RealFileSystem;
pub use walk::walk_files;
