//! Recursive file enumeration over a [`FileSystem`]

use super::{EntryKind, FileSystem};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lists every regular file below `root`.
///
/// Each directory yields its own files first, in name order, and only then
/// descends into its subdirectories, also in name order. Directories that
/// cannot be listed are skipped. Symlinks are never followed.
pub fn walk_files<F: FileSystem + ?Sized>(fs: &F, root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    visit(fs, root, &mut files);
    files
}

fn visit<F: FileSystem + ?Sized>(fs: &F, dir: &Path, files: &mut Vec<PathBuf>) {
    let mut entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "Skipping unreadable directory");
            return;
        }
    };
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let (dirs, rest): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|entry| entry.kind == EntryKind::Dir);

    files.extend(
        rest.into_iter()
            .filter(|entry| entry.kind == EntryKind::File)
            .map(|entry| entry.path),
    );
    for sub in dirs {
        visit(fs, &sub.path, files);
    }
}
