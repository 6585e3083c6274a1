use super::{DirEntry, EntryKind, FileSystem};
use anyhow::{anyhow, bail, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(String),
    Unreadable,
}

/// In-memory source tree rooted at `/mock` unless told otherwise.
///
/// Relative paths are resolved against the root and parent directories are
/// created implicitly.
#[derive(Debug)]
pub struct MockFileSystem {
    root: PathBuf,
    nodes: RwLock<BTreeMap<PathBuf, Node>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root("/mock")
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let fs = Self {
            root: root.into(),
            nodes: RwLock::new(BTreeMap::new()),
        };
        fs.add_dir("");
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.insert(path.as_ref(), Node::File(content.to_string()));
    }

    /// Adds a file whose every read fails
    pub fn add_unreadable_file(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), Node::Unreadable);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), Node::Dir);
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn insert(&self, path: &Path, node: Node) {
        let path = self.resolve(path);
        let mut nodes = self.nodes.write().unwrap_or_else(|e| e.into_inner());

        for ancestor in path.ancestors().skip(1) {
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
        nodes.insert(path, node);
    }

    fn node(&self, path: &Path) -> Option<Node> {
        let nodes = self.nodes.read().unwrap_or_else(|e| e.into_inner());
        nodes.get(&self.resolve(path)).cloned()
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.node(path), Some(Node::Dir))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        match self.node(path) {
            Some(Node::File(content)) => Ok(content),
            Some(Node::Unreadable) => bail!("Permission denied: {}", path.display()),
            Some(Node::Dir) => bail!("Is a directory: {}", path.display()),
            None => Err(anyhow!("No such file: {}", path.display())),
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        if !self.is_dir(path) {
            bail!("No such directory: {}", path.display());
        }

        let dir = self.resolve(path);
        let nodes = self.nodes.read().unwrap_or_else(|e| e.into_inner());
        let entries = nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(dir.as_path()))
            .map(|(p, node)| DirEntry {
                path: p.clone(),
                name: p
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                kind: match node {
                    Node::Dir => EntryKind::Dir,
                    Node::File(_) | Node::Unreadable => EntryKind::File,
                },
            })
            .collect();

        Ok(entries)
    }
}
