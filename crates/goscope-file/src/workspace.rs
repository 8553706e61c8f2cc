//! Registry of open Go files.
//!
//! The workspace owns one [`GoFile`] per path. Opening a path creates a
//! fresh file (and drops any previous one with its cached views); updating
//! it replaces the root of the existing file so its views go stale; closing
//! it discards the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use goscope_syntax::Node;
use parking_lot::RwLock;

use crate::file::GoFile;
use crate::snapshot::ModificationStamp;

/// Open files indexed by path.
#[derive(Debug, Default)]
pub struct Workspace {
    files: RwLock<HashMap<PathBuf, Arc<GoFile>>>,
}

impl Workspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path` with a freshly parsed root, replacing any file already
    /// open there.
    pub fn open(&self, path: impl Into<PathBuf>, root: Node) -> Arc<GoFile> {
        let path = path.into();
        let file = Arc::new(GoFile::new(root));
        tracing::info!("File opened: {}", path.display());
        self.files.write().insert(path, Arc::clone(&file));
        file
    }

    /// Replace the root of an open file. Returns the file's new stamp, or
    /// `None` if `path` is not open.
    pub fn update(&self, path: &Path, root: Node) -> Option<ModificationStamp> {
        let file = self.get(path)?;
        let stamp = file.replace_root(root);
        tracing::debug!("File changed: {} ({stamp})", path.display());
        Some(stamp)
    }

    /// Close `path`. Returns whether it was open.
    pub fn close(&self, path: &Path) -> bool {
        let closed = self.files.write().remove(path).is_some();
        if closed {
            tracing::info!("File closed: {}", path.display());
        }
        closed
    }

    /// The file open at `path`.
    pub fn get(&self, path: &Path) -> Option<Arc<GoFile>> {
        self.files.read().get(path).cloned()
    }

    /// All open paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.files.read().keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Number of open files.
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    /// Whether no file is open.
    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}
