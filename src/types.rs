use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What a walked entry is, after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
}

/// One file or directory below the walk root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Path as produced by the walk, i.e. the root joined with the relative path.
    pub path: PathBuf,
    /// Final path component, used for display and sorting.
    pub name: String,
    /// Nesting level; immediate children of the root are at depth 0.
    pub depth: usize,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// The result of walking one root.
///
/// Entries are in pre-order, siblings sorted by file name, so the same
/// sequence drives both the structure tree and the list of files to render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub root: PathBuf,
    pub entries: Vec<TreeEntry>,
}

impl Snapshot {
    /// Regular files in report order.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|e| e.is_file())
            .map(|e| e.path.as_path())
    }
    pub fn has_files(&self) -> bool {
        self.entries.iter().any(TreeEntry::is_file)
    }
}
