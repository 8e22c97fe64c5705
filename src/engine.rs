use crate::classify;
use crate::options::ReportOptions;
use crate::types::{EntryKind, Snapshot, TreeEntry};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, options: &ReportOptions) -> Self {
        let mut builder = WalkBuilder::new(root);
        // Everything is listed: hidden files, `.git/`, and paths named in ignore files.
        builder
            .standard_filters(false)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        Self {
            inner: builder.build(),
        }
    }
    fn into_entries(self) -> impl Iterator<Item = TreeEntry> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.depth() > 0 => {
                let kind = match entry.file_type() {
                    Some(ft) if ft.is_dir() => EntryKind::Directory,
                    Some(ft) if ft.is_file() => EntryKind::File,
                    _ => {
                        #[cfg(feature = "logging")]
                        tracing::debug!("Skipping special file: {}", entry.path().display());
                        return None;
                    }
                };
                Some(TreeEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    depth: entry.depth() - 1,
                    path: entry.into_path(),
                    kind,
                })
            }
            Ok(_) => None,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping unreadable entry: {}", _e);
                None
            }
        })
    }
}

/// Walks `root` depth-first, siblings in file-name order.
///
/// The root itself is not part of the snapshot. A missing root, or one that
/// is not a directory, yields an empty snapshot. Entries that cannot be read
/// (permission errors, broken links, symlink loops) are left out.
pub fn scan(root: impl AsRef<Path>, options: &ReportOptions) -> Snapshot {
    let root = root.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!("Scanning {}", root.display());
    let entries = if classify::is_dir(root) {
        Walker::new(root, options).into_entries().collect()
    } else {
        Vec::new()
    };
    Snapshot {
        root: root.to_path_buf(),
        entries,
    }
}

/// Lists every regular file reachable from `root`, in report order.
///
/// A file root yields itself; a missing root yields nothing.
pub fn collect_files(root: impl AsRef<Path>, options: &ReportOptions) -> Vec<PathBuf> {
    let root = root.as_ref();
    if classify::is_file(root) {
        return vec![root.to_path_buf()];
    }
    scan(root, options).files().map(Path::to_path_buf).collect()
}
