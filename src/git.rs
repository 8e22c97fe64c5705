//! Git repository detection.
//!
//! Only the presence of a `.git` directory is checked. Metadata such as the
//! current branch or remotes is left to a [`GitInfo`] implementation; the
//! default one, [`NoGitInfo`], contributes nothing to the report.

use crate::classify;
use std::path::Path;

/// Returns `true` if `dir` has a `.git` subdirectory.
///
/// A `.git` *file* (as used by worktrees and submodules) does not count.
pub fn is_git_repo(dir: &Path) -> bool {
    classify::is_dir(&dir.join(".git"))
}

/// Source of the text placed under the `## Git Info` heading.
pub trait GitInfo {
    /// Returns the Markdown body for the repository rooted at `repo`.
    ///
    /// `None` leaves the section empty.
    fn describe(&self, repo: &Path) -> Option<String> {
        let _ = repo;
        None
    }
}

/// Git metadata provider that reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGitInfo;

impl GitInfo for NoGitInfo {}
