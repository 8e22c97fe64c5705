//! # RepoPac
//!
//! `repopac` packages a repository into a single Markdown document: where it lives,
//! whether it is a git repository, an indented tree of its structure, and the
//! contents of every file in fenced code blocks. The result is meant to be pasted
//! into a language model as context.
//!
//! The walk lists everything below the root, hidden files included, in file-name
//! order at every level. Files larger than [`DEFAULT_MAX_FILE_BYTES`] are cut off
//! with a notice giving their real size.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use repopac::{Report, ReportBuilder};
//!
//! let options = ReportBuilder::new()
//!     .max_file_bytes(32 * 1024)
//!     .build();
//!
//! let mut report = Report::new(options);
//! report.add_target(".");
//!
//! for warning in report.take_diagnostics() {
//!     eprintln!("warning: {}", warning);
//! }
//! print!("{}", String::from_utf8_lossy(report.as_bytes()));
//! ```

mod classify;
mod engine;
mod error;
mod git;
mod options;
mod output;
mod tree;
mod types;

pub use classify::{exists, is_dir, is_file};
pub use engine::{collect_files, scan};
pub use error::RepopacError;
pub use git::{GitInfo, NoGitInfo, is_git_repo};
pub use options::{DEFAULT_MAX_FILE_BYTES, ReportBuilder, ReportOptions};
pub use output::{Report, fence_tag};
pub use tree::{print_structure, render_tree};
pub use types::{EntryKind, Snapshot, TreeEntry};
