//! Rendering of the indented structure tree.

use crate::engine::scan;
use crate::options::ReportOptions;
use crate::types::Snapshot;
use std::path::Path;

/// Renders `snapshot` as one line per entry.
///
/// Each line is indented two spaces per level; directories carry a trailing `/`.
/// Every line, including the last, ends with a newline.
pub fn render_tree(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for entry in &snapshot.entries {
        out.push_str(&"  ".repeat(entry.depth));
        out.push_str(&entry.name);
        if entry.is_dir() {
            out.push('/');
        }
        out.push('\n');
    }
    out
}

/// Walks `root` and renders its structure tree.
///
/// A missing root, or a root that is a file, renders as an empty string.
pub fn print_structure(root: impl AsRef<Path>, options: &ReportOptions) -> String {
    render_tree(&scan(root, options))
}
