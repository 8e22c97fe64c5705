//! Markdown report assembly.
//!
//! A [`Report`] owns the output buffer for a whole run. Targets are appended one
//! after another with [`Report::add_target`]; the finished buffer is raw bytes so
//! file contents are reproduced exactly, whatever their encoding.
//!
//! Problems that only affect part of the report (a path that does not exist, a
//! file that cannot be opened) never go into the buffer. They are collected as
//! diagnostics and handed out by [`Report::take_diagnostics`].

use crate::classify;
use crate::engine::scan;
use crate::error::RepopacError;
use crate::git::{GitInfo, NoGitInfo, is_git_repo};
use crate::options::ReportOptions;
use crate::tree::render_tree;
use std::fs::{self, File};
use std::io::Read;
use std::path::{self as stdpath, Path};
#[cfg(feature = "logging")]
use tracing;

pub struct Report {
    buf: Vec<u8>,
    diagnostics: Vec<RepopacError>,
    options: ReportOptions,
    git: Box<dyn GitInfo>,
}

impl Default for Report {
    fn default() -> Self {
        Self::new(ReportOptions::default())
    }
}

impl Report {
    pub fn new(options: ReportOptions) -> Self {
        Self {
            buf: Vec::with_capacity(4096),
            diagnostics: Vec::new(),
            options,
            git: Box::new(NoGitInfo),
        }
    }

    /// Replaces the provider used to fill the `## Git Info` section.
    pub fn with_git_info(mut self, git: Box<dyn GitInfo>) -> Self {
        self.git = git;
        self
    }

    /// Appends the report for one command-line target.
    ///
    /// Directories get a full repository report, regular files a single
    /// `## File Contents` block. A path that does not exist is recorded as a
    /// diagnostic and contributes nothing.
    pub fn add_target(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if !classify::exists(path) {
            self.diagnostics
                .push(RepopacError::InvalidPath(path.to_path_buf()));
        } else if classify::is_dir(path) {
            self.render_directory(path);
        } else if classify::is_file(path) {
            self.push_str("## File Contents\n\n");
            self.render_file(path);
        } else {
            #[cfg(feature = "logging")]
            tracing::debug!("Neither file nor directory, skipping: {}", path.display());
        }
    }

    /// Appends the repository report for directory `dir`.
    pub fn render_directory(&mut self, dir: &Path) {
        self.push_str("# Repository Context\n\n");

        self.push_str("## File System Location\n\n");
        self.push_str(&display_absolute(dir));
        self.push_str("\n\n");

        if is_git_repo(dir) {
            #[cfg(feature = "logging")]
            tracing::debug!("Git repository detected: {}", dir.display());
            self.push_str("## Git Info\n\n");
            if let Some(info) = self.git.describe(dir) {
                self.push_str(&info);
                if !info.ends_with('\n') {
                    self.push_str("\n");
                }
                self.push_str("\n");
            }
        } else {
            self.push_str("Not a git repository\n\n");
        }

        let snapshot = scan(dir, &self.options);

        self.push_str("## Structure\n");
        self.push_str("```\n");
        self.push_str(&render_tree(&snapshot));
        self.push_str("```\n\n");

        if snapshot.has_files() {
            self.push_str("## File Contents\n\n");
            for file in snapshot.files() {
                self.render_file(file);
            }
        }
    }

    /// Appends one fenced block holding the contents of `path`.
    ///
    /// The header and fences are written even if the file cannot be read; in
    /// that case the block is empty and a diagnostic is recorded.
    pub fn render_file(&mut self, path: &Path) {
        self.push_str(&format!("### File: {}\n", path.display()));
        self.push_str(&format!("```{}\n", fence_tag(path)));

        let limit = self.options.max_file_bytes;
        match read_capped(path, limit) {
            Ok((content, size)) => {
                self.buf.extend_from_slice(&content);
                if size > limit {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Truncated {} ({} > {} bytes)", path.display(), size, limit);
                    self.push_str(&format!(
                        "\n... (truncated; original {} bytes, showing first {} bytes)\n",
                        size, limit
                    ));
                } else {
                    self.push_str("\n");
                }
            }
            Err(e) => self.diagnostics.push(e),
        }

        self.push_str("```\n\n");
    }

    /// Drains the diagnostics recorded so far, oldest first.
    pub fn take_diagnostics(&mut self) -> Vec<RepopacError> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn diagnostics(&self) -> &[RepopacError] {
        &self.diagnostics
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn push_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }
}

/// Reads at most `limit` bytes of `path`, returning them with the file's full size.
fn read_capped(path: &Path, limit: u64) -> Result<(Vec<u8>, u64), RepopacError> {
    let size = fs::metadata(path)
        .map_err(|e| RepopacError::io(path, e))?
        .len();
    let file = File::open(path).map_err(|e| RepopacError::io(path, e))?;
    let mut content = Vec::with_capacity(size.min(limit) as usize);
    file.take(limit)
        .read_to_end(&mut content)
        .map_err(|e| RepopacError::io(path, e))?;
    Ok((content, size))
}

/// Language hint placed after the opening fence.
pub fn fence_tag(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => "json",
        Some("js") => "javascript",
        Some("cpp") | Some("hpp") => "cpp",
        _ => "",
    }
}

/// Absolute form of `path` with `/` separators. Symlinks are not resolved.
fn display_absolute(path: &Path) -> String {
    let absolute = stdpath::absolute(path).unwrap_or_else(|_e| {
        #[cfg(feature = "logging")]
        tracing::debug!("Could not make {} absolute: {}", path.display(), _e);
        path.to_path_buf()
    });
    let shown = absolute.to_string_lossy();
    if stdpath::MAIN_SEPARATOR == '/' {
        shown.into_owned()
    } else {
        shown.replace(stdpath::MAIN_SEPARATOR, "/")
    }
}
