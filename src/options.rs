use serde::{Deserialize, Serialize};

/// Files larger than this many bytes are cut off in the report.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 16 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub max_file_bytes: u64,
    pub follow_links: bool,
}
impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            follow_links: true,
        }
    }
}
#[derive(Debug, Default)]
pub struct ReportBuilder {
    options: ReportOptions,
}
impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn max_file_bytes(mut self, limit: u64) -> Self {
        self.options.max_file_bytes = limit;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> ReportOptions {
        self.options
    }
}
