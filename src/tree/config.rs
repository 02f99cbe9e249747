//! Configuration for the tree builder

use std::path::PathBuf;

pub const DEFAULT_SUFFIX: &str = ".tex";

/// What to scan and which files qualify.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory the walk starts from
    pub root: PathBuf,
    /// File-name suffix a qualifying file must end with
    pub suffix: String,
    /// Glob patterns for entry names that are skipped entirely
    pub ignore_patterns: Vec<String>,
    /// Visit children in name order instead of the order the filesystem reports
    pub sort_entries: bool,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            suffix: DEFAULT_SUFFIX.to_string(),
            ignore_patterns: Vec::new(),
            sort_entries: false,
        }
    }
}
