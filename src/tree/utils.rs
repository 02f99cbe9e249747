//! Shared helpers for the predicate and the builder

use std::fs::DirEntry;
use std::path::{Component, Path, PathBuf};

use glob::Pattern;

use crate::error::{TreeError, TreeResult};

use super::config::ScanConfig;

/// How a directory entry takes part in the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    /// Sockets, broken links...
    Other,
}

impl EntryKind {
    /// Classify a path, following symlinks. Links that lead back into their
    /// own ancestry are cut by the callers, see [`canonical_dir`].
    pub fn of(path: &Path) -> Self {
        if path.is_dir() {
            EntryKind::Dir
        } else if path.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// Resolve a directory to the path that identifies it on disk, so a symlink
/// leading back to one of its ancestors can be recognised.
pub fn canonical_dir(dir: &Path) -> TreeResult<PathBuf> {
    dir.canonicalize().map_err(|e| TreeError::read_dir(dir, e))
}

/// Make `path` absolute against `cwd` and drop `.` components.
///
/// `..` is kept as is; resolving it would change what a symlinked path means.
pub fn normalize_root(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Get the display name of a path, defaulting to "." for a bare root.
pub fn get_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Check if a file name ends with the configured suffix.
pub fn matches_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
}

/// Check if a path should be ignored based on its name and ignore patterns.
pub fn should_ignore_path(path: &Path, ignore_patterns: &[String]) -> bool {
    if ignore_patterns.is_empty() {
        return false;
    }
    let name = get_name(path);
    ignore_patterns
        .iter()
        .any(|pattern| name == *pattern || glob_match(pattern, &name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// List a directory's children, dropping ignored entries.
///
/// Any listing error, including one on an individual entry, is returned.
pub fn read_entries(dir: &Path, config: &ScanConfig) -> TreeResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| TreeError::read_dir(dir, e))?;

    let mut entries: Vec<DirEntry> = entries
        .collect::<Result<_, _>>()
        .map_err(|e| TreeError::read_dir(dir, e))?;
    if config.sort_entries {
        entries.sort_by_key(|e| e.file_name());
    }

    Ok(entries
        .into_iter()
        .map(|e| e.path())
        .filter(|p| !should_ignore_path(p, &config.ignore_patterns))
        .collect())
}
