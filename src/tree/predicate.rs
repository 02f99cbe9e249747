//! Does a directory hold a qualifying file at or below it?

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::TreeResult;

use super::config::ScanConfig;
use super::utils::{EntryKind, canonical_dir, matches_suffix, read_entries};

/// Uncached check: true as soon as any file at or below `dir` ends with the
/// configured suffix. Listing errors propagate.
///
/// Symlinked directories are followed; a link back to a directory already
/// being searched contributes nothing.
pub fn has_qualifying_files(dir: &Path, config: &ScanConfig) -> TreeResult<bool> {
    search_uncached(dir, config, &mut Vec::new())
}

fn search_uncached(
    dir: &Path,
    config: &ScanConfig,
    ancestors: &mut Vec<PathBuf>,
) -> TreeResult<bool> {
    let canonical = canonical_dir(dir)?;
    if ancestors.contains(&canonical) {
        return Ok(false);
    }
    ancestors.push(canonical);
    let found = scan_uncached(dir, config, ancestors);
    ancestors.pop();
    found
}

fn scan_uncached(
    dir: &Path,
    config: &ScanConfig,
    ancestors: &mut Vec<PathBuf>,
) -> TreeResult<bool> {
    for entry in read_entries(dir, config)? {
        match EntryKind::of(&entry) {
            EntryKind::Dir => {
                if search_uncached(&entry, config, ancestors)? {
                    return Ok(true);
                }
            }
            EntryKind::File => {
                if matches_suffix(&entry, &config.suffix) {
                    return Ok(true);
                }
            }
            EntryKind::Other => {}
        }
    }
    Ok(false)
}

/// Memoized form of [`has_qualifying_files`], scoped to a single run.
///
/// A negative answer for a directory is only recorded after its whole subtree
/// was listed, so every subdirectory it contains is recorded too. A positive
/// answer short-circuits and leaves later siblings unvisited.
///
/// Answers are keyed by the path as walked, which always has the same chain of
/// ancestors, so a symlink loop cut under one path is cut the same way on
/// every later lookup.
#[derive(Debug, Default)]
pub struct QualifyCache {
    known: HashMap<PathBuf, bool>,
}

impl QualifyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask about `dir`, treating it as the top of the search.
    pub fn qualifies(&mut self, dir: &Path, config: &ScanConfig) -> TreeResult<bool> {
        self.qualifies_within(dir, config, &mut Vec::new())
    }

    /// Ask about `dir` while `ancestors` (canonical paths, outermost first) are
    /// already being walked. A directory that resolves to one of them is a
    /// symlink loop and does not qualify.
    pub fn qualifies_within(
        &mut self,
        dir: &Path,
        config: &ScanConfig,
        ancestors: &mut Vec<PathBuf>,
    ) -> TreeResult<bool> {
        if let Some(&known) = self.known.get(dir) {
            trace!(dir = %dir.display(), known, "qualify cache hit");
            return Ok(known);
        }

        let canonical = canonical_dir(dir)?;
        if ancestors.contains(&canonical) {
            debug!(dir = %dir.display(), target = %canonical.display(), "symlink loop cut");
            self.known.insert(dir.to_path_buf(), false);
            return Ok(false);
        }

        ancestors.push(canonical);
        let found = self.scan(dir, config, ancestors);
        ancestors.pop();
        let found = found?;

        self.known.insert(dir.to_path_buf(), found);
        Ok(found)
    }

    fn scan(
        &mut self,
        dir: &Path,
        config: &ScanConfig,
        ancestors: &mut Vec<PathBuf>,
    ) -> TreeResult<bool> {
        for entry in read_entries(dir, config)? {
            let hit = match EntryKind::of(&entry) {
                EntryKind::Dir => self.qualifies_within(&entry, config, ancestors)?,
                EntryKind::File => matches_suffix(&entry, &config.suffix),
                EntryKind::Other => false,
            };
            if hit {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Number of directories with a recorded answer.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}
