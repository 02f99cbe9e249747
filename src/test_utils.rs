//! Test utilities for building directory fixtures.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Fill the tree with `width` directories per level, `depth` levels deep,
    /// with a `.tex` file only in every `every`th leaf.
    pub fn add_wide_tree(&self, width: usize, depth: usize, every: usize) {
        let mut leaves = vec![String::new()];
        for level in 0..depth {
            leaves = leaves
                .iter()
                .flat_map(|prefix| {
                    (0..width).map(move |i| format!("{}d{}_{}/", prefix, level, i))
                })
                .collect();
        }
        for (i, leaf) in leaves.iter().enumerate() {
            let name = if every > 0 && i % every == 0 {
                "doc.tex"
            } else {
                "notes.md"
            };
            self.add_file(&format!("{}{}", leaf, name), "");
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
