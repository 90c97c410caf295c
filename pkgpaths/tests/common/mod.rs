//! Shared fixtures for pkgpaths integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary source tree.
pub struct SourceTree {
    temp_dir: TempDir,
}

impl SourceTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create `parts` as nested directories holding one `file.go`.
    pub fn package(&self, parts: &[&str]) -> PathBuf {
        let path = self.dir(parts);
        self.source(&path, "file.go");
        path
    }

    /// Create `parts` as nested directories without any files.
    pub fn dir(&self, parts: &[&str]) -> PathBuf {
        let path = parts
            .iter()
            .fold(self.path().to_path_buf(), |p, part| p.join(part));
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a small source file into `dir`.
    pub fn source(&self, dir: &Path, name: &str) {
        fs::write(dir.join(name), "package foo").expect("Failed to write source file");
    }
}

/// The tree used by the reference resolution scenario.
pub fn scenario_tree() -> SourceTree {
    let tree = SourceTree::new();
    tree.source(tree.path(), "file.go");
    tree.package(&["exclude"]);
    tree.package(&["other", "exclude"]);
    tree.package(&["include"]);
    tree.package(&["include", "foo"]);
    tree.package(&["duplicate"]);
    tree.package(&[".exclude"]);
    tree.package(&["include", ".exclude"]);
    tree.package(&["_exclude"]);
    tree.package(&["include", "_exclude"]);
    tree
}
