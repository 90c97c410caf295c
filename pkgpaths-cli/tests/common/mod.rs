//! Common test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host settings into a test run.
const ISOLATED_VARS: [&str; 8] = [
    "PKGPATHS_BASE_DIR",
    "PKGPATHS_CONFIG_DIR",
    "PKGPATHS_LOG_MODE",
    "PKGPATHS_SKIP",
    "PKGPATHS_SOURCE_EXTENSIONS",
    "PKGPATHS_ORDER",
    "PKGPATHS_REQUIRE_SOURCE_FILES",
    "PKGPATHS_OUTPUT_FORMAT",
];

/// Test environment with an isolated workspace and user config directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    temp_dir: TempDir,
    /// Workspace that specs are resolved against
    pub workspace: PathBuf,
    /// User configuration directory
    pub config_dir: PathBuf,
}

impl TestEnv {
    /// Create an empty workspace.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let workspace = temp_dir.path().join("workspace");
        let config_dir = temp_dir.path().join("user-config");
        fs::create_dir_all(&workspace).expect("Failed to create workspace");

        Self {
            temp_dir,
            workspace,
            config_dir,
        }
    }

    /// A workspace laid out like the reference resolution scenario.
    pub fn scenario() -> Self {
        let env = Self::new();
        env.source(".", "file.go");
        for pkg in [
            "exclude",
            "other/exclude",
            "include",
            "include/foo",
            "duplicate",
            ".exclude",
            "include/.exclude",
            "_exclude",
            "include/_exclude",
        ] {
            env.package(pkg);
        }
        env
    }

    /// Command with no flags and a scrubbed environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pkgpaths").expect("Failed to find pkgpaths binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Command pointed at this environment's workspace and config directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--base-dir")
            .arg(&self.workspace)
            .arg("--config-dir")
            .arg(&self.config_dir);
        cmd
    }

    /// Create a directory (relative to the workspace) holding `file.go`.
    pub fn package(&self, rel: &str) -> PathBuf {
        let dir = self.dir(rel);
        self.source(rel, "file.go");
        dir
    }

    /// Create an empty directory relative to the workspace.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.workspace.join(rel);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a source file into a workspace directory.
    pub fn source(&self, rel: &str, name: &str) {
        fs::write(self.workspace.join(rel).join(name), "package p")
            .expect("Failed to write source file");
    }

    /// Write `pkgpaths.yaml` at the workspace root.
    pub fn write_project_config(&self, contents: &str) -> PathBuf {
        let path = self.workspace.join("pkgpaths.yaml");
        fs::write(&path, contents).expect("Failed to write project config");
        path
    }

    /// Write the user `config.yaml`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        fs::create_dir_all(&self.config_dir).expect("Failed to create config dir");
        let path = self.config_dir.join("config.yaml");
        fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Root of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Split stdout into trimmed, non-empty lines.
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
