//! Shared testing utilities for review-cli integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `review-cli` binary in the project directory.
    ///
    /// Stdin is not a terminal under `assert_cmd`, so runs are non-interactive.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("review-cli").expect("Failed to locate review-cli binary");
        cmd.current_dir(&self.work_dir).env_remove("REVIEW_CLI_LOG").write_stdin("");
        cmd
    }

    /// Absolute path of a project-relative file.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    /// Read a project-relative file.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Assert that the project directory contains no entries.
    pub fn assert_project_empty(&self) {
        let entries: Vec<_> = fs::read_dir(&self.work_dir).unwrap().collect();
        assert!(entries.is_empty(), "project directory should be untouched, found {:?}", entries);
    }

    /// Assert that the script of the given file name exists.
    pub fn assert_script_exists(&self, file_name: &str) {
        let path = self.path(".code_review/scripts").join(file_name);
        assert!(path.is_file(), "script should exist at {}", path.display());
    }

    /// Assert that the prompt exists under the given prompt directory.
    pub fn assert_prompt_exists(&self, prompt_dir: &str) {
        let path = self.path(prompt_dir).join("code_review.prompt.md");
        assert!(path.is_file(), "prompt should exist at {}", path.display());
    }

    /// Assert that a project-relative file has all execute bits set.
    #[cfg(unix)]
    pub fn assert_executable(&self, relative: &str) {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(self.path(relative)).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111, "{} should be executable (mode {:o})", relative, mode);
    }
}
