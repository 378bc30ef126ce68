//! Filesystem adapter for the `RepositoryFilesystem` port.
//!
//! `FilesystemStore` owns the project root and only accepts project-relative
//! paths that stay below it.

mod repository_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Join a project-relative path onto the root.
    ///
    /// `.` segments are dropped and `..` cancels the preceding segment, without
    /// touching the filesystem. Absolute paths, drive prefixes, and any `..` that
    /// would climb above the root are rejected.
    pub(crate) fn resolve(&self, path: &Path) -> Result<PathBuf, AppError> {
        let traversal = || AppError::PathTraversal(path.display().to_string());

        let mut relative = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(segment) => relative.push(segment),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !relative.pop() {
                        return Err(traversal());
                    }
                }
                Component::RootDir | Component::Prefix(_) => return Err(traversal()),
            }
        }
        Ok(self.root.join(relative))
    }
}
