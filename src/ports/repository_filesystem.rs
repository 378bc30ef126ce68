//! Project-level filesystem operations.
//!
//! This port provides file I/O scoped to the target project root. It does not
//! know which artifacts are generated; that belongs to the init command.

use std::path::Path;

use crate::domain::AppError;

/// Port for low-level project filesystem operations.
///
/// All `path` arguments are relative to the project root.
/// Implementations must reject absolute paths and paths that climb out of the root.
pub trait RepositoryFilesystem {
    /// Write UTF-8 content to a file, creating parent directories as needed.
    /// Existing files are overwritten.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Add the execute bits for owner, group, and other to the current mode
    /// (Unix-only; a no-op elsewhere).
    fn set_executable(&self, path: &Path) -> Result<(), AppError>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;
}
