//! `RepositoryFilesystem` implementation for `FilesystemStore`.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::FilesystemStore;

impl RepositoryFilesystem for FilesystemStore {
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content)?;
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&full_path)?.permissions();
            perms.set_mode(perms.mode() | 0o111);
            fs::set_permissions(&full_path, perms)?;
        }
        #[cfg(not(unix))]
        let _ = full_path;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        fs::create_dir_all(full_path)?;
        Ok(())
    }
}
