//! Writes generated artifacts and reports progress through the step tracker.

use std::path::Path;

use crate::domain::{AppError, StepTracker, normalize_line_endings};
use crate::ports::RepositoryFilesystem;

pub const DETAIL_CREATED: &str = "created";
pub const DETAIL_CREATED_EXECUTABLE: &str = "created & chmod +x";

/// Write `content` to `path` (relative to the project root) with LF line endings.
///
/// The step named `step_key` is marked running, then done or error. Failures
/// are returned to the caller after the step has been marked.
pub fn create_file<F>(
    fs: &F,
    path: &Path,
    content: &str,
    tracker: &mut StepTracker,
    step_key: &str,
    make_executable: bool,
) -> Result<(), AppError>
where
    F: RepositoryFilesystem + ?Sized,
{
    tracker.start(step_key, "");
    match write_artifact(fs, path, content, make_executable) {
        Ok(detail) => {
            tracker.complete(step_key, detail);
            Ok(())
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to write artifact");
            tracker.error(step_key, &err.to_string());
            Err(err)
        }
    }
}

fn write_artifact<F>(
    fs: &F,
    path: &Path,
    content: &str,
    make_executable: bool,
) -> Result<&'static str, AppError>
where
    F: RepositoryFilesystem + ?Sized,
{
    let content = normalize_line_endings(content);
    fs.write_file(path, &content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "artifact written");

    if make_executable && cfg!(unix) {
        fs.set_executable(path)?;
        return Ok(DETAIL_CREATED_EXECUTABLE);
    }
    Ok(DETAIL_CREATED)
}
