//! Fixed output locations inside the target project.

use std::path::PathBuf;

use crate::domain::{Assistant, ScriptFlavor};

/// Directory holding the generated diff-report script.
pub const SCRIPT_DIR: &str = ".code_review/scripts";

/// File name of the generated prompt document.
pub const PROMPT_FILE_NAME: &str = "code_review.prompt.md";

/// Relative path of the generated script for a flavor.
pub fn script_path(flavor: ScriptFlavor) -> PathBuf {
    PathBuf::from(SCRIPT_DIR).join(flavor.file_name())
}

/// Relative path of the prompt document for an assistant.
pub fn prompt_path(assistant: &Assistant) -> PathBuf {
    PathBuf::from(&assistant.prompt_dir).join(PROMPT_FILE_NAME)
}
