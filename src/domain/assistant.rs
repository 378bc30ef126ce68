use std::path::{Component, Path};

use crate::domain::AppError;

/// Key of the assistant used when none is chosen and no terminal is attached.
pub const DEFAULT_ASSISTANT: &str = "copilot";

/// An AI coding assistant and the directory it reads prompt files from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assistant {
    /// Identifier accepted by `--ai`.
    pub key: String,
    /// Human-readable name.
    pub name: String,
    /// Prompt directory relative to the project root.
    pub prompt_dir: String,
}

impl Assistant {
    /// Build an assistant entry, rejecting empty fields and prompt directories
    /// that are absolute or climb out of the project root.
    pub fn new(key: &str, name: &str, prompt_dir: &str) -> Result<Self, AppError> {
        let invalid = |reason: &str| AppError::InvalidCatalogMetadata {
            entry: key.to_string(),
            reason: reason.to_string(),
        };

        if key.trim().is_empty() {
            return Err(invalid("key must not be empty"));
        }
        if name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if prompt_dir.trim().is_empty() {
            return Err(invalid("prompt_dir must not be empty"));
        }

        let dir = Path::new(prompt_dir);
        if dir.is_absolute()
            || dir.components().any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(invalid("prompt_dir must be a relative path inside the project"));
        }

        Ok(Self { key: key.to_string(), name: name.to_string(), prompt_dir: prompt_dir.to_string() })
    }
}
