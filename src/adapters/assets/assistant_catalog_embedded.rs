//! Assistant catalog service - loads assistants from the embedded TOML asset.

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::{AppError, Assistant};
use crate::ports::AssistantCatalog;

/// Embedded catalog directory.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

const CATALOG_FILE: &str = "assistants.toml";

/// Root of `assistants.toml`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    assistant: Vec<AssistantMeta>,
}

/// One `[[assistant]]` table.
#[derive(Debug, Deserialize)]
struct AssistantMeta {
    key: String,
    name: String,
    prompt_dir: String,
}

/// Assistant catalog backed by the embedded `assistants.toml`.
#[derive(Debug, Clone)]
pub struct EmbeddedAssistantCatalog {
    assistants: Vec<Assistant>,
}

impl EmbeddedAssistantCatalog {
    /// Load the catalog shipped with the binary.
    pub fn new() -> Result<Self, AppError> {
        let content = CATALOG_DIR
            .get_file(CATALOG_FILE)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| {
                AppError::config_error(format!("Missing embedded asset: {}", CATALOG_FILE))
            })?;
        Self::from_toml(content)
    }

    /// Parse a catalog from TOML text, keeping entry order.
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let file: CatalogFile = toml::from_str(content).map_err(|e| {
            AppError::InvalidCatalogMetadata { entry: CATALOG_FILE.to_string(), reason: e.to_string() }
        })?;

        let mut assistants: Vec<Assistant> = Vec::with_capacity(file.assistant.len());
        for meta in file.assistant {
            if assistants.iter().any(|a| a.key == meta.key) {
                return Err(AppError::InvalidCatalogMetadata {
                    entry: meta.key,
                    reason: "duplicate assistant key".to_string(),
                });
            }
            assistants.push(Assistant::new(&meta.key, &meta.name, &meta.prompt_dir)?);
        }

        if assistants.is_empty() {
            return Err(AppError::InvalidCatalogMetadata {
                entry: CATALOG_FILE.to_string(),
                reason: "no assistants defined".to_string(),
            });
        }

        Ok(Self { assistants })
    }
}

impl AssistantCatalog for EmbeddedAssistantCatalog {
    fn get(&self, key: &str) -> Option<&Assistant> {
        self.assistants.iter().find(|a| a.key == key)
    }

    fn list_all(&self) -> Vec<&Assistant> {
        self.assistants.iter().collect()
    }

    fn keys(&self) -> Vec<&str> {
        self.assistants.iter().map(|a| a.key.as_str()).collect()
    }
}
