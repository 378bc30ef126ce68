//! Assistant catalog port definition.

use crate::domain::Assistant;

/// Trait for accessing the configured AI assistants.
pub trait AssistantCatalog {
    /// Get an assistant by key.
    fn get(&self, key: &str) -> Option<&Assistant>;

    /// List all assistants in display order.
    fn list_all(&self) -> Vec<&Assistant>;

    /// Get all assistant keys in display order.
    fn keys(&self) -> Vec<&str>;
}
