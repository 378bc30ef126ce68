use crate::ports::{RepositoryFilesystem, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: RepositoryFilesystem, T: TemplateStore> {
    filesystem: F,
    templates: T,
}

impl<F: RepositoryFilesystem, T: TemplateStore> AppContext<F, T> {
    /// Create a new application context.
    pub fn new(filesystem: F, templates: T) -> Self {
        Self { filesystem, templates }
    }

    /// Get a reference to the project filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
