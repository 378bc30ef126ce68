mod assistant_catalog;
mod choice_prompt;
mod repository_filesystem;
mod selector_terminal;
mod template_store;

pub use assistant_catalog::AssistantCatalog;
pub use choice_prompt::ChoicePrompt;
pub use repository_filesystem::RepositoryFilesystem;
pub use selector_terminal::SelectorTerminal;
pub use template_store::TemplateStore;
