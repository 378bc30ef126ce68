//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::assets::assistant_catalog_embedded::EmbeddedAssistantCatalog;
use crate::adapters::assets::template_assets::EmbeddedTemplateStore;
use crate::adapters::filesystem::FilesystemStore;
use crate::app::{AppContext, commands::init};
use crate::ports::{AssistantCatalog, ChoicePrompt};

pub use crate::app::commands::init::{AutoSelected, InitConfig, InitOptions, InitOutcome};
pub use crate::domain::{AppError, Assistant, ScriptFlavor, StepTracker};

/// Create an `AppContext` for a given path.
fn create_context(path: PathBuf) -> AppContext<FilesystemStore, EmbeddedTemplateStore> {
    AppContext::new(FilesystemStore::new(path), EmbeddedTemplateStore::new())
}

/// List the assistants shipped with the binary, in display order.
pub fn assistants() -> Result<Vec<Assistant>, AppError> {
    let catalog = EmbeddedAssistantCatalog::new()?;
    Ok(catalog.list_all().into_iter().cloned().collect())
}

/// Resolve the assistant and script flavor for an init run.
///
/// `prompt` is only consulted for values missing from `options` when
/// `interactive` is true.
pub fn resolve_init_config<P>(
    options: &InitOptions,
    interactive: bool,
    prompt: &mut P,
) -> Result<InitConfig, AppError>
where
    P: ChoicePrompt + ?Sized,
{
    let catalog = EmbeddedAssistantCatalog::new()?;
    init::config::resolve(options, &catalog, interactive, prompt)
}

/// Initialize the review kit in the current directory.
pub fn init(config: &InitConfig, tracker: &mut StepTracker) -> Result<InitOutcome, AppError> {
    let ctx = AppContext::new(FilesystemStore::current()?, EmbeddedTemplateStore::new());
    init::execute(&ctx, config, tracker)
}

/// Initialize the review kit at the specified path.
pub fn init_at(
    path: impl Into<PathBuf>,
    config: &InitConfig,
    tracker: &mut StepTracker,
) -> Result<InitOutcome, AppError> {
    let ctx = create_context(path.into());
    init::execute(&ctx, config, tracker)
}
