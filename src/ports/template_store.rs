use crate::domain::{AppError, ScriptFlavor};

/// Source of the static artifact bodies written into a project.
pub trait TemplateStore {
    /// Body of the diff-report script for a flavor.
    fn script_template(&self, flavor: ScriptFlavor) -> Result<&str, AppError>;

    /// Body of the code review prompt document.
    fn prompt_template(&self) -> Result<&str, AppError>;
}
