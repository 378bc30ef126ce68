use crate::domain::{AppError, OptionSet};

/// Asks the user to pick one key out of an option set.
pub trait ChoicePrompt {
    /// Return the chosen key, or `AppError::SelectionCancelled` when the user aborts.
    fn select(
        &mut self,
        options: &OptionSet,
        prompt: &str,
        default_key: Option<&str>,
    ) -> Result<String, AppError>;
}
