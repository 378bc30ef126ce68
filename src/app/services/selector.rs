//! Interactive arrow-key selector.

use crate::domain::{AppError, OptionSet, SelectionState, SelectionStep};
use crate::ports::{ChoicePrompt, SelectorTerminal};

/// Single-choice menu driven over a [`SelectorTerminal`].
pub struct Selector<T: SelectorTerminal> {
    terminal: T,
}

impl<T: SelectorTerminal> Selector<T> {
    pub fn new(terminal: T) -> Self {
        Self { terminal }
    }

    fn run_loop(
        &mut self,
        state: &mut SelectionState,
        options: &OptionSet,
        prompt: &str,
    ) -> Result<String, AppError> {
        self.terminal.begin()?;
        loop {
            self.terminal.draw(&state.frame(options, prompt))?;
            let action = self.terminal.read_key()?;
            match state.apply(action) {
                SelectionStep::Continue => {}
                SelectionStep::Selected(key) => return Ok(key),
                SelectionStep::Cancelled => return Err(AppError::SelectionCancelled),
            }
        }
    }
}

impl<T: SelectorTerminal> ChoicePrompt for Selector<T> {
    fn select(
        &mut self,
        options: &OptionSet,
        prompt: &str,
        default_key: Option<&str>,
    ) -> Result<String, AppError> {
        let mut state = SelectionState::new(options, default_key)?;

        let outcome = self.run_loop(&mut state, options, prompt);
        let finished = self.terminal.finish();

        let key = outcome?;
        finished?;
        tracing::debug!(prompt, key = key.as_str(), "selection confirmed");
        Ok(key)
    }
}
