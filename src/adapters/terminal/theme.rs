//! Colors for stdout that fall back to plain text when stdout is not a terminal.

use std::fmt::Display;

use crossterm::style::{ContentStyle, Stylize};

use crate::domain::{FrameStyle, StepStatus, TreeStyle};

/// Whether styled output is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Color only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        Self::new(super::stdout_is_terminal() && std::env::var_os("NO_COLOR").is_none())
    }

    /// `text` with `style` applied, or unchanged when color is off.
    pub fn paint(&self, text: impl Display, style: ContentStyle) -> String {
        if self.color { style.apply(text).to_string() } else { text.to_string() }
    }
}

impl TreeStyle for Theme {
    fn title(&self, title: &str) -> String {
        self.paint(title, ContentStyle::new().cyan())
    }

    fn guide(&self, guide: &str) -> String {
        self.paint(guide, ContentStyle::new().dark_grey())
    }

    fn glyph(&self, status: StepStatus) -> String {
        let style = match status {
            StepStatus::Pending => ContentStyle::new().green().dim(),
            StepStatus::Running => ContentStyle::new().cyan(),
            StepStatus::Done => ContentStyle::new().green(),
            StepStatus::Error => ContentStyle::new().red(),
        };
        self.paint(status.glyph(), style)
    }

    fn label(&self, status: StepStatus, label: &str) -> String {
        let style = match status {
            StepStatus::Pending => ContentStyle::new().dark_grey(),
            _ => ContentStyle::new().white(),
        };
        self.paint(label, style)
    }

    fn detail(&self, detail: &str) -> String {
        self.paint(detail, ContentStyle::new().dark_grey())
    }
}

impl FrameStyle for Theme {
    fn prompt(&self, prompt: &str) -> String {
        self.paint(prompt, ContentStyle::new().bold())
    }

    fn pointer(&self, pointer: &str) -> String {
        self.paint(pointer, ContentStyle::new().cyan())
    }

    fn key(&self, key: &str) -> String {
        self.paint(key, ContentStyle::new().cyan())
    }

    fn label(&self, label: &str) -> String {
        self.paint(label, ContentStyle::new().dim())
    }

    fn hint(&self, hint: &str) -> String {
        self.paint(hint, ContentStyle::new().dim())
    }
}
