//! Terminal adapters built on crossterm.

mod crossterm_selector;
mod live_tracker;
mod theme;

use std::io::IsTerminal;

pub use crossterm_selector::{CrosstermSelectorTerminal, map_key_event};
pub use live_tracker::LiveTrackerDisplay;
pub use theme::Theme;

/// Whether prompts can be answered interactively (stdin is a terminal).
pub fn stdin_is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Whether stdout can be redrawn in place.
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Column count of the attached terminal, 80 when unknown.
pub fn terminal_width() -> u16 {
    crossterm::terminal::size().map(|(cols, _)| cols).unwrap_or(80)
}

/// Screen rows taken by unstyled `lines` once soft-wrapped at `width` columns.
pub(crate) fn screen_rows<'a>(lines: impl IntoIterator<Item = &'a str>, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize =
        lines.into_iter().map(|line| line.chars().count().max(1).div_ceil(width)).sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}
