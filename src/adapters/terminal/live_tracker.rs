use std::io::{self, Stdout, Write};

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use super::{Theme, screen_rows, terminal_width};
use crate::domain::{StepTracker, TrackerObserver};

/// Redraws the step tree in place after each tracker change.
pub struct LiveTrackerDisplay<W: Write = Stdout> {
    out: W,
    theme: Theme,
    width: Option<u16>,
    drawn_rows: u16,
}

impl LiveTrackerDisplay {
    pub fn new(theme: Theme) -> Self {
        Self::with_writer(io::stdout(), theme, None)
    }
}

impl<W: Write> LiveTrackerDisplay<W> {
    /// Draw into `out`; `width` pins the wrap column instead of querying the terminal.
    pub fn with_writer(out: W, theme: Theme, width: Option<u16>) -> Self {
        Self { out, theme, width, drawn_rows: 0 }
    }
}

impl<W: Write> TrackerObserver for LiveTrackerDisplay<W> {
    fn refresh(&mut self, tracker: &StepTracker) -> io::Result<()> {
        if self.drawn_rows > 0 {
            queue!(self.out, MoveUp(self.drawn_rows), MoveToColumn(0))?;
        }
        queue!(self.out, Clear(ClearType::FromCursorDown), Print(tracker.render_with(&self.theme)))?;

        let width = self.width.unwrap_or_else(terminal_width);
        self.drawn_rows = screen_rows(tracker.render().lines(), width);
        self.out.flush()
    }
}
