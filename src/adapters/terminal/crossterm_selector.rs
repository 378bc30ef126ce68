use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};

use super::{Theme, screen_rows, terminal_width};
use crate::domain::{KeyAction, SelectorFrame};
use crate::ports::SelectorTerminal;

/// Map a raw key press to a selector action.
pub fn map_key_event(key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Up => KeyAction::Up,
        KeyCode::Down => KeyAction::Down,
        KeyCode::Char('p') if ctrl => KeyAction::Up,
        KeyCode::Char('n') if ctrl => KeyAction::Down,
        KeyCode::Char('c') if ctrl => KeyAction::Interrupt,
        KeyCode::Enter => KeyAction::Confirm,
        KeyCode::Esc => KeyAction::Cancel,
        _ => KeyAction::Ignored,
    }
}

/// Inline selector drawn in raw mode.
///
/// The frame is redrawn in place and wiped on `finish`, so nothing is left
/// behind once a choice is made.
pub struct CrosstermSelectorTerminal<W: Write = Stdout> {
    out: W,
    theme: Theme,
    width: Option<u16>,
    drawn_rows: u16,
    raw: bool,
}

impl CrosstermSelectorTerminal {
    pub fn new(theme: Theme) -> Self {
        Self::with_writer(io::stdout(), theme, None)
    }
}

impl<W: Write> CrosstermSelectorTerminal<W> {
    /// Draw into `out`; `width` pins the wrap column instead of querying the terminal.
    pub fn with_writer(out: W, theme: Theme, width: Option<u16>) -> Self {
        Self { out, theme, width, drawn_rows: 0, raw: false }
    }

    fn erase(&mut self) -> io::Result<()> {
        if self.drawn_rows > 0 {
            queue!(self.out, MoveUp(self.drawn_rows), MoveToColumn(0))?;
            self.drawn_rows = 0;
        }
        queue!(self.out, Clear(ClearType::FromCursorDown))
    }
}

impl<W: Write> SelectorTerminal for CrosstermSelectorTerminal<W> {
    fn begin(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        terminal::enable_raw_mode()?;
        self.raw = true;
        execute!(self.out, Hide)
    }

    fn draw(&mut self, frame: &SelectorFrame) -> io::Result<()> {
        self.erase()?;
        for line in frame.lines_with(&self.theme) {
            queue!(self.out, Print(line), Print("\r\n"))?;
        }

        let width = self.width.unwrap_or_else(terminal_width);
        self.drawn_rows = screen_rows(frame.lines().iter().map(String::as_str), width);
        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<KeyAction> {
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(map_key_event(key));
            }
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        self.erase()?;
        queue!(self.out, Show)?;
        self.out.flush()?;
        if self.raw {
            self.raw = false;
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for CrosstermSelectorTerminal<W> {
    fn drop(&mut self) {
        if self.raw {
            let _ = terminal::disable_raw_mode();
            let _ = execute!(self.out, Show);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OptionDisplay, OptionSet, SelectionState};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn arrows_and_emacs_bindings_navigate() {
        assert_eq!(map_key_event(press(KeyCode::Up, KeyModifiers::NONE)), KeyAction::Up);
        assert_eq!(map_key_event(press(KeyCode::Down, KeyModifiers::NONE)), KeyAction::Down);
        assert_eq!(map_key_event(press(KeyCode::Char('p'), KeyModifiers::CONTROL)), KeyAction::Up);
        assert_eq!(
            map_key_event(press(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            KeyAction::Down
        );
    }

    #[test]
    fn enter_escape_and_ctrl_c() {
        assert_eq!(map_key_event(press(KeyCode::Enter, KeyModifiers::NONE)), KeyAction::Confirm);
        assert_eq!(map_key_event(press(KeyCode::Esc, KeyModifiers::NONE)), KeyAction::Cancel);
        assert_eq!(
            map_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Interrupt
        );
    }

    fn frame() -> SelectorFrame {
        let mut options = OptionSet::new();
        options.push("sh", OptionDisplay::Label("POSIX Shell".into())).unwrap();
        options.push("ps", OptionDisplay::Label("PowerShell".into())).unwrap();
        SelectionState::new(&options, Some("ps")).unwrap().frame(&options, "Pick a script")
    }

    fn terminal() -> CrosstermSelectorTerminal<Vec<u8>> {
        CrosstermSelectorTerminal::with_writer(Vec::new(), Theme::new(false), Some(80))
    }

    #[test]
    fn draw_writes_the_frame_lines() {
        let mut terminal = terminal();
        terminal.draw(&frame()).unwrap();

        let out = String::from_utf8(terminal.out.clone()).unwrap();
        let expected: String = frame().lines().iter().map(|line| format!("{}\r\n", line)).collect();
        assert_eq!(out, format!("\x1b[J{}", expected));
        assert!(out.contains("▶  ps (PowerShell)\r\n"));
        assert!(out.contains("Use ↑/↓ to navigate, Enter to select"));
        assert_eq!(terminal.drawn_rows, 6);
    }

    #[test]
    fn redraw_and_finish_erase_the_previous_frame() {
        let mut terminal = terminal();
        terminal.draw(&frame()).unwrap();
        let drawn = terminal.out.len();

        terminal.draw(&frame()).unwrap();
        let redraw = String::from_utf8(terminal.out[drawn..].to_vec()).unwrap();
        assert!(redraw.starts_with("\x1b[6A\x1b[1G\x1b[J"));

        let drawn = terminal.out.len();
        terminal.finish().unwrap();
        let finish = String::from_utf8(terminal.out[drawn..].to_vec()).unwrap();
        assert_eq!(finish, "\x1b[6A\x1b[1G\x1b[J\x1b[?25h");
        assert_eq!(terminal.drawn_rows, 0);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key_event(press(KeyCode::Char('p'), KeyModifiers::NONE)), KeyAction::Ignored);
        assert_eq!(map_key_event(press(KeyCode::Tab, KeyModifiers::NONE)), KeyAction::Ignored);
    }
}
