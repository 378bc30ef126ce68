use std::io;

use crate::domain::{KeyAction, SelectorFrame};

/// Terminal surface driven by the interactive selector.
///
/// The selector calls `begin` once, then alternates `draw` and `read_key`,
/// and always calls `finish` before returning, whatever the outcome.
pub trait SelectorTerminal {
    /// Prepare the terminal for key-by-key input.
    fn begin(&mut self) -> io::Result<()>;

    /// Replace the previously drawn frame with `frame`.
    fn draw(&mut self, frame: &SelectorFrame) -> io::Result<()>;

    /// Block until one key is pressed and map it to a logical action.
    fn read_key(&mut self) -> io::Result<KeyAction>;

    /// Erase the drawn frame and restore the terminal.
    fn finish(&mut self) -> io::Result<()>;
}
