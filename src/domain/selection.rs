//! Option lists and cursor state for the interactive single-choice selector.

use crate::domain::AppError;
use crate::domain::step_tracker::PlainText;

/// Hint line displayed under the option list.
pub const SELECTOR_HINT: &str = "Use ↑/↓ to navigate, Enter to select";

/// How an option is described next to its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionDisplay {
    /// Plain label.
    Label(String),
    /// Structured entry with a name and the sub-path it targets.
    Record { name: String, path: String },
}

impl OptionDisplay {
    /// Text shown in parentheses after the key.
    pub fn display_name(&self) -> &str {
        match self {
            OptionDisplay::Label(label) => label,
            OptionDisplay::Record { name, .. } => name,
        }
    }
}

/// Ordered mapping from option key to its display entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    entries: Vec<(String, OptionDisplay)>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option. Keys must be unique.
    pub fn push(&mut self, key: impl Into<String>, display: OptionDisplay) -> Result<(), AppError> {
        let key = key.into();
        if self.contains(&key) {
            return Err(AppError::config_error(format!("Duplicate option key '{}'", key)));
        }
        self.entries.push((key, display));
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Display index of a key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionDisplay)> {
        self.entries.iter().map(|(k, display)| (k.as_str(), display))
    }
}

/// Logical key events understood by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
    Confirm,
    Cancel,
    /// Interrupt signal (Ctrl-C); handled exactly like `Cancel`.
    Interrupt,
    /// Any key without a binding.
    Ignored,
}

/// Result of feeding one key into the selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionStep {
    /// Keep reading keys.
    Continue,
    /// The highlighted key was confirmed.
    Selected(String),
    /// The user cancelled or interrupted.
    Cancelled,
}

/// Cursor state of a running selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    option_keys: Vec<String>,
    selected_index: usize,
    confirmed: bool,
}

impl SelectionState {
    /// Start a selection over `options`, highlighting `default_key` when it is present.
    pub fn new(options: &OptionSet, default_key: Option<&str>) -> Result<Self, AppError> {
        if options.is_empty() {
            return Err(AppError::config_error("Cannot select from an empty option list"));
        }
        let selected_index = default_key.and_then(|key| options.position(key)).unwrap_or(0);
        Ok(Self {
            option_keys: options.keys().map(str::to_string).collect(),
            selected_index,
            confirmed: false,
        })
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_key(&self) -> &str {
        &self.option_keys[self.selected_index]
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn move_up(&mut self) {
        let n = self.option_keys.len();
        self.selected_index = (self.selected_index + n - 1) % n;
    }

    pub fn move_down(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.option_keys.len();
    }

    /// Apply one key event.
    pub fn apply(&mut self, action: KeyAction) -> SelectionStep {
        match action {
            KeyAction::Up => self.move_up(),
            KeyAction::Down => self.move_down(),
            KeyAction::Confirm => {
                self.confirmed = true;
                return SelectionStep::Selected(self.selected_key().to_string());
            }
            KeyAction::Cancel | KeyAction::Interrupt => return SelectionStep::Cancelled,
            KeyAction::Ignored => {}
        }
        SelectionStep::Continue
    }

    /// Snapshot of what the terminal should show for the current state.
    pub fn frame(&self, options: &OptionSet, prompt: &str) -> SelectorFrame {
        let rows = options
            .iter()
            .enumerate()
            .map(|(index, (key, display))| SelectorRow {
                key: key.to_string(),
                label: display.display_name().to_string(),
                highlighted: index == self.selected_index,
            })
            .collect();
        SelectorFrame { prompt: prompt.to_string(), rows, hint: SELECTOR_HINT.to_string() }
    }
}

/// One option row of a rendered selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorRow {
    pub key: String,
    pub label: String,
    pub highlighted: bool,
}

impl SelectorRow {
    pub fn pointer(&self) -> &'static str {
        if self.highlighted { "▶" } else { " " }
    }
}

/// Decoration applied to each piece of a selector frame.
///
/// Every method defaults to the undecorated text.
pub trait FrameStyle {
    fn prompt(&self, prompt: &str) -> String {
        prompt.to_string()
    }

    fn pointer(&self, pointer: &str) -> String {
        pointer.to_string()
    }

    fn key(&self, key: &str) -> String {
        key.to_string()
    }

    /// `label` arrives already wrapped in parentheses.
    fn label(&self, label: &str) -> String {
        label.to_string()
    }

    fn hint(&self, hint: &str) -> String {
        hint.to_string()
    }
}

impl FrameStyle for PlainText {}

/// Everything a terminal needs to draw the selector once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorFrame {
    pub prompt: String,
    pub rows: Vec<SelectorRow>,
    pub hint: String,
}

impl SelectorFrame {
    /// Unstyled text lines, pointer glyph on the highlighted row.
    pub fn lines(&self) -> Vec<String> {
        self.lines_with(&PlainText)
    }

    /// Frame lines with each piece decorated through `style`.
    pub fn lines_with<S: FrameStyle + ?Sized>(&self, style: &S) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(style.prompt(&self.prompt));
        lines.push(String::new());
        for row in &self.rows {
            lines.push(format!(
                "{}  {} {}",
                style.pointer(row.pointer()),
                style.key(&row.key),
                style.label(&format!("({})", row.label))
            ));
        }
        lines.push(String::new());
        lines.push(style.hint(&self.hint));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn options(n: usize) -> OptionSet {
        let mut set = OptionSet::new();
        for i in 0..n {
            set.push(format!("opt{}", i), OptionDisplay::Label(format!("Option {}", i))).unwrap();
        }
        set
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut set = options(2);
        let err = set.push("opt0", OptionDisplay::Label("again".into())).unwrap_err();
        assert!(err.to_string().contains("Duplicate option key 'opt0'"));
        assert_eq!(set.keys().count(), 2);
    }

    #[test]
    fn record_display_uses_name() {
        let display = OptionDisplay::Record { name: "GitHub Copilot".into(), path: ".github/prompts".into() };
        assert_eq!(display.display_name(), "GitHub Copilot");
    }

    #[test]
    fn default_key_sets_initial_index() {
        let set = options(3);
        let state = SelectionState::new(&set, Some("opt2")).unwrap();
        assert_eq!(state.selected_index(), 2);
    }

    #[test]
    fn unknown_default_falls_back_to_first() {
        let set = options(3);
        let state = SelectionState::new(&set, Some("missing")).unwrap();
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn empty_options_are_rejected() {
        assert!(SelectionState::new(&OptionSet::new(), None).is_err());
    }

    #[test]
    fn up_from_first_wraps_to_last() {
        let set = options(4);
        let mut state = SelectionState::new(&set, None).unwrap();
        assert_eq!(state.apply(KeyAction::Up), SelectionStep::Continue);
        assert_eq!(state.selected_key(), "opt3");
        assert_eq!(state.apply(KeyAction::Down), SelectionStep::Continue);
        assert_eq!(state.selected_key(), "opt0");
    }

    #[test]
    fn confirm_returns_highlighted_key() {
        let set = options(3);
        let mut state = SelectionState::new(&set, None).unwrap();
        state.apply(KeyAction::Down);
        state.apply(KeyAction::Ignored);
        assert_eq!(state.apply(KeyAction::Confirm), SelectionStep::Selected("opt1".into()));
        assert!(state.is_confirmed());
    }

    #[test]
    fn cancel_and_interrupt_both_cancel() {
        let set = options(2);
        let mut state = SelectionState::new(&set, None).unwrap();
        assert_eq!(state.apply(KeyAction::Cancel), SelectionStep::Cancelled);
        assert_eq!(state.apply(KeyAction::Interrupt), SelectionStep::Cancelled);
        assert!(!state.is_confirmed());
    }

    #[test]
    fn frame_marks_highlighted_row() {
        let set = options(2);
        let mut state = SelectionState::new(&set, None).unwrap();
        state.apply(KeyAction::Down);
        let lines = state.frame(&set, "Pick one").lines();
        assert_eq!(lines[0], "Pick one");
        assert_eq!(lines[2], "   opt0 (Option 0)");
        assert_eq!(lines[3], "▶  opt1 (Option 1)");
        assert_eq!(lines.last().map(String::as_str), Some(SELECTOR_HINT));
        assert_eq!(lines.len(), 6);
    }

    struct Upper;

    impl FrameStyle for Upper {
        fn key(&self, key: &str) -> String {
            key.to_uppercase()
        }
    }

    #[test]
    fn styled_lines_keep_the_plain_layout() {
        let set = options(2);
        let state = SelectionState::new(&set, None).unwrap();
        let frame = state.frame(&set, "Pick one");

        let styled = frame.lines_with(&Upper);
        assert_eq!(styled[2], "▶  OPT0 (Option 0)");
        assert_eq!(styled.len(), frame.lines().len());
    }

    fn action_strategy() -> impl Strategy<Value = KeyAction> {
        prop_oneof![Just(KeyAction::Up), Just(KeyAction::Down), Just(KeyAction::Ignored)]
    }

    proptest! {
        #[test]
        fn navigation_stays_in_bounds_and_wraps(
            n in 1usize..12,
            start in 0usize..12,
            actions in proptest::collection::vec(action_strategy(), 0..64),
        ) {
            let set = options(n);
            let default_key = format!("opt{}", start);
            let mut state = SelectionState::new(&set, Some(&default_key)).unwrap();
            let mut expected = if start < n { start as i64 } else { 0 };

            for action in actions {
                prop_assert_eq!(state.apply(action), SelectionStep::Continue);
                match action {
                    KeyAction::Up => expected -= 1,
                    KeyAction::Down => expected += 1,
                    _ => {}
                }
                prop_assert!(state.selected_index() < n);
                prop_assert_eq!(state.selected_index() as i64, expected.rem_euclid(n as i64));
            }
        }
    }
}
