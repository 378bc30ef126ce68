pub mod assistant;
pub mod error;
pub mod line_endings;
pub mod paths;
pub mod script_flavor;
pub mod selection;
pub mod step_tracker;

pub use assistant::{Assistant, DEFAULT_ASSISTANT};
pub use error::AppError;
pub use line_endings::normalize_line_endings;
pub use paths::{PROMPT_FILE_NAME, SCRIPT_DIR};
pub use script_flavor::ScriptFlavor;
pub use selection::{
    FrameStyle, KeyAction, OptionDisplay, OptionSet, SELECTOR_HINT, SelectionState,
    SelectionStep, SelectorFrame, SelectorRow,
};
pub use step_tracker::{PlainText, Step, StepStatus, StepTracker, TrackerObserver, TreeStyle};
