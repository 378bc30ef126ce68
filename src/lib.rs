//! review-cli: scaffold a diff-report script and a code review prompt for AI assistants.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::api::{
    AppError, Assistant, AutoSelected, InitConfig, InitOptions, InitOutcome, ScriptFlavor,
    StepTracker, assistants, init, init_at, resolve_init_config,
};
pub use app::services::Selector;
pub use domain::{OptionDisplay, OptionSet, StepStatus, TrackerObserver};
