//! Init command: writes the diff-report script and the review prompt.

pub mod config;

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::services::create_file;
use crate::domain::{AppError, Assistant, SCRIPT_DIR, ScriptFlavor, StepTracker, paths};
use crate::ports::{RepositoryFilesystem, TemplateStore};

pub use config::{AutoSelected, InitConfig, InitOptions};

pub const TRACKER_TITLE: &str = "Initializing Review Kit";
pub const STEP_DIRS: &str = "dirs";
pub const STEP_SCRIPT: &str = "script";
pub const STEP_PROMPT: &str = "prompt";

/// Files produced by a successful init, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub assistant: Assistant,
    pub flavor: ScriptFlavor,
    pub script_path: PathBuf,
    pub prompt_path: PathBuf,
}

impl InitOutcome {
    /// Example invocation of the generated script from the project root.
    pub fn run_command(&self) -> String {
        format!("{}{} feature-branch", self.flavor.run_prefix(), self.script_path.display())
    }
}

/// Create the tracker used for an init run.
pub fn new_tracker() -> StepTracker {
    StepTracker::new(TRACKER_TITLE)
}

/// Register the init steps in display order.
pub fn register_steps(tracker: &mut StepTracker, config: &InitConfig) {
    tracker.add(STEP_DIRS, "Create directory structure");
    tracker.add(STEP_SCRIPT, &format!("Generate {} script", config.flavor));
    tracker.add(STEP_PROMPT, &format!("Generate prompt for {}", config.assistant.key));
}

/// Execute the init command.
///
/// Runs directory setup, script generation, and prompt generation in order.
/// The first failure marks its step as errored and ends the run; files
/// written by earlier steps are left in place.
pub fn execute<F, T>(
    ctx: &AppContext<F, T>,
    config: &InitConfig,
    tracker: &mut StepTracker,
) -> Result<InitOutcome, AppError>
where
    F: RepositoryFilesystem,
    T: TemplateStore,
{
    register_steps(tracker, config);

    let script_path = paths::script_path(config.flavor);
    let prompt_path = paths::prompt_path(&config.assistant);

    tracker.start(STEP_DIRS, "");
    if let Err(err) = create_directories(ctx.filesystem(), &config.assistant) {
        tracker.error(STEP_DIRS, &err.to_string());
        return Err(err);
    }
    tracker.complete(STEP_DIRS, "ready");

    let script = step_template(tracker, STEP_SCRIPT, ctx.templates().script_template(config.flavor))?;
    create_file(
        ctx.filesystem(),
        &script_path,
        script,
        tracker,
        STEP_SCRIPT,
        config.flavor.is_executable(),
    )?;

    let prompt = step_template(tracker, STEP_PROMPT, ctx.templates().prompt_template())?;
    create_file(ctx.filesystem(), &prompt_path, prompt, tracker, STEP_PROMPT, false)?;

    tracing::info!(
        script = %script_path.display(),
        prompt = %prompt_path.display(),
        "review kit initialized"
    );

    Ok(InitOutcome {
        assistant: config.assistant.clone(),
        flavor: config.flavor,
        script_path,
        prompt_path,
    })
}

fn create_directories<F: RepositoryFilesystem>(
    fs: &F,
    assistant: &Assistant,
) -> Result<(), AppError> {
    fs.create_dir_all(Path::new(SCRIPT_DIR))?;
    fs.create_dir_all(Path::new(&assistant.prompt_dir))
}

fn step_template<'a>(
    tracker: &mut StepTracker,
    step_key: &str,
    template: Result<&'a str, AppError>,
) -> Result<&'a str, AppError> {
    template.inspect_err(|err| tracker.error(step_key, &err.to_string()))
}
