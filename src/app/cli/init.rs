//! Init command implementation.

use crossterm::style::{ContentStyle, Stylize};

use crate::adapters::terminal::{
    CrosstermSelectorTerminal, LiveTrackerDisplay, Theme, stdin_is_interactive,
    stdout_is_terminal,
};
use crate::app::api::{self, InitOptions, InitOutcome};
use crate::app::commands::init::new_tracker;
use crate::app::services::Selector;
use crate::domain::AppError;

pub fn run_init(
    ai: Option<String>,
    script: Option<String>,
    here: bool,
    theme: Theme,
) -> Result<(), AppError> {
    super::banner::show(theme);

    if here {
        tracing::debug!("--here is accepted for compatibility; the current directory is always used");
    }

    let options = InitOptions { assistant: ai, script };
    let mut selector = Selector::new(CrosstermSelectorTerminal::new(theme));
    let config = api::resolve_init_config(&options, stdin_is_interactive(), &mut selector)?;

    for auto in &config.auto_selected {
        let note = format!("Non-interactive environment, using '{}' as default.", auto.value());
        println!("{}", theme.paint(note, ContentStyle::new().dim()));
    }
    let label = ContentStyle::new().cyan();
    println!("{} {}", theme.paint("Target:", label), config.assistant.name);
    println!("{} {}\n", theme.paint("Script:", label), config.flavor);

    let mut tracker = new_tracker();
    let live = stdout_is_terminal();
    if live {
        tracker.attach_refresh(LiveTrackerDisplay::new(theme));
    }

    let result = api::init(&config, &mut tracker);
    if !live {
        print!("{}", tracker.render_with(&theme));
    }
    let outcome = result?;

    print_summary(&outcome, theme);
    Ok(())
}

fn print_summary(outcome: &InitOutcome, theme: Theme) {
    let heading = ContentStyle::new().green().bold();
    let path = ContentStyle::new().cyan();
    println!("\n{}", theme.paint("✨ Environment ready!", heading));
    println!();
    println!("{}", theme.paint("Next steps", heading));
    println!("  Script: {}", theme.paint(outcome.script_path.display(), path));
    println!("  Prompt: {}", theme.paint(outcome.prompt_path.display(), path));
    println!();
    println!("  {}", theme.paint("To run (example):", ContentStyle::new().dim()));
    println!("  {}", theme.paint(outcome.run_command(), path));
}
