//! CLI Adapter.

mod banner;
mod init;

use clap::{Parser, Subcommand};
use crossterm::style::{ContentStyle, Stylize};
use tracing_subscriber::EnvFilter;

use crate::adapters::terminal::Theme;
use crate::domain::AppError;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "REVIEW_CLI_LOG";

#[derive(Parser)]
#[command(name = "review-cli")]
#[command(version)]
#[command(
    about = "Set up an automated code review kit for AI assistants",
    long_about = None,
    before_help = banner::BANNER
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the diff-report script and review prompt into the current directory
    #[clap(visible_alias = "i")]
    Init {
        /// AI assistant (copilot, claude, gemini, cursor, openai, generic)
        #[arg(long = "ai", value_name = "ASSISTANT")]
        ai: Option<String>,
        /// Script type (sh or ps)
        #[arg(long = "script", value_name = "TYPE")]
        script: Option<String>,
        /// Initialize in the current directory (legacy flag)
        #[arg(long)]
        here: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// How a finished command ends the process.
#[derive(Debug, PartialEq, Eq)]
enum Exit {
    Success,
    Cancelled,
    Failed(String),
}

const CANCELLED_MESSAGE: &str = "Selection cancelled.";

impl Exit {
    fn from_result(result: Result<(), AppError>) -> Self {
        match result {
            Ok(()) => Exit::Success,
            Err(AppError::SelectionCancelled) => Exit::Cancelled,
            Err(e) => Exit::Failed(format!("Error: {}", e)),
        }
    }

    fn code(&self) -> i32 {
        match self {
            Exit::Success => 0,
            Exit::Cancelled | Exit::Failed(_) => 1,
        }
    }

    /// Print the closing message: cancellation on stdout, failures on stderr.
    fn report(&self, theme: Theme) {
        match self {
            Exit::Success => {}
            Exit::Cancelled => {
                println!("\n{}", theme.paint(CANCELLED_MESSAGE, ContentStyle::new().yellow()));
            }
            Exit::Failed(message) => eprintln!("{}", message),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();
    let theme = Theme::detect();

    let result = match cli.command {
        None => {
            banner::show_with_hint(theme);
            Ok(())
        }
        Some(Commands::Init { ai, script, here }) => init::run_init(ai, script, here, theme),
    };

    let exit = Exit::from_result(result);
    exit.report(theme);
    if exit.code() != 0 {
        std::process::exit(exit.code());
    }
}
