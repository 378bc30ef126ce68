use crossterm::style::{ContentStyle, Stylize};

use crate::adapters::terminal::{Theme, terminal_width};

pub const BANNER: &str = r"
██████╗ ███████╗██╗   ██╗██╗███████╗██╗    ██╗
██╔══██╗██╔════╝██║   ██║██║██╔════╝██║    ██║
██████╔╝█████╗  ██║   ██║██║█████╗  ██║ █╗ ██║
██╔══██╗██╔══╝  ╚██╗ ██╔╝██║██╔══╝  ██║███╗██║
██║  ██║███████╗ ╚████╔╝ ██║███████╗╚███╔███╔╝
╚═╝  ╚═╝╚══════╝  ╚═══╝  ╚═╝╚══════╝ ╚══╝╚══╝
";

pub const TAGLINE: &str = "Automated Code Review Bootstrap Tool (Multi-Agent & Cross-Platform)";

const HINT: &str = "Run 'review-cli init' to get started.";

fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Banner and tagline centered at `width` columns.
fn banner_lines(theme: Theme, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = BANNER
        .trim_matches('\n')
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let style = match i % 4 {
                0 => ContentStyle::new().blue(),
                1 => ContentStyle::new().dark_blue(),
                2 => ContentStyle::new().dark_cyan(),
                _ => ContentStyle::new().cyan(),
            };
            theme.paint(centered(line, width), style)
        })
        .collect();
    lines.push(theme.paint(centered(TAGLINE, width), ContentStyle::new().yellow().italic()));
    lines
}

/// Print the banner and tagline centered on the terminal.
pub fn show(theme: Theme) {
    for line in banner_lines(theme, usize::from(terminal_width())) {
        println!("{}", line);
    }
    println!();
}

/// Print the banner followed by a pointer to `init`.
pub fn show_with_hint(theme: Theme) {
    show(theme);
    println!("{}", theme.paint(centered(HINT, usize::from(terminal_width())), ContentStyle::new().dim()));
    println!();
}
