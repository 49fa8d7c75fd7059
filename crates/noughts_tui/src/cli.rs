//! Command-line interface for the noughts TUI.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts_tui")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file with display settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (logging is off without it)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from(["noughts_tui", "--no-mouse", "--log-file", "game.log"]);
        assert!(cli.no_mouse);
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
        assert_eq!(cli.config, None);
    }
}
