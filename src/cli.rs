use clap::Parser;
use std::path::PathBuf;

use crate::ui::theme::Theme;

/// Sticky notes board and grocery checklist in the terminal.
#[derive(Debug, Parser)]
#[command(name = "noteboard", version, about)]
pub struct Cli {
    /// Config file with seed data (default: ~/.config/noteboard/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Name shown in the grocery list title
    #[arg(long, value_name = "NAME")]
    pub owner: Option<String>,

    /// Initial theme
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Print the initial board state as JSON and exit
    #[arg(long)]
    pub dump: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "noteboard",
            "--config",
            "/tmp/board.toml",
            "--owner",
            "John",
            "--theme",
            "dark",
            "--dump",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/board.toml")));
        assert_eq!(cli.owner.as_deref(), Some("John"));
        assert_eq!(cli.theme, Some(Theme::Dark));
        assert!(cli.dump);
    }

    #[test]
    fn flags_are_optional() {
        let cli = Cli::parse_from(["noteboard"]);
        assert!(cli.config.is_none());
        assert!(cli.owner.is_none());
        assert!(cli.theme.is_none());
        assert!(!cli.dump);
    }
}
