use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "timesheet-tui")]
#[command(about = "Terminal UI for logging work hours against categories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in with the credentials from the config file (default)
    Run,
    /// Accept any non-blank username
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["timesheet-tui"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["timesheet-tui", "dev"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Dev)));
        let cli = Cli::try_parse_from(["timesheet-tui", "config-path"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::ConfigPath)));
    }
}
