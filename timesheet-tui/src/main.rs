mod app;
mod auth;
mod cli;
mod config;
mod goal;
mod logging;
mod runtime;
mod store;
mod time_utils;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use auth::{Authenticator, CredentialsAuthenticator, DevAuthenticator};
use clap::Parser;
use cli::{Cli, Commands};
use config::TimesheetConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::ConfigPath => {
            let path = TimesheetConfig::ensure_exists()?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run => {
            let cfg = TimesheetConfig::load()?;
            let login = cfg.login.clone().context(
                "No [login] section in the config file. Add one (see `timesheet-tui config-path`) or use `timesheet-tui dev`.",
            )?;
            let auth = CredentialsAuthenticator::new(login.username, login.password);
            run(&cfg, &auth).await
        }
        Commands::Dev => {
            let cfg = TimesheetConfig::load()?;
            run(&cfg, &DevAuthenticator).await
        }
    }
}

async fn run(cfg: &TimesheetConfig, auth: &dyn Authenticator) -> Result<()> {
    if let Err(e) = logging::init(cfg) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    tracing::info!(goal_min = cfg.goal.min, goal_max = cfg.goal.max, "starting");

    let mut app = App::new(cfg);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, auth).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "event loop failed");
    }
    tracing::info!(
        entries = app.store.entry_count(),
        "exiting, in-memory entries discarded"
    );
    res
}
