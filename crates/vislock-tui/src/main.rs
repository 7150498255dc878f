//! Vislock - visual lock in the terminal
//!
//! Pick the correct image from the grid, type the matching password, and
//! unlock before the attempt budget runs out.

use std::fs::{self, OpenOptions};
use std::io;
use std::panic;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vislock_tui::app::{App, TuiConfig};
use vislock_tui::cli::Cli;
use vislock_tui::ui::components::notification::Notification;

/// Application entry point with panic handling for terminal restoration
fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = cli.load_settings()?;
    let settings = loaded.config;

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let log_path = cli
        .log
        .clone()
        .or_else(TuiConfig::log_file_path)
        .context("Could not determine a log file location; pass --log")?;
    init_logging(&log_path, &settings.log_filter)?;

    if let Some(fallback) = &loaded.fallback {
        tracing::warn!("{}", fallback);
    }

    tracing::info!(
        max_attempts = settings.lock.max_attempts,
        instant = cli.instant,
        "Starting vislock"
    );

    let mut app = if cli.instant {
        App::instant(settings)
    } else {
        App::new(settings)
    }
    .context("Invalid lock configuration")?;

    if loaded.fallback.is_some() {
        app.state
            .notifications
            .push(Notification::warning("Config file ignored, see log"));
    }

    let result = run_app(app);

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

/// Log to a file so output never lands on the alternate screen
fn init_logging(path: &Path, filter: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create log directory")?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .context("Invalid log filter")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(env_filter)
        .init();

    Ok(())
}

/// Main application runner
fn run_app(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
