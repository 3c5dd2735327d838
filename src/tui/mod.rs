//! Terminal user interface.
//!
//! A synchronous draw/poll loop over a single screen. Tracing output
//! goes to the configured log file so it cannot corrupt the alternate
//! screen.

mod app;
mod input;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::{error, info};

use crate::config::Config;
use app::{App, Transition};

/// Runs the interactive game until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, App::new(config));

    // Restore the terminal before surfacing any error.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = ?err, "Event loop failed");
    }
    result
}

fn run_event_loop<B>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Crossterm reports both press and release on some terminals.
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == Transition::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
