//! Terminal dashboard
//!
//! Live view of flagged lines with adjustable thresholds. Threshold changes
//! rescan the cached odds state; `r` and the refresh interval refetch it.

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;


pub use app::DashboardApp;
pub use event::KeyAction;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::KeyEventKind,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use linewatch_core::OddsSource;
use ratatui::prelude::*;
use tracing::{info, warn};

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits.
pub async fn run_dashboard(
    source: &dyn OddsSource,
    mut app: DashboardApp,
    refresh_every: Duration,
) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, source, &mut app, refresh_every).await;
    restore_terminal()?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    source: &dyn OddsSource,
    app: &mut DashboardApp,
    refresh_every: Duration,
) -> Result<()> {
    terminal.draw(|f| ui::render(f, app))?;
    fetch(source, app, false).await;
    let mut last_fetch = Instant::now();

    while app.is_running() {
        terminal.draw(|f| ui::render(f, app))?;

        if last_fetch.elapsed() >= refresh_every {
            fetch(source, app, false).await;
            last_fetch = Instant::now();
        }

        if !crossterm::event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.on_action(KeyAction::from(key)) {
                fetch(source, app, true).await;
                last_fetch = Instant::now();
            }
        }
    }

    info!("Dashboard closed");
    Ok(())
}

async fn fetch(source: &dyn OddsSource, app: &mut DashboardApp, force: bool) {
    let result = if force {
        source.refresh_state().await
    } else {
        source.fetch_state().await
    };
    match result {
        Ok(state) => app.set_state(state),
        Err(e) => {
            warn!(source = source.source_name(), error = %e, "Odds fetch failed");
            app.fetch_failed(&e);
        }
    }
}
