//! Layout and top-level rendering.

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::tui::app::DashboardApp;
use crate::tui::widgets;

/// Render the entire UI
pub fn render(f: &mut Frame, app: &DashboardApp) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Thresholds header
        Constraint::Min(8),    // Report panels
        Constraint::Length(1), // Footer status bar
    ])
    .split(f.area());

    widgets::render_header(f, chunks[0], app);

    if app.totals_view {
        widgets::render_totals(f, chunks[1], app, true);
    } else {
        let body = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);
        widgets::render_leagues(f, body[0], app);
        widgets::render_totals(f, body[1], app, false);
    }

    widgets::render_footer(f, chunks[2], app);
}
