//! Footer status bar widget
//!
//! Scan counters or the last fetch error, then key help.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::DashboardApp;
use crate::tui::theme::THEME;

const KEY_HELP: &str = "q quit  r refresh  t totals  ↑↓ scroll  [ ] spread  - = total  , . ml";

pub fn render_footer(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let mut spans = Vec::new();

    if let Some(status) = &app.status {
        spans.push(Span::styled(format!(" {status} "), THEME.error_style()));
    } else if let Some(report) = &app.report {
        spans.push(Span::raw(" Games: "));
        spans.push(Span::styled(report.games_scanned.to_string(), THEME.highlight_style()));
        spans.push(Span::raw("  Flagged: "));
        spans.push(Span::styled(report.games_flagged.to_string(), THEME.highlight_style()));
        spans.push(Span::raw("  Picks: "));
        spans.push(Span::styled(report.picks_emitted.to_string(), THEME.highlight_style()));
        if let Some(totals) = &app.totals {
            spans.push(Span::raw("  Totals: "));
            spans.push(Span::styled(totals.picks_emitted.to_string(), THEME.highlight_style()));
        }
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(format!(" {KEY_HELP}"), THEME.inactive_style()));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
