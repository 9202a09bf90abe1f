//! Totals-only panel

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

use super::leagues::render_report_panel;
use crate::tui::app::DashboardApp;
use crate::tui::theme::THEME;

/// Render the totals-only scan. Scrolls only when it is the focused view.
pub fn render_totals(f: &mut Frame, area: Rect, app: &DashboardApp, focused: bool) {
    let block = Block::default()
        .title(" TOTALS ONLY ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(if focused {
            THEME.highlight_style()
        } else {
            THEME.border_style()
        });
    let scroll = if focused { app.scroll } else { 0 };
    render_report_panel(f, area, block, app.totals.as_ref(), scroll, app.has_state());
}
