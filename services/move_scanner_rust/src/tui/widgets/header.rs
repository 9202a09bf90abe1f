//! Threshold header
//!
//! Shows the active thresholds (or "per-league" when no override is set),
//! the odds source and when it was last fetched.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{DashboardApp, ThresholdKind};
use crate::tui::theme::THEME;

pub fn render_header(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .title(" LINEWATCH ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());

    let updated = app
        .last_updated
        .map(|t| t.format("%I:%M:%S %p").to_string())
        .unwrap_or_else(|| "never".to_string());

    let line = Line::from(vec![
        Span::raw(" Spread "),
        Span::styled(threshold_text(app, ThresholdKind::Spread), THEME.highlight_style()),
        Span::raw("   Total "),
        Span::styled(threshold_text(app, ThresholdKind::Total), THEME.highlight_style()),
        Span::raw("   ML "),
        Span::styled(threshold_text(app, ThresholdKind::Moneyline), THEME.highlight_style()),
        Span::styled(
            format!("   [{}] updated {updated}", app.source_name),
            THEME.inactive_style(),
        ),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

pub fn threshold_text(app: &DashboardApp, kind: ThresholdKind) -> String {
    match (app.threshold(kind), kind) {
        (None, _) => "per-league".to_string(),
        (Some(v), ThresholdKind::Moneyline) => format!("≥ {:.0}pp", v * 100.0),
        (Some(v), _) => format!("≥ {v:.1} pts"),
    }
}
