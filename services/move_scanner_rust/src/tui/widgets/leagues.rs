//! Per-league flagged games panel
//!
//! One block per league (sorted), each game followed by its picks.

use linewatch_core::ScanReport;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::formatters::EMPTY_REPORT;
use crate::tui::app::DashboardApp;
use crate::tui::theme::THEME;

/// Render the main report panel
pub fn render_leagues(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .title(" MARKET MOVES ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());
    render_report_panel(f, area, block, app.report.as_ref(), app.scroll, app.has_state());
}

/// Shared body for the report panels. `scroll` is the first visible line.
pub(crate) fn render_report_panel(
    f: &mut Frame,
    area: Rect,
    block: Block<'_>,
    report: Option<&ScanReport>,
    scroll: usize,
    loaded: bool,
) {
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(report) = report else {
        let text = if loaded { EMPTY_REPORT } else { "Loading odds..." };
        f.render_widget(Paragraph::new(text).style(THEME.inactive_style()), inner);
        return;
    };
    if report.is_empty() {
        f.render_widget(Paragraph::new(EMPTY_REPORT).style(THEME.inactive_style()), inner);
        return;
    }

    let lines = report_lines(report);
    let total = lines.len();
    let visible: Vec<Line> = lines.into_iter().skip(scroll).collect();
    f.render_widget(Paragraph::new(visible), inner);

    if total > inner.height as usize {
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(""))
            .end_symbol(Some(""));
        let mut state = ScrollbarState::default()
            .content_length(total)
            .position(scroll);
        f.render_stateful_widget(scrollbar, area, &mut state);
    }
}

/// Lines for a report: league header, game rows, indented pick rows.
pub fn report_lines(report: &ScanReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, league) in report.leagues.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::styled(format!("{}", league.league), THEME.league_style()));
        for game in &league.games {
            lines.push(Line::from(vec![
                Span::styled(game.matchup.clone(), THEME.text_style()),
                Span::raw("  "),
                Span::styled(game.game.start_text(), THEME.inactive_style()),
            ]));
            for pick in &game.picks {
                lines.push(Line::from(vec![
                    Span::raw("  • "),
                    Span::styled(pick.to_string(), THEME.market_style(pick.market)),
                ]));
            }
        }
    }
    lines
}
