//! Dashboard state
//!
//! Holds the last fetched odds state and rescans it whenever a threshold
//! changes, so adjusting thresholds never triggers a network fetch.

use chrono::{DateTime, Local};
use linewatch_core::league_config::{ThresholdOverrides, GENERIC_THRESHOLDS};
use linewatch_core::{scan_state, League, LeagueOrder, ScanOptions, ScanReport, ThresholdPolicy};
use serde_json::Value;

use crate::tui::event::KeyAction;

/// One of the three adjustable thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdKind {
    Spread,
    Total,
    Moneyline,
}

impl ThresholdKind {
    /// Allowed range for dashboard adjustment
    pub fn range(self) -> (f64, f64) {
        match self {
            ThresholdKind::Spread => (0.5, 6.0),
            ThresholdKind::Total => (1.0, 6.0),
            ThresholdKind::Moneyline => (0.01, 0.20),
        }
    }

    pub fn step(self) -> f64 {
        match self {
            ThresholdKind::Spread | ThresholdKind::Total => 0.5,
            ThresholdKind::Moneyline => 0.01,
        }
    }

    /// Starting point when no override is set yet
    fn fallback(self) -> f64 {
        match self {
            ThresholdKind::Spread => GENERIC_THRESHOLDS.spread,
            ThresholdKind::Total => GENERIC_THRESHOLDS.total,
            ThresholdKind::Moneyline => GENERIC_THRESHOLDS.moneyline,
        }
    }
}

/// Main dashboard application state
pub struct DashboardApp {
    base_policy: ThresholdPolicy,
    state: Option<Value>,
    running: bool,

    /// Thresholds replacing the per-league defaults; `None` keeps the default
    pub overrides: ThresholdOverrides,
    pub leagues: Option<Vec<League>>,
    pub source_name: String,

    pub report: Option<ScanReport>,
    pub totals: Option<ScanReport>,
    /// Show only the totals panel
    pub totals_view: bool,
    pub scroll: usize,
    pub status: Option<String>,
    pub last_updated: Option<DateTime<Local>>,
}

impl DashboardApp {
    pub fn new(policy: ThresholdPolicy, leagues: Option<Vec<League>>, source_name: &str) -> Self {
        Self {
            overrides: policy.overrides(),
            base_policy: policy,
            state: None,
            running: true,
            leagues,
            source_name: source_name.to_string(),
            report: None,
            totals: None,
            totals_view: false,
            scroll: 0,
            status: None,
            last_updated: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn has_state(&self) -> bool {
        self.state.is_some()
    }

    /// Store a freshly fetched state and rescan it.
    pub fn set_state(&mut self, state: Value) {
        self.state = Some(state);
        self.last_updated = Some(Local::now());
        self.status = None;
        self.rescore();
    }

    /// Keep showing the previous state; surface the error in the footer.
    pub fn fetch_failed(&mut self, err: &anyhow::Error) {
        self.status = Some(format!("Fetch failed: {err:#}"));
    }

    /// Rescan the cached state with the current thresholds.
    pub fn rescore(&mut self) {
        let Some(state) = &self.state else {
            return;
        };
        let policy = match self.base_policy.clone().with_overrides(self.overrides) {
            Ok(policy) => policy,
            Err(e) => {
                self.status = Some(e.to_string());
                return;
            }
        };
        let options = ScanOptions {
            leagues: self.leagues.clone(),
            order: LeagueOrder::Sorted,
            totals_only: false,
        };
        let totals_options = ScanOptions {
            totals_only: true,
            ..options.clone()
        };
        self.report = Some(scan_state(state, &policy, &options));
        self.totals = Some(scan_state(state, &policy, &totals_options));
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn threshold(&self, kind: ThresholdKind) -> Option<f64> {
        match kind {
            ThresholdKind::Spread => self.overrides.spread,
            ThresholdKind::Total => self.overrides.total,
            ThresholdKind::Moneyline => self.overrides.moneyline,
        }
    }

    /// Move a threshold one step up or down, clamped to its range.
    pub fn adjust(&mut self, kind: ThresholdKind, up: bool) {
        let (min, max) = kind.range();
        let current = self.threshold(kind).unwrap_or_else(|| kind.fallback());
        let step = if up { kind.step() } else { -kind.step() };
        let next = ((current + step).clamp(min, max) * 100.0).round() / 100.0;
        let slot = match kind {
            ThresholdKind::Spread => &mut self.overrides.spread,
            ThresholdKind::Total => &mut self.overrides.total,
            ThresholdKind::Moneyline => &mut self.overrides.moneyline,
        };
        *slot = Some(next);
        self.rescore();
    }

    pub fn toggle_totals_view(&mut self) {
        self.totals_view = !self.totals_view;
        self.scroll = 0;
    }

    /// Report shown in the scrollable main panel
    pub fn focused_report(&self) -> Option<&ScanReport> {
        if self.totals_view {
            self.totals.as_ref()
        } else {
            self.report.as_ref()
        }
    }

    fn max_scroll(&self) -> usize {
        self.focused_report()
            .map(line_count)
            .unwrap_or(0)
            .saturating_sub(1)
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll < self.max_scroll() {
            self.scroll += 1;
        }
    }

    /// Apply a key action. Returns true when the caller should refetch.
    pub fn on_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::Refresh => return true,
            KeyAction::ToggleTotals => self.toggle_totals_view(),
            KeyAction::ScrollUp => self.scroll_up(),
            KeyAction::ScrollDown => self.scroll_down(),
            KeyAction::SpreadDown => self.adjust(ThresholdKind::Spread, false),
            KeyAction::SpreadUp => self.adjust(ThresholdKind::Spread, true),
            KeyAction::TotalDown => self.adjust(ThresholdKind::Total, false),
            KeyAction::TotalUp => self.adjust(ThresholdKind::Total, true),
            KeyAction::MoneylineDown => self.adjust(ThresholdKind::Moneyline, false),
            KeyAction::MoneylineUp => self.adjust(ThresholdKind::Moneyline, true),
            KeyAction::None => {}
        }
        false
    }
}

/// Rendered line count of a report panel: a header per league, a row per
/// game and per pick, and a blank row between leagues.
pub fn line_count(report: &ScanReport) -> usize {
    let rows: usize = report
        .leagues
        .iter()
        .map(|l| 1 + l.games.iter().map(|g| 1 + g.picks.len()).sum::<usize>())
        .sum();
    rows + report.leagues.len().saturating_sub(1)
}
