//! Scan orchestration and report assembly.
//!
//! A scan runs the detector over every extracted game line with the policy's
//! thresholds for that line's league, then groups flagged lines by league.
//! Leagues with no flagged lines are left out entirely.

use crate::league_config::{ThresholdPolicy, Thresholds};
use crate::models::GameLine;
use crate::providers::{iter_events, OddsSource};
use crate::signals::{detect, Pick};
use crate::types::League;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// How leagues are ordered in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeagueOrder {
    /// Order the page listed them in
    #[default]
    FirstSeen,
    /// Alphabetical by label
    Sorted,
}

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Restrict to these leagues; `None` scans the whole allow-list
    pub leagues: Option<Vec<League>>,
    pub order: LeagueOrder,
    /// Only evaluate totals, with per-league total thresholds
    pub totals_only: bool,
}

impl ScanOptions {
    fn allows(&self, league: League) -> bool {
        self.leagues
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&league))
    }
}

/// A flagged game line and the picks it produced
#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    pub matchup: String,
    pub start_time: Option<DateTime<Utc>>,
    pub picks: Vec<Pick>,
    pub game: GameLine,
}

impl GameReport {
    pub fn new(game: GameLine, picks: Vec<Pick>) -> Self {
        Self {
            matchup: game.matchup(),
            start_time: game.start_time(),
            picks,
            game,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeagueReport {
    pub league: League,
    pub games: Vec<GameReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub leagues: Vec<LeagueReport>,
    pub games_scanned: usize,
    pub games_flagged: usize,
    pub picks_emitted: usize,
    pub totals_only: bool,
    pub generated_at: DateTime<Utc>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }
}

/// Group detector output by league.
///
/// Within a league, encounter order is kept. Entries with no picks are dropped,
/// and so is any league left with nothing.
pub fn group_by_league<I>(results: I, order: LeagueOrder) -> Vec<LeagueReport>
where
    I: IntoIterator<Item = (League, GameLine, Vec<Pick>)>,
{
    let mut grouped: Vec<LeagueReport> = Vec::new();
    for (league, game, picks) in results {
        if picks.is_empty() {
            continue;
        }
        let report = GameReport::new(game, picks);
        match grouped.iter_mut().find(|g| g.league == league) {
            Some(group) => group.games.push(report),
            None => grouped.push(LeagueReport {
                league,
                games: vec![report],
            }),
        }
    }
    if order == LeagueOrder::Sorted {
        grouped.sort_by(|a, b| a.league.label().cmp(b.league.label()));
    }
    grouped
}

/// Run the detector over extracted events.
pub fn scan(events: Vec<(League, GameLine)>, policy: &ThresholdPolicy, options: &ScanOptions) -> ScanReport {
    let mut games_scanned = 0;
    let mut results = Vec::new();

    for (league, game) in events {
        if !options.allows(league) {
            continue;
        }
        games_scanned += 1;

        let picks = if options.totals_only {
            let thresholds = Thresholds::totals_only(policy.for_league(league).total);
            let mut picks = detect(league, &game, &thresholds);
            picks.retain(Pick::is_total);
            picks
        } else {
            detect(league, &game, &policy.for_league(league))
        };
        results.push((league, game, picks));
    }

    let leagues = group_by_league(results, options.order);
    let games_flagged = leagues.iter().map(|l| l.games.len()).sum();
    let picks_emitted = leagues
        .iter()
        .flat_map(|l| &l.games)
        .map(|g| g.picks.len())
        .sum();

    info!(
        games_scanned,
        games_flagged,
        picks_emitted,
        totals_only = options.totals_only,
        "Market move scan complete"
    );

    ScanReport {
        leagues,
        games_scanned,
        games_flagged,
        picks_emitted,
        totals_only: options.totals_only,
        generated_at: Utc::now(),
    }
}

/// Extract and scan a state document.
pub fn scan_state(state: &Value, policy: &ThresholdPolicy, options: &ScanOptions) -> ScanReport {
    scan(iter_events(state), policy, options)
}

/// Fetch from a source, then scan. Fetch and extraction failures are the only errors.
pub async fn run_scan(
    source: &dyn OddsSource,
    policy: &ThresholdPolicy,
    options: &ScanOptions,
) -> Result<ScanReport> {
    let state = source.fetch_state().await?;
    Ok(scan_state(&state, policy, options))
}
