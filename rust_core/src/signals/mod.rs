//! Market-move detector.
//!
//! Compares each market's opening quote with its current quote and emits a
//! follow pick when the move clears the threshold. The detector is a pure
//! function of league, game line, and thresholds: missing or unreadable odds
//! drop that market's check and never produce an error.
//!
//! Evaluation order is moneyline, spread, total. The moneyline goes first
//! because its home delta corroborates ambiguous spread flips; picks are still
//! emitted as spread, total, moneyline.

pub mod pick;
pub mod spread;

pub use pick::{MarketKind, MoveBasis, Pick, PickSide};
pub use spread::{SpreadLines, SpreadMove, SpreadSide, SpreadThresholds};

use crate::league_config::Thresholds;
use crate::models::{side_line, side_odds, GameLine, OddsSnapshot, Phase, SidedMarket, TotalMarket};
use crate::probability::{american_odds_to_implied_probability, parse_point_value};
use crate::types::League;
use spread::meets;

/// Detect market moves for one game line.
///
/// Returns an empty list unless the line has exactly one home and one away
/// competitor and a primary odds entry.
pub fn detect(league: League, line: &GameLine, thresholds: &Thresholds) -> Vec<Pick> {
    let mut picks = Vec::new();

    let (Some(_), Some(_)) = (line.home(), line.away()) else {
        return picks;
    };
    let Some(odds) = line.primary_odds() else {
        return picks;
    };
    let teams = Teams {
        home: line.home_team(),
        away: line.away_team(),
    };

    let moneyline = odds.moneyline.as_ref().and_then(MoneylineMove::read);
    let home_moneyline_delta = moneyline.as_ref().map(|m| m.home_delta);

    if let Some(pick) = spread_pick(league, odds, thresholds, home_moneyline_delta, &teams) {
        picks.push(pick);
    }
    if let Some(pick) = odds.total.as_ref().and_then(|t| total_pick(t, thresholds.total)) {
        picks.push(pick);
    }
    if let Some(pick) = moneyline.and_then(|m| m.pick(thresholds.moneyline, &teams)) {
        picks.push(pick);
    }

    picks
}

struct Teams<'a> {
    home: &'a str,
    away: &'a str,
}

/// Home moneyline implied-probability move, plus the quotes needed to report it.
struct MoneylineMove<'a> {
    home_delta: f64,
    home_close_odds: Option<&'a str>,
    away_close_odds: Option<&'a str>,
}

impl<'a> MoneylineMove<'a> {
    /// Requires readable open and close prices on both sides.
    fn read(market: &'a SidedMarket) -> Option<Self> {
        let home = market.home.as_ref();
        let away = market.away.as_ref();
        let home_open = american_odds_to_implied_probability(side_odds(home, Phase::Open))?;
        let home_close = american_odds_to_implied_probability(side_odds(home, Phase::Close))?;
        american_odds_to_implied_probability(side_odds(away, Phase::Open))?;
        american_odds_to_implied_probability(side_odds(away, Phase::Close))?;
        Some(Self {
            home_delta: home_close - home_open,
            home_close_odds: side_odds(home, Phase::Close),
            away_close_odds: side_odds(away, Phase::Close),
        })
    }

    fn pick(self, threshold: f64, teams: &Teams<'_>) -> Option<Pick> {
        if !meets(self.home_delta, threshold) {
            return None;
        }
        let (side, selection, odds) = if self.home_delta > 0.0 {
            (PickSide::Home, teams.home, self.home_close_odds)
        } else {
            (PickSide::Away, teams.away, self.away_close_odds)
        };
        Some(Pick {
            market: MarketKind::Moneyline,
            side,
            selection: selection.to_string(),
            line: None,
            open_line: None,
            odds: odds.map(str::to_string),
            basis: MoveBasis::PriceMove,
            delta: self.home_delta,
            probability_swing: Some(self.home_delta.abs() * 100.0),
        })
    }
}

fn spread_pick(
    league: League,
    odds: &OddsSnapshot,
    thresholds: &Thresholds,
    home_moneyline_delta: Option<f64>,
    teams: &Teams<'_>,
) -> Option<Pick> {
    let market = odds.point_spread.as_ref()?;
    let home = market.home.as_ref();
    let away = market.away.as_ref();

    let lines = SpreadLines {
        home_open: parse_point_value(side_line(home, Phase::Open))?,
        home_close: parse_point_value(side_line(home, Phase::Close))?,
        away_open: parse_point_value(side_line(away, Phase::Open))?,
        away_close: parse_point_value(side_line(away, Phase::Close))?,
        home_open_prob: american_odds_to_implied_probability(side_odds(home, Phase::Open)),
        home_close_prob: american_odds_to_implied_probability(side_odds(home, Phase::Close)),
    };
    let spread_thresholds = SpreadThresholds {
        points: thresholds.spread,
        probability: thresholds.moneyline,
    };

    let mv = spread::evaluate(
        league.line_strategy(),
        &lines,
        &spread_thresholds,
        home_moneyline_delta,
    )?;

    let (side, selection, line, open_line, quote) = match mv.side() {
        SpreadSide::Home => (PickSide::Home, teams.home, lines.home_close, lines.home_open, home),
        SpreadSide::Away => (PickSide::Away, teams.away, lines.away_close, lines.away_open, away),
    };
    let (basis, delta, probability_swing) = match mv {
        SpreadMove::Line { delta } => (MoveBasis::LineMove, delta, None),
        SpreadMove::Flip { delta } => (MoveBasis::CorroboratedFlip, delta, None),
        SpreadMove::Price { delta } => (MoveBasis::PriceMove, delta, Some(delta.abs() * 100.0)),
    };

    Some(Pick {
        market: MarketKind::Spread,
        side,
        selection: selection.to_string(),
        line: Some(line),
        open_line: Some(open_line),
        odds: side_odds(quote, Phase::Close).map(str::to_string),
        basis,
        delta,
        probability_swing,
    })
}

/// Totals read the over side only; the under line mirrors it.
fn total_pick(market: &TotalMarket, threshold: f64) -> Option<Pick> {
    let over = market.over.as_ref();
    let open = parse_point_value(side_line(over, Phase::Open))?;
    let close = parse_point_value(side_line(over, Phase::Close))?;
    let delta = close - open;
    if !meets(delta, threshold) {
        return None;
    }

    let (side, selection, quote) = if delta >= 0.0 {
        (PickSide::Over, "Over", over)
    } else {
        (PickSide::Under, "Under", market.under.as_ref())
    };
    Some(Pick {
        market: MarketKind::Total,
        side,
        selection: selection.to_string(),
        line: Some(close),
        open_line: Some(open),
        odds: side_odds(quote, Phase::Close).map(str::to_string),
        basis: MoveBasis::LineMove,
        delta,
        probability_swing: None,
    })
}
