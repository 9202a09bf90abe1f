//! Directional picks emitted by the market-move detector.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketKind {
    Spread,
    Total,
    Moneyline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickSide {
    Home,
    Away,
    Over,
    Under,
}

/// What kind of movement produced the pick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveBasis {
    /// The line (points) moved
    LineMove,
    /// The line held and the price moved
    PriceMove,
    /// A sign flip of the spread backed by a same-direction moneyline move
    CorroboratedFlip,
}

/// A follow-the-move recommendation with the numbers behind it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub market: MarketKind,
    pub side: PickSide,
    /// Team name, or "Over"/"Under" for totals
    pub selection: String,
    /// Current line on the picked side (spread or total)
    pub line: Option<f64>,
    /// Opening line the move is measured from
    pub open_line: Option<f64>,
    /// Current American odds on the picked side, as quoted
    pub odds: Option<String>,
    pub basis: MoveBasis,
    /// Points for line moves, probability for price and moneyline moves
    pub delta: f64,
    /// Implied-probability swing in percentage points, when a price drove the pick
    pub probability_swing: Option<f64>,
}

impl Pick {
    pub fn is_total(&self) -> bool {
        self.market == MarketKind::Total
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let odds = self.odds.as_deref().unwrap_or("n/a");
        match (self.market, self.basis) {
            (MarketKind::Spread, MoveBasis::LineMove) => write!(
                f,
                "{} {:+.1} (spread moved {:.1} pts from {:+.1})",
                self.selection,
                self.line.unwrap_or_default(),
                self.delta.abs(),
                self.open_line.unwrap_or_default(),
            ),
            (MarketKind::Spread, MoveBasis::CorroboratedFlip) => write!(
                f,
                "{} {:+.1} (spread flipped from {:+.1}, confirmed by moneyline)",
                self.selection,
                self.line.unwrap_or_default(),
                self.open_line.unwrap_or_default(),
            ),
            (MarketKind::Spread, MoveBasis::PriceMove) => write!(
                f,
                "{} {:+.1} @ {} (price firmed +{:.1}pp at unchanged line)",
                self.selection,
                self.line.unwrap_or_default(),
                odds,
                self.probability_swing.unwrap_or_default(),
            ),
            (MarketKind::Total, _) => {
                let direction = if self.delta >= 0.0 { "up" } else { "down" };
                write!(
                    f,
                    "{} {:.1} (total {} {:.1} from {:.1})",
                    self.selection,
                    self.line.unwrap_or_default(),
                    direction,
                    self.delta.abs(),
                    self.open_line.unwrap_or_default(),
                )
            }
            (MarketKind::Moneyline, _) => write!(
                f,
                "{} ML {} (implied probability +{:.1}pp)",
                self.selection,
                odds,
                self.probability_swing.unwrap_or_default(),
            ),
        }
    }
}
