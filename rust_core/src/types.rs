//! League identifiers and the line conventions each one follows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Leagues the odds page is scanned for. Anything else is dropped at extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum League {
    NBA,
    NHL,
    MLB,
    NFL,
    NCAAF,
    /// Men's college basketball
    NCAAM,
}

/// How a league's point spread absorbs market movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStrategy {
    /// The line itself moves; price moves only matter when the line is pinned.
    Standard,
    /// Puck line / run line: the spread sits at ±1.5 and the price moves instead.
    FixedLine,
}

impl League {
    pub const ALL: [League; 6] = [
        League::NBA,
        League::NHL,
        League::MLB,
        League::NFL,
        League::NCAAF,
        League::NCAAM,
    ];

    /// Display label used by the odds page (and by the CLI)
    pub fn label(&self) -> &'static str {
        match self {
            League::NBA => "NBA",
            League::NHL => "NHL",
            League::MLB => "MLB",
            League::NFL => "NFL",
            League::NCAAF => "NCAAF",
            League::NCAAM => "NCAAM",
        }
    }

    pub fn line_strategy(&self) -> LineStrategy {
        match self {
            League::NHL | League::MLB => LineStrategy::FixedLine,
            League::NBA | League::NFL | League::NCAAF | League::NCAAM => LineStrategy::Standard,
        }
    }

    /// Parse a page display label. Returns None for leagues outside the allow-list.
    pub fn from_label(label: &str) -> Option<Self> {
        League::ALL
            .iter()
            .copied()
            .find(|l| l.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for League {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        League::from_label(s).ok_or_else(|| crate::error::ConfigError::UnknownLeague(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(League::from_label("nba"), Some(League::NBA));
        assert_eq!(League::from_label(" NCAAM "), Some(League::NCAAM));
        assert_eq!(League::from_label("EPL"), None);
    }

    #[test]
    fn test_fixed_line_leagues() {
        assert_eq!(League::NHL.line_strategy(), LineStrategy::FixedLine);
        assert_eq!(League::MLB.line_strategy(), LineStrategy::FixedLine);
        assert_eq!(League::NFL.line_strategy(), LineStrategy::Standard);
    }

    #[test]
    fn test_serde_uppercase() {
        let json = serde_json::to_string(&League::NCAAF).unwrap();
        assert_eq!(json, "\"NCAAF\"");
        let back: League = serde_json::from_str("\"NHL\"").unwrap();
        assert_eq!(back, League::NHL);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("WNBA".parse::<League>().is_err());
        assert_eq!("mlb".parse::<League>().unwrap(), League::MLB);
    }
}
