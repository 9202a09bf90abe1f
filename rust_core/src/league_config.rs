//! Per-league detection thresholds.
//!
//! This module provides:
//! - Hand-tuned default thresholds for every supported league
//! - A generic fallback for leagues outside the table
//! - Caller overrides that replace one threshold kind across all leagues
//! - Loading replacement defaults from a JSON file

use crate::error::ConfigError;
use crate::types::League;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Minimum moves that count as a signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Spread line move, in points
    pub spread: f64,
    /// Total line move, in points
    pub total: f64,
    /// Implied-probability move, as a fraction (0.08 = 8pp)
    pub moneyline: f64,
}

impl Thresholds {
    pub const fn new(spread: f64, total: f64, moneyline: f64) -> Self {
        Self {
            spread,
            total,
            moneyline,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check("spread", self.spread)?;
        check("total", self.total)?;
        check("moneyline", self.moneyline)
    }

    /// Thresholds for a totals-only scan: spread and moneyline can never trigger.
    pub fn totals_only(total: f64) -> Self {
        Self::new(TOTALS_ONLY_DISABLED_SPREAD, total, TOTALS_ONLY_DISABLED_MONEYLINE)
    }
}

/// Spread threshold that no real line move reaches
pub const TOTALS_ONLY_DISABLED_SPREAD: f64 = 1e6;

/// Probability threshold above any possible swing
pub const TOTALS_ONLY_DISABLED_MONEYLINE: f64 = 1.0;

/// Fallback for leagues without a tuned entry
pub const GENERIC_THRESHOLDS: Thresholds = Thresholds::new(2.0, 3.0, 0.08);

/// Default threshold table for one league.
#[derive(Debug, Clone)]
pub struct LeagueConfig {
    pub league: League,
    pub thresholds: Thresholds,
}

/// Static defaults for all supported leagues.
///
/// Puck/run-line leagues rarely move the spread itself, so their spread figure
/// only applies once the line leaves its ±1.5 pin; while the line holds the
/// moneyline figure gates price moves.
pub static LEAGUE_CONFIGS: &[LeagueConfig] = &[
    // Football
    LeagueConfig {
        league: League::NFL,
        thresholds: Thresholds::new(1.5, 2.0, 0.06),
    },
    LeagueConfig {
        league: League::NCAAF,
        thresholds: Thresholds::new(2.5, 2.0, 0.08),
    },
    // Basketball
    LeagueConfig {
        league: League::NBA,
        thresholds: Thresholds::new(2.0, 1.5, 0.08),
    },
    LeagueConfig {
        league: League::NCAAM,
        thresholds: Thresholds::new(2.0, 1.5, 0.08),
    },
    // Hockey
    LeagueConfig {
        league: League::NHL,
        thresholds: Thresholds::new(1.0, 0.5, 0.05),
    },
    // Baseball
    LeagueConfig {
        league: League::MLB,
        thresholds: Thresholds::new(1.0, 1.5, 0.05),
    },
];

/// Get the default config for a league.
pub fn get_league_config(league: League) -> Option<&'static LeagueConfig> {
    LEAGUE_CONFIGS.iter().find(|c| c.league == league)
}

/// Per-threshold overrides. Each one that is set replaces that threshold for
/// every league; unset ones keep the league default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdOverrides {
    pub spread: Option<f64>,
    pub total: Option<f64>,
    pub moneyline: Option<f64>,
}

impl ThresholdOverrides {
    pub fn is_empty(&self) -> bool {
        self.spread.is_none() && self.total.is_none() && self.moneyline.is_none()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(v) = self.spread {
            check("spread", v)?;
        }
        if let Some(v) = self.total {
            check("total", v)?;
        }
        if let Some(v) = self.moneyline {
            check("moneyline", v)?;
        }
        Ok(())
    }

    fn apply(&self, base: Thresholds) -> Thresholds {
        Thresholds {
            spread: self.spread.unwrap_or(base.spread),
            total: self.total.unwrap_or(base.total),
            moneyline: self.moneyline.unwrap_or(base.moneyline),
        }
    }
}

/// League -> thresholds mapping passed explicitly to each scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdPolicy {
    defaults: HashMap<League, Thresholds>,
    fallback: Thresholds,
    overrides: ThresholdOverrides,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            defaults: LEAGUE_CONFIGS
                .iter()
                .map(|c| (c.league, c.thresholds))
                .collect(),
            fallback: GENERIC_THRESHOLDS,
            overrides: ThresholdOverrides::default(),
        }
    }
}

/// On-disk shape: `{ "NBA": {...}, "default": {...} }`
#[derive(Debug, Deserialize)]
struct ThresholdsFile {
    #[serde(default)]
    default: Option<Thresholds>,
    #[serde(flatten)]
    leagues: HashMap<String, Thresholds>,
}

impl ThresholdPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(mut self, overrides: ThresholdOverrides) -> Result<Self, ConfigError> {
        overrides.validate()?;
        self.overrides = overrides;
        Ok(self)
    }

    /// Replace one league's defaults.
    pub fn with_league(mut self, league: League, thresholds: Thresholds) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        self.defaults.insert(league, thresholds);
        Ok(self)
    }

    pub fn with_fallback(mut self, thresholds: Thresholds) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        self.fallback = thresholds;
        Ok(self)
    }

    /// Parse a thresholds document, layering its entries over the built-in table.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: ThresholdsFile =
            serde_json::from_str(content).map_err(|e| ConfigError::ThresholdsFile {
                path: "<inline>".to_string(),
                reason: e.to_string(),
            })?;

        let mut policy = Self::default();
        if let Some(fallback) = parsed.default {
            policy = policy.with_fallback(fallback)?;
        }
        for (label, thresholds) in parsed.leagues {
            let league: League = label.parse()?;
            policy = policy.with_league(league, thresholds)?;
        }
        Ok(policy)
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ThresholdsFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&content).map_err(|e| match e {
            ConfigError::ThresholdsFile { reason, .. } => ConfigError::ThresholdsFile {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn overrides(&self) -> ThresholdOverrides {
        self.overrides
    }

    /// Effective thresholds for a league
    pub fn for_league(&self, league: League) -> Thresholds {
        let base = self.defaults.get(&league).copied().unwrap_or(self.fallback);
        self.overrides.apply(base)
    }

    /// Effective thresholds for a display label; unknown labels get the fallback.
    pub fn for_label(&self, label: &str) -> Thresholds {
        match League::from_label(label) {
            Some(league) => self.for_league(league),
            None => self.overrides.apply(self.fallback),
        }
    }
}

fn check(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_league_has_defaults() {
        for league in League::ALL {
            assert!(get_league_config(league).is_some(), "{} missing", league);
        }
        assert_eq!(LEAGUE_CONFIGS.len(), League::ALL.len());
    }

    #[test]
    fn test_totals_defaults_match_sport_volatility() {
        let policy = ThresholdPolicy::new();
        assert_eq!(policy.for_league(League::NHL).total, 0.5);
        assert_eq!(policy.for_league(League::NBA).total, 1.5);
        assert_eq!(policy.for_league(League::NFL).total, 2.0);
    }

    #[test]
    fn test_unknown_label_uses_fallback() {
        let policy = ThresholdPolicy::new();
        assert_eq!(policy.for_label("WNBA"), GENERIC_THRESHOLDS);
        assert_eq!(policy.for_label("nhl"), policy.for_league(League::NHL));
    }

    #[test]
    fn test_overrides_are_independent_per_kind() {
        let policy = ThresholdPolicy::new()
            .with_overrides(ThresholdOverrides {
                total: Some(4.0),
                ..Default::default()
            })
            .unwrap();

        let nba = policy.for_league(League::NBA);
        let nhl = policy.for_league(League::NHL);
        assert_eq!(nba.total, 4.0);
        assert_eq!(nhl.total, 4.0);
        // untouched kinds keep league defaults
        assert_eq!(nba.spread, 2.0);
        assert_eq!(nhl.moneyline, 0.05);
    }

    #[test]
    fn test_override_applies_to_fallback_too() {
        let policy = ThresholdPolicy::new()
            .with_overrides(ThresholdOverrides {
                moneyline: Some(0.1),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(policy.for_label("XFL").moneyline, 0.1);
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        let bad = ThresholdOverrides {
            spread: Some(-1.0),
            ..Default::default()
        };
        assert!(ThresholdPolicy::new().with_overrides(bad).is_err());
        assert!(Thresholds::new(1.0, f64::NAN, 0.1).validate().is_err());
    }

    #[test]
    fn test_from_json_layers_over_defaults() {
        let policy = ThresholdPolicy::from_json_str(
            r#"{
                "nba": { "spread": 3.0, "total": 2.5, "moneyline": 0.1 },
                "default": { "spread": 9.0, "total": 9.0, "moneyline": 0.5 }
            }"#,
        )
        .unwrap();
        assert_eq!(policy.for_league(League::NBA), Thresholds::new(3.0, 2.5, 0.1));
        assert_eq!(policy.for_league(League::NHL).total, 0.5);
        assert_eq!(policy.for_label("CFL"), Thresholds::new(9.0, 9.0, 0.5));
    }

    #[test]
    fn test_from_json_unknown_league() {
        let err = ThresholdPolicy::from_json_str(
            r#"{ "EPL": { "spread": 1.0, "total": 1.0, "moneyline": 0.1 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLeague(_)));
    }

    #[test]
    fn test_totals_only_disables_other_markets() {
        let t = Thresholds::totals_only(1.5);
        assert_eq!(t.total, 1.5);
        assert!(t.spread >= 1e6);
        assert_eq!(t.moneyline, 1.0);
    }
}
