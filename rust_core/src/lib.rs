//! Linewatch Core - sportsbook line-movement detection.
//!
//! This crate provides:
//! - Extraction of the ESPN odds page state into typed game lines
//! - Spread, total and moneyline move detection with league-aware rules
//! - Per-league threshold policy with file and CLI overrides
//! - Cached, circuit-broken odds page fetching
//! - Scan reports grouped by league

mod types;

pub mod circuit_breaker;
pub mod clients;
pub mod error;
pub mod league_config;
pub mod models;
pub mod probability;
pub mod providers;
pub mod report;
pub mod signals;

pub use error::{ConfigError, ExtractError};
pub use league_config::{ThresholdOverrides, ThresholdPolicy, Thresholds};
pub use models::GameLine;
pub use providers::{EspnOddsProvider, FixtureSource, OddsSource};
pub use report::{run_scan, scan, scan_state, LeagueOrder, ScanOptions, ScanReport};
pub use signals::{detect, MarketKind, MoveBasis, Pick, PickSide};
pub use types::*;
