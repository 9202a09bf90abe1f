use clap::Parser;
use linewatch_core::league_config::ThresholdOverrides;
use linewatch_core::{League, LeagueOrder, ScanOptions};
use std::path::PathBuf;

/// Flags sportsbook lines whose price or number moved enough since open to follow.
#[derive(Parser, Debug)]
#[command(name = "move_scanner")]
#[command(author = "Linewatch Team")]
#[command(version = "0.1.0")]
#[command(
    about = "Scan sportsbook open/close lines for market moves worth following",
    long_about = None
)]
pub struct Args {
    /// Minimum spread move in points (default: per-league)
    #[arg(long, value_parser = parse_threshold)]
    pub spread_threshold: Option<f64>,

    /// Minimum total move in points (default: per-league)
    #[arg(long, value_parser = parse_threshold)]
    pub total_threshold: Option<f64>,

    /// Minimum moneyline implied-probability move, e.g. 0.08 for 8pp (default: per-league)
    #[arg(long, value_parser = parse_threshold)]
    pub moneyline_threshold: Option<f64>,

    /// Only scan these leagues (repeatable)
    #[arg(long = "league", value_parser = parse_league)]
    pub leagues: Vec<League>,

    /// Read a saved odds page or state JSON instead of fetching
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Only report total moves, using per-league total thresholds
    #[arg(long)]
    pub totals_only: bool,

    /// Print the report as JSON
    #[arg(long, conflicts_with = "dashboard")]
    pub json: bool,

    /// Open the interactive terminal dashboard
    #[arg(long)]
    pub dashboard: bool,

    /// JSON file replacing the built-in per-league thresholds
    #[arg(long, env = "LINEWATCH_THRESHOLDS_FILE")]
    pub thresholds_file: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> ThresholdOverrides {
        ThresholdOverrides {
            spread: self.spread_threshold,
            total: self.total_threshold,
            moneyline: self.moneyline_threshold,
        }
    }

    /// CLI reports keep page order; the dashboard sorts leagues.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            leagues: (!self.leagues.is_empty()).then(|| self.leagues.clone()),
            order: if self.dashboard {
                LeagueOrder::Sorted
            } else {
                LeagueOrder::FirstSeen
            },
            totals_only: self.totals_only,
        }
    }
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("threshold must be finite and non-negative, got {s}"))
    }
}

fn parse_league(s: &str) -> Result<League, String> {
    s.parse::<League>().map_err(|e| e.to_string())
}
