mod cli;
mod config;
mod formatters;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use config::Config;
use dotenv::dotenv;
use linewatch_core::clients::EspnClient;
use linewatch_core::{run_scan, EspnOddsProvider, FixtureSource, OddsSource, ThresholdPolicy};
use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Lower bound on the dashboard's automatic refetch interval
const MIN_DASHBOARD_REFRESH: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    init_logging(args.dashboard)?;

    let config = Config::from_env()?;
    let policy = build_policy(&args)?;
    let source = build_source(&args, &config);

    info!(
        source = source.source_name(),
        totals_only = args.totals_only,
        "Starting move scanner"
    );

    if args.dashboard {
        let app = tui::DashboardApp::new(policy, args.scan_options().leagues, source.source_name());
        return tui::run_dashboard(source.as_ref(), app, config.cache_ttl.max(MIN_DASHBOARD_REFRESH)).await;
    }

    let report = run_scan(source.as_ref(), &policy, &args.scan_options())
        .await
        .context("Failed to scan odds page")?;

    if args.json {
        println!("{}", formatters::format_json(&report)?);
    } else {
        print!("{}", formatters::format_report(&report));
    }
    Ok(())
}

/// Logs go to stderr so stdout carries only the report. The dashboard owns the
/// terminal, so it logs to `LINEWATCH_LOG_FILE` or not at all.
fn init_logging(dashboard: bool) -> Result<()> {
    if !dashboard {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
        return Ok(());
    }

    if let Ok(path) = std::env::var("LINEWATCH_LOG_FILE") {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {path}"))?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

/// Built-in table, optionally replaced by the thresholds file, then CLI overrides.
fn build_policy(args: &Args) -> Result<ThresholdPolicy> {
    let policy = match &args.thresholds_file {
        Some(path) => ThresholdPolicy::load(path)?,
        None => ThresholdPolicy::new(),
    };
    Ok(policy.with_overrides(args.overrides())?)
}

fn build_source(args: &Args, config: &Config) -> Box<dyn OddsSource> {
    match &args.fixture {
        Some(path) => Box::new(FixtureSource::new(path)),
        None => {
            let client = EspnClient::with_config(config.client_config());
            Box::new(EspnOddsProvider::new(client, config.cache_ttl))
        }
    }
}
