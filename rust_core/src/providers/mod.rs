//! Odds state sources.
//!
//! Defines the OddsSource trait so a scan can run against the live odds page
//! or against a saved copy of it.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

pub mod cache;
pub mod espn;
pub mod fixture;

pub use cache::TtlCache;
pub use espn::{extract_state, iter_events, EspnOddsProvider};
pub use fixture::FixtureSource;

/// Anything that can hand over the odds page state document
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Fetch the state document, possibly from cache
    async fn fetch_state(&self) -> Result<Value>;

    /// Fetch the state document, bypassing any cache
    async fn refresh_state(&self) -> Result<Value> {
        self.fetch_state().await
    }

    /// Source name for logging and debugging
    fn source_name(&self) -> &str;
}
