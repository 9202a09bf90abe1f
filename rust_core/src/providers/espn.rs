//! ESPN odds page extraction.
//!
//! The odds page embeds its full render state as a JS assignment
//! (`window['__espnfitt__']={...};`). Extraction pulls that blob out and walks
//! `page.content.odds.odds[]`, one group per league.

use super::{OddsSource, TtlCache};
use crate::clients::espn::EspnClient;
use crate::error::ExtractError;
use crate::models::GameLine;
use crate::types::League;
use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, info};

/// Default lifetime of a fetched state document
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Live odds page source: fetches through the ESPN client and caches the
/// parsed state for the configured TTL.
pub struct EspnOddsProvider {
    client: EspnClient,
    cache: TtlCache<Value>,
}

impl EspnOddsProvider {
    pub fn new(client: EspnClient, cache_ttl: Duration) -> Self {
        Self {
            client,
            cache: TtlCache::new(cache_ttl),
        }
    }

    pub fn client(&self) -> &EspnClient {
        &self.client
    }

    async fn fetch_uncached(&self) -> Result<Value> {
        let html = self.client.fetch_odds_page().await?;
        let state = extract_state(&html).context("failed to extract odds state")?;
        self.cache.put(state.clone());
        info!(url = self.client.page_url(), "Odds state refreshed");
        Ok(state)
    }
}

#[async_trait]
impl OddsSource for EspnOddsProvider {
    async fn fetch_state(&self) -> Result<Value> {
        if let Some(state) = self.cache.get() {
            debug!(ttl_secs = self.cache.ttl().as_secs(), "Odds state cache hit");
            return Ok(state);
        }
        self.fetch_uncached().await
    }

    async fn refresh_state(&self) -> Result<Value> {
        self.cache.invalidate();
        self.fetch_uncached().await
    }

    fn source_name(&self) -> &str {
        "espn"
    }
}

fn state_blob_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)window\['__espnfitt__'\]=(\{.*?\});")
            .expect("state blob pattern is a valid regex")
    })
}

/// Pull the embedded state document out of the odds page HTML.
pub fn extract_state(html: &str) -> Result<Value, ExtractError> {
    let captures = state_blob_pattern()
        .captures(html)
        .ok_or(ExtractError::StateBlobMissing {
            page_bytes: html.len(),
        })?;
    let blob = captures
        .get(1)
        .map(|m| m.as_str())
        .ok_or(ExtractError::StateBlobMissing {
            page_bytes: html.len(),
        })?;
    Ok(serde_json::from_str(blob)?)
}

/// Flatten the state into (league, game line) pairs for allow-listed leagues.
///
/// Source order is kept. Groups outside the allow-list and records that do not
/// have the game-line shape are skipped.
pub fn iter_events(state: &Value) -> Vec<(League, GameLine)> {
    let groups = state
        .pointer("/page/content/odds/odds")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut events = Vec::new();
    for group in groups {
        let label = group["displayValue"].as_str().unwrap_or_default();
        let Some(league) = League::from_label(label) else {
            debug!(league = label, "Skipping league outside allow-list");
            continue;
        };

        let lines = group["lines"].as_array().map(Vec::as_slice).unwrap_or_default();
        for raw in lines {
            match serde_json::from_value::<GameLine>(raw.clone()) {
                Ok(line) => events.push((league, line)),
                Err(e) => debug!(%league, error = %e, "Skipping malformed game line"),
            }
        }
    }
    events
}
