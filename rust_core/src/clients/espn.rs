use crate::circuit_breaker::{ApiCircuitBreaker, ApiCircuitBreakerConfig, ApiCircuitState};
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_ODDS_PAGE_URL: &str = "https://www.espn.com/sports-betting/odds";

/// The page rejects requests without a browser-like agent
const USER_AGENT: &str = "Mozilla/5.0";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct EspnClientConfig {
    pub page_url: String,
    pub timeout: Duration,
    pub circuit_breaker: ApiCircuitBreakerConfig,
}

impl Default for EspnClientConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_ODDS_PAGE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            circuit_breaker: ApiCircuitBreakerConfig::default(),
        }
    }
}

#[derive(Clone)]
pub struct EspnClient {
    client: Client,
    page_url: String,
    circuit_breaker: Arc<ApiCircuitBreaker>,
}

impl std::fmt::Debug for EspnClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EspnClient")
            .field("page_url", &self.page_url)
            .field("circuit_breaker_state", &self.circuit_breaker.state())
            .finish()
    }
}

impl Default for EspnClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EspnClient {
    pub fn new() -> Self {
        Self::with_config(EspnClientConfig::default())
    }

    /// Create with custom URL, timeout and circuit breaker configuration
    pub fn with_config(config: EspnClientConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.timeout)
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            page_url: config.page_url,
            circuit_breaker: Arc::new(ApiCircuitBreaker::new("espn_odds", config.circuit_breaker)),
        }
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Check if the odds page is available (circuit breaker is not open)
    pub fn is_available(&self) -> bool {
        self.circuit_breaker.is_available()
    }

    pub fn circuit_state(&self) -> ApiCircuitState {
        self.circuit_breaker.state()
    }

    pub fn reset_circuit_breaker(&self) {
        self.circuit_breaker.reset();
    }

    /// Download the odds page HTML.
    pub async fn fetch_odds_page(&self) -> Result<String> {
        if !self.circuit_breaker.is_available() {
            return Err(anyhow!(
                "ESPN odds circuit breaker is open (url={})",
                self.page_url
            ));
        }

        let result = self.fetch_page_internal().await;

        match &result {
            Ok(_) => self.circuit_breaker.record_success(),
            Err(_) => self.circuit_breaker.record_failure(),
        }

        result
    }

    async fn fetch_page_internal(&self) -> Result<String> {
        debug!(url = %self.page_url, "Fetching odds page");
        let resp = self
            .client
            .get(&self.page_url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.page_url))?
            .error_for_status()
            .context("odds page returned an error status")?;
        let body = resp.text().await.context("failed to read odds page body")?;
        debug!(bytes = body.len(), "Fetched odds page");
        Ok(body)
    }
}
