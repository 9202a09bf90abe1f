use anyhow::{anyhow, Context, Result};
use linewatch_core::circuit_breaker::ApiCircuitBreakerConfig;
use linewatch_core::clients::{EspnClientConfig, DEFAULT_ODDS_PAGE_URL};
use linewatch_core::providers::espn::DEFAULT_CACHE_TTL;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub page_url: String,
    pub request_timeout: Duration,

    pub cache_ttl: Duration,

    pub cb_failure_threshold: u32,
    pub cb_recovery_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let page_url = lookup("ODDS_PAGE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ODDS_PAGE_URL.to_string());
        if !page_url.starts_with("http://") && !page_url.starts_with("https://") {
            return Err(anyhow!(
                "Invalid ODDS_PAGE_URL: {page_url} (expected http:// or https:// URL)"
            ));
        }

        let request_timeout = Duration::from_secs(
            parse_u64(&lookup, "ODDS_REQUEST_TIMEOUT_SECS", 30).context("ODDS_REQUEST_TIMEOUT_SECS")?,
        );
        let cache_ttl = Duration::from_secs(
            parse_u64(&lookup, "ODDS_CACHE_TTL_SECS", DEFAULT_CACHE_TTL.as_secs())
                .context("ODDS_CACHE_TTL_SECS")?,
        );

        let cb_failure_threshold =
            parse_u64(&lookup, "ODDS_CB_FAILURE_THRESHOLD", 5).context("ODDS_CB_FAILURE_THRESHOLD")?;
        if cb_failure_threshold == 0 {
            return Err(anyhow!("ODDS_CB_FAILURE_THRESHOLD must be at least 1"));
        }
        let cb_failure_threshold = u32::try_from(cb_failure_threshold)
            .context("ODDS_CB_FAILURE_THRESHOLD is too large")?;
        let cb_recovery_timeout = Duration::from_secs(
            parse_u64(&lookup, "ODDS_CB_RECOVERY_TIMEOUT_SECS", 30)
                .context("ODDS_CB_RECOVERY_TIMEOUT_SECS")?,
        );

        Ok(Self {
            page_url,
            request_timeout,
            cache_ttl,
            cb_failure_threshold,
            cb_recovery_timeout,
        })
    }

    pub fn client_config(&self) -> EspnClientConfig {
        EspnClientConfig {
            page_url: self.page_url.clone(),
            timeout: self.request_timeout,
            circuit_breaker: ApiCircuitBreakerConfig {
                failure_threshold: self.cb_failure_threshold,
                recovery_timeout: self.cb_recovery_timeout,
                ..Default::default()
            },
        }
    }
}

fn parse_u64<F>(lookup: &F, key: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("Invalid {key}: {raw} (expected integer)"))
}
