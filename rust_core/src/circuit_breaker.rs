//! Circuit breaker for the odds page fetch.
//!
//! Repeated fetch failures (network errors, error statuses) open the circuit so
//! a dashboard refreshing on a timer stops hammering the page. After the
//! recovery timeout one probe is let through (half-open); enough successes
//! close the circuit again, any failure re-opens it.

use parking_lot::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// States for the API circuit breaker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCircuitState {
    /// Requests are allowed
    Closed,
    /// Requests are blocked until the recovery timeout passes
    Open,
    /// Probing whether the page is back
    HalfOpen,
}

/// Configuration for API circuit breaker
#[derive(Debug, Clone)]
pub struct ApiCircuitBreakerConfig {
    /// Number of consecutive failures to trip the circuit
    pub failure_threshold: u32,
    /// Duration to wait before attempting recovery
    pub recovery_timeout: Duration,
    /// Number of successful calls in half-open state to close circuit
    pub success_threshold: u32,
}

impl Default for ApiCircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            recovery_timeout: Duration::from_secs(30),
            success_threshold: 2,
        }
    }
}

#[derive(Debug)]
struct BreakerState {
    state: ApiCircuitState,
    consecutive_failures: u32,
    half_open_successes: u32,
    last_failure: Option<Instant>,
}

/// Consecutive-failure circuit breaker guarding one external endpoint.
#[derive(Debug)]
pub struct ApiCircuitBreaker {
    name: String,
    config: ApiCircuitBreakerConfig,
    inner: Mutex<BreakerState>,
}

impl ApiCircuitBreaker {
    pub fn new(name: &str, config: ApiCircuitBreakerConfig) -> Self {
        Self {
            name: name.to_string(),
            config,
            inner: Mutex::new(BreakerState {
                state: ApiCircuitState::Closed,
                consecutive_failures: 0,
                half_open_successes: 0,
                last_failure: None,
            }),
        }
    }

    pub fn with_defaults(name: &str) -> Self {
        Self::new(name, ApiCircuitBreakerConfig::default())
    }

    /// Whether a request may go out now. Moves Open to HalfOpen once the
    /// recovery timeout has elapsed.
    pub fn is_available(&self) -> bool {
        let mut inner = self.inner.lock();
        match inner.state {
            ApiCircuitState::Closed | ApiCircuitState::HalfOpen => true,
            ApiCircuitState::Open => {
                let recovered = inner
                    .last_failure
                    .map_or(true, |t| t.elapsed() >= self.config.recovery_timeout);
                if recovered {
                    inner.state = ApiCircuitState::HalfOpen;
                    inner.half_open_successes = 0;
                }
                recovered
            }
        }
    }

    pub fn record_success(&self) {
        let mut inner = self.inner.lock();
        inner.consecutive_failures = 0;
        if inner.state != ApiCircuitState::HalfOpen {
            inner.state = ApiCircuitState::Closed;
            return;
        }
        inner.half_open_successes += 1;
        if inner.half_open_successes >= self.config.success_threshold {
            inner.state = ApiCircuitState::Closed;
            info!(
                breaker = %self.name,
                successes = inner.half_open_successes,
                "Circuit breaker closed"
            );
        }
    }

    pub fn record_failure(&self) {
        let mut inner = self.inner.lock();
        inner.consecutive_failures += 1;
        inner.last_failure = Some(Instant::now());
        match inner.state {
            ApiCircuitState::Closed if inner.consecutive_failures >= self.config.failure_threshold => {
                inner.state = ApiCircuitState::Open;
                warn!(
                    breaker = %self.name,
                    failures = inner.consecutive_failures,
                    "Circuit breaker opened"
                );
            }
            ApiCircuitState::HalfOpen => {
                inner.state = ApiCircuitState::Open;
                warn!(breaker = %self.name, "Circuit breaker re-opened during half-open probe");
            }
            _ => {}
        }
    }

    pub fn state(&self) -> ApiCircuitState {
        self.inner.lock().state
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn failure_count(&self) -> u32 {
        self.inner.lock().consecutive_failures
    }

    /// Reset the circuit breaker to closed state
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.state = ApiCircuitState::Closed;
        inner.consecutive_failures = 0;
        inner.half_open_successes = 0;
        inner.last_failure = None;
    }
}

// ============================================================================
// Tests
// ============================================================================
