//! Typed failures at the fetch/extraction and configuration boundaries.
//!
//! The detector never fails; these only surface from page handling and
//! caller-supplied configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not find odds state blob in page ({page_bytes} bytes)")]
    StateBlobMissing { page_bytes: usize },

    #[error("odds state blob is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} threshold {value}: must be finite and non-negative")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("unknown league '{0}' (expected one of NBA, NHL, MLB, NFL, NCAAF, NCAAM)")]
    UnknownLeague(String),

    #[error("failed to load thresholds file {path}: {reason}")]
    ThresholdsFile { path: String, reason: String },
}
