//! Saved-page source for offline scans and tests.

use super::espn::extract_state;
use super::OddsSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Reads the odds state from disk on every fetch.
///
/// Accepts either a saved HTML page (the state blob is extracted from it) or
/// a bare JSON state document.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse fixture content, which may be a page or a bare state document.
pub fn parse_fixture(content: &str) -> Result<Value> {
    if content.trim_start().starts_with('{') {
        serde_json::from_str(content).context("fixture is not valid JSON")
    } else {
        Ok(extract_state(content)?)
    }
}

#[async_trait]
impl OddsSource for FixtureSource {
    async fn fetch_state(&self) -> Result<Value> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read fixture {}", self.path.display()))?;
        parse_fixture(&content)
    }

    fn source_name(&self) -> &str {
        "fixture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_json() {
        let value = parse_fixture(r#"  {"page": {}}"#).unwrap();
        assert!(value["page"].is_object());
    }

    #[test]
    fn test_parse_html_page() {
        let value = parse_fixture("<script>window['__espnfitt__']={\"x\":2};</script>").unwrap();
        assert_eq!(value["x"], 2);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_fixture("nothing here").is_err());
    }

    #[tokio::test]
    async fn test_missing_file_errors() {
        let source = FixtureSource::new("/nonexistent/odds.html");
        let err = source.fetch_state().await.unwrap_err();
        assert!(err.to_string().contains("failed to read fixture"));
    }
}
