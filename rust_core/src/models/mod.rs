//! Game lines and odds snapshots as they appear in the odds page state.
//!
//! Every field is optional on purpose: the page omits markets freely and the
//! detector treats a missing value as "skip that check". Text fields accept
//! either JSON strings or numbers since the page is not consistent about it.
//! A market or quote with the wrong shape reads as absent, so one malformed
//! market never takes its siblings down with it.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// One scheduled contest from a league group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameLine {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    /// ISO-8601 start time
    #[serde(deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub competitors: Vec<Competitor>,
    /// Odds entries; only the first one is used
    #[serde(deserialize_with = "lenient_list")]
    pub odds: Vec<OddsSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Competitor {
    /// "home" or "away"
    #[serde(deserialize_with = "lenient_text")]
    pub home_away: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub team: Option<Team>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    #[serde(deserialize_with = "lenient_text")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub abbreviation: Option<String>,
}

/// The primary odds entry for a game line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OddsSnapshot {
    #[serde(deserialize_with = "lenient")]
    pub point_spread: Option<SidedMarket>,
    #[serde(deserialize_with = "lenient")]
    pub total: Option<TotalMarket>,
    #[serde(deserialize_with = "lenient")]
    pub moneyline: Option<SidedMarket>,
}

/// A market quoted per team (point spread, moneyline).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidedMarket {
    #[serde(deserialize_with = "lenient")]
    pub home: Option<OpenClose>,
    #[serde(deserialize_with = "lenient")]
    pub away: Option<OpenClose>,
}

/// Over/under market. The two sides mirror each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalMarket {
    #[serde(deserialize_with = "lenient")]
    pub over: Option<OpenClose>,
    #[serde(deserialize_with = "lenient")]
    pub under: Option<OpenClose>,
}

/// Opening and most recent quote for one side of a market.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenClose {
    #[serde(deserialize_with = "lenient")]
    pub open: Option<Quote>,
    #[serde(deserialize_with = "lenient")]
    pub close: Option<Quote>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    #[serde(deserialize_with = "lenient_text")]
    pub line: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub odds: Option<String>,
}

/// Which end of a market's life a quote comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Open,
    Close,
}

impl OpenClose {
    fn quote(&self, phase: Phase) -> Option<&Quote> {
        match phase {
            Phase::Open => self.open.as_ref(),
            Phase::Close => self.close.as_ref(),
        }
    }

    pub fn line(&self, phase: Phase) -> Option<&str> {
        self.quote(phase).and_then(|q| q.line.as_deref())
    }

    pub fn odds(&self, phase: Phase) -> Option<&str> {
        self.quote(phase).and_then(|q| q.odds.as_deref())
    }
}

/// Look up one phase of one side; any missing level collapses to `None`.
pub(crate) fn side_line(side: Option<&OpenClose>, phase: Phase) -> Option<&str> {
    side.and_then(|s| s.line(phase))
}

pub(crate) fn side_odds(side: Option<&OpenClose>, phase: Phase) -> Option<&str> {
    side.and_then(|s| s.odds(phase))
}

impl Competitor {
    pub fn display_name(&self) -> Option<&str> {
        self.team.as_ref().and_then(|t| t.display_name.as_deref())
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.home_away.as_deref() == Some(tag)
    }
}

impl GameLine {
    fn single_tagged(&self, tag: &str) -> Option<&Competitor> {
        let mut tagged = self.competitors.iter().filter(|c| c.has_tag(tag));
        let first = tagged.next()?;
        match tagged.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// The home competitor, if exactly one carries the home tag
    pub fn home(&self) -> Option<&Competitor> {
        self.single_tagged("home")
    }

    /// The away competitor, if exactly one carries the away tag
    pub fn away(&self) -> Option<&Competitor> {
        self.single_tagged("away")
    }

    pub fn home_team(&self) -> &str {
        self.home().and_then(Competitor::display_name).unwrap_or("Home")
    }

    pub fn away_team(&self) -> &str {
        self.away().and_then(Competitor::display_name).unwrap_or("Away")
    }

    /// "Away @ Home"
    pub fn matchup(&self) -> String {
        format!("{} @ {}", self.away_team(), self.home_team())
    }

    pub fn primary_odds(&self) -> Option<&OddsSnapshot> {
        self.odds.first()
    }

    /// Parsed start time. The page sometimes omits seconds ("2025-01-12T18:00Z").
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.as_deref()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        let trimmed = raw.trim_end_matches('Z');
        ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

    /// Start time in local time, or the raw date text if it does not parse.
    pub fn start_text(&self) -> String {
        match self.start_time() {
            Some(dt) => dt
                .with_timezone(&Local)
                .format("%Y-%m-%d %I:%M %p %Z")
                .to_string(),
            None => self.date.clone().unwrap_or_default(),
        }
    }
}

/// Accept a string or a number; anything else reads as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Decode a nested object, reading a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Decode a list element by element. A non-list reads as empty and a malformed
/// element keeps its slot as an empty default.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "id": "401547",
            "date": "2025-01-12T18:00Z",
            "competitors": [
                { "homeAway": "home", "team": { "displayName": "Boston Celtics", "abbreviation": "BOS" } },
                { "homeAway": "away", "team": { "displayName": "Miami Heat" } }
            ],
            "odds": [{
                "pointSpread": {
                    "home": { "open": { "line": "-3.5", "odds": "-110" }, "close": { "line": "-5", "odds": "-108" } },
                    "away": { "open": { "line": "+3.5", "odds": "-110" }, "close": { "line": "+5", "odds": "-112" } }
                },
                "total": {
                    "over": { "open": { "line": "o221.5", "odds": "-110" }, "close": { "line": "o224", "odds": "-110" } }
                },
                "moneyline": {
                    "home": { "open": { "odds": "-160" }, "close": { "odds": -200 } }
                }
            }]
        })
    }

    #[test]
    fn test_deserialize_page_shape() {
        let line: GameLine = serde_json::from_value(sample()).unwrap();
        assert_eq!(line.home_team(), "Boston Celtics");
        assert_eq!(line.away_team(), "Miami Heat");
        assert_eq!(line.matchup(), "Miami Heat @ Boston Celtics");

        let odds = line.primary_odds().unwrap();
        let spread = odds.point_spread.as_ref().unwrap();
        assert_eq!(spread.home.as_ref().unwrap().line(Phase::Close), Some("-5"));
        assert!(odds.total.as_ref().unwrap().under.is_none());
        // numeric odds are carried as text
        let ml_home = odds.moneyline.as_ref().unwrap().home.as_ref().unwrap();
        assert_eq!(ml_home.odds(Phase::Close), Some("-200"));
    }

    #[test]
    fn test_missing_fields_default() {
        let line: GameLine = serde_json::from_value(json!({})).unwrap();
        assert!(line.home().is_none());
        assert!(line.primary_odds().is_none());
        assert_eq!(line.start_text(), "");
    }

    #[test]
    fn test_duplicate_home_tag_is_not_identifiable() {
        let line: GameLine = serde_json::from_value(json!({
            "competitors": [
                { "homeAway": "home", "team": { "displayName": "A" } },
                { "homeAway": "home", "team": { "displayName": "B" } },
                { "homeAway": "away", "team": { "displayName": "C" } }
            ]
        }))
        .unwrap();
        assert!(line.home().is_none());
        assert!(line.away().is_some());
    }

    #[test]
    fn test_start_time_without_seconds() {
        let line: GameLine = serde_json::from_value(sample()).unwrap();
        let start = line.start_time().unwrap();
        assert_eq!(start.to_rfc3339(), "2025-01-12T18:00:00+00:00");
    }

    #[test]
    fn test_malformed_market_reads_as_absent() {
        let line: GameLine = serde_json::from_value(json!({
            "competitors": [
                { "homeAway": "home", "team": "Boston Celtics" },
                { "homeAway": "away", "team": { "displayName": "Miami Heat" } }
            ],
            "odds": [{
                "pointSpread": { "home": "N/A" },
                "total": {
                    "over": { "open": "o221.5", "close": { "line": "o224" } }
                },
                "moneyline": "N/A"
            }]
        }))
        .unwrap();
        assert_eq!(line.home_team(), "Home");
        assert_eq!(line.away_team(), "Miami Heat");

        let odds = line.primary_odds().unwrap();
        assert!(odds.point_spread.as_ref().unwrap().home.is_none());
        assert!(odds.moneyline.is_none());
        let over = odds.total.as_ref().unwrap().over.as_ref().unwrap();
        assert_eq!(over.line(Phase::Open), None);
        assert_eq!(over.line(Phase::Close), Some("o224"));
    }

    #[test]
    fn test_non_list_collections_read_as_empty() {
        let line: GameLine = serde_json::from_value(json!({
            "competitors": { "home": "A" },
            "odds": ["-110", { "total": { "over": { "close": { "line": "o48" } } } }]
        }))
        .unwrap();
        assert!(line.competitors.is_empty());
        assert_eq!(line.odds.len(), 2);
        assert_eq!(line.primary_odds(), Some(&OddsSnapshot::default()));
    }

    #[test]
    fn test_unparseable_date_falls_back_to_raw() {
        let line = GameLine {
            date: Some("TBD".to_string()),
            ..Default::default()
        };
        assert!(line.start_time().is_none());
        assert_eq!(line.start_text(), "TBD");
    }
}
