use anyhow::{Context, Result};
use linewatch_core::report::{GameReport, ScanReport};

pub const EMPTY_REPORT: &str = "No market moves found.";

/// Plain-text report: one section per league, one bullet per pick.
pub fn format_report(report: &ScanReport) -> String {
    if report.is_empty() {
        return format!("{EMPTY_REPORT}\n");
    }

    let mut out = String::new();
    for (i, league) in report.leagues.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("=== {} ===\n", league.league));
        for game in &league.games {
            out.push_str(&format_game(game));
        }
    }
    out
}

fn format_game(game: &GameReport) -> String {
    let mut out = format!("- {} — {}\n", game.matchup, game.game.start_text());
    for pick in &game.picks {
        out.push_str(&format!("    • {pick}\n"));
    }
    out
}

pub fn format_json(report: &ScanReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize scan report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use linewatch_core::report::LeagueReport;
    use linewatch_core::{GameLine, League, MarketKind, MoveBasis, Pick, PickSide};

    fn report(leagues: Vec<LeagueReport>) -> ScanReport {
        ScanReport {
            leagues,
            games_scanned: 4,
            games_flagged: 1,
            picks_emitted: 1,
            totals_only: false,
            generated_at: Utc::now(),
        }
    }

    fn flagged_game() -> GameReport {
        let game: GameLine = serde_json::from_value(serde_json::json!({
            "date": "not a date",
            "competitors": [
                { "homeAway": "home", "team": { "displayName": "Boston Celtics" } },
                { "homeAway": "away", "team": { "displayName": "Miami Heat" } }
            ]
        }))
        .unwrap();
        let pick = Pick {
            market: MarketKind::Total,
            side: PickSide::Over,
            selection: "Over".to_string(),
            line: Some(48.0),
            open_line: Some(45.5),
            odds: None,
            basis: MoveBasis::LineMove,
            delta: 2.5,
            probability_swing: None,
        };
        GameReport::new(game, vec![pick])
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(format_report(&report(vec![])), "No market moves found.\n");
    }

    #[test]
    fn test_league_sections() {
        let text = format_report(&report(vec![
            LeagueReport {
                league: League::NBA,
                games: vec![flagged_game()],
            },
            LeagueReport {
                league: League::NFL,
                games: vec![flagged_game()],
            },
        ]));
        let expected_game = "- Miami Heat @ Boston Celtics — not a date\n    • Over 48.0 (total up 2.5 from 45.5)\n";
        assert_eq!(
            text,
            format!("=== NBA ===\n{expected_game}\n=== NFL ===\n{expected_game}")
        );
    }

    #[test]
    fn test_json_report() {
        let json = format_json(&report(vec![LeagueReport {
            league: League::NHL,
            games: vec![flagged_game()],
        }]))
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["leagues"][0]["league"], "NHL");
        assert_eq!(value["leagues"][0]["games"][0]["matchup"], "Miami Heat @ Boston Celtics");
        assert_eq!(value["leagues"][0]["games"][0]["picks"][0]["side"], "over");
    }
}
