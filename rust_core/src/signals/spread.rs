//! Point-spread move strategies.
//!
//! Standard leagues read the spread by magnitude: how far the home line moved
//! toward or away from pick'em. Fixed-line leagues (puck line, run line) pin the
//! spread at ±1.5, so movement shows up in the price instead.

use crate::types::LineStrategy;

/// Tolerance on threshold comparisons so `2.0000000001`-style float noise
/// does not decide a boundary.
pub(crate) const THRESHOLD_EPSILON: f64 = 1e-9;

/// Spread of the puck line / run line convention
pub const FIXED_LINE_POINTS: f64 = 1.5;

/// Open and close spread lines for both sides plus the home side's price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadLines {
    pub home_open: f64,
    pub home_close: f64,
    pub away_open: f64,
    pub away_close: f64,
    /// Implied probability of the home spread price at open
    pub home_open_prob: Option<f64>,
    /// Implied probability of the home spread price now
    pub home_close_prob: Option<f64>,
}

/// Thresholds the spread check reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadThresholds {
    /// Minimum line move in points
    pub points: f64,
    /// Minimum implied-probability move for price-only and corroboration checks
    pub probability: f64,
}

/// Which way the spread market moved and why we believe it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpreadMove {
    /// Line moved. `delta` is `|home_close| - |home_open|`.
    Line { delta: f64 },
    /// Line held and the home price moved by `delta` (probability).
    Price { delta: f64 },
    /// Sign flip across the same magnitude, backed by the moneyline. `delta` is
    /// the raw `home_close - home_open`.
    Flip { delta: f64 },
}

/// Side the follow strategy takes for a given spread move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadSide {
    Home,
    Away,
}

impl SpreadMove {
    pub fn side(&self) -> SpreadSide {
        match *self {
            SpreadMove::Line { delta } | SpreadMove::Flip { delta } => {
                if delta <= 0.0 {
                    SpreadSide::Home
                } else {
                    SpreadSide::Away
                }
            }
            SpreadMove::Price { delta } => {
                if delta > 0.0 {
                    SpreadSide::Home
                } else {
                    SpreadSide::Away
                }
            }
        }
    }
}

/// Evaluate a spread under the league's strategy.
///
/// `home_moneyline_delta` is the home moneyline implied-probability move, used
/// only to corroborate sign flips on fixed-line leagues.
pub fn evaluate(
    strategy: LineStrategy,
    lines: &SpreadLines,
    thresholds: &SpreadThresholds,
    home_moneyline_delta: Option<f64>,
) -> Option<SpreadMove> {
    match strategy {
        LineStrategy::Standard => standard(lines, thresholds),
        LineStrategy::FixedLine => fixed_line(lines, thresholds, home_moneyline_delta),
    }
}

fn standard(lines: &SpreadLines, thresholds: &SpreadThresholds) -> Option<SpreadMove> {
    let delta = lines.home_close.abs() - lines.home_open.abs();
    if meets(delta, thresholds.points) {
        return Some(SpreadMove::Line { delta });
    }
    // Line pinned: the price is the only place the move can show.
    if lines.home_close == lines.home_open {
        return price_move(lines, thresholds.probability);
    }
    None
}

fn fixed_line(
    lines: &SpreadLines,
    thresholds: &SpreadThresholds,
    home_moneyline_delta: Option<f64>,
) -> Option<SpreadMove> {
    // Pinned at the puck/run line: only the price can move. A -1.5/+1.5 swap
    // is a flip and goes through corroboration below.
    if is_fixed_line(lines.home_open) && lines.home_close == lines.home_open {
        return price_move(lines, thresholds.probability);
    }
    if is_symmetric_flip(lines) {
        return corroborated_flip(lines, thresholds, home_moneyline_delta);
    }
    standard(lines, thresholds)
}

fn price_move(lines: &SpreadLines, probability_threshold: f64) -> Option<SpreadMove> {
    let delta = lines.home_close_prob? - lines.home_open_prob?;
    meets(delta, probability_threshold).then_some(SpreadMove::Price { delta })
}

/// A flip is only trusted when the moneyline moved far enough the same way:
/// home line falling (more favored) must come with the home moneyline firming.
fn corroborated_flip(
    lines: &SpreadLines,
    thresholds: &SpreadThresholds,
    home_moneyline_delta: Option<f64>,
) -> Option<SpreadMove> {
    let moneyline_delta = home_moneyline_delta?;
    if !meets(moneyline_delta, thresholds.probability) {
        return None;
    }
    let delta = lines.home_close - lines.home_open;
    let line_toward_home = delta < 0.0;
    let moneyline_toward_home = moneyline_delta > 0.0;
    if line_toward_home != moneyline_toward_home {
        return None;
    }
    meets(delta, thresholds.points).then_some(SpreadMove::Flip { delta })
}

fn is_fixed_line(line: f64) -> bool {
    (line.abs() - FIXED_LINE_POINTS).abs() < THRESHOLD_EPSILON
}

/// Both sides mirror each other at open and at close, and the home line
/// changed sign across the same magnitude.
fn is_symmetric_flip(lines: &SpreadLines) -> bool {
    lines.home_open != 0.0
        && lines.home_open == -lines.away_open
        && lines.home_close == -lines.away_close
        && lines.home_open == -lines.home_close
}

/// `|delta| >= threshold`, closed at the boundary.
pub(crate) fn meets(delta: f64, threshold: f64) -> bool {
    delta.abs() + THRESHOLD_EPSILON >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(home_open: f64, home_close: f64) -> SpreadLines {
        SpreadLines {
            home_open,
            home_close,
            away_open: -home_open,
            away_close: -home_close,
            home_open_prob: None,
            home_close_prob: None,
        }
    }

    const THRESHOLDS: SpreadThresholds = SpreadThresholds {
        points: 2.0,
        probability: 0.05,
    };

    #[test]
    fn test_standard_magnitude_growth_takes_away() {
        let mv = evaluate(LineStrategy::Standard, &lines(-3.0, -5.0), &THRESHOLDS, None).unwrap();
        assert_eq!(mv, SpreadMove::Line { delta: 2.0 });
        assert_eq!(mv.side(), SpreadSide::Away);
    }

    #[test]
    fn test_standard_magnitude_shrink_takes_home() {
        let mv = evaluate(LineStrategy::Standard, &lines(-7.0, -4.5), &THRESHOLDS, None).unwrap();
        assert_eq!(mv, SpreadMove::Line { delta: -2.5 });
        assert_eq!(mv.side(), SpreadSide::Home);
    }

    #[test]
    fn test_standard_below_threshold() {
        let below = SpreadThresholds {
            points: 2.0 + 1e-6,
            ..THRESHOLDS
        };
        assert!(evaluate(LineStrategy::Standard, &lines(-3.0, -5.0), &below, None).is_none());
    }

    #[test]
    fn test_standard_flip_is_not_a_move() {
        // -3 to +3 has no magnitude change and the line did change, so no fallback
        let mut l = lines(-3.0, 3.0);
        l.home_open_prob = Some(0.50);
        l.home_close_prob = Some(0.60);
        assert!(evaluate(LineStrategy::Standard, &l, &THRESHOLDS, Some(0.2)).is_none());
    }

    #[test]
    fn test_standard_price_fallback_when_line_pinned() {
        let mut l = lines(-4.0, -4.0);
        l.home_open_prob = Some(0.52);
        l.home_close_prob = Some(0.46);
        let mv = evaluate(LineStrategy::Standard, &l, &THRESHOLDS, None).unwrap();
        assert!(matches!(mv, SpreadMove::Price { .. }));
        assert_eq!(mv.side(), SpreadSide::Away);
    }

    #[test]
    fn test_fixed_line_price_only() {
        let mut l = lines(-1.5, -1.5);
        l.home_open_prob = Some(0.55);
        l.home_close_prob = Some(0.61);
        let mv = evaluate(LineStrategy::FixedLine, &l, &THRESHOLDS, None).unwrap();
        match mv {
            SpreadMove::Price { delta } => assert!((delta - 0.06).abs() < 1e-9),
            other => panic!("expected price move, got {:?}", other),
        }
        assert_eq!(mv.side(), SpreadSide::Home);
    }

    #[test]
    fn test_fixed_line_price_missing_is_silent() {
        assert!(evaluate(LineStrategy::FixedLine, &lines(-1.5, -1.5), &THRESHOLDS, None).is_none());
    }

    #[test]
    fn test_puck_line_sign_swap_is_a_flip_not_a_price_move() {
        // Home went from -1.5 favorite to +1.5 underdog; its spread price at the
        // new number is not comparable to the old one.
        let mut l = lines(-1.5, 1.5);
        l.home_open_prob = american_odds(120.0);
        l.home_close_prob = american_odds(-230.0);

        assert!(evaluate(LineStrategy::FixedLine, &l, &THRESHOLDS, None).is_none());
        // home moneyline firmed while the line moved away from home: suppressed
        assert!(evaluate(LineStrategy::FixedLine, &l, &THRESHOLDS, Some(0.10)).is_none());

        // home moneyline weakened with the line: follow the away side
        let mv = evaluate(LineStrategy::FixedLine, &l, &THRESHOLDS, Some(-0.165)).unwrap();
        assert_eq!(mv, SpreadMove::Flip { delta: 3.0 });
        assert_eq!(mv.side(), SpreadSide::Away);
    }

    #[test]
    fn test_zero_threshold_tie_takes_home() {
        let zero = SpreadThresholds {
            points: 0.0,
            probability: 1.0,
        };
        let mv = evaluate(LineStrategy::Standard, &lines(-4.0, 4.0), &zero, None).unwrap();
        assert_eq!(mv, SpreadMove::Line { delta: 0.0 });
        assert_eq!(mv.side(), SpreadSide::Home);
    }

    fn american_odds(price: f64) -> Option<f64> {
        crate::probability::american_odds_to_implied_probability(Some(price.to_string().as_str()))
    }

    #[test]
    fn test_fixed_line_flip_needs_corroboration() {
        let l = lines(2.5, -2.5);
        // no moneyline signal: suppressed
        assert!(evaluate(LineStrategy::FixedLine, &l, &THRESHOLDS, None).is_none());
        // moneyline moved the other way: suppressed
        assert!(evaluate(LineStrategy::FixedLine, &l, &THRESHOLDS, Some(-0.08)).is_none());
        // moneyline too small: suppressed
        assert!(evaluate(LineStrategy::FixedLine, &l, &THRESHOLDS, Some(0.01)).is_none());
        // home became favored and home moneyline firmed
        let mv = evaluate(LineStrategy::FixedLine, &l, &THRESHOLDS, Some(0.08)).unwrap();
        assert_eq!(mv, SpreadMove::Flip { delta: -5.0 });
        assert_eq!(mv.side(), SpreadSide::Home);
    }

    #[test]
    fn test_fixed_line_off_convention_uses_standard() {
        let mv = evaluate(LineStrategy::FixedLine, &lines(-1.5, -3.5), &THRESHOLDS, None).unwrap();
        assert_eq!(mv, SpreadMove::Line { delta: 2.0 });
    }

    #[test]
    fn test_meets_is_closed_at_boundary() {
        assert!(meets(2.0, 2.0));
        assert!(meets(-2.0, 2.0));
        assert!(!meets(1.99, 2.0));
    }
}
