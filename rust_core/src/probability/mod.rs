//! Odds normalization primitives.
//!
//! Sportsbook quotes arrive as text: American odds ("-110", "+145", "EVEN")
//! and point lines that may carry an over/under marker ("o7.5", "u221.5").
//! Both converters are total: anything they cannot read comes back as `None`
//! and the caller skips whatever check needed the value.

/// Convert an American odds quote to the break-even win probability it implies.
///
/// Positive odds `p` map to `100 / (p + 100)`, negative odds to `-p / (-p + 100)`.
/// "EVEN" is read as +100. Zero, non-finite, empty, and non-numeric quotes are
/// not prices and yield `None`.
pub fn american_odds_to_implied_probability(odds: Option<&str>) -> Option<f64> {
    let price = parse_american_odds(odds?)?;
    if price > 0.0 {
        Some(100.0 / (price + 100.0))
    } else {
        Some(-price / (-price + 100.0))
    }
}

fn parse_american_odds(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("even") {
        return Some(100.0);
    }
    let price = text.parse::<f64>().ok()?;
    if !price.is_finite() || price == 0.0 {
        return None;
    }
    Some(price)
}

/// Parse a point line, dropping a leading `o`/`u` marker (either case).
///
/// Over and under lines are mirror images, so `"o7.5"` and `"u7.5"` both read
/// as `7.5`.
pub fn parse_point_value(line: Option<&str>) -> Option<f64> {
    let line = line?.trim();
    let numeric = match line.chars().next() {
        Some('o' | 'O' | 'u' | 'U') => &line[1..],
        _ => line,
    };
    let value = numeric.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}
