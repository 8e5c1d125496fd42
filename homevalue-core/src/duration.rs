//! Duration strings ("4-6 weeks", "1 day", "2 months") to numeric weeks.

use regex::Regex;
use std::sync::LazyLock;

// COUNT[-COUNT] UNIT
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<min>[0-9]+)(?:-(?P<max>[0-9]+))?\s*(?P<unit>\w+)")
        .expect("duration pattern compiles")
});

/// Fallback when a duration string has no leading count
pub const DEFAULT_WEEKS: f64 = 1.0;

/// Parse a catalog duration into weeks.
///
/// A range resolves to its midpoint. Units containing "week" are taken as
/// weeks, "day" is divided by 7, "month" is multiplied by 4; any other unit
/// counts as weeks. Text without a count yields [`DEFAULT_WEEKS`].
pub fn parse_duration_weeks(text: &str) -> f64 {
    let Some(caps) = DURATION_RE.captures(text) else {
        tracing::debug!(duration = text, "unparseable duration, defaulting to one week");
        return DEFAULT_WEEKS;
    };

    let Ok(min) = caps["min"].parse::<f64>() else {
        return DEFAULT_WEEKS;
    };
    let value = match caps.name("max").and_then(|m| m.as_str().parse::<f64>().ok()) {
        Some(max) => (min + max) / 2.0,
        None => min,
    };

    // Case-sensitive: "Months" is not a month unit
    let unit = &caps["unit"];
    if unit.contains("week") {
        value
    } else if unit.contains("day") {
        value / 7.0
    } else if unit.contains("month") {
        value * 4.0
    } else {
        value
    }
}
