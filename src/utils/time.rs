//! Time utilities: lenient parsing of alarm time strings ("14:05", "2:05 PM").

use crate::errors::AppResult;
use crate::models::{Meridiem, TimeOfDay};

/// Parse an alarm time string.
///
/// Accepts `H:MM` / `HH:MM`, optionally followed by `AM`/`PM`. Parsing is
/// lenient: a missing colon means zero minutes, an unparsable component
/// becomes 0 and only the first two minute characters are read. Components
/// that parse but are out of range are rejected.
pub fn parse_time_string(input: &str) -> AppResult<TimeOfDay> {
    let (clock, meridiem) = split_meridiem(input.trim());

    let (hours_raw, minutes_raw) = clock.split_once(':').unwrap_or((clock, ""));

    let hours: u8 = hours_raw.trim().parse().unwrap_or(0);
    let minutes: u8 = minutes_raw
        .trim()
        .chars()
        .take(2)
        .collect::<String>()
        .parse()
        .unwrap_or(0);

    let hours = match meridiem {
        Some(m) if hours <= 12 => m.fold(hours),
        _ => hours,
    };

    if meridiem.is_none() {
        log::debug!("parsed '{}' as 24-hour time", input);
    }

    TimeOfDay::new(hours, minutes)
}

/// Split a trailing AM/PM marker off a time string.
fn split_meridiem(s: &str) -> (&str, Option<Meridiem>) {
    if s.len() >= 2 && s.is_char_boundary(s.len() - 2) {
        let (head, tail) = s.split_at(s.len() - 2);
        if let Some(m) = Meridiem::from_suffix(tail) {
            return (head.trim_end(), Some(m));
        }
    }
    (s, None)
}

/// Parse an optional time string (CLI option values).
pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<TimeOfDay>> {
    input.map(|s| parse_time_string(s)).transpose()
}
