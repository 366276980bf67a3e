// src/specs/time.rs
//
// "9:00 - 10:30" → Interval(9:00, 10:30). Anything else is kept verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{LessonTime, SimpleTime};

// Whatever sits between the two times: " - ", "-", "–", a space...
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^:0-9]+").expect("separator regex"));

/// Parse a time-slot cell. Never fails: unparseable text becomes `Fallback`.
pub fn parse_interval(raw: &str) -> LessonTime {
    match split_interval(raw) {
        Some((start, end)) => LessonTime::Interval { start, end },
        None => {
            logd!("Time slot kept verbatim: {:?}", raw);
            LessonTime::Fallback { raw: s!(raw) }
        }
    }
}

/// Exactly two `H:MM` tokens, or nothing.
fn split_interval(raw: &str) -> Option<(SimpleTime, SimpleTime)> {
    let mut tokens = SEPARATOR.split(raw);
    let (start, end) = (tokens.next()?, tokens.next()?);
    if tokens.next().is_some() {
        return None;
    }
    Some((start.parse().ok()?, end.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(h1: u32, m1: u32, h2: u32, m2: u32) -> LessonTime {
        LessonTime::Interval { start: SimpleTime::new(h1, m1), end: SimpleTime::new(h2, m2) }
    }

    fn fallback(raw: &str) -> LessonTime {
        LessonTime::Fallback { raw: s!(raw) }
    }

    #[test]
    fn separators() {
        assert_eq!(parse_interval("9:00 - 10:30"), interval(9, 0, 10, 30));
        assert_eq!(parse_interval("9:00-10:30"), interval(9, 0, 10, 30));
        assert_eq!(parse_interval("08:30 – 10:00"), interval(8, 30, 10, 0));
        assert_eq!(parse_interval("14:15 15:45"), interval(14, 15, 15, 45));
    }

    #[test]
    fn no_range_validation() {
        assert_eq!(parse_interval("25:70-99:99"), interval(25, 70, 99, 99));
    }

    #[test]
    fn fallbacks_keep_raw_text() {
        for raw in ["TBD", "", "lunch break", "9:00", "9-10", "9:00 - 10:30 - 12:00", " 9:00-10:00", "9:00:00-10:00:00", ":30-10:00"] {
            assert_eq!(parse_interval(raw), fallback(raw), "{raw:?}");
        }
    }

    #[test]
    fn huge_numbers_fall_back() {
        let raw = "99999999999:00-1:00";
        assert_eq!(parse_interval(raw), fallback(raw));
    }
}
