// src/dates.rs
//
// Dates as the API and the CLI see them. No localisation: the day labels in
// a schedule are whatever text the site sends.

use chrono::{Duration, NaiveDate};

use crate::{Error, Result};

/// `2024-09-02` → `20240902`, the form the lessons endpoint takes.
pub fn url_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Accepts `YYYY-MM-DD`, `YYYYMMDD`, `DD.MM.YYYY`, `today`, `tomorrow`,
/// `yesterday`, and `+N` / `-N` day offsets from `today`.
pub fn parse_date(text: &str, today: NaiveDate) -> Result<NaiveDate> {
    let t = text.trim();
    match t.to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "tomorrow" => return Ok(today + Duration::days(1)),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }
    if t.starts_with('+') || t.starts_with('-') {
        let days: i64 = t.parse().map_err(|_| Error::Date(s!(t)))?;
        return today
            .checked_add_signed(Duration::days(days))
            .ok_or_else(|| Error::Date(s!(t)));
    }
    ["%Y-%m-%d", "%Y%m%d", "%d.%m.%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(t, fmt).ok())
        .ok_or_else(|| Error::Date(s!(t)))
}

/// `count` consecutive dates starting at `from`.
pub fn range(from: NaiveDate, count: u32) -> Vec<NaiveDate> {
    from.iter_days().take(count as usize).collect()
}

/// The span of dates the user may browse: `days` either side of today, inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn around(today: NaiveDate, days: i64) -> Self {
        let days = Duration::days(days.max(0));
        Self { start: today - days, end: today + days }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.start, self.end)
    }

    /// `Ok(date)` inside the window, `Error::OutOfWindow` outside.
    pub fn check(&self, date: NaiveDate) -> Result<NaiveDate> {
        if self.contains(date) {
            Ok(date)
        } else {
            Err(Error::OutOfWindow { date, start: self.start, end: self.end })
        }
    }
}
