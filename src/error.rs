// src/error.rs
//! Error types for fetching, storing and exporting schedules.
//!
//! Only [`Error`] ever reaches a caller. [`RowError`] and [`TimeError`] stay
//! inside the parser: a bad row is dropped and reported, a bad time string
//! becomes `LessonTime::Fallback`.

use std::num::ParseIntError;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for schedule operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered, but not with 2xx
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unrecognised date: {0:?}")]
    Date(String),

    #[error("{date} is outside the allowed range {start}..={end}")]
    OutOfWindow {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("No schedule selected (use `select`, or pass --id and --role)")]
    NoSelection,
}

/// Why a lesson row was dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("no shedule-weekday-time block")]
    MissingTime,

    #[error("no shedule-weekday-item block")]
    MissingItem,

    #[error("item block has no discipline element")]
    MissingDiscipline,

    #[error("item block has no about element")]
    MissingAbout,

    #[error("lesson row before any date divider")]
    LessonBeforeDate,

    #[error("wrong lesson info: {0} fields")]
    InfoArity(usize),
}

/// Why a single `H:MM` token did not parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("expected H:MM, got {0:?}")]
    Shape(String),

    #[error("bad number in time: {0}")]
    Number(#[from] ParseIntError),
}
