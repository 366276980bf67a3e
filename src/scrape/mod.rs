// src/scrape/mod.rs
mod scrape;

pub use scrape::{collect_day, collect_days, collect_days_with, search, DayResult, Target};
