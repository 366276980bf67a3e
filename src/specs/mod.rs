// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of the UrFU schedule API: *where the data sits in
//! the response* and *how to read it without falling over*.
//!
//! ## What lives here
//! - **Pure parsing** of the lessons HTML fragment (`schedule`) and of the
//!   time-slot text inside it (`time`).
//! - **Marker classes** the site uses as structure (`divide`,
//!   `shedule-weekday-row`, …). The site's own spelling is kept.
//! - **Thin fetch wrappers** that build the endpoint path, GET it via
//!   `core::net` and hand the body to the parser.
//! - Passthrough decoding of the autocomplete JSON (`suggest`).
//!
//! ## What does **not** live here
//! - Which dates to fetch, worker threads, progress (`scrape`).
//! - Remembering the user's pick (`store`), export formatting (`csv`, `file`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect_day(s) → specs::schedule::fetch()
//!                                  ↘ core::net GET → core::html rows → Schedule
//! ```
//!
//! ## Conventions & invariants
//! - Parsing never fails as a whole: a malformed row is dropped and reported,
//!   a malformed time becomes `LessonTime::Fallback`.
//! - Parsers work on `core::html::Element`, never on `scraper` types, so they
//!   can be fed from fixtures or any other DOM.
//! - Output order is document order; nothing is re-sorted.
pub mod location;
pub mod schedule;
pub mod suggest;
pub mod time;
