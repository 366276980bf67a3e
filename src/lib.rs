// src/lib.rs

#[macro_use]
pub mod macros;
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod specs;

pub mod csv;
pub mod dates;
pub mod file;
pub mod progress;
pub mod scrape;
pub mod store;

pub use error::{Error, Result};
