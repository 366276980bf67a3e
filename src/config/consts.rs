// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://urfu.ru/api/schedule";
pub const USER_AGENT: &str = concat!("urfu_schedule/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Env overrides
pub const ENV_BASE_URL: &str = "URFU_SCHEDULE_BASE_URL";
pub const ENV_TIMEOUT: &str = "URFU_SCHEDULE_TIMEOUT";

// Local store
pub const STORE_DIR: &str = ".store";
pub const SELECTION_FILE: &str = "selection.json";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_DIR: &str = "urfu_schedule";
pub const CONFIG_FILE: &str = "config.toml";

// Dates: the app lets you browse a week either side of today
pub const DATE_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_RANGE_DAYS: u32 = 7;

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

// Output
pub const NO_LESSONS: &str = "No lessons on this day.";
