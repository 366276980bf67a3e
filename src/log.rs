// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Install the global subscriber: stderr for humans, `.store/debug.log` for later.
///
/// `RUST_LOG` wins over `verbose`. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // The file layer is best-effort: a read-only cwd just means no debug.log.
    let file = open_log_file(Path::new(STORE_DIR)).map(|f| {
        fmt::layer()
            .with_writer(Mutex::new(f))
            .with_ansi(false)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(file)
        .try_init();
}

fn open_log_file(dir: &Path) -> Option<fs::File> {
    fs::create_dir_all(dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}
