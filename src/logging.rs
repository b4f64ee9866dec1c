#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging with a level taken from the `BATTLESHIP_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid. Output goes to
/// stderr so stdout stays machine-readable.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
