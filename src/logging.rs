//! Log sink for the `shipgame` binary and host tools.
//!
//! Records go to stderr, one line each as `LEVEL target - message`. Stdout
//! is left to the program's own output, so `replay --json` stays parseable
//! with logging enabled.
#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "SHIPGAME_LOG";

/// Initialize logging with a level taken from `SHIPGAME_LOG`, writing to
/// stderr so stdout stays machine readable. Defaults to `info` if the
/// variable is not set or invalid. Calling it again is a no-op.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
