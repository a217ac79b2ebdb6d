use log::{LevelFilter, Log, Metadata, Record};
use std::sync::OnceLock;

use playsim::config::LogSettings;

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger. `RUST_LOG` (a plain level name) wins over the
/// configured level.
pub fn init(settings: &LogSettings) {
    let level = if settings.stderr {
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|value| parse_level(&value))
            .unwrap_or_else(|| settings.level.into())
    } else {
        LevelFilter::Off
    };

    let logger = LOGGER.get_or_init(|| StderrLogger { level });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}
