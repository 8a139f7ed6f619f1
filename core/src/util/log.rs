use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::Local;
use lazy_static::lazy_static;
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::RwLock;

lazy_static! {
    static ref LOG_LEVEL: RwLock<LevelFilter> = RwLock::new(LevelFilter::Warn);
}

struct DynamicLogger;

impl Log for DynamicLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= *LOG_LEVEL.read()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = Local::now();
            // stdout carries armored data and plaintext
            eprintln!(
                "[{}] [{}] - {}",
                now.format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: DynamicLogger = DynamicLogger;

pub fn init_logger() -> Result<()> {
    log::set_logger(&LOGGER).map_err(|e| anyhow!("Failed to install logger: {}", e))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

pub fn set_log_level(level: LevelFilter) {
    *LOG_LEVEL.write() = level;
}

pub fn log_level() -> LevelFilter {
    *LOG_LEVEL.read()
}

pub fn parse_log_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim()).map_err(|_| anyhow!("Invalid log level '{}'", level))
}
