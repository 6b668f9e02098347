// FILE: src/cli/logging.rs

use crate::options::Options;
use chrono::{DateTime, Local};
use log::{Level, LevelFilter};
use std::fmt;
use std::io::Write;

/// Timestamp layout of every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log threshold for one run, derived from `-v` count and `--debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
}

impl LogConfig {
    pub fn from_flags(verbose: u8, debug: bool) -> Self {
        let level = if debug {
            LevelFilter::Trace
        } else {
            match verbose {
                0 => LevelFilter::Error,
                1 => LevelFilter::Warn,
                2 => LevelFilter::Info,
                3 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };
        Self { level }
    }

    pub fn from_options(options: &Options) -> Self {
        Self::from_flags(options.verbose, options.debug)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_flags(crate::options::DEFAULT_VERBOSITY, false)
    }
}

/// One log line, without the trailing newline.
pub fn format_line(time: &DateTime<Local>, level: Level, message: &fmt::Arguments<'_>) -> String {
    format!("{} {}: {}", time.format(TIMESTAMP_FORMAT), level, message)
}

/// Install the stderr logger. Returns false if a logger was already set.
pub fn init(config: &LogConfig) -> bool {
    env_logger::Builder::new()
        .filter_level(config.level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(&Local::now(), record.level(), record.args())
            )
        })
        .try_init()
        .is_ok()
}
