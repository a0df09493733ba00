// src/logging.rs

//! Logging setup with server-style formatting.
//!
//! Installs a [`log::Log`] implementation that writes every line, in
//! `[timestamp] [LEVEL] message` form, to stdout and to a log file that
//! is truncated on startup.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Parse a level name, falling back to `info` for unknown values.
fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Format a log line with timestamp and level.
fn format_line(level: Level, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{}] [{}] {}", timestamp, level, message)
}

/// Logger writing to stdout and, when available, a log file.
struct DualLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl Log for DualLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), &record.args().to_string());
        println!("{line}");
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{line}");
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Install the global logger.
///
/// The log file is truncated each start. If it cannot be created the
/// logger degrades to stdout only.
pub fn init(path: &Path, level: &str) {
    let file = match File::create(path) {
        Ok(file) => Some(Mutex::new(file)),
        Err(error) => {
            eprintln!("could not open log file {}: {error}", path.display());
            None
        }
    };

    let level = parse_level(level);
    let logger = DualLogger { level, file };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("ERROR"), LevelFilter::Error);
        assert_eq!(parse_level("unknown"), LevelFilter::Info);
    }

    #[test]
    fn test_format_line_shape() {
        let line = format_line(Level::Warn, "something happened");
        assert!(line.contains("[WARN] something happened"));
        assert!(line.starts_with('['));
    }
}
