//! Logging infrastructure for finni.
//!
//! A process-wide file logger: each record becomes one
//! `[HH:MM:SS] LEVEL: message` line. Calls made before [`init`] are dropped,
//! so code under test can log without setting anything up.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// Log sink with a level filter
struct FileLog {
    file: File,
    min_level: LogLevel,
}

impl FileLog {
    /// Truncate (or create) the log file and write the session banner
    fn create(path: &Path, min_level: LogLevel) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        writeln!(file, "=== finni session {} ===", Local::now().format("%Y-%m-%d"))?;
        Ok(Self { file, min_level })
    }

    fn write(&mut self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        let timestamp = Local::now().format("%H:%M:%S");
        // A failed log write must not disturb the editor
        let _ = writeln!(self.file, "[{}] {}: {}", timestamp, level.to_str(), message);
    }
}

static LOGGER: OnceLock<Mutex<FileLog>> = OnceLock::new();

/// Initialize the global logger.
///
/// Subsequent calls are ignored. Fails only when the log file cannot be
/// created, in which case logging stays disabled.
pub fn init(path: &Path, min_level: LogLevel) -> io::Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let log = FileLog::create(path, min_level)?;
    let _ = LOGGER.set(Mutex::new(log));
    Ok(())
}

fn log(level: LogLevel, message: &str) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut logger) = logger.lock() {
            logger.write(level, message);
        }
    }
}

pub fn debug(message: impl AsRef<str>) {
    log(LogLevel::Debug, message.as_ref());
}

pub fn info(message: impl AsRef<str>) {
    log(LogLevel::Info, message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    log(LogLevel::Warn, message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    log(LogLevel::Error, message.as_ref());
}
