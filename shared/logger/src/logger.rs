//! The [`Logger`] handle used throughout the workspace.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::log_writer::{LogSink, MemoryLog};
use std::path::PathBuf;
use std::sync::Arc;

/// Thread-safe, non-blocking logger.
///
/// Clones and component loggers derived with [`Logger::for_component`] share
/// the same sink, so one writer thread serves the whole application.
///
/// # Examples
///
/// ```
/// use logging::{Logger, LogLevel};
///
/// let (logger, memory) = Logger::in_memory(LogLevel::Info);
/// let camera = logger.for_component("Camera");
/// camera.info("stream started");
/// assert!(memory.contains("(Camera): stream started"));
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: LogSink,
    level: LogLevel,
    component: Option<Arc<str>>,
    console_output: bool,
}

impl Logger {
    /// Creates a logger appending to `log_path` through a dedicated writer thread.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn new(log_path: PathBuf, level: LogLevel) -> Result<Self> {
        Ok(Logger {
            sink: LogSink::file(&log_path)?,
            level,
            component: None,
            console_output: false,
        })
    }

    /// Creates a file logger tagged with `component`, optionally echoing to stdout.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn with_component(
        log_path: PathBuf,
        level: LogLevel,
        component: &str,
        console_output: bool,
    ) -> Result<Self> {
        Ok(Logger {
            sink: LogSink::file(&log_path)?,
            level,
            component: Some(Arc::from(component)),
            console_output,
        })
    }

    /// Creates a logger whose records are kept in memory.
    pub fn in_memory(level: LogLevel) -> (Self, MemoryLog) {
        let memory = MemoryLog::default();
        let logger = Logger {
            sink: LogSink::Memory(memory.clone()),
            level,
            component: None,
            console_output: false,
        };
        (logger, memory)
    }

    /// Creates a logger that drops every record.
    pub fn disabled() -> Self {
        Logger {
            sink: LogSink::Discard,
            level: LogLevel::Error,
            component: None,
            console_output: false,
        }
    }

    /// Derives a logger for another component, sharing this logger's sink and level.
    pub fn for_component(&self, component: &str) -> Self {
        Logger {
            sink: self.sink.clone(),
            level: self.level,
            component: Some(Arc::from(component)),
            console_output: self.console_output,
        }
    }

    /// Minimum level this logger records.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error message (always recorded unless the logger is disabled).
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }

        let msg = LogMessage::new(level, self.component.clone(), message.to_string());
        if self.console_output {
            println!("{}", msg.render());
        }
        self.sink.write(msg);
    }
}
