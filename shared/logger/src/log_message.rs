//! A single formatted log record.

use crate::log_level::LogLevel;
use chrono::Local;
use std::sync::Arc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone)]
pub(crate) struct LogMessage {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<Arc<str>>,
    pub message: String,
}

impl LogMessage {
    /// Stamps a record with the current local time.
    pub fn new(level: LogLevel, component: Option<Arc<str>>, message: String) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            level,
            component,
            message,
        }
    }

    /// Renders the record as one line, without the trailing newline:
    /// `[timestamp] LEVEL (component): message`
    pub fn render(&self) -> String {
        match &self.component {
            Some(component) => format!(
                "[{}] {} ({}): {}",
                self.timestamp, self.level, component, self.message
            ),
            None => format!("[{}] {}: {}", self.timestamp, self.level, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_component() {
        let msg = LogMessage::new(LogLevel::Error, None, "Camera busy".to_string());
        let line = msg.render();

        assert!(line.contains("ERROR: Camera busy"));
        assert!(!line.ends_with('\n'));
    }

    #[test]
    fn test_render_with_component() {
        let msg = LogMessage::new(LogLevel::Info, Some(Arc::from("Sampler")), "armed".to_string());
        assert!(msg.render().contains("INFO (Sampler): armed"));
    }

    #[test]
    fn test_timestamp_format() {
        let msg = LogMessage::new(LogLevel::Info, None, "Test".to_string());
        let ts = &msg.timestamp;

        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[19..20], ".");
    }
}
