//! Log sinks: a file served by a writer thread, or an in-memory buffer.

use crate::error::Result;
use crate::log_message::LogMessage;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};

/// Where records go once they pass the level filter.
#[derive(Clone)]
pub(crate) enum LogSink {
    /// Records are sent to a dedicated writer thread owning the file.
    File(Sender<LogMessage>),
    /// Records are appended synchronously to a shared buffer.
    Memory(MemoryLog),
    Discard,
}

impl LogSink {
    /// Opens `log_path` in append mode and spawns the writer thread.
    pub fn file(log_path: &Path) -> Result<Self> {
        let writer = FileWriter::open(log_path)?;
        let (sender, receiver) = channel();
        std::thread::spawn(move || writer.run(receiver));
        Ok(LogSink::File(sender))
    }

    pub fn write(&self, message: LogMessage) {
        match self {
            LogSink::File(sender) => {
                // Writer thread gone means the process is shutting down.
                let _ = sender.send(message);
            }
            LogSink::Memory(memory) => memory.push(message.render()),
            LogSink::Discard => {}
        }
    }
}

/// Rendered records kept in memory, readable while the logger is alive.
///
/// Cloning shares the same buffer.
#[derive(Clone, Default)]
pub struct MemoryLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLog {
    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }

    /// Returns a snapshot of every record written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// True if any record contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .map(|lines| lines.iter().any(|l| l.contains(needle)))
            .unwrap_or(false)
    }
}

struct FileWriter {
    file: File,
}

impl FileWriter {
    fn open(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        Ok(Self { file })
    }

    fn write_message(&mut self, message: &LogMessage) {
        let mut line = message.render();
        line.push('\n');
        if let Err(e) = self.file.write_all(line.as_bytes()) {
            eprintln!("Error writing log: {}", e);
            return;
        }
        if let Err(e) = self.file.flush() {
            eprintln!("Error flushing log: {}", e);
        }
    }

    /// Drains the channel until every sender is dropped.
    fn run(mut self, receiver: Receiver<LogMessage>) {
        for message in receiver {
            self.write_message(&message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_level::LogLevel;
    use std::fs;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_file_sink_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("sink.log");

        let sink = LogSink::file(&log_path);
        assert!(sink.is_ok());
        assert!(log_path.exists());
    }

    #[test]
    fn test_file_sink_writes_lines() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("sink.log");

        let sink = LogSink::file(&log_path).unwrap();
        sink.write(LogMessage::new(LogLevel::Warn, None, "first".to_string()));
        sink.write(LogMessage::new(LogLevel::Info, None, "second".to_string()));
        drop(sink);

        thread::sleep(Duration::from_millis(100));

        let content = fs::read_to_string(log_path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("WARN: first"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_memory_sink_is_shared_between_clones() {
        let memory = MemoryLog::default();
        let sink = LogSink::Memory(memory.clone());

        sink.clone()
            .write(LogMessage::new(LogLevel::Debug, None, "frame 7".to_string()));

        assert_eq!(memory.lines().len(), 1);
        assert!(memory.contains("frame 7"));
        assert!(!memory.contains("frame 8"));
    }

    #[test]
    fn test_discard_sink_drops_everything() {
        LogSink::Discard.write(LogMessage::new(LogLevel::Error, None, "gone".to_string()));
    }
}
