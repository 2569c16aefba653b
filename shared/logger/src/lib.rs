//! Thread-safe, non-blocking logging for the vision demo.
//!
//! Records are filtered by [`LogLevel`], optionally tagged with a component
//! name and handed to a sink: an append-only file served by a dedicated
//! writer thread, an in-memory buffer (tests), or nothing at all.

pub mod error;
mod log_level;
mod log_message;
mod log_writer;
mod logger;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use log_writer::MemoryLog;
pub use logger::Logger;
