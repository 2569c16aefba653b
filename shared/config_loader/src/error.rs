use std::fmt;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while locating, reading or parsing a config file
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The configuration file was not found
    FileNotFound(String),

    /// The file exists but could not be read
    ReadError(String),

    /// A non-comment line without a `key=value` shape
    MalformedLine { line: usize, content: String },

    /// A known key whose value does not parse or is out of range
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Failed to read configuration file: {}", msg)
            }
            ConfigError::MalformedLine { line, content } => {
                write!(f, "Line {}: expected key=value, got '{}'", line, content)
            }
            ConfigError::InvalidValue { line, key, value } => {
                write!(f, "Line {}: invalid value '{}' for '{}'", line, value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
