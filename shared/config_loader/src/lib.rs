//! # Config Loader
//!
//! Locates and reads `key=value` configuration files.
//!
//! ```no_run
//! use config_loader::{find_and_load, parse_key_values};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let content = find_and_load("vision.conf")?;
//!     for entry in parse_key_values(&content)? {
//!         println!("{} = {}", entry.key, entry.value);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file search
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// One `key=value` pair, with the 1-based line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub line: usize,
}

/// Reads a configuration file into a String without interpreting it.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))
}

/// Searches for a configuration file in common locations.
///
/// Search order:
/// 1. `CONFIG_PATH` environment variable (if it points to an existing file)
/// 2. `./config/{filename}`
/// 3. `./{filename}`
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let path_buf = PathBuf::from(&path);
        if path_buf.is_file() {
            return Ok(path_buf);
        }
    }

    let candidates = [
        PathBuf::from("./config").join(filename),
        PathBuf::from("./").join(filename),
    ];

    candidates
        .into_iter()
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            ConfigError::FileNotFound(format!(
                "'{}' not found. Searched: {} env var, ./config/{}, ./{}",
                filename, CONFIG_PATH_ENV, filename, filename
            ))
        })
}

/// Finds and loads a configuration file in one step.
pub fn find_and_load(filename: &str) -> Result<String> {
    let path = find_config_file(filename)?;
    load_config_file(path)
}

/// Parses `key=value` lines.
///
/// Blank lines and lines starting with `#` are skipped. Keys and values are
/// trimmed; the value may itself contain `=`. A line without `=` or with an
/// empty key is reported as [`ConfigError::MalformedLine`].
pub fn parse_key_values(content: &str) -> Result<Vec<ConfigEntry>> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = || ConfigError::MalformedLine {
            line: index + 1,
            content: line.to_string(),
        };

        let (key, value) = line.split_once('=').ok_or_else(malformed)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(malformed());
        }

        entries.push(ConfigEntry {
            key: key.to_string(),
            value: value.trim().to_string(),
            line: index + 1,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config_file("/path/that/does/not/exist.conf");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vision.conf");
        fs::write(&path, "camera_fps=24\n").unwrap();

        assert_eq!(load_config_file(&path).unwrap(), "camera_fps=24\n");
    }

    #[test]
    fn test_find_nonexistent_file() {
        let result = find_config_file("file_that_definitely_does_not_exist_12345.conf");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let content = "\
            # camera\n\
            \n\
            camera_fps = 30\n\
            log_path=vision.log\n\
        ";

        let entries = parse_key_values(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "camera_fps");
        assert_eq!(entries[0].value, "30");
        assert_eq!(entries[1].key, "log_path");
        assert_eq!(entries[1].value, "vision.log");
    }

    #[test]
    fn test_parse_value_may_contain_equals() {
        let entries = parse_key_values("label=a=b").unwrap();
        assert_eq!(entries[0].value, "a=b");
    }

    #[test]
    fn test_parse_reports_line_of_malformed_entry() {
        let result = parse_key_values("camera_fps=30\nnot a pair\n");
        assert_eq!(
            result,
            Err(ConfigError::MalformedLine {
                line: 2,
                content: "not a pair".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_empty_key() {
        assert!(matches!(
            parse_key_values("=30"),
            Err(ConfigError::MalformedLine { line: 1, .. })
        ));
    }
}
