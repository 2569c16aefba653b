//! Application Configuration
//!
//! Manages logging, camera and recognition settings. Values come from a
//! `vision.conf` file of `key=value` lines; anything not set keeps its default.

use config_loader::{ConfigError, parse_key_values};
use logging::LogLevel;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "vision.conf";

/// Application configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Path to the log file
    pub log_path: PathBuf,
    /// Logging level
    pub log_level: LogLevel,
    /// Camera frame rate requested from the device
    pub camera_fps: f64,
    /// Mock recognition delay
    pub recognition_delay: Duration,
    /// Minimum spacing between live result updates
    pub live_interval: Duration,
    /// JPEG quality for photos (0.0-1.0)
    pub jpeg_quality: f64,
    /// Use the synthetic test-pattern camera
    pub synthetic_camera: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("vision.log"),
            log_level: LogLevel::Info,
            camera_fps: 30.0,
            recognition_delay: vision::constants::analysis::RECOGNITION_DELAY,
            live_interval: vision::constants::analysis::LIVE_RESULT_INTERVAL,
            jpeg_quality: vision::constants::capture::JPEG_QUALITY,
            synthetic_camera: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a .conf file
    ///
    /// Format:
    /// ```text
    /// log_path=vision.log
    /// log_level=info
    /// camera_fps=30
    /// recognition_delay_ms=2500
    /// live_interval_ms=1000
    /// jpeg_quality=0.9
    /// synthetic_camera=false
    /// ```
    ///
    /// # Returns
    /// The configuration plus one warning per ignored key
    pub fn load_from_file(path: &Path) -> Result<(Self, Vec<String>), String> {
        let content = config_loader::load_config_file(path).map_err(|e| e.to_string())?;
        Self::parse(&content).map_err(|e| format!("{}: {}", path.display(), e))
    }

    /// Parses configuration text, starting from the defaults
    pub fn parse(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        for entry in parse_key_values(content)? {
            let value = entry.value.as_str();
            let invalid = || ConfigError::InvalidValue {
                line: entry.line,
                key: entry.key.clone(),
                value: entry.value.clone(),
            };

            match entry.key.as_str() {
                "log_path" => config.log_path = PathBuf::from(value),
                "log_level" => config.log_level = value.parse().map_err(|_| invalid())?,
                "camera_fps" => {
                    config.camera_fps = value
                        .parse::<f64>()
                        .ok()
                        .filter(|fps| fps.is_finite() && *fps > 0.0)
                        .ok_or_else(invalid)?;
                }
                "recognition_delay_ms" => {
                    config.recognition_delay =
                        Duration::from_millis(value.parse().map_err(|_| invalid())?);
                }
                "live_interval_ms" => {
                    config.live_interval =
                        Duration::from_millis(value.parse().map_err(|_| invalid())?);
                }
                "jpeg_quality" => {
                    config.jpeg_quality = value
                        .parse::<f64>()
                        .ok()
                        .filter(|q| (0.0..=1.0).contains(q))
                        .ok_or_else(invalid)?;
                }
                "synthetic_camera" => {
                    config.synthetic_camera = value.parse().map_err(|_| invalid())?;
                }
                other => warnings.push(format!(
                    "Unknown configuration key '{}' on line {} ignored",
                    other, entry.line
                )),
            }
        }

        Ok((config, warnings))
    }

    /// Loads from `path`, or searches for `vision.conf`
    /// (`CONFIG_PATH`, `./config/`, `./`). Falls back to defaults.
    pub fn load(path: Option<&Path>) -> (Self, Vec<String>) {
        let resolved = match path {
            Some(path) => Ok(path.to_path_buf()),
            None => config_loader::find_config_file(CONFIG_FILE_NAME),
        };

        match resolved {
            Ok(path) => match Self::load_from_file(&path) {
                Ok((config, warnings)) => {
                    println!("Loaded configuration from: {}", path.display());
                    (config, warnings)
                }
                Err(e) => {
                    eprintln!("Failed to load configuration: {}", e);
                    (Self::default(), vec![format!("Using defaults: {}", e)])
                }
            },
            Err(_) => {
                println!("No configuration file found, using defaults");
                (Self::default(), Vec::new())
            }
        }
    }
}
