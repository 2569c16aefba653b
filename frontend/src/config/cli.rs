//! Command-line arguments
//!
//! `frontend [--config <path>] [--synthetic-camera]`

use std::path::PathBuf;

/// Parsed command-line options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    /// Explicit configuration file, bypassing the search path
    pub config_path: Option<PathBuf>,
    /// Use the generated test pattern instead of a real camera
    pub synthetic_camera: bool,
}

impl CliArgs {
    /// Parses the process arguments
    pub fn from_env() -> Result<Self, String> {
        Self::parse(std::env::args().skip(1))
    }

    /// Parses arguments (without the program name)
    pub fn parse<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| "--config requires a file path".to_string())?;
                    parsed.config_path = Some(PathBuf::from(path));
                }
                "--synthetic-camera" => parsed.synthetic_camera = true,
                other => return Err(format!("Unknown argument '{}'", other)),
            }
        }

        Ok(parsed)
    }

    pub fn usage() -> &'static str {
        "Usage: frontend [--config <path>] [--synthetic-camera]"
    }
}
