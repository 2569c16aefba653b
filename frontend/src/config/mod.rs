//! Configuration Module
//!
//! Handles application configuration loading and command-line overrides.

mod app_config;
mod cli;

pub use app_config::AppConfig;
pub use cli::CliArgs;
