//! UI Command Handlers
//!
//! This module organizes UI command handlers by domain.
//! Each submodule implements handlers for App via `impl` blocks.

mod camera_handlers;
mod recognition_handlers;
mod upload_handlers;
