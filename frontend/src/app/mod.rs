//! Application Module - MVU Controller
//!
//! This module implements the Controller layer of the MVU architecture.
//! It owns the page and camera models and routes UI commands to them.
//!
//! # Structure
//!
//! - `state.rs`: Application state definition and MVU loop
//! - `ui_handler.rs`: Command dispatcher for UI actions
//! - `handlers/`: Domain-specific UI command handlers
//!   - `upload_handlers.rs`: dropped files, typed paths, image removal
//!   - `recognition_handlers.rs`: detection mode and mock recognition jobs
//!   - `camera_handlers.rs`: camera dialog, photo capture, live detection
//!
//! # Communication Flow
//!
//! ```text
//! View (pages) --> UiCommand --> ui_handler --> handlers/* --> State mutation
//!
//! Camera worker --> acquisition result --> camera_handlers --> CaptureSession
//! EguiRefresh   --> frame request      --> LiveSampler     --> live frames --> PageController
//! ```

mod handlers;
mod state;
mod ui_handler;

pub use state::App;
