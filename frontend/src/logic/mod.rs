//! Logic Module
//!
//! UI-independent state behind the pages:
//! - `page_controller.rs`: image, results, mode and the pending recognition job
//! - `camera_dialog.rs`: camera dialog model plus off-thread camera acquisition
//! - `refresh.rs`: live sampling driven by egui repaints
//! - `utils.rs`: pixel conversion helpers

pub mod camera_dialog;
pub mod page_controller;
pub mod refresh;
pub mod utils;

pub use camera_dialog::CameraDialogState;
pub use page_controller::PageController;
pub use refresh::EguiRefresh;
