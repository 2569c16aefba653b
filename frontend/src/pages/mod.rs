//! Pages
//!
//! `index`: the recognition page. `camera_dialog`: the modal camera view
//! shown on top of it.

pub mod camera_dialog;
pub mod index;

pub use camera_dialog::{CameraDialog, CameraDialogView};
pub use index::{IndexPage, IndexView};
