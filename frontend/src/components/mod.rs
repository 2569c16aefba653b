//! Reusable UI Components
//!
//! Styled building blocks shared by the pages. Components render into an
//! `egui::Ui` and report user intent through their return values; they hold
//! no application state.

mod button;
mod card;
mod detection_overlay;
mod detection_toggle;
mod dialog;
mod empty_state;
mod image_uploader;
mod recognition_button;
mod result_panel;
pub mod theme;
mod toast;

pub use button::Button;
pub use card::Card;
pub use detection_overlay::paint_detection_overlay;
pub use detection_toggle::render_detection_toggle;
pub use dialog::Dialog;
pub use empty_state::EmptyState;
pub use image_uploader::{UploaderAction, render_image_uploader};
pub use recognition_button::render_recognition_button;
pub use result_panel::{render_processing_panel, render_result_panel};
pub use toast::Toast;
