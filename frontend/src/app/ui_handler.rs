//! UI Command Handler
//!
//! This module dispatches UI commands to specialized handlers.
//! Implementation details are split into domain-specific modules:
//! - upload_handlers: dropped files, typed paths, image removal
//! - recognition_handlers: mode selection and recognition jobs
//! - camera_handlers: camera dialog, photo capture and live detection

use super::state::App;
use crate::events::UiCommand;

impl App {
    /// Dispatches UI commands to appropriate handlers
    /// This is the main entry point for all UI actions
    pub(super) fn handle_ui_command(&mut self, command: UiCommand) {
        match &command {
            // Payloads can be megabytes; log names only
            UiCommand::FilesDropped(files) => self.logger.debug(&format!(
                "[UI] Handling command: FilesDropped({:?})",
                files.iter().map(|f| f.name.as_str()).collect::<Vec<_>>()
            )),
            other => self
                .logger
                .debug(&format!("[UI] Handling command: {:?}", other)),
        }

        match command {
            // Recognition
            UiCommand::SelectMode(mode) => self.handle_select_mode(mode),
            UiCommand::RunRecognition => self.handle_run_recognition(),

            // Upload
            UiCommand::FilesDropped(files) => self.handle_files_dropped(files),
            UiCommand::LoadImagePath(path) => self.handle_load_image_path(path),
            UiCommand::RemoveImage => self.handle_remove_image(),

            // Camera dialog
            UiCommand::OpenCamera => self.handle_open_camera(),
            UiCommand::RetryCamera => self.handle_retry_camera(),
            UiCommand::CapturePhoto => self.handle_capture_photo(),
            UiCommand::ToggleLiveDetection => self.handle_toggle_live_detection(),
            UiCommand::CloseCamera => self.handle_close_camera(),
        }
    }
}
