//! Upload Handlers
//!
//! Dropped files and typed paths both end in `accept_upload`, so the
//! single-image and type rules are checked in one place.

use crate::app::state::App;
use std::path::PathBuf;
use vision::{DroppedFile, accept_upload, load_image_file};

impl App {
    pub(in crate::app) fn handle_files_dropped(&mut self, files: Vec<DroppedFile>) {
        if self.camera.is_some() {
            self.logger
                .debug("[UPLOAD] Drop ignored while the camera dialog is open");
            return;
        }

        match accept_upload(files) {
            Ok(file) => {
                self.page.load_image(file);
                self.show_success("Image uploaded successfully");
            }
            Err(e) => {
                self.logger.warn(&format!("[UPLOAD] Drop rejected: {}", e));
                self.show_error(e.user_message());
            }
        }
    }

    pub(in crate::app) fn handle_load_image_path(&mut self, path: PathBuf) {
        let dropped = match load_image_file(&path) {
            Ok(dropped) => dropped,
            Err(e) => {
                self.logger
                    .warn(&format!("[UPLOAD] Could not read {:?}: {}", path, e));
                self.show_error(format!("Could not read file: {}", path.display()));
                return;
            }
        };

        match accept_upload(vec![dropped]) {
            Ok(file) => {
                self.path_input.clear();
                self.page.load_image(file);
                self.show_success("Image uploaded successfully");
            }
            Err(e) => {
                self.logger
                    .warn(&format!("[UPLOAD] {:?} rejected: {}", path, e));
                self.show_error(e.user_message());
            }
        }
    }

    pub(in crate::app) fn handle_remove_image(&mut self) {
        if self.page.remove_image() {
            self.show_info("Image removed");
        }
    }
}
