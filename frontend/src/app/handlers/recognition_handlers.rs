//! Recognition Handlers
//!
//! Mode selection and the mock recognition job.

use crate::app::state::App;
use std::time::Instant;
use vision::DetectionMode;

impl App {
    pub(in crate::app) fn handle_select_mode(&mut self, mode: DetectionMode) {
        self.page.set_mode(mode);
    }

    pub(in crate::app) fn handle_run_recognition(&mut self) {
        if self.page.image().is_none() {
            self.show_error("Please upload an image first");
            return;
        }

        match self.page.run_recognition(Instant::now()) {
            Ok(mode) => self.show_info(mode.processing_message()),
            Err(e) => {
                self.logger
                    .warn(&format!("[RECOGNITION] Not started: {}", e));
                self.show_error(e.user_message());
            }
        }
    }

    /// Completes the pending job when due and keeps repainting until then
    pub(in crate::app) fn poll_recognition(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if let Some(mode) = self.page.poll(now) {
            self.show_success(mode.completion_message());
        }

        if let Some(remaining) = self.page.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
