//! Camera Handlers
//!
//! Opens and closes the camera dialog, takes photos, toggles live
//! detection, and pumps the per-frame camera work (acquisition results,
//! preview frames, live sampling).

use crate::app::state::App;
use crate::logic::CameraDialogState;
use std::time::{Duration, Instant};
use vision::SampleOutcome;

/// Repaint cadence while the camera worker is still opening the device
const ACQUIRE_POLL_INTERVAL: Duration = Duration::from_millis(50);

impl App {
    pub(in crate::app) fn handle_open_camera(&mut self) {
        if self.camera.is_some() {
            self.logger.debug("[CAMERA] Dialog already open");
            return;
        }

        self.logger.info("[CAMERA] Opening camera dialog");
        let mut dialog = CameraDialogState::open(
            self.devices.clone(),
            self.config.jpeg_quality,
            self.logger.for_component("Camera"),
        );
        if let Err(e) = dialog.start() {
            self.show_error(e.user_message());
        }
        self.camera = Some(dialog);
    }

    pub(in crate::app) fn handle_retry_camera(&mut self) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        self.logger.info("[CAMERA] Retrying camera access");
        if let Err(e) = camera.start() {
            self.show_error(e.user_message());
        }
    }

    pub(in crate::app) fn handle_capture_photo(&mut self) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };

        match camera.capture_mut().capture_photo() {
            Ok(file) => {
                // The capture stopped the session and closed the dialog model
                self.camera = None;
                self.camera_texture = None;
                self.page.load_image(file);
                self.show_success("Photo captured successfully!");
            }
            Err(e) => {
                self.logger
                    .error(&format!("[CAMERA] Photo capture failed: {}", e));
                self.show_error(e.user_message());
            }
        }
    }

    pub(in crate::app) fn handle_toggle_live_detection(&mut self) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        let capture = camera.capture_mut();

        if capture.is_live() {
            capture.disarm_live(&mut self.refresh);
            self.page.end_live();
            self.show_info("Live detection stopped");
            return;
        }

        let frames = self.live_tx.clone();
        let armed = capture.arm_live(
            &mut self.refresh,
            Box::new(move |frame| {
                // The receiver lives as long as the App
                let _ = frames.send(frame);
            }),
        );
        match armed {
            Ok(()) => self.show_info("Live detection started"),
            Err(e) => self.show_error(e.user_message()),
        }
    }

    pub(in crate::app) fn handle_close_camera(&mut self) {
        if let Some(mut camera) = self.camera.take() {
            camera.capture_mut().close(&mut self.refresh);
            self.logger.info("[CAMERA] Camera dialog closed");
        }
        while self.live_rx.try_recv().is_ok() {}
        self.page.end_live();
        self.camera_texture = None;
    }

    /// Per-frame camera work; a no-op while the dialog is closed.
    pub(in crate::app) fn pump_camera(&mut self, ctx: &egui::Context) {
        self.poll_acquisition(ctx);
        self.pump_live_sampling();
        self.refresh_camera_preview(ctx);
    }

    fn poll_acquisition(&mut self, ctx: &egui::Context) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };

        match camera.poll_acquisition() {
            Some(Ok(())) => ctx.request_repaint(),
            Some(Err(e)) => {
                self.logger
                    .warn(&format!("[CAMERA] Acquisition failed: {}", e));
                self.show_error(e.user_message());
            }
            None if camera.is_acquiring() => ctx.request_repaint_after(ACQUIRE_POLL_INTERVAL),
            None => {}
        }
    }

    fn pump_live_sampling(&mut self) {
        if let Some(request) = self.refresh.take_due()
            && let Some(camera) = self.camera.as_mut()
        {
            match camera.capture_mut().on_refresh(request, &mut self.refresh) {
                Ok(SampleOutcome::Delivered { .. }) | Ok(SampleOutcome::Ignored) => {}
                Ok(SampleOutcome::Stopped) => self.page.end_live(),
                Err(e) => {
                    self.logger
                        .error(&format!("[SAMPLER] Live detection stopped: {}", e));
                    self.page.end_live();
                    self.show_error(e.user_message());
                }
            }
        }

        let now = Instant::now();
        while let Ok(frame) = self.live_rx.try_recv() {
            self.page.live_frame(frame, now);
        }
    }

    fn refresh_camera_preview(&mut self, ctx: &egui::Context) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        if !camera.capture().session().is_streaming() || camera.capture().is_live() {
            return;
        }

        let interval = Duration::from_secs_f64(1.0 / self.config.camera_fps.max(1.0));
        let due = self
            .last_camera_frame
            .is_none_or(|last| last.elapsed() >= interval);
        if due && let Some(frame) = camera.grab_preview() {
            self.last_camera_frame = Some(Instant::now());
            self.set_camera_texture(ctx, &frame);
        }
        ctx.request_repaint_after(interval);
    }
}
