//! Camera Dialog
//!
//! Modal camera view: live preview (with the detection overlay while live
//! detection runs), photo capture, live detection toggle and cancel.

use crate::components::{Button, Dialog, EmptyState, paint_detection_overlay, theme};
use crate::events::UiCommand;
use crate::logic::utils::fit_size;
use egui::{RichText, TextureHandle, Vec2};
use vision::{DetectionSet, SessionState};

const PREVIEW_HEIGHT: f32 = 292.0;

/// Read-only snapshot of the dialog for one frame
pub struct CameraDialogView<'a> {
    pub state: SessionState,
    pub error: Option<&'a str>,
    pub texture: Option<&'a TextureHandle>,
    pub results: &'a DetectionSet,
    pub is_live: bool,
    pub can_capture: bool,
    pub can_toggle_live: bool,
    pub live_frames: u64,
}

pub struct CameraDialog;

impl CameraDialog {
    pub fn show(ctx: &egui::Context, view: CameraDialogView<'_>) -> Option<UiCommand> {
        Dialog::new("camera_dialog").width(560.0).show(ctx, |ui| {
            let mut command = None;

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Camera Capture")
                        .size(20.0)
                        .strong()
                        .color(theme::ACCENT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").on_hover_text("Close camera").clicked() {
                        command = Some(UiCommand::CloseCamera);
                    }
                });
            });
            ui.add_space(12.0);

            Self::render_viewport(ui, &view, &mut command);
            ui.add_space(12.0);
            Self::render_controls(ui, &view, &mut command);

            command
        })
    }

    fn render_viewport(
        ui: &mut egui::Ui,
        view: &CameraDialogView<'_>,
        command: &mut Option<UiCommand>,
    ) {
        if view.state == SessionState::Failed {
            egui::Frame::new()
                .fill(theme::DANGER.gamma_multiply(0.15))
                .stroke(egui::Stroke::new(1.0, theme::DANGER))
                .corner_radius(12.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    EmptyState::new("🚫", "Could not access camera. Please check permissions.")
                        .icon_size(32.0)
                        .description(view.error.unwrap_or_default())
                        .show(ui);
                    ui.vertical_centered(|ui| {
                        if Button::secondary("Try Again")
                            .small()
                            .show(ui)
                            .clicked()
                        {
                            *command = Some(UiCommand::RetryCamera);
                        }
                        ui.add_space(12.0);
                    });
                });
            return;
        }

        let width = ui.available_width();
        egui::Frame::new()
            .fill(egui::Color32::BLACK)
            .corner_radius(12.0)
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(width, PREVIEW_HEIGHT));
                ui.centered_and_justified(|ui| match (view.state, view.texture) {
                    (SessionState::Streaming, Some(texture)) => {
                        let [w, h] = texture.size();
                        let size = fit_size(w as u32, h as u32, Vec2::new(width, PREVIEW_HEIGHT));
                        let response = ui.image((texture.id(), size));
                        if view.is_live {
                            paint_detection_overlay(ui, response.rect, view.results);
                        }
                    }
                    _ => {
                        ui.add(egui::Spinner::new().size(40.0).color(theme::HIGHLIGHT));
                    }
                });
            });

        if view.is_live {
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Live detection: {} frames analyzed", view.live_frames))
                    .size(12.0)
                    .color(theme::HIGHLIGHT),
            );
        }
    }

    fn render_controls(
        ui: &mut egui::Ui,
        view: &CameraDialogView<'_>,
        command: &mut Option<UiCommand>,
    ) {
        if Button::primary("📷 Capture Photo")
            .large()
            .full_width(ui)
            .enabled(view.can_capture)
            .disabled_hint(if view.is_live {
                "Stop live detection to take a photo"
            } else {
                "Waiting for the camera"
            })
            .show(ui)
            .clicked()
        {
            *command = Some(UiCommand::CapturePhoto);
        }
        ui.add_space(8.0);

        let live_label = if view.is_live {
            "⏹ Stop Live Detection"
        } else {
            "▶ Start Live Detection"
        };
        if Button::secondary(live_label)
            .full_width(ui)
            .enabled(view.is_live || view.can_toggle_live)
            .show(ui)
            .clicked()
        {
            *command = Some(UiCommand::ToggleLiveDetection);
        }
        ui.add_space(8.0);

        if Button::secondary("Cancel")
            .full_width(ui)
            .show(ui)
            .clicked()
        {
            *command = Some(UiCommand::CloseCamera);
        }
    }
}
