//! Detection Toggle Component
//!
//! Two-segment switch between object and disaster detection.

use super::theme;
use egui::{RichText, Vec2};
use vision::DetectionMode;

/// Renders the toggle; returns the newly selected mode, if it changed
pub fn render_detection_toggle(ui: &mut egui::Ui, active: DetectionMode) -> Option<DetectionMode> {
    let mut selected = None;

    egui::Frame::new()
        .fill(theme::SURFACE_ALT)
        .corner_radius(12.0)
        .inner_margin(4.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for mode in DetectionMode::ALL {
                    let is_active = mode == active;
                    let text = RichText::new(mode.label()).size(14.0).color(if is_active {
                        theme::ACCENT
                    } else {
                        theme::TEXT
                    });
                    let fill = if is_active {
                        theme::SURFACE
                    } else {
                        theme::SURFACE_ALT
                    };

                    let clicked = ui
                        .add(
                            egui::Button::new(text)
                                .fill(fill)
                                .stroke(egui::Stroke::NONE)
                                .corner_radius(8.0)
                                .min_size(Vec2::new(150.0, 32.0)),
                        )
                        .clicked();

                    if clicked && !is_active {
                        selected = Some(mode);
                    }
                }
            });
        });

    selected
}
