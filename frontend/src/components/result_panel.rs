//! Result Panel Component
//!
//! Lists the current detections with their confidence, or a spinner while
//! the mock analyzer is working.

use super::{Card, theme};
use egui::RichText;
use vision::{DetectionMode, DetectionSet};

/// Renders the result list; nothing is drawn for an empty set
pub fn render_result_panel(
    ui: &mut egui::Ui,
    results: &DetectionSet,
    mode: DetectionMode,
    completed_at: Option<&str>,
) {
    if results.is_empty() {
        return;
    }

    Card::new().title(mode.results_title()).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .max_height(256.0)
            .show(ui, |ui| {
                for detection in results {
                    egui::Frame::new()
                        .fill(theme::SURFACE_ALT)
                        .corner_radius(10.0)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new("●").color(theme::HIGHLIGHT));
                                ui.label(RichText::new(detection.label()).color(theme::TEXT).strong());
                                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                    ui.label(
                                        RichText::new(format!("{}%", detection.confidence_percent()))
                                            .color(theme::HIGHLIGHT)
                                            .strong(),
                                    );
                                });
                            });
                        });
                    ui.add_space(6.0);
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} items detected", results.len()))
                    .size(12.0)
                    .color(theme::HIGHLIGHT),
            );
            if let Some(time) = completed_at {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(time).size(12.0).color(theme::HIGHLIGHT));
                });
            }
        });
    });
}

/// Spinner with the mode's processing message
pub fn render_processing_panel(ui: &mut egui::Ui, mode: DetectionMode) {
    Card::new().min_height(256.0).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.add(egui::Spinner::new().size(48.0).color(theme::HIGHLIGHT));
            ui.add_space(16.0);
            ui.label(RichText::new(mode.processing_message()).color(theme::TEXT));
        });
    });
}
