//! Image Uploader Component
//!
//! Drop zone for image files plus a path field for loading from disk.
//! Actual drops are read from egui's input by the app; this component only
//! shows whether a drag is hovering.

use super::{Button, theme};
use egui::{RichText, Stroke};

/// What the user asked the uploader to do
#[derive(Debug, Clone, PartialEq)]
pub enum UploaderAction {
    LoadPath(String),
    OpenCamera,
    RemoveImage,
}

pub fn render_image_uploader(
    ui: &mut egui::Ui,
    path_input: &mut String,
    is_drag_active: bool,
    has_image: bool,
) -> Option<UploaderAction> {
    let mut action = None;

    let border = if is_drag_active {
        theme::HIGHLIGHT
    } else {
        theme::BORDER
    };

    egui::Frame::new()
        .stroke(Stroke::new(2.0, border))
        .corner_radius(16.0)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("⬆").size(48.0).color(theme::HIGHLIGHT));
                ui.add_space(8.0);
                let prompt = if is_drag_active {
                    "Drop the image here..."
                } else {
                    "Drag & drop an image here, or enter its path below"
                };
                ui.label(RichText::new(prompt).color(theme::TEXT));
                ui.label(
                    RichText::new("Supports: JPG, PNG, GIF")
                        .size(13.0)
                        .color(theme::HIGHLIGHT),
                );
            });
        });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        let field = ui.add(
            egui::TextEdit::singleline(path_input)
                .hint_text("/path/to/image.jpg")
                .desired_width(ui.available_width() - 90.0),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = Button::secondary("Load")
            .small()
            .enabled(!path_input.trim().is_empty())
            .show(ui)
            .clicked();

        if (submitted || clicked) && !path_input.trim().is_empty() {
            action = Some(UploaderAction::LoadPath(path_input.trim().to_string()));
        }
    });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if Button::secondary("📷 Use Camera")
            .small()
            .width(140.0)
            .show(ui)
            .clicked()
        {
            action = Some(UploaderAction::OpenCamera);
        }

        if has_image
            && Button::danger("✕ Remove image")
                .small()
                .width(140.0)
                .show(ui)
                .clicked()
        {
            action = Some(UploaderAction::RemoveImage);
        }
    });

    action
}
