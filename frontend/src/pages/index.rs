//! Recognition Page
//!
//! Header with the mode toggle, then two columns: upload and preview on the
//! left, the recognition button, results and tips on the right.

use crate::components::{
    Card, EmptyState, UploaderAction, paint_detection_overlay, render_detection_toggle,
    render_image_uploader, render_processing_panel, render_recognition_button,
    render_result_panel, theme,
};
use crate::events::UiCommand;
use crate::logic::PageController;
use crate::logic::utils::fit_size;
use egui::{RichText, TextureHandle, Vec2};
use std::path::PathBuf;

const MAX_PREVIEW_HEIGHT: f32 = 480.0;
const COLUMN_GAP: f32 = 32.0;

const TIPS: [&str; 3] = [
    "Upload clear, high-resolution images for better results",
    "Switch detection modes depending on your analysis needs",
    "Hover over detected areas for more information",
];

/// Everything the page reads, plus the path field it edits
pub struct IndexView<'a> {
    pub page: &'a PageController,
    pub preview_texture: Option<&'a TextureHandle>,
    pub path_input: &'a mut String,
    pub is_drag_active: bool,
}

pub struct IndexPage;

impl IndexPage {
    pub fn show(ui: &mut egui::Ui, view: IndexView<'_>) -> Option<UiCommand> {
        let mut command = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(32.0);
            Self::render_header(ui, view.page, &mut command);
            ui.add_space(32.0);

            let total = ui.available_width();
            let left_width = (total - COLUMN_GAP) * 0.6;
            let right_width = total - COLUMN_GAP - left_width;

            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.set_width(left_width);
                    Self::render_upload(
                        ui,
                        view.path_input,
                        view.is_drag_active,
                        view.page,
                        &mut command,
                    );
                    ui.add_space(24.0);
                    Self::render_preview(ui, view.page, view.preview_texture);
                });

                ui.add_space(COLUMN_GAP);

                ui.vertical(|ui| {
                    ui.set_width(right_width);
                    Self::render_actions(ui, view.page, &mut command);
                });
            });
            ui.add_space(32.0);
        });

        command
    }

    fn render_header(ui: &mut egui::Ui, page: &PageController, command: &mut Option<UiCommand>) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("AI Image Recognition")
                    .size(40.0)
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "Upload an image to detect objects, analyze scenes, or identify disaster areas using advanced AI recognition.",
                )
                .size(17.0)
                .color(theme::TEXT),
            );
            ui.add_space(20.0);
            if let Some(mode) = render_detection_toggle(ui, page.mode()) {
                *command = Some(UiCommand::SelectMode(mode));
            }
        });
    }

    fn render_upload(
        ui: &mut egui::Ui,
        path_input: &mut String,
        is_drag_active: bool,
        page: &PageController,
        command: &mut Option<UiCommand>,
    ) {
        Card::new().title("Image Upload").show(ui, |ui| {
            let has_image = page.image().is_some();
            if let Some(action) = render_image_uploader(ui, path_input, is_drag_active, has_image) {
                *command = Some(match action {
                    UploaderAction::LoadPath(path) => UiCommand::LoadImagePath(PathBuf::from(path)),
                    UploaderAction::OpenCamera => UiCommand::OpenCamera,
                    UploaderAction::RemoveImage => UiCommand::RemoveImage,
                });
            }
        });
    }

    fn render_preview(ui: &mut egui::Ui, page: &PageController, texture: Option<&TextureHandle>) {
        if page.image().is_none() && !page.is_live() {
            return;
        }

        let title = if page.is_live() {
            "Live Camera"
        } else {
            "Image Preview"
        };

        Card::new().title(title).show(ui, |ui| {
            match (page.preview(), texture) {
                (Some(preview), Some(texture)) => {
                    let max = Vec2::new(ui.available_width(), MAX_PREVIEW_HEIGHT);
                    let size = fit_size(preview.width, preview.height, max);
                    let response = ui.add(
                        egui::Image::new((texture.id(), size)).corner_radius(12.0),
                    );
                    if !page.results().is_empty() {
                        paint_detection_overlay(ui, response.rect, page.results());
                    }
                }
                _ => {
                    let name = page.image().map(|f| f.name.as_str()).unwrap_or_default();
                    EmptyState::new("🖼", "Preview unavailable")
                        .description(name)
                        .show(ui);
                }
            }
        });
    }

    fn render_actions(ui: &mut egui::Ui, page: &PageController, command: &mut Option<UiCommand>) {
        Card::new().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let disabled = page.image().is_none();
                if render_recognition_button(ui, page.is_processing(), disabled) {
                    *command = Some(UiCommand::RunRecognition);
                }
            });
        });
        ui.add_space(24.0);

        if let Some(mode) = page.processing_mode() {
            render_processing_panel(ui, mode);
            ui.add_space(24.0);
        } else if !page.results().is_empty() {
            let time = page.results_time();
            render_result_panel(ui, page.results(), page.mode(), time.as_deref());
            ui.add_space(24.0);
        }

        Card::new().title("Tips").show(ui, |ui| {
            for tip in TIPS {
                ui.label(RichText::new(format!("•  {}", tip)).size(14.0).color(theme::TEXT));
                ui.add_space(4.0);
            }
        });
    }
}
