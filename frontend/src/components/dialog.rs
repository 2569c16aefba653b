//! Dialog Component
//!
//! Modal window over a dimmed backdrop

use super::theme;
use egui::{Color32, Margin};

/// Modal dialog window builder
pub struct Dialog {
    id: String,
    width: f32,
}

impl Dialog {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            width: 520.0,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Shows the dialog centered above everything else
    pub fn show<R>(self, ctx: &egui::Context, content: impl FnOnce(&mut egui::Ui) -> R) -> R {
        let response = egui::Modal::new(egui::Id::new(&self.id))
            .backdrop_color(Color32::from_black_alpha(200))
            .frame(
                egui::Frame::new()
                    .fill(theme::SURFACE)
                    .corner_radius(16.0)
                    .inner_margin(Margin::same(24)),
            )
            .show(ctx, |ui| {
                ui.set_width(self.width);
                content(ui)
            });

        response.inner
    }
}
