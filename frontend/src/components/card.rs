//! Card Component
//!
//! Rounded panel with an optional accent-colored heading.

use super::theme;
use egui::{Color32, RichText};

pub struct Card {
    title: Option<String>,
    inner_margin: f32,
    min_height: Option<f32>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            inner_margin: 24.0,
            min_height: None,
        }
    }

    /// Adds a heading above the content
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    /// Renders the card with custom content, filling the available width
    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        egui::Frame::new()
            .fill(theme::SURFACE)
            .corner_radius(16.0)
            .inner_margin(self.inner_margin)
            .shadow(egui::epaint::Shadow {
                offset: [0, 6],
                blur: 24,
                spread: 0,
                color: Color32::from_black_alpha(60),
            })
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                if let Some(height) = self.min_height {
                    ui.set_min_height(height);
                }
                if let Some(title) = &self.title {
                    ui.label(RichText::new(title).size(20.0).strong().color(theme::ACCENT));
                    ui.add_space(12.0);
                }
                add_contents(ui)
            })
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}
