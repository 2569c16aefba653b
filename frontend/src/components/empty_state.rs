//! EmptyState Component
//!
//! Centered icon and message for content that is not there yet.

use super::theme;
use egui::{RichText, Ui};

pub struct EmptyState {
    icon: String,
    message: String,
    description: Option<String>,
    icon_size: f32,
}

impl EmptyState {
    pub fn new(icon: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            message: message.into(),
            description: None,
            icon_size: 48.0,
        }
    }

    /// Adds a smaller line below the message
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_size = size;
        self
    }

    pub fn show(self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                RichText::new(&self.icon)
                    .size(self.icon_size)
                    .color(theme::HIGHLIGHT),
            );
            ui.add_space(12.0);
            ui.label(RichText::new(&self.message).size(16.0).color(theme::TEXT));

            if let Some(description) = &self.description {
                ui.add_space(6.0);
                ui.label(RichText::new(description).size(13.0).color(theme::HIGHLIGHT));
            }
            ui.add_space(24.0);
        });
    }
}
