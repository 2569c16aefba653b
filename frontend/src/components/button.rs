//! Button Component
//!
//! Styled buttons in three variants and three sizes. Disabled buttons can
//! explain themselves with a hover hint.

use super::theme;
use egui::{Color32, FontId, RichText, Stroke, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
enum ButtonVariant {
    /// Green call to action (Run Recognition, Capture Photo)
    Primary,
    /// Muted teal (Cancel, Use Camera)
    Secondary,
    Danger,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ButtonSize {
    Small,
    Regular,
    Large,
}

impl ButtonSize {
    /// (text size, height)
    fn metrics(self) -> (f32, f32) {
        match self {
            ButtonSize::Small => (14.0, 32.0),
            ButtonSize::Regular => (16.0, 40.0),
            ButtonSize::Large => (18.0, 48.0),
        }
    }
}

pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    width: Option<f32>,
    enabled: bool,
    disabled_hint: Option<String>,
}

impl Button {
    pub fn primary(label: impl Into<String>) -> Self {
        Self::with_variant(label, ButtonVariant::Primary)
    }

    pub fn secondary(label: impl Into<String>) -> Self {
        Self::with_variant(label, ButtonVariant::Secondary)
    }

    pub fn danger(label: impl Into<String>) -> Self {
        Self::with_variant(label, ButtonVariant::Danger)
    }

    fn with_variant(label: impl Into<String>, variant: ButtonVariant) -> Self {
        Self {
            label: label.into(),
            variant,
            size: ButtonSize::Regular,
            width: None,
            enabled: true,
            disabled_hint: None,
        }
    }

    pub fn small(mut self) -> Self {
        self.size = ButtonSize::Small;
        self
    }

    pub fn large(mut self) -> Self {
        self.size = ButtonSize::Large;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Stretches the button over the available width
    pub fn full_width(self, ui: &egui::Ui) -> Self {
        let width = ui.available_width();
        self.width(width)
    }

    /// Disabled buttons are drawn dimmed and never report clicks
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Hover text shown only while the button is disabled
    pub fn disabled_hint(mut self, hint: impl Into<String>) -> Self {
        self.disabled_hint = Some(hint.into());
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let (text_size, height) = self.size.metrics();
        let (fill, outline) = match self.variant {
            ButtonVariant::Primary => (theme::SUCCESS, Stroke::NONE),
            ButtonVariant::Secondary => (theme::SURFACE_ALT, Stroke::new(1.0, theme::BORDER)),
            ButtonVariant::Danger => (theme::DANGER, Stroke::NONE),
        };

        let button = egui::Button::new(
            RichText::new(self.label)
                .font(FontId::proportional(text_size))
                .color(Color32::WHITE),
        )
        .fill(fill)
        .stroke(outline)
        .corner_radius(12.0)
        .min_size(Vec2::new(self.width.unwrap_or(0.0), height));

        let response = ui.add_enabled(self.enabled, button);
        match self.disabled_hint {
            Some(hint) => response.on_disabled_hover_text(hint),
            None => response,
        }
    }
}
