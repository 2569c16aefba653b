//! Toast Component
//!
//! Transient notification in the bottom-right corner. Expires on its own
//! after a few seconds or when dismissed.

use super::theme;
use egui::{Color32, RichText};
use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(4);

/// Toast notification type
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastType {
    Error,
    Success,
    Info,
}

impl ToastType {
    fn icon(&self) -> &'static str {
        match self {
            ToastType::Error => "❌",
            ToastType::Success => "✅",
            ToastType::Info => "ℹ",
        }
    }

    fn accent(&self) -> Color32 {
        match self {
            ToastType::Error => theme::DANGER,
            ToastType::Success => theme::SUCCESS,
            ToastType::Info => theme::HIGHLIGHT,
        }
    }
}

/// Toast notification for displaying messages to users
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            message: message.into(),
            toast_type,
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Info)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }

    /// Renders the toast; returns true once it should be removed
    pub fn show(&self, ctx: &egui::Context) -> bool {
        if self.is_expired() {
            return true;
        }

        let mut dismissed = false;
        let accent = self.toast_type.accent();

        egui::Area::new(egui::Id::new("toast"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -20.0))
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme::SURFACE)
                    .stroke(egui::Stroke::new(1.5, accent))
                    .corner_radius(10.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_max_width(340.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(self.toast_type.icon()).size(20.0).color(accent));
                            ui.add_space(8.0);
                            ui.label(RichText::new(&self.message).size(14.0).color(theme::TEXT));
                            ui.add_space(8.0);
                            if ui.small_button("✕").clicked() {
                                dismissed = true;
                            }
                        });
                    });
            });

        // Keep repainting so the toast disappears on time
        ctx.request_repaint_after(Duration::from_millis(250));

        dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_type() {
        assert_eq!(Toast::error("x").toast_type, ToastType::Error);
        assert_eq!(Toast::success("x").toast_type, ToastType::Success);
        assert_eq!(Toast::info("x").toast_type, ToastType::Info);
    }

    #[test]
    fn test_expiry() {
        let mut toast = Toast::info("Image removed");
        assert!(!toast.is_expired());

        toast.created_at = Instant::now() - Duration::from_secs(5);
        assert!(toast.is_expired());
    }
}
