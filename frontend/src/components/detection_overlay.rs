//! Detection Overlay Component
//!
//! Paints detection boxes over an image that is already laid out at `image_rect`.

use super::theme;
use egui::{Align2, Color32, FontId, Rect, Stroke, StrokeKind, Vec2};
use vision::{DetectionSet, render_overlay};

const CAPTION_HEIGHT: f32 = 20.0;

pub fn paint_detection_overlay(ui: &egui::Ui, image_rect: Rect, detections: &DetectionSet) {
    let painter = ui.painter_at(image_rect.expand(CAPTION_HEIGHT));
    let hover = ui.ctx().pointer_hover_pos();

    for overlay in render_overlay(
        detections,
        image_rect.width() as f64,
        image_rect.height() as f64,
    ) {
        let rect = Rect::from_min_size(
            image_rect.min + Vec2::new(overlay.left as f32, overlay.top as f32),
            Vec2::new(overlay.width as f32, overlay.height as f32),
        );
        let hovered = hover.is_some_and(|pos| rect.contains(pos));
        let stroke_width = if hovered { 3.0 } else { 2.0 };

        painter.rect_stroke(
            rect,
            6.0,
            Stroke::new(stroke_width, theme::HIGHLIGHT),
            StrokeKind::Inside,
        );

        // Caption sits just above the box
        let galley = painter.layout_no_wrap(
            overlay.caption,
            FontId::proportional(12.0),
            theme::HIGHLIGHT,
        );
        let caption_rect = Align2::LEFT_BOTTOM.anchor_size(
            rect.left_top() - Vec2::new(0.0, 2.0),
            galley.size() + Vec2::new(8.0, 4.0),
        );
        painter.rect_filled(caption_rect, 4.0, theme::SURFACE);
        painter.galley(caption_rect.min + Vec2::new(4.0, 2.0), galley, Color32::WHITE);
    }
}
