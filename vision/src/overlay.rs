//! Detection overlay geometry.
//!
//! Maps normalized boxes onto the pixel rectangle an image is displayed in.
//! Pure and stateless: the same input always yields the same rectangles.

use crate::detection::DetectionSet;

/// One rectangle to draw, in displayed-image pixels relative to its top-left
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayBox {
    pub id: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// `label (NN%)`
    pub caption: String,
}

/// Lays out every located detection for a `display_width` x `display_height` image.
///
/// Detections without a bounding box are skipped.
pub fn render_overlay(
    detections: &DetectionSet,
    display_width: f64,
    display_height: f64,
) -> Vec<OverlayBox> {
    detections
        .iter()
        .filter_map(|detection| {
            let bbox = detection.bounding_box()?;
            Some(OverlayBox {
                id: detection.id().to_string(),
                left: bbox.x() * display_width,
                top: bbox.y() * display_height,
                width: bbox.width() * display_width,
                height: bbox.height() * display_height,
                caption: format!(
                    "{} ({}%)",
                    detection.label(),
                    detection.confidence_percent()
                ),
            })
        })
        .collect()
}
