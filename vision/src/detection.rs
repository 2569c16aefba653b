//! Detection result model.
//!
//! All geometry is normalized: a [`BoundingBox`] is a fraction of the source
//! image's width and height with the origin at the top-left corner. Values
//! are validated on construction and immutable afterwards.

use crate::error::{Result, VisionError};
use std::collections::HashSet;

fn check_unit(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(VisionError::InvalidDetection(format!(
            "{} must be within 0.0-1.0, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Normalized rectangle, every field within 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl BoundingBox {
    /// # Errors
    /// `InvalidDetection` if any component is non-finite or outside 0.0-1.0
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        check_unit("x", x)?;
        check_unit("y", y)?;
        check_unit("width", width)?;
        check_unit("height", height)?;
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// One labeled result item
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    id: String,
    label: String,
    confidence: f64,
    bounding_box: Option<BoundingBox>,
}

impl Detection {
    /// Creates a detection without a location.
    ///
    /// # Errors
    /// `InvalidDetection` for an empty id or a confidence outside 0.0-1.0
    pub fn new(id: impl Into<String>, label: impl Into<String>, confidence: f64) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(VisionError::InvalidDetection(
                "Detection id must not be empty".to_string(),
            ));
        }
        check_unit("confidence", confidence)?;

        Ok(Self {
            id,
            label: label.into(),
            confidence,
            bounding_box: None,
        })
    }

    pub fn with_box(mut self, bounding_box: BoundingBox) -> Self {
        self.bounding_box = Some(bounding_box);
        self
    }

    /// Builds from values known to be in range (hardcoded mock tables).
    pub(crate) fn from_parts(id: &str, label: &str, confidence: f64, bbox: [f64; 4]) -> Self {
        let [x, y, width, height] = bbox;
        Self {
            id: id.to_string(),
            label: label.to_string(),
            confidence,
            bounding_box: Some(BoundingBox {
                x,
                y,
                width,
                height,
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bounding_box.as_ref()
    }

    /// Confidence as a whole percentage, rounded half up
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// Ordered analyzer output; replaced wholesale, never merged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionSet {
    detections: Vec<Detection>,
}

impl DetectionSet {
    /// # Errors
    /// `InvalidDetection` if two detections share an id
    pub fn new(detections: Vec<Detection>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(detections.len());
        for detection in &detections {
            if !seen.insert(detection.id()) {
                return Err(VisionError::InvalidDetection(format!(
                    "Duplicate detection id '{}'",
                    detection.id()
                )));
            }
        }
        Ok(Self { detections })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Detection> {
        self.detections.iter()
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    pub fn as_slice(&self) -> &[Detection] {
        &self.detections
    }
}

impl<'a> IntoIterator for &'a DetectionSet {
    type Item = &'a Detection;
    type IntoIter = std::slice::Iter<'a, Detection>;

    fn into_iter(self) -> Self::IntoIter {
        self.detections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_accepts_edges() {
        assert!(BoundingBox::new(0.0, 0.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_bounding_box_rejects_out_of_range() {
        assert!(BoundingBox::new(-0.1, 0.0, 0.5, 0.5).is_err());
        assert!(BoundingBox::new(0.0, 0.0, 1.01, 0.5).is_err());
        assert!(BoundingBox::new(0.0, f64::NAN, 0.5, 0.5).is_err());
        assert!(BoundingBox::new(0.0, 0.0, 0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_detection_validation() {
        assert!(Detection::new("1", "Person", 0.98).is_ok());
        assert!(Detection::new("", "Person", 0.5).is_err());
        assert!(Detection::new("1", "Person", 1.2).is_err());
    }

    #[test]
    fn test_confidence_percent_rounds() {
        let d = Detection::new("1", "Car", 0.886).unwrap();
        assert_eq!(d.confidence_percent(), 89);
        let d = Detection::new("1", "Car", 0.125).unwrap();
        assert_eq!(d.confidence_percent(), 13);
        let d = Detection::new("2", "Car", 0.0).unwrap();
        assert_eq!(d.confidence_percent(), 0);
    }

    #[test]
    fn test_set_rejects_duplicate_ids() {
        let a = Detection::new("1", "Tree", 0.9).unwrap();
        let b = Detection::new("1", "Car", 0.8).unwrap();

        let result = DetectionSet::new(vec![a, b]);

        assert!(matches!(result, Err(VisionError::InvalidDetection(msg)) if msg.contains("'1'")));
    }

    #[test]
    fn test_set_keeps_order() {
        let set = DetectionSet::new(vec![
            Detection::new("b", "Second", 0.5).unwrap(),
            Detection::new("a", "First", 0.5).unwrap(),
        ])
        .unwrap();

        let ids: Vec<&str> = set.iter().map(Detection::id).collect();
        assert_eq!(ids, ["b", "a"]);
        assert!(DetectionSet::empty().is_empty());
    }
}
