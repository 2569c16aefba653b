//! Utility Functions
//!
//! Helper functions for frame conversion and layout.

use egui::{Color32, ColorImage, Vec2};

/// Converts RGB pixel data to EGUI ColorImage
pub fn rgb_to_color_image(width: usize, height: usize, rgb_pixels: &[u8]) -> ColorImage {
    let pixels: Vec<Color32> = rgb_pixels
        .chunks_exact(3)
        .map(|rgb| Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        .collect();

    ColorImage {
        size: [width, height],
        pixels,
        source_size: Vec2::new(width as f32, height as f32),
    }
}

/// Largest size with the image's aspect ratio that fits in `max`
pub fn fit_size(image_width: u32, image_height: u32, max: Vec2) -> Vec2 {
    if image_width == 0 || image_height == 0 {
        return Vec2::ZERO;
    }
    let scale = (max.x / image_width as f32).min(max.y / image_height as f32);
    Vec2::new(image_width as f32 * scale, image_height as f32 * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_color_image() {
        let image = rgb_to_color_image(2, 1, &[255, 0, 0, 0, 0, 255]);

        assert_eq!(image.size, [2, 1]);
        assert_eq!(image.pixels[0], Color32::from_rgb(255, 0, 0));
        assert_eq!(image.pixels[1], Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn test_fit_size_keeps_aspect() {
        let size = fit_size(400, 200, Vec2::new(200.0, 200.0));
        assert_eq!(size, Vec2::new(200.0, 100.0));

        let size = fit_size(100, 400, Vec2::new(200.0, 200.0));
        assert_eq!(size, Vec2::new(50.0, 200.0));
    }

    #[test]
    fn test_fit_size_empty_image() {
        assert_eq!(fit_size(0, 10, Vec2::new(100.0, 100.0)), Vec2::ZERO);
    }
}
