//! Decoding of uploaded or captured images for preview

use super::converters::swap_red_blue;
use crate::error::{Result, VisionError};
use opencv::core::{CV_8UC3, Vector};
use opencv::imgcodecs;
use opencv::prelude::*;

/// RGB8 raster decoded from an image file
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

/// Decodes JPEG/PNG (and GIF where the OpenCV build supports it) into RGB8.
///
/// # Errors
/// `UnsupportedFile` if the bytes are not a decodable image
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage> {
    if bytes.is_empty() {
        return Err(VisionError::UnsupportedFile("Image is empty".to_string()));
    }

    let buffer = Vector::<u8>::from_slice(bytes);
    let mat = imgcodecs::imdecode(&buffer, imgcodecs::IMREAD_COLOR)
        .map_err(|e| VisionError::UnsupportedFile(format!("Could not decode image: {}", e)))?;

    if mat.empty() {
        return Err(VisionError::UnsupportedFile(
            "Could not decode image".to_string(),
        ));
    }
    if mat.typ() != CV_8UC3 || !mat.is_continuous() {
        return Err(VisionError::UnsupportedFile(format!(
            "Unexpected decoded pixel layout (type {})",
            mat.typ()
        )));
    }

    Ok(DecodedImage {
        width: mat.cols() as u32,
        height: mat.rows() as u32,
        rgb: swap_red_blue(mat.data_bytes()?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{JpegEncoder, StillEncoder};
    use crate::frame::CapturedFrame;

    #[test]
    fn test_decode_encoded_frame() {
        let pixels = [0u8, 0, 255].repeat(12 * 10);
        let frame = CapturedFrame::from_rgb(12, 10, pixels, 1).unwrap();
        let jpeg = JpegEncoder::default().encode(&frame).unwrap();

        let image = decode_image(&jpeg).unwrap();

        assert_eq!((image.width, image.height), (12, 10));
        assert_eq!(image.rgb.len(), 12 * 10 * 3);
        // Blue stays dominant after the lossy round trip
        assert!(image.rgb[2] > 200 && image.rgb[0] < 50);
    }

    #[test]
    fn test_decode_garbage_is_unsupported() {
        assert!(matches!(
            decode_image(b"definitely not an image"),
            Err(VisionError::UnsupportedFile(_))
        ));
        assert!(matches!(
            decode_image(&[]),
            Err(VisionError::UnsupportedFile(_))
        ));
    }
}
