//! JPEG still encoder backed by OpenCV's imgcodecs

use super::converters::swap_red_blue;
use super::traits::StillEncoder;
use crate::constants::capture::JPEG_QUALITY;
use crate::error::{Result, VisionError};
use crate::frame::CapturedFrame;
use opencv::core::{CV_8UC3, Mat, Scalar, Vector};
use opencv::imgcodecs;
use opencv::prelude::*;

/// Encodes frames as baseline JPEG
#[derive(Debug, Clone, Copy)]
pub struct JpegEncoder {
    quality: i32,
}

impl JpegEncoder {
    /// Creates an encoder from a 0.0-1.0 quality factor.
    ///
    /// # Errors
    /// `Config` if the factor is not finite or outside 0.0-1.0
    pub fn new(quality: f64) -> Result<Self> {
        if !quality.is_finite() || !(0.0..=1.0).contains(&quality) {
            return Err(VisionError::Config(format!(
                "JPEG quality must be between 0.0 and 1.0, got {}",
                quality
            )));
        }
        Ok(Self {
            quality: (quality * 100.0).round() as i32,
        })
    }

    /// Quality on OpenCV's 0-100 scale
    pub fn quality(&self) -> i32 {
        self.quality
    }

    fn to_bgr_mat(frame: &CapturedFrame) -> Result<Mat> {
        let mut mat = Mat::new_rows_cols_with_default(
            frame.height() as i32,
            frame.width() as i32,
            CV_8UC3,
            Scalar::all(0.0),
        )?;
        let bgr = swap_red_blue(frame.pixels());
        mat.data_bytes_mut()?.copy_from_slice(&bgr);
        Ok(mat)
    }
}

impl Default for JpegEncoder {
    fn default() -> Self {
        Self {
            quality: (JPEG_QUALITY * 100.0).round() as i32,
        }
    }
}

impl StillEncoder for JpegEncoder {
    fn encode(&self, frame: &CapturedFrame) -> Result<Vec<u8>> {
        if frame.width() == 0 || frame.height() == 0 {
            return Err(VisionError::EncodingFailed(format!(
                "Cannot encode an empty {}x{} frame",
                frame.width(),
                frame.height()
            )));
        }

        let mat = Self::to_bgr_mat(frame)?;
        let params = Vector::<i32>::from_slice(&[imgcodecs::IMWRITE_JPEG_QUALITY, self.quality]);
        let mut buffer = Vector::<u8>::new();

        let encoded = imgcodecs::imencode(".jpg", &mat, &mut buffer, &params)
            .map_err(|e| VisionError::EncodingFailed(format!("imencode failed: {}", e)))?;
        if !encoded {
            return Err(VisionError::EncodingFailed(
                "JPEG encoder rejected the frame".to_string(),
            ));
        }

        Ok(buffer.to_vec())
    }

    fn mime_type(&self) -> &'static str {
        "image/jpeg"
    }

    fn extension(&self) -> &'static str {
        "jpg"
    }
}
