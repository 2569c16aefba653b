//! Captured frame representation.
//!
//! A [`CapturedFrame`] is an immutable RGB8 raster taken from a live stream.
//! It is moved to exactly one consumer: the still encoder or the live handler.

use crate::error::{Result, VisionError};
use std::time::Instant;

/// Bytes per RGB8 pixel
pub const RGB_CHANNELS: usize = 3;

/// Immutable RGB8 frame at the stream's native resolution
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    sequence: u64,
    captured_at: Instant,
}

impl CapturedFrame {
    /// Wraps an RGB8 buffer, stamping the capture instant.
    ///
    /// # Errors
    /// `DeviceUnavailable` if the buffer length does not match `width * height * 3`
    /// (a truncated read from the device).
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>, sequence: u64) -> Result<Self> {
        let expected = width as usize * height as usize * RGB_CHANNELS;
        if pixels.len() != expected {
            return Err(VisionError::DeviceUnavailable(format!(
                "Frame {} has {} bytes, expected {} for {}x{}",
                sequence,
                pixels.len(),
                expected,
                width,
                height
            )));
        }

        Ok(CapturedFrame {
            pixels,
            width,
            height,
            sequence,
            captured_at: Instant::now(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Position of this frame in its stream, starting at 1
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn captured_at(&self) -> Instant {
        self.captured_at
    }

    /// RGB8 pixels, row-major, no padding
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the frame and returns the pixel buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}
