//! Camera capture configuration.

use crate::error::{Result, VisionError};

/// Camera capture configuration for the OpenCV backend
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Fixed device ID, or `None` to pick one from the facing preference
    pub device_id: Option<i32>,
    /// Requested frame width in pixels (None = device default)
    pub width: Option<u32>,
    /// Requested frame height in pixels (None = device default)
    pub height: Option<u32>,
    /// Requested frames per second
    pub fps: f64,
}

impl CameraConfig {
    const MIN_FPS: f64 = 1.0;
    const MAX_FPS: f64 = 240.0;
    const MIN_DIMENSION: u32 = 1;
    /// 8K
    const MAX_DIMENSION: u32 = 7680;

    /// Creates a configuration with automatic device selection.
    ///
    /// `fps` is clamped to 1.0-240.0.
    ///
    /// # Errors
    /// `Config` if `fps` is NaN or infinite.
    pub fn new(fps: f64) -> Result<Self> {
        if !fps.is_finite() {
            return Err(VisionError::Config(
                "FPS must be a finite number (not NaN or infinite)".to_string(),
            ));
        }

        Ok(Self {
            device_id: None,
            width: None,
            height: None,
            fps: fps.clamp(Self::MIN_FPS, Self::MAX_FPS),
        })
    }

    /// Pins the configuration to one device.
    pub fn with_device(mut self, device_id: i32) -> Self {
        self.device_id = Some(device_id);
        self
    }

    /// Requests a resolution.
    ///
    /// # Errors
    /// `Config` if either dimension is 0 or above 7680.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Result<Self> {
        for (name, value) in [("Width", width), ("Height", height)] {
            if !(Self::MIN_DIMENSION..=Self::MAX_DIMENSION).contains(&value) {
                return Err(VisionError::Config(format!(
                    "{} must be between {} and {}, got {}",
                    name,
                    Self::MIN_DIMENSION,
                    Self::MAX_DIMENSION,
                    value
                )));
            }
        }

        self.width = Some(width);
        self.height = Some(height);
        Ok(self)
    }

    /// Returns the resolution as a tuple if configured
    pub fn resolution(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }
}

/// Automatic device selection at 30 FPS, device default resolution
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device_id: None,
            width: None,
            height: None,
            fps: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CameraConfig::default();
        assert_eq!(config.device_id, None);
        assert_eq!(config.fps, 30.0);
        assert_eq!(config.resolution(), None);
    }

    #[test]
    fn test_config_with_device_and_resolution() {
        let config = CameraConfig::new(24.0)
            .unwrap()
            .with_device(2)
            .with_resolution(1280, 720)
            .unwrap();

        assert_eq!(config.device_id, Some(2));
        assert_eq!(config.fps, 24.0);
        assert_eq!(config.resolution(), Some((1280, 720)));
    }

    #[test]
    fn test_fps_clamping() {
        assert_eq!(CameraConfig::new(0.5).unwrap().fps, 1.0);
        assert_eq!(CameraConfig::new(300.0).unwrap().fps, 240.0);
        assert_eq!(CameraConfig::new(60.0).unwrap().fps, 60.0);
    }

    #[test]
    fn test_fps_not_finite() {
        assert!(matches!(
            CameraConfig::new(f64::NAN),
            Err(VisionError::Config(_))
        ));
        assert!(CameraConfig::new(f64::INFINITY).is_err());
        assert!(CameraConfig::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_invalid_resolution() {
        let base = CameraConfig::new(30.0).unwrap();

        assert!(base.clone().with_resolution(0, 480).is_err());
        assert!(base.clone().with_resolution(640, 0).is_err());
        assert!(base.clone().with_resolution(10000, 480).is_err());
        assert!(matches!(
            base.with_resolution(640, 10000),
            Err(VisionError::Config(msg)) if msg.starts_with("Height")
        ));
    }

    #[test]
    fn test_resolution_edges() {
        let config = CameraConfig::new(30.0)
            .unwrap()
            .with_resolution(1, 7680)
            .unwrap();
        assert_eq!(config.resolution(), Some((1, 7680)));
    }
}
