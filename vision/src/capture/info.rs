//! Detected camera device information.

use super::constraints::FacingMode;

/// A usable camera found by [`CameraDiscovery`](super::CameraDiscovery)
#[derive(Debug, Clone, PartialEq)]
pub struct CameraInfo {
    /// Device identifier
    pub device_id: i32,
    /// Device name or path
    pub name: String,
    /// Default width in pixels
    pub width: u32,
    /// Default height in pixels
    pub height: u32,
}

impl CameraInfo {
    pub fn new(device_id: i32, name: String, width: u32, height: u32) -> Self {
        Self {
            device_id,
            name,
            width,
            height,
        }
    }

    /// Returns a string representation of the resolution
    pub fn resolution_string(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Picks the camera for a facing preference.
    ///
    /// Desktop cameras do not report which way they face. Built-in front
    /// cameras enumerate first, so `Environment` prefers the highest device ID
    /// and `User` the lowest.
    pub fn select(devices: &[CameraInfo], facing: FacingMode) -> Option<&CameraInfo> {
        match facing {
            FacingMode::Environment => devices.iter().max_by_key(|d| d.device_id),
            FacingMode::User => devices.iter().min_by_key(|d| d.device_id),
        }
    }
}
