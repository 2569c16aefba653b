//! Error types for capture, sampling and recognition.
//!
//! The first four variants are the user-facing taxonomy: every one of them
//! is recoverable by a user action (retry, grant permission, reconnect the
//! camera). The rest cover input validation and the underlying libraries.

use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, VisionError>;

/// Error type for vision operations
#[derive(Debug)]
pub enum VisionError {
    /// The OS or user refused camera access
    PermissionDenied(String),
    /// No camera, camera busy, or the stream ended
    DeviceUnavailable(String),
    /// A still image could not be encoded (or encoded to nothing)
    EncodingFailed(String),
    /// Operation attempted in the wrong session/sampler state
    PreconditionFailed(String),
    /// A detection or bounding box outside its valid range
    InvalidDetection(String),
    /// A dropped or selected file that is not a single supported image
    UnsupportedFile(String),
    /// Configuration error
    Config(String),
    /// I/O error
    Io(io::Error),
    /// OpenCV error
    OpenCv(opencv::Error),
}

impl VisionError {
    /// Short message suitable for a toast notification.
    pub fn user_message(&self) -> String {
        match self {
            VisionError::PermissionDenied(_) => {
                "Camera access denied. Please check your camera permissions.".to_string()
            }
            VisionError::DeviceUnavailable(_) => {
                "Could not access camera. Please check that it is connected and not in use."
                    .to_string()
            }
            VisionError::EncodingFailed(_) => "Failed to capture photo".to_string(),
            VisionError::UnsupportedFile(_) => "Please upload a valid image file".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for VisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisionError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            VisionError::DeviceUnavailable(msg) => write!(f, "Device unavailable: {}", msg),
            VisionError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
            VisionError::PreconditionFailed(msg) => write!(f, "Precondition failed: {}", msg),
            VisionError::InvalidDetection(msg) => write!(f, "Invalid detection: {}", msg),
            VisionError::UnsupportedFile(msg) => write!(f, "Unsupported file: {}", msg),
            VisionError::Config(msg) => write!(f, "Config error: {}", msg),
            VisionError::Io(err) => write!(f, "I/O error: {}", err),
            VisionError::OpenCv(err) => write!(f, "OpenCV error: {}", err),
        }
    }
}

impl std::error::Error for VisionError {}

impl From<io::Error> for VisionError {
    fn from(err: io::Error) -> Self {
        VisionError::Io(err)
    }
}

impl From<opencv::Error> for VisionError {
    fn from(err: opencv::Error) -> Self {
        VisionError::OpenCv(err)
    }
}
