//! Camera capture module
//!
//! Device backends (OpenCV and a synthetic test pattern), acquisition
//! constraints, and the [`CaptureSession`] that owns a live stream.

pub mod backend;
pub mod config;
pub mod constraints;
pub mod discovery;
pub mod info;
pub mod opencv_backend;
pub mod session;
pub mod synthetic;

pub use backend::{MediaDevices, VideoStream};
pub use config::CameraConfig;
pub use constraints::{FacingMode, MediaConstraints, VideoConstraints};
pub use discovery::CameraDiscovery;
pub use info::CameraInfo;
pub use opencv_backend::OpenCvDevices;
pub use session::{CaptureSession, SessionState};
pub use synthetic::{SyntheticDevices, SyntheticFailure};
