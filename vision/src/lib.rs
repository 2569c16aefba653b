//! Vision Demo Core
//!
//! Camera capture, frame sampling, still-image encoding and detection overlay
//! geometry for the recognition demo. The analyzer is a mock: results are
//! hardcoded per [`DetectionMode`] and delivered after a fixed delay.
//!
//! # Layout
//!
//! - [`capture`]: device backends and the [`CaptureSession`] lifecycle
//! - [`sampler`]: still capture, refresh-driven live sampling, the camera dialog model
//! - [`codec`]: JPEG encoding and uploaded-image decoding
//! - [`detection`] / [`overlay`]: result model and overlay geometry
//! - [`analyzer`], [`rate_limit`], [`upload`]: the thin collaborators around the core

pub mod analyzer;
pub mod artifact;
pub mod capture;
pub mod codec;
pub mod constants;
pub mod detection;
pub mod error;
pub mod frame;
pub mod overlay;
pub mod rate_limit;
pub mod sampler;
pub mod upload;

pub use error::{Result, VisionError};

pub use analyzer::{AnalysisJob, DetectionMode, MockAnalyzer};
pub use artifact::ImageFile;
pub use capture::{
    CameraConfig, CameraInfo, CaptureSession, FacingMode, MediaConstraints, MediaDevices,
    OpenCvDevices, SessionState, SyntheticDevices, SyntheticFailure, VideoStream,
};
pub use codec::{DecodedImage, JpegEncoder, StillEncoder, decode_image};
pub use detection::{BoundingBox, Detection, DetectionSet};
pub use frame::CapturedFrame;
pub use overlay::{OverlayBox, render_overlay};
pub use rate_limit::RateLimiter;
pub use sampler::{
    CameraCapture, FrameHandler, FrameRequest, LiveSampler, ManualRefresh, RefreshScheduler,
    SampleOutcome, StillCapture,
};
pub use upload::{DroppedFile, ImageKind, accept_upload, load_image_file};
