//! Frame sampling
//!
//! Still capture (one encoded snapshot on demand) and live sampling (one
//! frame per display refresh, handed to a callback) over a
//! [`CaptureSession`](crate::capture::CaptureSession), plus the
//! [`CameraCapture`] model that arbitrates between the two.

pub mod camera_capture;
pub mod live;
pub mod refresh;
pub mod still;

pub use camera_capture::CameraCapture;
pub use live::{FrameHandler, LiveSampler, SampleOutcome};
pub use refresh::{FrameRequest, ManualRefresh, RefreshScheduler};
pub use still::StillCapture;
