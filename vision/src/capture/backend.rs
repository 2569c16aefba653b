//! Device backend traits.
//!
//! A [`MediaDevices`] implementation turns [`MediaConstraints`] into a live
//! [`VideoStream`]. The stream is handed to exactly one
//! [`CaptureSession`](super::CaptureSession), which is then the only owner
//! allowed to read from it or stop its tracks.

use super::constraints::MediaConstraints;
use crate::error::Result;
use crate::frame::CapturedFrame;

/// A live video stream with one or more device tracks
///
/// `Send` so acquisition can run off the UI thread and hand the stream back.
pub trait VideoStream: Send {
    /// Human-readable device name
    fn label(&self) -> &str;

    /// Native resolution (width, height) in pixels
    fn resolution(&self) -> (u32, u32);

    /// Number of device tracks still running; 0 after [`stop_tracks`](Self::stop_tracks)
    fn active_tracks(&self) -> usize;

    /// Reads the current frame
    ///
    /// # Errors
    /// `DeviceUnavailable` if the stream was stopped or the device stopped delivering.
    fn grab_frame(&mut self) -> Result<CapturedFrame>;

    /// Halts every track and releases the device. Idempotent.
    fn stop_tracks(&mut self);
}

/// Source of camera streams
///
/// `Send + Sync` so one backend can be shared between the UI and
/// acquisition threads.
pub trait MediaDevices: Send + Sync {
    /// Acquires a stream satisfying `constraints`
    ///
    /// # Errors
    /// * `PermissionDenied` - access refused
    /// * `DeviceUnavailable` - no device, or device busy
    ///
    /// On error no device resources may remain allocated.
    fn acquire(&self, constraints: &MediaConstraints) -> Result<Box<dyn VideoStream>>;
}
