//! Media capture session.
//!
//! A [`CaptureSession`] owns at most one live [`VideoStream`] and moves
//! through `Idle → Requesting → {Streaming, Failed}`. Stopping returns it to
//! `Idle`; a failed session stays `Failed` until the next explicit start.
//! Dropping the session stops the stream, so the camera is never left open
//! once its owner is gone.
//!
//! Acquisition can be driven in one call ([`CaptureSession::start`]) or in
//! two phases ([`begin_start`](CaptureSession::begin_start) +
//! [`complete_start`](CaptureSession::complete_start)) when the device is
//! opened on another thread.

use super::backend::{MediaDevices, VideoStream};
use super::constraints::MediaConstraints;
use crate::error::{Result, VisionError};
use crate::frame::CapturedFrame;
use logging::Logger;
use std::fmt;
use std::sync::Arc;

/// Observable session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Requesting,
    Streaming,
    Failed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Requesting => "requesting",
            SessionState::Streaming => "streaming",
            SessionState::Failed => "failed",
        };
        f.write_str(name)
    }
}

enum Phase {
    Idle,
    Requesting,
    Streaming(Box<dyn VideoStream>),
    Failed(String),
}

/// Exclusive owner of one camera stream
pub struct CaptureSession {
    devices: Arc<dyn MediaDevices>,
    constraints: MediaConstraints,
    phase: Phase,
    logger: Logger,
}

impl CaptureSession {
    /// Creates an idle session requesting the rear camera, video only.
    pub fn new(devices: Arc<dyn MediaDevices>, logger: Logger) -> Self {
        Self {
            devices,
            constraints: MediaConstraints::rear_camera(),
            phase: Phase::Idle,
            logger,
        }
    }

    pub fn with_constraints(mut self, constraints: MediaConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::Idle => SessionState::Idle,
            Phase::Requesting => SessionState::Requesting,
            Phase::Streaming(_) => SessionState::Streaming,
            Phase::Failed(_) => SessionState::Failed,
        }
    }

    pub fn is_streaming(&self) -> bool {
        matches!(self.phase, Phase::Streaming(_))
    }

    /// Reason for the last failed start; present only in `Failed`
    pub fn last_error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// The backend streams are acquired from, for off-thread acquisition
    pub fn devices(&self) -> Arc<dyn MediaDevices> {
        Arc::clone(&self.devices)
    }

    /// Native resolution while streaming
    pub fn resolution(&self) -> Option<(u32, u32)> {
        match &self.phase {
            Phase::Streaming(stream) => Some(stream.resolution()),
            _ => None,
        }
    }

    /// Device label while streaming
    pub fn stream_label(&self) -> Option<&str> {
        match &self.phase {
            Phase::Streaming(stream) => Some(stream.label()),
            _ => None,
        }
    }

    /// Tracks held by this session; 0 unless streaming
    pub fn active_tracks(&self) -> usize {
        match &self.phase {
            Phase::Streaming(stream) => stream.active_tracks(),
            _ => 0,
        }
    }

    /// Acquires a stream synchronously.
    ///
    /// # Errors
    /// * `PreconditionFailed` - already streaming or a request is in flight
    /// * `PermissionDenied` / `DeviceUnavailable` - acquisition failed; the
    ///   session is now `Failed`
    pub fn start(&mut self) -> Result<()> {
        let constraints = self.begin_start()?;
        let outcome = self.devices.acquire(&constraints);
        self.complete_start(outcome)
    }

    /// Moves `Idle`/`Failed` to `Requesting` and returns what to acquire.
    ///
    /// # Errors
    /// `PreconditionFailed` if streaming or already requesting; the current
    /// stream is left untouched.
    pub fn begin_start(&mut self) -> Result<MediaConstraints> {
        match self.phase {
            Phase::Streaming(_) => {
                self.logger
                    .warn("[CAMERA] Start requested while already streaming");
                Err(VisionError::PreconditionFailed(
                    "Camera is already streaming".to_string(),
                ))
            }
            Phase::Requesting => Err(VisionError::PreconditionFailed(
                "A camera request is already in progress".to_string(),
            )),
            Phase::Idle | Phase::Failed(_) => {
                self.logger.info(&format!(
                    "[CAMERA] Requesting stream {}",
                    self.constraints
                ));
                self.phase = Phase::Requesting;
                Ok(self.constraints)
            }
        }
    }

    /// Delivers the outcome of an acquisition started with [`begin_start`](Self::begin_start).
    ///
    /// A stream that arrives after the request was cancelled by
    /// [`stop`](Self::stop) is released immediately.
    ///
    /// # Errors
    /// * `PreconditionFailed` - no request was pending
    /// * the acquisition error, or `DeviceUnavailable` for a stream without
    ///   a live video track; the session is then `Failed`
    pub fn complete_start(&mut self, outcome: Result<Box<dyn VideoStream>>) -> Result<()> {
        if !matches!(self.phase, Phase::Requesting) {
            if let Ok(mut stream) = outcome {
                stream.stop_tracks();
                self.logger.info(&format!(
                    "[CAMERA] Released late stream from {} (request was cancelled)",
                    stream.label()
                ));
            }
            return Err(VisionError::PreconditionFailed(
                "No camera request is pending".to_string(),
            ));
        }

        let result = outcome.and_then(|mut stream| {
            let (width, height) = stream.resolution();
            if stream.active_tracks() == 0 || width == 0 || height == 0 {
                stream.stop_tracks();
                return Err(VisionError::DeviceUnavailable(format!(
                    "{} did not provide a live video track",
                    stream.label()
                )));
            }
            Ok(stream)
        });

        match result {
            Ok(stream) => {
                let (width, height) = stream.resolution();
                self.logger.info(&format!(
                    "[CAMERA] Streaming from {} at {}x{}",
                    stream.label(),
                    width,
                    height
                ));
                self.phase = Phase::Streaming(stream);
                Ok(())
            }
            Err(e) => {
                self.logger.error(&format!("[CAMERA] Start failed: {}", e));
                self.phase = Phase::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Stops all tracks and returns to `Idle`.
    ///
    /// No-op when idle or failed. Cancels a pending request.
    pub fn stop(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Streaming(mut stream) => {
                stream.stop_tracks();
                self.logger
                    .info(&format!("[CAMERA] Stopped {}", stream.label()));
            }
            Phase::Requesting => {
                self.logger.info("[CAMERA] Pending camera request cancelled");
            }
            Phase::Idle => {}
            failed @ Phase::Failed(_) => self.phase = failed,
        }
    }

    /// Reads the current frame from the stream.
    ///
    /// # Errors
    /// `PreconditionFailed` unless streaming; otherwise whatever the stream reports.
    pub fn grab_frame(&mut self) -> Result<CapturedFrame> {
        let state = self.state();
        match &mut self.phase {
            Phase::Streaming(stream) => stream.grab_frame(),
            _ => Err(VisionError::PreconditionFailed(format!(
                "Camera is not streaming (state: {})",
                state
            ))),
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.stop();
    }
}
