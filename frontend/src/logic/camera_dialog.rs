//! Camera Dialog State
//!
//! Wraps the [`CameraCapture`] model with asynchronous acquisition: the
//! device is opened on a short-lived worker thread and the outcome comes
//! back over an mpsc channel that the UI polls every frame. Closing the
//! dialog before the worker answers drops the receiver, so a late stream is
//! dropped (and released) on the worker thread.

use logging::Logger;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread;
use vision::{
    CameraCapture, CaptureSession, CapturedFrame, JpegEncoder, MediaDevices, StillCapture,
    VideoStream, VisionError,
};

type Acquisition = vision::Result<Box<dyn VideoStream>>;

pub struct CameraDialogState {
    capture: CameraCapture,
    acquisition: Option<Receiver<Acquisition>>,
    logger: Logger,
}

impl CameraDialogState {
    /// Opens the dialog; the camera is not started yet.
    pub fn open(devices: Arc<dyn MediaDevices>, jpeg_quality: f64, logger: Logger) -> Self {
        let encoder = JpegEncoder::new(jpeg_quality).unwrap_or_else(|e| {
            logger.warn(&format!("[CAMERA] {}, using default JPEG quality", e));
            JpegEncoder::default()
        });
        let session = CaptureSession::new(devices, logger.clone());
        let still = StillCapture::new(Box::new(encoder), logger.clone());

        Self {
            capture: CameraCapture::open(session, still, logger.clone()),
            acquisition: None,
            logger,
        }
    }

    pub fn capture(&self) -> &CameraCapture {
        &self.capture
    }

    pub fn capture_mut(&mut self) -> &mut CameraCapture {
        &mut self.capture
    }

    pub fn is_acquiring(&self) -> bool {
        self.acquisition.is_some()
    }

    /// Starts acquisition on a worker thread.
    ///
    /// # Errors
    /// `PreconditionFailed` if the camera is streaming or already being requested
    pub fn start(&mut self) -> vision::Result<()> {
        let session = self.capture.session_mut();
        let constraints = session.begin_start()?;
        let devices = session.devices();
        let (tx, rx) = channel();

        let worker_logger = self.logger.clone();
        let spawned = thread::Builder::new()
            .name("camera-acquire".to_string())
            .spawn(move || {
                let outcome = devices.acquire(&constraints);
                if tx.send(outcome).is_err() {
                    worker_logger.info("[CAMERA] Dialog closed before the camera answered");
                }
            });

        if let Err(e) = spawned {
            return self
                .capture
                .session_mut()
                .complete_start(Err(VisionError::DeviceUnavailable(format!(
                    "Could not start camera worker: {}",
                    e
                ))));
        }

        self.acquisition = Some(rx);
        Ok(())
    }

    /// Delivers a finished acquisition to the session.
    ///
    /// Returns `None` while the worker is still running or nothing was requested.
    pub fn poll_acquisition(&mut self) -> Option<vision::Result<()>> {
        let outcome = match self.acquisition.as_ref()?.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(VisionError::DeviceUnavailable(
                "Camera worker exited without a result".to_string(),
            )),
        };
        self.acquisition = None;
        Some(self.capture.session_mut().complete_start(outcome))
    }

    /// Current frame for the dialog preview; only while streaming without live sampling.
    pub fn grab_preview(&mut self) -> Option<CapturedFrame> {
        if !self.capture.session().is_streaming() || self.capture.is_live() {
            return None;
        }
        match self.capture.session_mut().grab_frame() {
            Ok(frame) => Some(frame),
            Err(e) => {
                self.logger
                    .warn(&format!("[CAMERA] Preview frame unavailable: {}", e));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use vision::{SessionState, SyntheticDevices, SyntheticFailure};

    fn wait_for_acquisition(dialog: &mut CameraDialogState) -> vision::Result<()> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = dialog.poll_acquisition() {
                return result;
            }
            assert!(Instant::now() < deadline, "acquisition did not finish");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_async_start_streams() {
        let devices = Arc::new(SyntheticDevices::new(32, 24));
        let mut dialog = CameraDialogState::open(devices.clone(), 0.9, Logger::disabled());

        dialog.start().unwrap();
        assert!(dialog.is_acquiring());
        assert_eq!(dialog.capture().session().state(), SessionState::Requesting);

        wait_for_acquisition(&mut dialog).unwrap();

        assert!(!dialog.is_acquiring());
        assert_eq!(dialog.capture().session().state(), SessionState::Streaming);
        assert_eq!(dialog.grab_preview().unwrap().width(), 32);
    }

    #[test]
    fn test_async_start_failure() {
        let devices = Arc::new(SyntheticDevices::new(32, 24));
        devices.set_failure(Some(SyntheticFailure::PermissionDenied));
        let mut dialog = CameraDialogState::open(devices.clone(), 0.9, Logger::disabled());

        dialog.start().unwrap();
        let result = wait_for_acquisition(&mut dialog);

        assert!(matches!(result, Err(VisionError::PermissionDenied(_))));
        assert_eq!(dialog.capture().session().state(), SessionState::Failed);
        assert!(dialog.grab_preview().is_none());
    }

    #[test]
    fn test_closing_while_acquiring_releases_late_stream() {
        let devices = Arc::new(SyntheticDevices::new(32, 24));
        let mut dialog = CameraDialogState::open(devices.clone(), 0.9, Logger::disabled());
        dialog.start().unwrap();

        drop(dialog);

        let deadline = Instant::now() + Duration::from_secs(5);
        while (devices.acquisitions() == 0 || devices.active_tracks() != 0)
            && Instant::now() < deadline
        {
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(devices.acquisitions(), 1);
        assert_eq!(devices.active_tracks(), 0);
    }

    #[test]
    fn test_invalid_quality_falls_back() {
        let devices = Arc::new(SyntheticDevices::new(8, 8));
        let (logger, memory) = logging::Logger::in_memory(logging::LogLevel::Warn);

        let _dialog = CameraDialogState::open(devices, 3.0, logger);

        assert!(memory.contains("default JPEG quality"));
    }
}
