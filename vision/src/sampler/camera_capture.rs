//! Camera dialog model.
//!
//! Owns the session for as long as the dialog is open and keeps still
//! capture and live sampling mutually exclusive. A successful photo ends the
//! dialog: the stream is stopped and the dialog is marked closed. Dropping
//! the model releases the camera.

use super::live::{FrameHandler, LiveSampler, SampleOutcome};
use super::refresh::{FrameRequest, RefreshScheduler};
use super::still::StillCapture;
use crate::artifact::ImageFile;
use crate::capture::CaptureSession;
use crate::error::{Result, VisionError};
use logging::Logger;

pub struct CameraCapture {
    session: CaptureSession,
    still: StillCapture,
    live: LiveSampler,
    open: bool,
    logger: Logger,
}

impl CameraCapture {
    /// Opens the dialog around an (idle) session. The camera is started
    /// separately, possibly asynchronously, through [`session_mut`](Self::session_mut).
    pub fn open(session: CaptureSession, still: StillCapture, logger: Logger) -> Self {
        logger.info("[CAMERA] Camera dialog opened");
        Self {
            session,
            still,
            live: LiveSampler::new(logger.clone()),
            open: true,
            logger,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn session(&self) -> &CaptureSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut CaptureSession {
        &mut self.session
    }

    pub fn is_live(&self) -> bool {
        self.live.is_armed()
    }

    pub fn live_frames(&self) -> u64 {
        self.live.frames_delivered()
    }

    pub fn can_capture_photo(&self) -> bool {
        self.open && self.session.is_streaming() && !self.live.is_armed()
    }

    pub fn can_arm_live(&self) -> bool {
        self.open && self.session.is_streaming() && !self.live.is_armed()
    }

    /// Takes a photo, then stops the camera and closes the dialog.
    ///
    /// # Errors
    /// * `PreconditionFailed` - live sampling is running or the camera is not streaming
    /// * `EncodingFailed` - the session keeps streaming so the user can retry
    pub fn capture_photo(&mut self) -> Result<ImageFile> {
        if self.live.is_armed() {
            return Err(VisionError::PreconditionFailed(
                "Stop live detection before taking a photo".to_string(),
            ));
        }

        let file = self.still.capture(&mut self.session)?;
        self.session.stop();
        self.open = false;
        self.logger
            .info("[CAMERA] Photo taken, camera stopped and dialog closed");
        Ok(file)
    }

    /// # Errors
    /// `PreconditionFailed` if the camera is not streaming or sampling is already armed
    pub fn arm_live(
        &mut self,
        scheduler: &mut dyn RefreshScheduler,
        handler: FrameHandler,
    ) -> Result<()> {
        self.live.arm(&self.session, scheduler, handler)
    }

    pub fn disarm_live(&mut self, scheduler: &mut dyn RefreshScheduler) {
        self.live.disarm(scheduler);
    }

    /// Forwards a refresh callback to the live sampler.
    pub fn on_refresh(
        &mut self,
        request: FrameRequest,
        scheduler: &mut dyn RefreshScheduler,
    ) -> Result<SampleOutcome> {
        self.live.on_refresh(request, &mut self.session, scheduler)
    }

    /// Disarms sampling, stops the camera and closes the dialog. Idempotent.
    pub fn close(&mut self, scheduler: &mut dyn RefreshScheduler) {
        self.live.disarm(scheduler);
        self.session.stop();
        if self.open {
            self.open = false;
            self.logger.info("[CAMERA] Camera dialog closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::SyntheticDevices;
    use crate::sampler::ManualRefresh;
    use std::sync::Arc;

    fn dialog(devices: &Arc<SyntheticDevices>) -> CameraCapture {
        let mut session = CaptureSession::new(devices.clone(), Logger::disabled());
        session.start().unwrap();
        CameraCapture::open(session, StillCapture::jpeg(Logger::disabled()), Logger::disabled())
    }

    #[test]
    fn test_photo_stops_camera_and_closes() {
        let devices = Arc::new(SyntheticDevices::new(16, 16));
        let mut capture = dialog(&devices);
        assert!(capture.can_capture_photo());

        let file = capture.capture_photo().unwrap();

        assert_eq!(file.mime_type, "image/jpeg");
        assert!(!capture.is_open());
        assert_eq!(devices.active_tracks(), 0);
        assert!(!capture.can_arm_live());
    }

    #[test]
    fn test_photo_rejected_while_live() {
        let devices = Arc::new(SyntheticDevices::new(16, 16));
        let mut capture = dialog(&devices);
        let mut refresh = ManualRefresh::new();
        capture.arm_live(&mut refresh, Box::new(|_| {})).unwrap();

        assert!(!capture.can_capture_photo());
        assert!(matches!(
            capture.capture_photo(),
            Err(VisionError::PreconditionFailed(_))
        ));
        assert!(capture.is_open());
        assert_eq!(devices.active_tracks(), 1);

        capture.disarm_live(&mut refresh);
        assert!(capture.capture_photo().is_ok());
    }

    #[test]
    fn test_close_releases_everything() {
        let devices = Arc::new(SyntheticDevices::new(16, 16));
        let mut capture = dialog(&devices);
        let mut refresh = ManualRefresh::new();
        capture.arm_live(&mut refresh, Box::new(|_| {})).unwrap();

        capture.close(&mut refresh);
        capture.close(&mut refresh);

        assert!(!capture.is_open());
        assert!(!capture.is_live());
        assert_eq!(refresh.pending(), 0);
        assert_eq!(devices.active_tracks(), 0);
    }

    #[test]
    fn test_drop_releases_camera() {
        let devices = Arc::new(SyntheticDevices::new(16, 16));
        drop(dialog(&devices));
        assert_eq!(devices.active_tracks(), 0);
    }
}
