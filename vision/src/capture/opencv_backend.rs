//! OpenCV camera backend.
//!
//! Opens real cameras through `VideoCapture`. A device that opens but cannot
//! deliver a first frame is released before the failure is reported, so a
//! failed acquisition never leaves the camera held.

use super::backend::{MediaDevices, VideoStream};
use super::config::CameraConfig;
use super::constraints::MediaConstraints;
use super::discovery::CameraDiscovery;
use super::info::CameraInfo;
use crate::codec::converters::swap_red_blue;
use crate::constants::logging::CAMERA_LOG_INTERVAL;
use crate::error::{Result, VisionError};
use crate::frame::CapturedFrame;
use logging::Logger;
use opencv::core::{CV_8UC3, Mat};
use opencv::prelude::*;
use opencv::videoio::{
    CAP_ANY, CAP_PROP_FPS, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH, VideoCapture,
};

/// Camera backend for physical devices
pub struct OpenCvDevices {
    config: CameraConfig,
    logger: Logger,
}

impl OpenCvDevices {
    pub fn new(config: CameraConfig, logger: Logger) -> Self {
        Self { config, logger }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    fn resolve_device(&self, constraints: &MediaConstraints) -> Result<i32> {
        let facing = constraints.facing_mode().ok_or_else(|| {
            VisionError::Config("A video track is required for capture".to_string())
        })?;

        if let Some(device_id) = self.config.device_id {
            CameraDiscovery::check_access(device_id)?;
            return Ok(device_id);
        }

        let devices = CameraDiscovery::list_devices(&self.logger)?;
        let device = CameraInfo::select(&devices, facing).ok_or_else(|| {
            VisionError::DeviceUnavailable(
                "No camera devices found. Please connect a camera and try again.".to_string(),
            )
        })?;

        self.logger.info(&format!(
            "[CAMERA] Selected {} (ID: {}) for facing mode '{}'",
            device.name,
            device.device_id,
            facing.as_str()
        ));
        Ok(device.device_id)
    }
}

impl MediaDevices for OpenCvDevices {
    fn acquire(&self, constraints: &MediaConstraints) -> Result<Box<dyn VideoStream>> {
        if constraints.audio {
            self.logger
                .warn("[CAMERA] Audio was requested but is not captured; continuing with video only");
        }

        let device_id = self.resolve_device(constraints)?;
        let stream = OpenCvStream::open(device_id, &self.config, self.logger.clone())?;
        Ok(Box::new(stream))
    }
}

/// Live stream over one `VideoCapture`
pub struct OpenCvStream {
    capture: VideoCapture,
    label: String,
    width: u32,
    height: u32,
    frame_count: u64,
    stopped: bool,
    logger: Logger,
}

impl OpenCvStream {
    fn open(device_id: i32, config: &CameraConfig, logger: Logger) -> Result<Self> {
        logger.info(&format!(
            "[CAMERA] Opening device {} @ {} fps",
            device_id, config.fps
        ));

        let mut capture = VideoCapture::new(device_id, CAP_ANY).map_err(|e| {
            VisionError::DeviceUnavailable(format!("Failed to open camera {}: {}", device_id, e))
        })?;

        if !capture.is_opened().unwrap_or(false) {
            let _ = capture.release();
            return Err(VisionError::DeviceUnavailable(format!(
                "Camera {} is busy or not available",
                device_id
            )));
        }

        if let Some((width, height)) = config.resolution() {
            let _ = capture.set(CAP_PROP_FRAME_WIDTH, f64::from(width));
            let _ = capture.set(CAP_PROP_FRAME_HEIGHT, f64::from(height));
        }
        let _ = capture.set(CAP_PROP_FPS, config.fps);

        let mut stream = OpenCvStream {
            capture,
            label: format!("Camera {}", device_id),
            width: 0,
            height: 0,
            frame_count: 0,
            stopped: false,
            logger,
        };

        // The reported size is unreliable until a frame has been read.
        let first = match stream.read_bgr() {
            Ok(mat) => mat,
            Err(e) => {
                stream.stop_tracks();
                return Err(e);
            }
        };
        stream.width = first.cols() as u32;
        stream.height = first.rows() as u32;

        if let Some((req_w, req_h)) = config.resolution()
            && (stream.width != req_w || stream.height != req_h)
        {
            stream.logger.warn(&format!(
                "[CAMERA] Resolution mismatch (got: {}x{}, requested: {}x{})",
                stream.width, stream.height, req_w, req_h
            ));
        }

        stream.logger.info(&format!(
            "[CAMERA] Device {} streaming at {}x{}",
            device_id, stream.width, stream.height
        ));
        Ok(stream)
    }

    fn read_bgr(&mut self) -> Result<Mat> {
        let mut mat = Mat::default();

        let success = self
            .capture
            .read(&mut mat)
            .map_err(|e| VisionError::DeviceUnavailable(format!("Failed to read frame: {}", e)))?;

        if !success || mat.empty() || mat.cols() == 0 || mat.rows() == 0 {
            return Err(VisionError::DeviceUnavailable(
                "Camera delivered an empty frame".to_string(),
            ));
        }

        if mat.typ() != CV_8UC3 || !mat.is_continuous() {
            return Err(VisionError::DeviceUnavailable(
                "Camera delivered an unsupported pixel layout".to_string(),
            ));
        }

        Ok(mat)
    }
}

impl VideoStream for OpenCvStream {
    fn label(&self) -> &str {
        &self.label
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn active_tracks(&self) -> usize {
        if self.stopped { 0 } else { 1 }
    }

    fn grab_frame(&mut self) -> Result<CapturedFrame> {
        if self.stopped {
            return Err(VisionError::DeviceUnavailable(
                "Stream has been stopped".to_string(),
            ));
        }

        let mat = self.read_bgr()?;
        let rgb = swap_red_blue(mat.data_bytes()?);
        self.frame_count += 1;

        if self.frame_count.is_multiple_of(CAMERA_LOG_INTERVAL) {
            self.logger
                .debug(&format!("[CAMERA] Frames captured: {}", self.frame_count));
        }

        CapturedFrame::from_rgb(mat.cols() as u32, mat.rows() as u32, rgb, self.frame_count)
    }

    fn stop_tracks(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;

        if let Err(e) = self.capture.release() {
            self.logger
                .error(&format!("[CAMERA] Error releasing {}: {}", self.label, e));
        }
        self.logger.info(&format!(
            "[CAMERA] {} released after {} frame(s)",
            self.label, self.frame_count
        ));
    }
}

impl Drop for OpenCvStream {
    fn drop(&mut self) {
        self.stop_tracks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LogLevel;

    #[test]
    fn test_invalid_device_fails_without_panicking() {
        let (logger, _memory) = Logger::in_memory(LogLevel::Debug);
        let config = CameraConfig::new(30.0).unwrap().with_device(998);
        let devices = OpenCvDevices::new(config, logger);

        let result = devices.acquire(&MediaConstraints::rear_camera());
        assert!(matches!(
            result,
            Err(VisionError::DeviceUnavailable(_)) | Err(VisionError::PermissionDenied(_))
        ));
    }

    #[test]
    fn test_video_track_required() {
        let (logger, _memory) = Logger::in_memory(LogLevel::Debug);
        let devices = OpenCvDevices::new(CameraConfig::default(), logger);
        let constraints = MediaConstraints {
            video: None,
            audio: true,
        };

        assert!(matches!(
            devices.acquire(&constraints),
            Err(VisionError::Config(_))
        ));
    }
}
