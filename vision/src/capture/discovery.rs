//! Camera device discovery.
//!
//! Finds usable cameras for the OpenCV backend. On Linux the `/dev/video*`
//! nodes are checked for read access first, so a permission problem is
//! reported as `PermissionDenied` instead of a generic open failure.

use super::info::CameraInfo;
use crate::error::{Result, VisionError};
use logging::Logger;
use opencv::prelude::*;
use opencv::videoio::{CAP_ANY, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH, VideoCapture};
use std::io;
use std::time::{Duration, Instant};

const PROBE_TIMEOUT: Duration = Duration::from_millis(500);
const MAX_WIDTH: u32 = 7680;
const MAX_HEIGHT: u32 = 4320;
const DEFAULT_WIDTH: u32 = 640;
const DEFAULT_HEIGHT: u32 = 480;

pub struct CameraDiscovery;

impl CameraDiscovery {
    /// Lists cameras that can be opened right now.
    ///
    /// # Errors
    /// `PermissionDenied` when no camera is usable and at least one device node
    /// exists but could not be accessed.
    pub fn list_devices(logger: &Logger) -> Result<Vec<CameraInfo>> {
        let device_ids = Self::enumerate_device_ids();
        logger.debug(&format!(
            "[CAMERA] Probing {} potential device(s): {:?}",
            device_ids.len(),
            device_ids
        ));

        let mut cameras = Vec::new();
        let mut denied = Vec::new();

        for device_id in device_ids {
            match Self::check_access(device_id) {
                Ok(()) => {}
                Err(VisionError::PermissionDenied(reason)) => {
                    logger.warn(&format!("[CAMERA] {}", reason));
                    denied.push(reason);
                    continue;
                }
                Err(e) => {
                    logger.debug(&format!("[CAMERA] Device {} skipped: {}", device_id, e));
                    continue;
                }
            }

            match Self::probe_device(device_id, logger) {
                Some(info) => {
                    logger.info(&format!(
                        "[CAMERA] Device {}: {} ({})",
                        device_id,
                        info.name,
                        info.resolution_string()
                    ));
                    cameras.push(info);
                }
                None => logger.debug(&format!("[CAMERA] Device {} is not usable", device_id)),
            }
        }

        if cameras.is_empty()
            && let Some(reason) = denied.into_iter().next()
        {
            return Err(VisionError::PermissionDenied(reason));
        }

        Ok(cameras)
    }

    /// Checks that the device node can be opened for reading.
    #[cfg(target_os = "linux")]
    pub fn check_access(device_id: i32) -> Result<()> {
        let path = format!("/dev/video{}", device_id);
        std::fs::File::open(&path)
            .map(|_| ())
            .map_err(|e| Self::classify_access_error(e.kind(), &path))
    }

    #[cfg(not(target_os = "linux"))]
    pub fn check_access(_device_id: i32) -> Result<()> {
        Ok(())
    }

    /// Maps a device-node open failure onto the capture error taxonomy.
    pub fn classify_access_error(kind: io::ErrorKind, path: &str) -> VisionError {
        match kind {
            io::ErrorKind::PermissionDenied => {
                VisionError::PermissionDenied(format!("No permission to open {}", path))
            }
            io::ErrorKind::NotFound => {
                VisionError::DeviceUnavailable(format!("{} does not exist", path))
            }
            other => VisionError::DeviceUnavailable(format!("{} cannot be opened: {}", path, other)),
        }
    }

    fn probe_device(device_id: i32, logger: &Logger) -> Option<CameraInfo> {
        let start = Instant::now();
        let mut capture = VideoCapture::new(device_id, CAP_ANY).ok()?;

        if start.elapsed() > PROBE_TIMEOUT || !capture.is_opened().unwrap_or(false) {
            let _ = capture.release();
            return None;
        }

        let width = capture.get(CAP_PROP_FRAME_WIDTH).unwrap_or(0.0) as u32;
        let height = capture.get(CAP_PROP_FRAME_HEIGHT).unwrap_or(0.0) as u32;
        let _ = capture.release();

        let (width, height) = Self::sanitize_resolution(width, height).unwrap_or_else(|| {
            logger.debug(&format!(
                "[CAMERA] Device {} reported {}x{}, assuming {}x{}",
                device_id, width, height, DEFAULT_WIDTH, DEFAULT_HEIGHT
            ));
            (DEFAULT_WIDTH, DEFAULT_HEIGHT)
        });

        Some(CameraInfo::new(
            device_id,
            Self::device_name(device_id),
            width,
            height,
        ))
    }

    /// Returns the resolution if it is plausible for a camera
    fn sanitize_resolution(width: u32, height: u32) -> Option<(u32, u32)> {
        let valid = (1..=MAX_WIDTH).contains(&width) && (1..=MAX_HEIGHT).contains(&height);
        valid.then_some((width, height))
    }

    fn device_name(device_id: i32) -> String {
        #[cfg(target_os = "linux")]
        {
            let path = format!("/sys/class/video4linux/video{}/name", device_id);
            if let Ok(name) = std::fs::read_to_string(path) {
                return name.trim().to_string();
            }
        }
        format!("Camera {}", device_id)
    }

    /// Parses `videoN` into `N`
    fn parse_video_node(name: &str) -> Option<i32> {
        name.strip_prefix("video")?.parse::<i32>().ok()
    }

    /// Candidate device IDs, sorted.
    ///
    /// On Linux each camera usually exposes an even capture node followed by
    /// an odd metadata node; only even nodes are kept.
    #[cfg(target_os = "linux")]
    fn enumerate_device_ids() -> Vec<i32> {
        let mut device_ids: Vec<i32> = std::fs::read_dir("/dev")
            .map(|entries| {
                entries
                    .flatten()
                    .filter_map(|e| e.file_name().to_str().and_then(Self::parse_video_node))
                    .filter(|id| id % 2 == 0 && *id < 20)
                    .collect()
            })
            .unwrap_or_default();

        device_ids.sort_unstable();
        device_ids
    }

    #[cfg(not(target_os = "linux"))]
    fn enumerate_device_ids() -> Vec<i32> {
        vec![0, 1, 2, 3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LogLevel;

    #[test]
    fn test_parse_video_node() {
        assert_eq!(CameraDiscovery::parse_video_node("video0"), Some(0));
        assert_eq!(CameraDiscovery::parse_video_node("video12"), Some(12));
        assert_eq!(CameraDiscovery::parse_video_node("video"), None);
        assert_eq!(CameraDiscovery::parse_video_node("media0"), None);
        assert_eq!(CameraDiscovery::parse_video_node("video0p1"), None);
    }

    #[test]
    fn test_classify_access_error() {
        assert!(matches!(
            CameraDiscovery::classify_access_error(io::ErrorKind::PermissionDenied, "/dev/video0"),
            VisionError::PermissionDenied(msg) if msg.contains("/dev/video0")
        ));
        assert!(matches!(
            CameraDiscovery::classify_access_error(io::ErrorKind::NotFound, "/dev/video2"),
            VisionError::DeviceUnavailable(_)
        ));
        assert!(matches!(
            CameraDiscovery::classify_access_error(io::ErrorKind::WouldBlock, "/dev/video2"),
            VisionError::DeviceUnavailable(_)
        ));
    }

    #[test]
    fn test_sanitize_resolution() {
        assert_eq!(
            CameraDiscovery::sanitize_resolution(1920, 1080),
            Some((1920, 1080))
        );
        assert_eq!(CameraDiscovery::sanitize_resolution(0, 480), None);
        assert_eq!(CameraDiscovery::sanitize_resolution(640, 5000), None);
    }

    #[test]
    fn test_enumerate_device_ids_sorted() {
        let ids = CameraDiscovery::enumerate_device_ids();
        assert!(ids.windows(2).all(|w| w[0] <= w[1]));
        assert!(ids.iter().all(|&id| id >= 0));
    }

    #[test]
    fn test_list_devices_does_not_panic() {
        let (logger, _memory) = Logger::in_memory(LogLevel::Debug);
        let result = CameraDiscovery::list_devices(&logger);
        assert!(result.is_ok() || matches!(result, Err(VisionError::PermissionDenied(_))));
    }
}
