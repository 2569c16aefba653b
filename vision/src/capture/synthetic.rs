//! Synthetic camera backend.
//!
//! Produces a moving test pattern without hardware. Used by the demo's
//! `--synthetic-camera` mode and by tests, which can script acquisition
//! failures and observe how many tracks are alive across every stream the
//! backend handed out.

use super::backend::{MediaDevices, VideoStream};
use super::constraints::MediaConstraints;
use crate::error::{Result, VisionError};
use crate::frame::{CapturedFrame, RGB_CHANNELS};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Scripted acquisition failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticFailure {
    /// Access refused before anything is opened
    PermissionDenied,
    /// No camera present
    NoDevice,
    /// The camera opens, then fails; the partial track must be released
    Busy,
}

/// Test-pattern camera backend
pub struct SyntheticDevices {
    width: u32,
    height: u32,
    failure: Mutex<Option<SyntheticFailure>>,
    active_tracks: Arc<AtomicUsize>,
    acquisitions: AtomicUsize,
}

impl SyntheticDevices {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            failure: Mutex::new(None),
            active_tracks: Arc::new(AtomicUsize::new(0)),
            acquisitions: AtomicUsize::new(0),
        }
    }

    /// Makes every following acquisition fail (or succeed again with `None`).
    pub fn set_failure(&self, failure: Option<SyntheticFailure>) {
        if let Ok(mut slot) = self.failure.lock() {
            *slot = failure;
        }
    }

    /// Tracks still running across all streams from this backend
    pub fn active_tracks(&self) -> usize {
        self.active_tracks.load(Ordering::SeqCst)
    }

    /// Successful acquisitions so far
    pub fn acquisitions(&self) -> usize {
        self.acquisitions.load(Ordering::SeqCst)
    }

    fn scripted_failure(&self) -> Option<SyntheticFailure> {
        self.failure.lock().ok().and_then(|slot| *slot)
    }
}

impl MediaDevices for SyntheticDevices {
    fn acquire(&self, constraints: &MediaConstraints) -> Result<Box<dyn VideoStream>> {
        if constraints.video.is_none() {
            return Err(VisionError::Config(
                "A video track is required for capture".to_string(),
            ));
        }

        match self.scripted_failure() {
            Some(SyntheticFailure::PermissionDenied) => {
                return Err(VisionError::PermissionDenied(
                    "Synthetic camera access was refused".to_string(),
                ));
            }
            Some(SyntheticFailure::NoDevice) => {
                return Err(VisionError::DeviceUnavailable(
                    "No synthetic camera present".to_string(),
                ));
            }
            Some(SyntheticFailure::Busy) => {
                let mut partial = SyntheticStream::new(self.width, self.height, &self.active_tracks);
                partial.stop_tracks();
                return Err(VisionError::DeviceUnavailable(
                    "Synthetic camera is busy".to_string(),
                ));
            }
            None => {}
        }

        self.acquisitions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(SyntheticStream::new(
            self.width,
            self.height,
            &self.active_tracks,
        )))
    }
}

/// One synthetic stream with a single video track
pub struct SyntheticStream {
    width: u32,
    height: u32,
    sequence: u64,
    live: bool,
    active_tracks: Arc<AtomicUsize>,
}

impl SyntheticStream {
    fn new(width: u32, height: u32, active_tracks: &Arc<AtomicUsize>) -> Self {
        active_tracks.fetch_add(1, Ordering::SeqCst);
        Self {
            width,
            height,
            sequence: 0,
            live: true,
            active_tracks: Arc::clone(active_tracks),
        }
    }

    /// Diagonal gradient that shifts with every frame
    fn render(&self) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(self.width as usize * self.height as usize * RGB_CHANNELS);
        let shift = self.sequence as usize;

        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                pixels.push(((x + shift * 8) % 256) as u8);
                pixels.push(((y + shift * 4) % 256) as u8);
                pixels.push((shift % 256) as u8);
            }
        }
        pixels
    }
}

impl VideoStream for SyntheticStream {
    fn label(&self) -> &str {
        "Synthetic Camera"
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn active_tracks(&self) -> usize {
        usize::from(self.live)
    }

    fn grab_frame(&mut self) -> Result<CapturedFrame> {
        if !self.live {
            return Err(VisionError::DeviceUnavailable(
                "Stream has been stopped".to_string(),
            ));
        }

        self.sequence += 1;
        CapturedFrame::from_rgb(self.width, self.height, self.render(), self.sequence)
    }

    fn stop_tracks(&mut self) {
        if self.live {
            self.live = false;
            self.active_tracks.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

impl Drop for SyntheticStream {
    fn drop(&mut self) {
        self.stop_tracks();
    }
}
