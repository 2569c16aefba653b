//! Integration tests for still capture
//!
//! End to end from a synthetic camera to an encoded JPEG file:
//! - Artifact type, payload and name
//! - Automatic camera stop after the photo
//! - Precondition failure while idle

use logging::Logger;
use std::sync::Arc;
use vision::{
    CameraCapture, CaptureSession, SessionState, StillCapture, SyntheticDevices, VisionError,
    decode_image,
};

#[test]
fn test_photo_end_to_end() {
    let devices = Arc::new(SyntheticDevices::new(64, 48));
    let mut session = CaptureSession::new(devices.clone(), Logger::disabled());
    session.start().unwrap();
    let mut dialog = CameraCapture::open(
        session,
        StillCapture::jpeg(Logger::disabled()),
        Logger::disabled(),
    );

    let photo = dialog.capture_photo().expect("photo should be captured");

    assert_eq!(photo.mime_type, "image/jpeg");
    assert!(photo.bytes.len() > 2);
    assert_eq!(&photo.bytes[..2], &[0xFF, 0xD8]);
    assert!(photo.name.starts_with("camera-capture-") && photo.name.ends_with(".jpg"));

    assert_eq!(dialog.session().state(), SessionState::Idle);
    assert_eq!(devices.active_tracks(), 0);
    assert!(!dialog.is_open());
}

#[test]
fn test_photo_keeps_native_resolution() {
    let devices = Arc::new(SyntheticDevices::new(40, 30));
    let mut session = CaptureSession::new(devices, Logger::disabled());
    session.start().unwrap();

    let photo = StillCapture::jpeg(Logger::disabled())
        .capture(&mut session)
        .unwrap();
    let decoded = decode_image(&photo.bytes).unwrap();

    assert_eq!((decoded.width, decoded.height), (40, 30));
}

#[test]
fn test_photo_while_idle_produces_nothing() {
    let devices = Arc::new(SyntheticDevices::new(64, 48));
    let mut session = CaptureSession::new(devices.clone(), Logger::disabled());

    let result = StillCapture::jpeg(Logger::disabled()).capture(&mut session);

    assert!(matches!(result, Err(VisionError::PreconditionFailed(_))));
    assert_eq!(devices.acquisitions(), 0);
}

#[test]
fn test_photo_while_idle_through_dialog() {
    let devices = Arc::new(SyntheticDevices::new(64, 48));
    let session = CaptureSession::new(devices, Logger::disabled());
    let mut dialog = CameraCapture::open(
        session,
        StillCapture::jpeg(Logger::disabled()),
        Logger::disabled(),
    );

    assert!(!dialog.can_capture_photo());
    assert!(matches!(
        dialog.capture_photo(),
        Err(VisionError::PreconditionFailed(_))
    ));
    assert!(dialog.is_open());
}
