//! Integration tests for the capture session lifecycle
//!
//! Tests the session state machine against the synthetic camera:
//! - Start/stop and track release
//! - Failed acquisition
//! - Off-thread acquisition with late completion
//! - Release on drop

use logging::{LogLevel, Logger};
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use vision::{
    CaptureSession, MediaDevices, SessionState, SyntheticDevices, SyntheticFailure, VisionError,
};

fn new_session(devices: &Arc<SyntheticDevices>) -> CaptureSession {
    CaptureSession::new(devices.clone(), Logger::disabled())
}

#[test]
fn test_stop_after_start_leaves_no_tracks() {
    let devices = Arc::new(SyntheticDevices::new(64, 48));
    let mut session = new_session(&devices);

    session.start().expect("synthetic camera should start");
    assert_eq!(devices.active_tracks(), 1);

    session.stop();
    assert_eq!(devices.active_tracks(), 0);
    assert_eq!(session.state(), SessionState::Idle);

    // A second stop changes nothing
    session.stop();
    assert_eq!(devices.active_tracks(), 0);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn test_failed_start_leaves_no_tracks() {
    for failure in [
        SyntheticFailure::PermissionDenied,
        SyntheticFailure::NoDevice,
        SyntheticFailure::Busy,
    ] {
        let devices = Arc::new(SyntheticDevices::new(64, 48));
        devices.set_failure(Some(failure));
        let mut session = new_session(&devices);

        assert!(session.start().is_err());
        assert_eq!(session.state(), SessionState::Failed);
        assert!(session.last_error().is_some());
        assert_eq!(devices.active_tracks(), 0, "{:?} leaked a track", failure);
    }
}

#[test]
fn test_permission_denied_is_reported_as_such() {
    let devices = Arc::new(SyntheticDevices::new(64, 48));
    devices.set_failure(Some(SyntheticFailure::PermissionDenied));
    let mut session = new_session(&devices);

    let err = session.start().unwrap_err();

    assert!(matches!(err, VisionError::PermissionDenied(_)));
    assert!(err.user_message().contains("permission"));
}

#[test]
fn test_start_while_streaming_keeps_one_stream() {
    let devices = Arc::new(SyntheticDevices::new(64, 48));
    let mut session = new_session(&devices);
    session.start().unwrap();

    assert!(matches!(
        session.start(),
        Err(VisionError::PreconditionFailed(_))
    ));
    assert_eq!(devices.acquisitions(), 1);
    assert_eq!(devices.active_tracks(), 1);
}

#[test]
fn test_acquisition_on_worker_thread() {
    let devices = Arc::new(SyntheticDevices::new(64, 48));
    let (logger, memory) = Logger::in_memory(LogLevel::Info);
    let mut session = CaptureSession::new(devices.clone(), logger);

    let constraints = session.begin_start().unwrap();
    assert_eq!(session.state(), SessionState::Requesting);

    let (tx, rx) = mpsc::channel();
    let backend = session.devices();
    let worker = thread::spawn(move || {
        let _ = tx.send(backend.acquire(&constraints));
    });
    worker.join().unwrap();

    session.complete_start(rx.recv().unwrap()).unwrap();

    assert_eq!(session.state(), SessionState::Streaming);
    assert!(memory.contains("facingMode: \"environment\""));
}

#[test]
fn test_late_acquisition_after_stop_is_released() {
    let devices = Arc::new(SyntheticDevices::new(64, 48));
    let mut session = new_session(&devices);

    let constraints = session.begin_start().unwrap();
    let (tx, rx) = mpsc::channel();
    let backend = session.devices();

    // The user closes the dialog before the camera answers
    session.stop();
    thread::spawn(move || {
        let _ = tx.send(backend.acquire(&constraints));
    })
    .join()
    .unwrap();

    assert!(session.complete_start(rx.recv().unwrap()).is_err());
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(devices.active_tracks(), 0);
}

#[test]
fn test_restart_after_failure() {
    let devices = Arc::new(SyntheticDevices::new(64, 48));
    devices.set_failure(Some(SyntheticFailure::Busy));
    let mut session = new_session(&devices);
    assert!(session.start().is_err());

    devices.set_failure(None);
    session.start().expect("explicit restart should succeed");

    assert_eq!(session.state(), SessionState::Streaming);
    assert_eq!(devices.active_tracks(), 1);
}

#[test]
fn test_dropping_streaming_session_releases_tracks() {
    let devices = Arc::new(SyntheticDevices::new(64, 48));
    let mut session = new_session(&devices);
    session.start().unwrap();

    drop(session);

    assert_eq!(devices.active_tracks(), 0);
}
