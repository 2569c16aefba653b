use std::path::PathBuf;
use vision::{DetectionMode, DroppedFile};

/// Commands initiated by the UI (View -> Controller)
/// These are "requests" to perform actions.
#[derive(Debug, Clone)]
pub enum UiCommand {
    // --- Recognition ---
    SelectMode(DetectionMode),
    RunRecognition,

    // --- Upload ---
    /// Files dropped onto the window
    FilesDropped(Vec<DroppedFile>),
    /// Path typed into the uploader
    LoadImagePath(PathBuf),
    RemoveImage,

    // --- Camera dialog ---
    OpenCamera,
    RetryCamera,
    CapturePhoto,
    ToggleLiveDetection,
    CloseCamera,
}
