//! Constants shared across the vision modules

/// Logging intervals for per-frame work
pub mod logging {
    /// Log progress every N frames read from a camera
    pub const CAMERA_LOG_INTERVAL: u64 = 1000;
    /// Log progress every N frames delivered by live sampling
    pub const SAMPLER_LOG_INTERVAL: u64 = 300;
}

/// Still capture output
pub mod capture {
    /// JPEG quality on the 0.0-1.0 scale
    pub const JPEG_QUALITY: f64 = 0.9;
    /// File name prefix; the full name is `camera-capture-<epoch-millis>.jpg`
    pub const CAPTURE_FILE_PREFIX: &str = "camera-capture";
}

/// Mock recognition timing
pub mod analysis {
    use std::time::Duration;

    /// Delay before a submitted recognition job yields results
    pub const RECOGNITION_DELAY: Duration = Duration::from_millis(2500);
    /// Minimum spacing between live-camera result updates
    pub const LIVE_RESULT_INTERVAL: Duration = Duration::from_millis(1000);
    /// Maximum jitter applied to live results (normalized units)
    pub const LIVE_JITTER: f64 = 0.02;
}
