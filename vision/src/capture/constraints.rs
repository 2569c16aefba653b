//! Stream acquisition constraints.

use std::fmt;

/// Which way the requested camera should face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingMode {
    /// Front camera, towards the user
    User,
    /// Rear camera, away from the user
    Environment,
}

impl FacingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacingMode::User => "user",
            FacingMode::Environment => "environment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoConstraints {
    /// Preferred, not required: backends fall back to any camera
    pub facing_mode: FacingMode,
}

/// What a capture session asks a [`MediaDevices`](super::MediaDevices) backend for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaConstraints {
    pub video: Option<VideoConstraints>,
    pub audio: bool,
}

impl MediaConstraints {
    /// Video only, rear camera preferred, audio explicitly excluded.
    pub fn rear_camera() -> Self {
        Self {
            video: Some(VideoConstraints {
                facing_mode: FacingMode::Environment,
            }),
            audio: false,
        }
    }

    /// Preferred facing, if video was requested at all
    pub fn facing_mode(&self) -> Option<FacingMode> {
        self.video.map(|v| v.facing_mode)
    }
}

impl Default for MediaConstraints {
    fn default() -> Self {
        Self::rear_camera()
    }
}

impl fmt::Display for MediaConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.video {
            Some(video) => write!(
                f,
                "{{ video: {{ facingMode: \"{}\" }}, audio: {} }}",
                video.facing_mode.as_str(),
                self.audio
            ),
            None => write!(f, "{{ video: false, audio: {} }}", self.audio),
        }
    }
}
