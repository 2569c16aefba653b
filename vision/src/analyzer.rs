//! Mock recognition.
//!
//! There is no inference engine: each [`DetectionMode`] has a fixed result
//! table that is released once the configured delay has elapsed. Live camera
//! analysis returns the same table with a little seeded jitter so the overlay
//! visibly tracks successive frames.

use crate::constants::analysis::{LIVE_JITTER, RECOGNITION_DELAY};
use crate::detection::{Detection, DetectionSet};
use crate::error::VisionError;
use crate::frame::CapturedFrame;
use logging::Logger;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Recognition mode selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionMode {
    #[default]
    Object,
    Disaster,
}

impl DetectionMode {
    pub const ALL: [DetectionMode; 2] = [DetectionMode::Object, DetectionMode::Disaster];

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMode::Object => "object",
            DetectionMode::Disaster => "disaster",
        }
    }

    /// Toggle button label
    pub fn label(&self) -> &'static str {
        match self {
            DetectionMode::Object => "Object Detection",
            DetectionMode::Disaster => "Disaster Detection",
        }
    }

    pub fn results_title(&self) -> &'static str {
        match self {
            DetectionMode::Object => "Object Detection Results",
            DetectionMode::Disaster => "Disaster Analysis Results",
        }
    }

    /// Shown while a job is pending
    pub fn processing_message(&self) -> &'static str {
        match self {
            DetectionMode::Object => "Detecting objects in image...",
            DetectionMode::Disaster => "Analyzing disaster features...",
        }
    }

    pub fn completion_message(&self) -> &'static str {
        match self {
            DetectionMode::Object => "Object detection complete",
            DetectionMode::Disaster => "Disaster analysis complete",
        }
    }
}

impl fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectionMode {
    type Err = VisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "object" => Ok(DetectionMode::Object),
            "disaster" => Ok(DetectionMode::Disaster),
            other => Err(VisionError::Config(format!(
                "Unknown detection mode '{}' (expected 'object' or 'disaster')",
                other
            ))),
        }
    }
}

/// (label, confidence, [x, y, width, height])
type MockRow = (&'static str, f64, [f64; 4]);

const OBJECT_RESULTS: [MockRow; 4] = [
    ("Person", 0.98, [0.2, 0.2, 0.3, 0.6]),
    ("Tree", 0.92, [0.7, 0.1, 0.2, 0.7]),
    ("Car", 0.89, [0.1, 0.7, 0.25, 0.2]),
    ("Building", 0.84, [0.5, 0.1, 0.4, 0.5]),
];

const DISASTER_RESULTS: [MockRow; 3] = [
    ("Flood Water", 0.96, [0.1, 0.4, 0.8, 0.5]),
    ("Damaged Building", 0.87, [0.3, 0.2, 0.4, 0.3]),
    ("Debris", 0.82, [0.5, 0.7, 0.3, 0.2]),
];

fn mock_rows(mode: DetectionMode) -> &'static [MockRow] {
    match mode {
        DetectionMode::Object => &OBJECT_RESULTS,
        DetectionMode::Disaster => &DISASTER_RESULTS,
    }
}

fn build_set(rows: impl Iterator<Item = (String, &'static str, f64, [f64; 4])>) -> DetectionSet {
    let detections = rows
        .map(|(id, label, confidence, bbox)| Detection::from_parts(&id, label, confidence, bbox))
        .collect::<Vec<_>>();
    // Ids are positional and therefore unique
    DetectionSet::new(detections).unwrap_or_default()
}

/// A submitted recognition request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisJob {
    id: u64,
    mode: DetectionMode,
    submitted_at: Instant,
    ready_at: Instant,
}

impl AnalysisJob {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Mode captured at submission; later toggles do not affect it
    pub fn mode(&self) -> DetectionMode {
        self.mode
    }

    pub fn submitted_at(&self) -> Instant {
        self.submitted_at
    }

    pub fn ready_at(&self) -> Instant {
        self.ready_at
    }

    pub fn is_ready(&self, now: Instant) -> bool {
        now >= self.ready_at
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.ready_at.saturating_duration_since(now)
    }
}

/// Delayed, hardcoded recognition
pub struct MockAnalyzer {
    delay: Duration,
    rng: StdRng,
    next_job: u64,
    logger: Logger,
}

impl MockAnalyzer {
    pub fn new(delay: Duration, logger: Logger) -> Self {
        Self {
            delay,
            rng: StdRng::from_entropy(),
            next_job: 1,
            logger,
        }
    }

    /// Makes live jitter reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn submit(&mut self, mode: DetectionMode, now: Instant) -> AnalysisJob {
        let job = AnalysisJob {
            id: self.next_job,
            mode,
            submitted_at: now,
            ready_at: now + self.delay,
        };
        self.next_job += 1;

        self.logger.info(&format!(
            "[RECOGNITION] Job {} submitted ({} mode, ready in {}ms)",
            job.id,
            mode,
            self.delay.as_millis()
        ));
        job
    }

    /// Results for `job` once its delay has elapsed, `None` before.
    pub fn poll(&self, job: &AnalysisJob, now: Instant) -> Option<DetectionSet> {
        if !job.is_ready(now) {
            return None;
        }
        self.logger.info(&format!(
            "[RECOGNITION] Job {} complete after {}ms",
            job.id,
            now.saturating_duration_since(job.submitted_at).as_millis()
        ));
        Some(Self::mock_results(job.mode))
    }

    /// The fixed result table for `mode`, ids numbered from 1.
    pub fn mock_results(mode: DetectionMode) -> DetectionSet {
        build_set(
            mock_rows(mode)
                .iter()
                .enumerate()
                .map(|(i, &(label, confidence, bbox))| ((i + 1).to_string(), label, confidence, bbox)),
        )
    }

    /// Immediate results for a live frame: the mode's table, jittered.
    ///
    /// Boxes stay inside the image and confidences within 0.0-1.0.
    pub fn analyze_live(&mut self, frame: &CapturedFrame, mode: DetectionMode) -> DetectionSet {
        let rows: Vec<_> = mock_rows(mode)
            .iter()
            .enumerate()
            .map(|(i, &(label, confidence, [x, y, w, h]))| {
                let x = (x + self.jitter()).clamp(0.0, 1.0 - w);
                let y = (y + self.jitter()).clamp(0.0, 1.0 - h);
                let confidence = (confidence + self.jitter()).clamp(0.0, 1.0);
                ((i + 1).to_string(), label, confidence, [x, y, w, h])
            })
            .collect();

        self.logger.debug(&format!(
            "[RECOGNITION] Live analysis of frame {} ({}x{}, {} mode)",
            frame.sequence(),
            frame.width(),
            frame.height(),
            mode
        ));
        build_set(rows.into_iter())
    }

    fn jitter(&mut self) -> f64 {
        self.rng.gen_range(-LIVE_JITTER..=LIVE_JITTER)
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new(RECOGNITION_DELAY, Logger::disabled())
    }
}
