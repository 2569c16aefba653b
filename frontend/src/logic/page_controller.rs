//! Page Controller
//!
//! Owns the recognition page's state: the current image and its preview,
//! the current results, the detection mode and the pending mock job. Live
//! camera frames replace the preview and, at most once per live interval,
//! the results.
//!
//! Time is passed in by the caller so every transition is testable.

use chrono::{DateTime, Local};
use logging::Logger;
use std::time::{Duration, Instant};
use vision::{
    AnalysisJob, CapturedFrame, DetectionMode, DetectionSet, ImageFile, MockAnalyzer, RateLimiter,
    VisionError, decode_image,
};

/// RGB raster shown on the page; `revision` changes whenever the pixels do
#[derive(Debug, Clone)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    pub revision: u64,
}

pub struct PageController {
    image: Option<ImageFile>,
    preview: Option<Preview>,
    live_preview: Option<Preview>,
    results: DetectionSet,
    results_at: Option<DateTime<Local>>,
    mode: DetectionMode,
    pending: Option<AnalysisJob>,
    analyzer: MockAnalyzer,
    live_limiter: RateLimiter,
    next_revision: u64,
    logger: Logger,
}

impl PageController {
    pub fn new(analyzer: MockAnalyzer, live_interval: Duration, logger: Logger) -> Self {
        Self {
            image: None,
            preview: None,
            live_preview: None,
            results: DetectionSet::empty(),
            results_at: None,
            mode: DetectionMode::default(),
            pending: None,
            analyzer,
            live_limiter: RateLimiter::new(live_interval),
            next_revision: 0,
            logger,
        }
    }

    pub fn image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    /// Live frame while the camera is sampling, else the loaded image
    pub fn preview(&self) -> Option<&Preview> {
        self.live_preview.as_ref().or(self.preview.as_ref())
    }

    pub fn is_live(&self) -> bool {
        self.live_preview.is_some()
    }

    pub fn results(&self) -> &DetectionSet {
        &self.results
    }

    /// Local time the current results arrived, `HH:MM:SS`
    pub fn results_time(&self) -> Option<String> {
        self.results_at
            .map(|at| at.format("%H:%M:%S").to_string())
    }

    pub fn mode(&self) -> DetectionMode {
        self.mode
    }

    /// Changes the mode for the next job; a pending job keeps its own mode.
    pub fn set_mode(&mut self, mode: DetectionMode) {
        if mode != self.mode {
            self.logger
                .info(&format!("[RECOGNITION] Mode changed to {}", mode));
            self.mode = mode;
        }
    }

    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    /// Mode of the pending job, for the processing message
    pub fn processing_mode(&self) -> Option<DetectionMode> {
        self.pending.as_ref().map(AnalysisJob::mode)
    }

    pub fn can_run_recognition(&self) -> bool {
        self.image.is_some() && self.pending.is_none()
    }

    /// Replaces the current image, clears results and drops a pending job
    /// (its results would describe the previous image).
    ///
    /// An image that cannot be decoded is still accepted; it just has no preview.
    pub fn load_image(&mut self, file: ImageFile) {
        self.logger.info(&format!(
            "[UPLOAD] Loaded {} ({}, {} bytes)",
            file.name,
            file.mime_type,
            file.size()
        ));

        self.preview = match decode_image(&file.bytes) {
            Ok(decoded) => Some(Preview {
                width: decoded.width,
                height: decoded.height,
                rgb: decoded.rgb,
                revision: self.bump_revision(),
            }),
            Err(e) => {
                self.logger
                    .warn(&format!("[UPLOAD] No preview for {}: {}", file.name, e));
                None
            }
        };

        if let Some(job) = self.pending.take() {
            self.logger.info(&format!(
                "[RECOGNITION] Job {} dropped, a new image was loaded",
                job.id()
            ));
        }
        self.image = Some(file);
        self.clear_results();
    }

    pub fn remove_image(&mut self) -> bool {
        if self.image.take().is_none() {
            return false;
        }
        self.preview = None;
        self.pending = None;
        self.clear_results();
        self.logger.info("[UPLOAD] Image removed");
        true
    }

    /// Submits a mock job for the current image and clears the old results.
    ///
    /// # Errors
    /// `PreconditionFailed` with no image or while a job is pending
    pub fn run_recognition(&mut self, now: Instant) -> Result<DetectionMode, VisionError> {
        if self.image.is_none() {
            return Err(VisionError::PreconditionFailed(
                "Load an image before running recognition".to_string(),
            ));
        }
        if self.pending.is_some() {
            return Err(VisionError::PreconditionFailed(
                "Recognition is already running".to_string(),
            ));
        }

        self.clear_results();
        let job = self.analyzer.submit(self.mode, now);
        let mode = job.mode();
        self.pending = Some(job);
        Ok(mode)
    }

    /// Completes the pending job once it is due. Returns its mode.
    pub fn poll(&mut self, now: Instant) -> Option<DetectionMode> {
        let job = self.pending.as_ref()?;
        let results = self.analyzer.poll(job, now)?;
        let mode = job.mode();

        self.pending = None;
        self.set_results(results);
        Some(mode)
    }

    /// Time until the pending job completes
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|job| job.remaining(now))
    }

    /// Shows a live camera frame; returns `true` when it also refreshed the results.
    pub fn live_frame(&mut self, frame: CapturedFrame, now: Instant) -> bool {
        let analyzed = if self.live_limiter.try_acquire(now) {
            let results = self.analyzer.analyze_live(&frame, self.mode);
            self.set_results(results);
            true
        } else {
            false
        };

        let (width, height) = (frame.width(), frame.height());
        self.live_preview = Some(Preview {
            width,
            height,
            rgb: frame.into_pixels(),
            revision: self.bump_revision(),
        });
        analyzed
    }

    /// Leaves live mode: the loaded image (if any) is shown again, without
    /// the live results.
    pub fn end_live(&mut self) {
        if self.live_preview.take().is_some() {
            self.live_limiter.reset();
            self.clear_results();
            self.logger.info("[RECOGNITION] Live results cleared");
        }
    }

    fn set_results(&mut self, results: DetectionSet) {
        self.results = results;
        self.results_at = Some(Local::now());
    }

    fn clear_results(&mut self) {
        self.results = DetectionSet::empty();
        self.results_at = None;
    }

    fn bump_revision(&mut self) -> u64 {
        self.next_revision += 1;
        self.next_revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LogLevel;

    const DELAY: Duration = Duration::from_millis(2500);

    fn controller() -> PageController {
        let analyzer = MockAnalyzer::new(DELAY, Logger::disabled()).with_seed(1);
        PageController::new(analyzer, Duration::from_millis(1000), Logger::disabled())
    }

    fn image(name: &str) -> ImageFile {
        ImageFile::new(name, "image/png", vec![1, 2, 3])
    }

    fn frame(sequence: u64) -> CapturedFrame {
        CapturedFrame::from_rgb(2, 2, vec![sequence as u8; 12], sequence).unwrap()
    }

    #[test]
    fn test_run_recognition_requires_image() {
        let mut page = controller();

        assert!(!page.can_run_recognition());
        assert!(matches!(
            page.run_recognition(Instant::now()),
            Err(VisionError::PreconditionFailed(_))
        ));
    }

    #[test]
    fn test_recognition_completes_after_delay() {
        let mut page = controller();
        page.load_image(image("a.png"));
        let start = Instant::now();

        assert_eq!(page.run_recognition(start).unwrap(), DetectionMode::Object);
        assert!(page.is_processing());
        assert!(!page.can_run_recognition());
        assert!(page.poll(start + Duration::from_millis(100)).is_none());

        assert_eq!(page.poll(start + DELAY), Some(DetectionMode::Object));
        assert!(!page.is_processing());
        assert_eq!(page.results().len(), 4);
        assert!(page.results_time().is_some());
    }

    #[test]
    fn test_second_run_while_processing_rejected() {
        let mut page = controller();
        page.load_image(image("a.png"));
        let start = Instant::now();
        page.run_recognition(start).unwrap();

        assert!(page.run_recognition(start).is_err());
    }

    #[test]
    fn test_mode_switch_does_not_change_pending_job() {
        let mut page = controller();
        page.load_image(image("a.png"));
        let start = Instant::now();
        page.run_recognition(start).unwrap();

        page.set_mode(DetectionMode::Disaster);

        assert_eq!(page.processing_mode(), Some(DetectionMode::Object));
        assert_eq!(page.poll(start + DELAY), Some(DetectionMode::Object));
        assert_eq!(page.results().as_slice()[0].label(), "Person");
        assert_eq!(page.mode(), DetectionMode::Disaster);
    }

    #[test]
    fn test_new_image_clears_results_and_pending_job() {
        let (logger, memory) = Logger::in_memory(LogLevel::Info);
        let analyzer = MockAnalyzer::new(DELAY, Logger::disabled());
        let mut page = PageController::new(analyzer, Duration::from_secs(1), logger);
        page.load_image(image("a.png"));
        let start = Instant::now();
        page.run_recognition(start).unwrap();
        page.poll(start + DELAY);
        page.run_recognition(start + DELAY).unwrap();

        page.load_image(image("b.png"));

        assert!(page.results().is_empty());
        assert!(!page.is_processing());
        assert_eq!(page.image().unwrap().name, "b.png");
        assert!(memory.contains("dropped"));
    }

    #[test]
    fn test_undecodable_image_has_no_preview() {
        let mut page = controller();
        page.load_image(image("broken.png"));

        assert!(page.image().is_some());
        assert!(page.preview().is_none());
        assert!(page.can_run_recognition());
    }

    #[test]
    fn test_remove_image() {
        let mut page = controller();
        assert!(!page.remove_image());

        page.load_image(image("a.png"));
        assert!(page.remove_image());
        assert!(page.image().is_none());
        assert!(!page.can_run_recognition());
    }

    #[test]
    fn test_live_results_are_rate_limited() {
        let mut page = controller();
        let start = Instant::now();

        let analyzed: Vec<bool> = (0..25)
            .map(|i| page.live_frame(frame(i + 1), start + Duration::from_millis(i * 100)))
            .collect();

        // t = 0, 1000, 2000 ms
        assert_eq!(analyzed.iter().filter(|a| **a).count(), 3);
        assert!(page.is_live());
        assert_eq!(page.preview().unwrap().rgb[0], 25);
        assert_eq!(page.results().len(), 4);
    }

    #[test]
    fn test_preview_revision_changes_per_frame() {
        let mut page = controller();
        let now = Instant::now();

        page.live_frame(frame(1), now);
        let first = page.preview().unwrap().revision;
        page.live_frame(frame(2), now);

        assert_ne!(page.preview().unwrap().revision, first);
    }

    #[test]
    fn test_end_live_restores_image_preview_state() {
        let mut page = controller();
        page.live_frame(frame(1), Instant::now());

        page.end_live();

        assert!(!page.is_live());
        assert!(page.preview().is_none());
        assert!(page.results().is_empty());
    }
}
