//! Refresh-driven live sampling.
//!
//! Each iteration grabs a frame, hands it to the handler and only then asks
//! for the next refresh, so iterations never overlap and a slow handler
//! lowers the sampling rate. Disarming cancels the scheduled refresh; the
//! sampler also remembers which request it is waiting for, so a callback
//! that was already on its way is recognized as stale and ignored.

use super::refresh::{FrameRequest, RefreshScheduler};
use crate::capture::CaptureSession;
use crate::constants::logging::SAMPLER_LOG_INTERVAL;
use crate::error::{Result, VisionError};
use crate::frame::CapturedFrame;
use logging::Logger;

/// Receives each live frame; the frame is moved, not shared
pub type FrameHandler = Box<dyn FnMut(CapturedFrame)>;

/// Result of one refresh callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// A frame went to the handler and the next refresh is scheduled
    Delivered { sequence: u64 },
    /// Not the request the sampler is waiting for (stale or disarmed)
    Ignored,
    /// The session stopped streaming; the sampler disarmed itself
    Stopped,
}

pub struct LiveSampler {
    handler: Option<FrameHandler>,
    pending: Option<FrameRequest>,
    frames_delivered: u64,
    logger: Logger,
}

impl LiveSampler {
    pub fn new(logger: Logger) -> Self {
        Self {
            handler: None,
            pending: None,
            frames_delivered: 0,
            logger,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handler.is_some()
    }

    /// Frames handed out since the last arm
    pub fn frames_delivered(&self) -> u64 {
        self.frames_delivered
    }

    /// Starts sampling on the next refresh.
    ///
    /// # Errors
    /// `PreconditionFailed` if the session is not streaming or the sampler is
    /// already armed
    pub fn arm(
        &mut self,
        session: &CaptureSession,
        scheduler: &mut dyn RefreshScheduler,
        handler: FrameHandler,
    ) -> Result<()> {
        if self.is_armed() {
            return Err(VisionError::PreconditionFailed(
                "Live sampling is already running".to_string(),
            ));
        }
        if !session.is_streaming() {
            return Err(VisionError::PreconditionFailed(format!(
                "Live sampling needs a streaming camera (state: {})",
                session.state()
            )));
        }

        self.handler = Some(handler);
        self.frames_delivered = 0;
        self.pending = Some(scheduler.request_frame());
        self.logger.info("[SAMPLER] Live sampling armed");
        Ok(())
    }

    /// Stops sampling and cancels the scheduled refresh. No-op when disarmed.
    pub fn disarm(&mut self, scheduler: &mut dyn RefreshScheduler) {
        if let Some(request) = self.pending.take() {
            scheduler.cancel_frame(request);
        }
        if self.handler.take().is_some() {
            self.logger.info(&format!(
                "[SAMPLER] Live sampling disarmed after {} frames",
                self.frames_delivered
            ));
        }
    }

    /// Runs one sampling iteration for a delivered refresh callback.
    ///
    /// # Errors
    /// A frame read failure disarms the sampler and is returned; the handler
    /// is not called.
    pub fn on_refresh(
        &mut self,
        request: FrameRequest,
        session: &mut CaptureSession,
        scheduler: &mut dyn RefreshScheduler,
    ) -> Result<SampleOutcome> {
        if self.pending != Some(request) {
            return Ok(SampleOutcome::Ignored);
        }
        self.pending = None;

        if !session.is_streaming() {
            self.logger
                .info("[SAMPLER] Session stopped streaming, disarming live sampling");
            self.disarm(scheduler);
            return Ok(SampleOutcome::Stopped);
        }

        let frame = match session.grab_frame() {
            Ok(frame) => frame,
            Err(e) => {
                self.logger
                    .error(&format!("[SAMPLER] Frame read failed: {}", e));
                self.disarm(scheduler);
                return Err(e);
            }
        };

        let sequence = frame.sequence();
        if let Some(handler) = self.handler.as_mut() {
            handler(frame);
        }
        self.frames_delivered += 1;

        if self.frames_delivered.is_multiple_of(SAMPLER_LOG_INTERVAL) {
            self.logger.debug(&format!(
                "[SAMPLER] {} live frames delivered",
                self.frames_delivered
            ));
        }

        self.pending = Some(scheduler.request_frame());
        Ok(SampleOutcome::Delivered { sequence })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::SyntheticDevices;
    use crate::sampler::ManualRefresh;
    use logging::LogLevel;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    fn streaming_session() -> (Arc<SyntheticDevices>, CaptureSession) {
        let devices = Arc::new(SyntheticDevices::new(4, 4));
        let mut session = CaptureSession::new(devices.clone(), Logger::disabled());
        session.start().unwrap();
        (devices, session)
    }

    fn counting_handler() -> (Rc<RefCell<Vec<u64>>>, FrameHandler) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let handler: FrameHandler = Box::new(move |frame| sink.borrow_mut().push(frame.sequence()));
        (seen, handler)
    }

    #[test]
    fn test_arm_requires_streaming() {
        let devices = Arc::new(SyntheticDevices::new(4, 4));
        let session = CaptureSession::new(devices, Logger::disabled());
        let mut refresh = ManualRefresh::new();
        let mut sampler = LiveSampler::new(Logger::disabled());
        let (_, handler) = counting_handler();

        let result = sampler.arm(&session, &mut refresh, handler);

        assert!(matches!(result, Err(VisionError::PreconditionFailed(_))));
        assert!(!sampler.is_armed());
        assert_eq!(refresh.pending(), 0);
    }

    #[test]
    fn test_double_arm_rejected() {
        let (_devices, session) = streaming_session();
        let mut refresh = ManualRefresh::new();
        let mut sampler = LiveSampler::new(Logger::disabled());

        sampler.arm(&session, &mut refresh, counting_handler().1).unwrap();
        let second = sampler.arm(&session, &mut refresh, counting_handler().1);

        assert!(matches!(second, Err(VisionError::PreconditionFailed(_))));
        assert_eq!(refresh.pending(), 1);
    }

    #[test]
    fn test_each_tick_delivers_one_frame() {
        let (_devices, mut session) = streaming_session();
        let mut refresh = ManualRefresh::new();
        let (logger, memory) = Logger::in_memory(LogLevel::Debug);
        let mut sampler = LiveSampler::new(logger);
        let (seen, handler) = counting_handler();
        sampler.arm(&session, &mut refresh, handler).unwrap();

        for _ in 0..3 {
            for request in refresh.tick() {
                let outcome = sampler.on_refresh(request, &mut session, &mut refresh).unwrap();
                assert!(matches!(outcome, SampleOutcome::Delivered { .. }));
            }
        }

        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
        assert_eq!(sampler.frames_delivered(), 3);
        assert_eq!(refresh.pending(), 1);
        assert!(memory.contains("[SAMPLER] Live sampling armed"));
    }

    #[test]
    fn test_stale_request_is_ignored() {
        let (_devices, mut session) = streaming_session();
        let mut refresh = ManualRefresh::new();
        let mut sampler = LiveSampler::new(Logger::disabled());
        let (seen, handler) = counting_handler();
        sampler.arm(&session, &mut refresh, handler).unwrap();

        let in_flight = refresh.tick();
        sampler.disarm(&mut refresh);

        for request in in_flight {
            let outcome = sampler.on_refresh(request, &mut session, &mut refresh).unwrap();
            assert_eq!(outcome, SampleOutcome::Ignored);
        }
        assert!(seen.borrow().is_empty());
        assert_eq!(refresh.pending(), 0);
    }

    #[test]
    fn test_session_stop_disarms_without_calling_handler() {
        let (devices, mut session) = streaming_session();
        let mut refresh = ManualRefresh::new();
        let mut sampler = LiveSampler::new(Logger::disabled());
        let (seen, handler) = counting_handler();
        sampler.arm(&session, &mut refresh, handler).unwrap();

        session.stop();
        let request = refresh.tick()[0];
        let outcome = sampler.on_refresh(request, &mut session, &mut refresh).unwrap();

        assert_eq!(outcome, SampleOutcome::Stopped);
        assert!(!sampler.is_armed());
        assert!(seen.borrow().is_empty());
        assert_eq!(refresh.pending(), 0);
        assert_eq!(devices.active_tracks(), 0);
    }

    #[test]
    fn test_disarm_is_idempotent() {
        let (_devices, session) = streaming_session();
        let mut refresh = ManualRefresh::new();
        let mut sampler = LiveSampler::new(Logger::disabled());
        sampler.arm(&session, &mut refresh, counting_handler().1).unwrap();

        sampler.disarm(&mut refresh);
        sampler.disarm(&mut refresh);

        assert!(!sampler.is_armed());
        assert_eq!(refresh.pending(), 0);
    }
}
