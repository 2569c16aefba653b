//! Display refresh scheduling.
//!
//! Live sampling never runs on its own timer. It asks a [`RefreshScheduler`]
//! for one callback on the next display refresh and receives that callback
//! as a [`FrameRequest`]. The UI implements the scheduler on top of its
//! repaint loop; [`ManualRefresh`] lets tests tick the display by hand.

/// Handle for one scheduled refresh callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(u64);

impl FrameRequest {
    pub fn new(id: u64) -> Self {
        FrameRequest(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Source of display refresh callbacks
pub trait RefreshScheduler {
    /// Asks for one callback on the next refresh.
    fn request_frame(&mut self) -> FrameRequest;

    /// Withdraws a request. Cancelling an unknown or already-delivered
    /// request is a no-op.
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Scheduler driven by explicit [`tick`](ManualRefresh::tick) calls
#[derive(Debug, Default)]
pub struct ManualRefresh {
    next_id: u64,
    pending: Vec<FrameRequest>,
}

impl ManualRefresh {
    pub fn new() -> Self {
        Self::default()
    }

    /// One display refresh: returns the requests due now and clears them.
    pub fn tick(&mut self) -> Vec<FrameRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Requests waiting for the next tick
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl RefreshScheduler for ManualRefresh {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.pending.push(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.pending.retain(|pending| *pending != request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_have_unique_ids() {
        let mut refresh = ManualRefresh::new();
        let a = refresh.request_frame();
        let b = refresh.request_frame();

        assert_ne!(a, b);
        assert_eq!(refresh.pending(), 2);
    }

    #[test]
    fn test_tick_drains_pending() {
        let mut refresh = ManualRefresh::new();
        let request = refresh.request_frame();

        assert_eq!(refresh.tick(), vec![request]);
        assert!(refresh.tick().is_empty());
    }

    #[test]
    fn test_cancel_removes_request() {
        let mut refresh = ManualRefresh::new();
        let request = refresh.request_frame();

        refresh.cancel_frame(request);
        refresh.cancel_frame(FrameRequest::new(99));

        assert_eq!(refresh.pending(), 0);
    }
}
