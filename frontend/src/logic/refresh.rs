//! Refresh scheduling on egui's repaint loop.
//!
//! A frame request asks egui for one more repaint; the next `update` call
//! takes the due request and hands it to the live sampler.

use vision::{FrameRequest, RefreshScheduler};

pub struct EguiRefresh {
    ctx: egui::Context,
    next_id: u64,
    pending: Option<FrameRequest>,
}

impl EguiRefresh {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_id: 0,
            pending: None,
        }
    }

    /// Takes the request due on this repaint, if any.
    pub fn take_due(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }
}

impl RefreshScheduler for EguiRefresh {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest::new(self.next_id);
        self.pending = Some(request);
        self.ctx.request_repaint();
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending == Some(request) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_due_once() {
        let mut refresh = EguiRefresh::new(egui::Context::default());
        let request = refresh.request_frame();

        assert_eq!(refresh.take_due(), Some(request));
        assert_eq!(refresh.take_due(), None);
    }

    #[test]
    fn test_cancel_only_matching_request() {
        let mut refresh = EguiRefresh::new(egui::Context::default());
        let first = refresh.request_frame();
        let second = refresh.request_frame();

        refresh.cancel_frame(first);
        assert_eq!(refresh.take_due(), Some(second));

        let third = refresh.request_frame();
        refresh.cancel_frame(third);
        assert_eq!(refresh.take_due(), None);
    }
}
