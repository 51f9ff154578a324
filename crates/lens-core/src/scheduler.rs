//! Frame-callback scheduling.
//!
//! The smoothing loop is a single step that re-arms itself: every delivered
//! frame runs one tick and then requests the next frame. [`FrameLoop`] keeps
//! the handle of the outstanding request so stopping the loop can revoke it.

/// Identifier of an outstanding frame request (a `requestAnimationFrame` id
/// on the web).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// "Run once before the next repaint" and its cancellation.
pub trait FrameScheduler {
    /// Ask for one callback on the next frame. `None` if the platform
    /// refused the request.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Self-rescheduling frame task with a stored cancellation handle.
#[derive(Debug)]
pub struct FrameLoop<S> {
    scheduler: S,
    pending: Option<FrameHandle>,
    running: bool,
    ticks: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            running: false,
            ticks: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Number of frames accepted since the loop was created.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Arm the first request. No-op while already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.arm();
    }

    /// Accept a delivered frame. Returns false for frames that arrive after
    /// [`stop`](Self::stop) or without an outstanding request.
    pub fn begin(&mut self) -> bool {
        if !self.running || self.pending.take().is_none() {
            return false;
        }
        self.ticks += 1;
        true
    }

    /// Request the next frame; called at the end of each step.
    pub fn rearm(&mut self) {
        if self.running && self.pending.is_none() {
            self.arm();
        }
    }

    /// Stop and revoke the outstanding request, if any.
    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    fn arm(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::error!("[frame] frame request refused; loop stalled");
        }
    }
}

/// Scheduler whose frames are delivered explicitly by the host.
///
/// Holds at most one outstanding request, mirroring how the loop uses
/// `requestAnimationFrame`. Used by tests and by hosts without a display
/// refresh signal.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    outstanding: Option<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outstanding(&self) -> Option<FrameHandle> {
        self.outstanding
    }

    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }

    /// Consume the outstanding request as if the display refreshed.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.outstanding.take()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.outstanding = Some(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.outstanding == Some(handle) {
            self.outstanding = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_rearms_after_each_frame() {
        let mut fl = FrameLoop::new(ManualScheduler::new());
        fl.start();
        for _ in 0..3 {
            assert!(fl.scheduler_mut().fire().is_some());
            assert!(fl.begin());
            fl.rearm();
        }
        assert_eq!(fl.ticks(), 3);
        assert_eq!(fl.scheduler().requested(), 4);
        assert!(fl.pending().is_some());
    }

    #[test]
    fn start_twice_requests_once() {
        let mut fl = FrameLoop::new(ManualScheduler::new());
        fl.start();
        fl.start();
        assert_eq!(fl.scheduler().requested(), 1);
    }

    #[test]
    fn stop_cancels_the_pending_request() {
        let mut fl = FrameLoop::new(ManualScheduler::new());
        fl.start();
        fl.stop();
        assert_eq!(fl.scheduler().cancelled(), 1);
        assert!(fl.scheduler().outstanding().is_none());
        assert!(!fl.begin());
        fl.rearm();
        assert_eq!(fl.scheduler().requested(), 1);
    }

    #[test]
    fn begin_without_request_is_rejected() {
        let mut fl = FrameLoop::new(ManualScheduler::new());
        assert!(!fl.begin());
        fl.start();
        assert!(fl.begin());
        assert!(!fl.begin());
    }
}
