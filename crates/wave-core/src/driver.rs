//! Run/stop control over a host frame scheduler.
//!
//! At most one frame request is pending at any time: every path that
//! schedules first cancels whatever is outstanding.

/// Host primitive that calls back once on the next animation frame.
pub trait FrameScheduler {
    type Handle: Copy + std::fmt::Debug;

    fn request(&mut self) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
}

pub struct LoopDriver<S: FrameScheduler> {
    scheduler: S,
    state: LoopState,
    pending: Option<S::Handle>,
    frames: u64,
}

impl<S: FrameScheduler> LoopDriver<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: LoopState::Idle,
            pending: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn pending(&self) -> Option<S::Handle> {
        self.pending
    }

    /// Frames delivered while running.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn reschedule(&mut self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel(h);
        }
        self.pending = Some(self.scheduler.request());
    }

    /// Idle -> Running; schedules the first frame. No-op when running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        log::debug!("[loop] start");
        self.state = LoopState::Running;
        self.reschedule();
    }

    /// Running -> Idle; drops the pending request.
    pub fn stop(&mut self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel(h);
        }
        if self.is_running() {
            log::debug!("[loop] stop after {} frames", self.frames);
        }
        self.state = LoopState::Idle;
    }

    /// Called from the scheduler callback. Returns true when the caller
    /// should render; the next frame is requested before returning.
    pub fn on_frame(&mut self) -> bool {
        self.pending = None;
        if !self.is_running() {
            return false;
        }
        self.frames += 1;
        self.reschedule();
        true
    }

    /// Cancel the pending frame and request a fresh one so a resize never
    /// leaves two loops alive.
    pub fn on_resize(&mut self) {
        if self.is_running() {
            self.reschedule();
        }
    }
}
