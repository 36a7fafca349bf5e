//! Per-session mutable state handed to every frame.
//!
//! The browser callbacks (pointer, resize, animation frame) all mutate one
//! `RenderContext`; the renderer reads it and smooths the pointer once per
//! frame. Nothing here touches platform APIs.

use crate::viewport::Viewport;
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Smoothed position, eased toward `target` each frame.
    pub pos: DVec2,
    /// Raw position from the last move event.
    pub target: DVec2,
    pub inside: bool,
}

impl PointerState {
    pub fn on_move(&mut self, x: f64, y: f64) {
        self.target = DVec2::new(x, y);
        self.inside = true;
    }

    pub fn on_enter(&mut self) {
        self.inside = true;
    }

    pub fn on_leave(&mut self) {
        self.inside = false;
    }

    /// Exponential ease toward the target by `follow` in \[0, 1\].
    #[inline]
    pub fn smooth(&mut self, follow: f64) {
        self.pos += (self.target - self.pos) * follow;
    }
}

/// Elapsed time measured from the first frame timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Clock {
    start_ms: Option<f64>,
    elapsed_sec: f64,
}

impl Clock {
    /// Advance to a frame timestamp in milliseconds, returning elapsed seconds.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let start = *self.start_ms.get_or_insert(timestamp_ms);
        self.elapsed_sec = ((timestamp_ms - start) / 1000.0).max(0.0);
        self.elapsed_sec
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed_sec
    }

    pub fn is_started(&self) -> bool {
        self.start_ms.is_some()
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    pub viewport: Viewport,
    pub pointer: PointerState,
    pub clock: Clock,
    /// Touch-style input; interactive distortion is disabled when set.
    pub coarse_pointer: bool,
}

impl RenderContext {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.clock.elapsed()
    }
}
