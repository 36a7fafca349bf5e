use crate::constants::{DPR_MAX, DPR_MIN};

/// Clamp a reported device pixel ratio; non-finite or missing ratios count as 1.
#[inline]
pub fn clamp_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.clamp(DPR_MIN, DPR_MAX)
    } else {
        DPR_MIN
    }
}

/// Drawing area in css pixels plus the ratio used for the backing bitmap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            dpr: DPR_MIN,
        }
    }
}

impl Viewport {
    /// Measure from raw window values: css size is floored, dpr clamped.
    pub fn measure(inner_width: f64, inner_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: inner_width.max(0.0).floor(),
            height: inner_height.max(0.0).floor(),
            dpr: clamp_dpr(device_pixel_ratio),
        }
    }

    /// Backing bitmap size in device pixels.
    #[inline]
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }

    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width && y < self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
