//! The composite sine curve every pass samples.

use crate::constants::{CURVATURE_STEP, NOISE_GAIN, NOISE_T_SCALE, NOISE_X_SCALE, SLOPE_STEP};

/// One extra sine term relative to the base wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Harmonic {
    pub freq: f64,
    pub speed: f64,
    pub amp: f64,
}

/// Up to two harmonics layered on the base sine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Harmonics {
    pub second: Harmonic,
    pub third: Option<Harmonic>,
}

impl Harmonics {
    /// Crest series used by threads, aura, glass, specular, foam and particles.
    pub const CREST: Harmonics = Harmonics {
        second: Harmonic {
            freq: 0.45,
            speed: 1.7,
            amp: 0.38,
        },
        third: Some(Harmonic {
            freq: 0.18,
            speed: 0.65,
            amp: 0.18,
        }),
    };

    /// Softer series for the filled background bands.
    pub const BAND: Harmonics = Harmonics {
        second: Harmonic {
            freq: 0.45,
            speed: 1.7,
            amp: 0.34,
        },
        third: Some(Harmonic {
            freq: 0.16,
            speed: 0.6,
            amp: 0.16,
        }),
    };

    /// Two-term series of the vertical columns.
    pub const COLUMN: Harmonics = Harmonics {
        second: Harmonic {
            freq: 0.45,
            speed: 1.6,
            amp: 0.35,
        },
        third: None,
    };
}

/// Base amplitude, spatial frequency and temporal speed of a wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveShape {
    pub amplitude: f64,
    pub wavelength: f64,
    pub speed: f64,
}

/// Per-call scaling of a [`WaveShape`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Multipliers {
    pub amp: f64,
    pub len: f64,
    pub speed: f64,
}

impl Multipliers {
    pub const UNIT: Multipliers = Multipliers::new(1.0, 1.0, 1.0);

    pub const fn new(amp: f64, len: f64, speed: f64) -> Self {
        Self { amp, len, speed }
    }
}

impl Default for Multipliers {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Sum of the base sine and its harmonics at `coord` with phase `phase`.
#[inline]
pub fn harmonic_sum(coord: f64, k: f64, phase: f64, amp: f64, harmonics: &Harmonics) -> f64 {
    let h2 = harmonics.second;
    let mut v = (coord * k + phase).sin() * amp
        + (coord * k * h2.freq + phase * h2.speed).sin() * (amp * h2.amp);
    if let Some(h3) = harmonics.third {
        v += (coord * k * h3.freq + phase * h3.speed).sin() * (amp * h3.amp);
    }
    v
}

/// Perpendicular displacement of the composite wave.
#[inline]
pub fn displacement(
    shape: &WaveShape,
    harmonics: &Harmonics,
    coord: f64,
    time_sec: f64,
    mul: Multipliers,
) -> f64 {
    let amp = shape.amplitude * mul.amp;
    let k = shape.wavelength * mul.len;
    let phase = time_sec * shape.speed * mul.speed;
    harmonic_sum(coord, k, phase, amp, harmonics)
}

/// A horizontal crest anchored on a baseline at one instant.
#[derive(Clone, Copy, Debug)]
pub struct Crest {
    pub shape: WaveShape,
    pub harmonics: Harmonics,
    pub baseline: f64,
    pub time_sec: f64,
    pub mul: Multipliers,
}

impl Crest {
    #[inline]
    pub fn y(&self, x: f64) -> f64 {
        self.baseline + displacement(&self.shape, &self.harmonics, x, self.time_sec, self.mul)
    }

    /// Symmetric first difference.
    #[inline]
    pub fn slope(&self, x: f64) -> f64 {
        let h = SLOPE_STEP;
        (self.y(x + h) - self.y(x - h)) / (2.0 * h)
    }

    /// Second difference `y(x-h) + y(x+h) - 2y(x)`.
    #[inline]
    pub fn curvature(&self, x: f64) -> f64 {
        let h = CURVATURE_STEP;
        self.y(x - h) + self.y(x + h) - 2.0 * self.y(x)
    }

    /// Sample points from 0 up to and including `width + step`.
    pub fn points(&self, width: f64, step: f64) -> impl Iterator<Item = glam::DVec2> + '_ {
        sample_range(0.0, width + step, step).map(move |x| glam::DVec2::new(x, self.y(x)))
    }
}

/// Inclusive stepped range; `step` must be positive.
pub fn sample_range(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && end >= start {
        ((end - start) / step).floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| start + i as f64 * step)
}

/// Deterministic pseudo-random value in \[0, 1) from position and time.
#[inline]
pub fn hash_noise(x: f64, time_sec: f64) -> f64 {
    let n = (x * NOISE_X_SCALE + time_sec * NOISE_T_SCALE).sin() * NOISE_GAIN;
    let f = n - n.floor();
    // tiny negative n rounds up to exactly 1.0
    if f < 1.0 {
        f
    } else {
        0.0
    }
}
