//! Static configuration for the two wave presets.
//!
//! Defaults mirror the tuned values in `constants.rs`. A config is checked
//! once with [`WaveConfig::validate`] before it reaches the renderer; after
//! that it is read-only for the whole session.

use crate::color::{Palette, Rgb};
use crate::constants::*;
use crate::curve::{Multipliers, WaveShape};
use crate::surface::Blend;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("palette `{0}` must have at least one stop")]
    EmptyPalette(&'static str),
    #[error("`{0}` must be positive and finite, got {1}")]
    NotPositive(&'static str, f64),
    #[error("`{0}` must be non-negative and finite, got {1}")]
    Negative(&'static str, f64),
    #[error("`{0}` must be finite, got {1}")]
    NotFinite(&'static str, f64),
    #[error("`{0}` must be greater than zero")]
    ZeroCount(&'static str),
    #[error("particle size range is inverted ({min} > {max})")]
    InvertedSizeRange { min: f64, max: f64 },
    #[error("unknown wave preset `{0}` (expected `columns` or `layered`)")]
    UnknownPreset(String),
}

fn positive(name: &'static str, v: f64) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive(name, v))
    }
}

fn non_negative(name: &'static str, v: f64) -> Result<(), ConfigError> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative(name, v))
    }
}

fn finite(name: &'static str, v: f64) -> Result<(), ConfigError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite(name, v))
    }
}

/// Amplitude and length scale must not flip sign; speed may run backwards.
fn multipliers(name: &'static str, m: Multipliers) -> Result<(), ConfigError> {
    non_negative(name, m.amp)?;
    non_negative(name, m.len)?;
    finite(name, m.speed)
}

fn shape(s: &WaveShape) -> Result<(), ConfigError> {
    non_negative("amplitude", s.amplitude)?;
    non_negative("wavelength", s.wavelength)?;
    finite("speed", s.speed)
}

fn non_empty(name: &'static str, palette: &Palette) -> Result<(), ConfigError> {
    if palette.is_empty() {
        Err(ConfigError::EmptyPalette(name))
    } else {
        Ok(())
    }
}

// ---------------- Columns preset ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnLayer {
    pub amp_mul: f64,
    pub speed_mul: f64,
    pub alpha: f64,
}

impl ColumnLayer {
    pub const fn new(amp_mul: f64, speed_mul: f64, alpha: f64) -> Self {
        Self {
            amp_mul,
            speed_mul,
            alpha,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    pub enabled: bool,
    pub radius: f64,
    pub y_radius: f64,
    pub strength: f64,
    pub alpha_boost: f64,
    pub width_boost: f64,
    /// Fraction of the remaining distance the smoothed pointer covers per frame.
    pub follow: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: INTERACTION_RADIUS,
            y_radius: INTERACTION_Y_RADIUS,
            strength: INTERACTION_STRENGTH,
            alpha_boost: INTERACTION_ALPHA_BOOST,
            width_boost: INTERACTION_WIDTH_BOOST,
            follow: INTERACTION_FOLLOW,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TwistDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl TwistDirection {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            TwistDirection::Clockwise => 1.0,
            TwistDirection::CounterClockwise => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwistConfig {
    pub enabled: bool,
    /// Center as a fraction of viewport width/height.
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub strength: f64,
    pub dir: TwistDirection,
    pub alpha_boost: f64,
    pub width_boost: f64,
}

impl Default for TwistConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            x: TWIST_X,
            y: TWIST_Y,
            radius: TWIST_RADIUS,
            strength: TWIST_STRENGTH,
            dir: TwistDirection::Clockwise,
            alpha_boost: TWIST_ALPHA_BOOST,
            width_boost: TWIST_WIDTH_BOOST,
        }
    }
}

/// Interactive variant: vertical wavy strokes in columns with pointer and
/// twist distortion, finished by a vignette.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnsConfig {
    pub columns: usize,
    pub shape: WaveShape,
    pub layers: Vec<ColumnLayer>,
    pub vignette: f64,
    pub palette: Palette,
    pub color_rate: f64,
    pub wash_alpha: f64,
    pub step: f64,
    pub overscan: f64,
    pub interaction: InteractionConfig,
    pub twist: TwistConfig,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            columns: COLUMNS_COUNT,
            shape: WaveShape {
                amplitude: COLUMNS_AMPLITUDE,
                wavelength: COLUMNS_WAVELENGTH,
                speed: COLUMNS_SPEED,
            },
            layers: vec![
                ColumnLayer::new(1.0, 1.0, 0.30),
                ColumnLayer::new(0.6, 0.6, 0.20),
                ColumnLayer::new(1.4, 1.4, 0.12),
            ],
            vignette: COLUMNS_VIGNETTE,
            palette: Palette::new(vec![
                Rgb::new(70, 8, 14),
                Rgb::new(110, 12, 20),
                Rgb::new(150, 16, 26),
                Rgb::new(70, 8, 14),
            ]),
            color_rate: COLUMNS_COLOR_RATE,
            wash_alpha: COLUMNS_WASH_ALPHA,
            step: COLUMNS_STEP,
            overscan: COLUMNS_OVERSCAN,
            interaction: InteractionConfig::default(),
            twist: TwistConfig::default(),
        }
    }
}

impl ColumnsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroCount("columns"));
        }
        non_empty("columns.palette", &self.palette)?;
        shape(&self.shape)?;
        positive("step", self.step)?;
        non_negative("overscan", self.overscan)?;
        non_negative("vignette", self.vignette)?;
        finite("color_rate", self.color_rate)?;
        non_negative("wash_alpha", self.wash_alpha)?;
        for layer in &self.layers {
            non_negative("layers.amp_mul", layer.amp_mul)?;
            finite("layers.speed_mul", layer.speed_mul)?;
            non_negative("layers.alpha", layer.alpha)?;
        }
        let i = &self.interaction;
        if i.enabled {
            positive("interaction.radius", i.radius)?;
            positive("interaction.y_radius", i.y_radius)?;
            finite("interaction.strength", i.strength)?;
            non_negative("interaction.alpha_boost", i.alpha_boost)?;
            non_negative("interaction.width_boost", i.width_boost)?;
            non_negative("interaction.follow", i.follow)?;
        }
        let t = &self.twist;
        if t.enabled {
            finite("twist.x", t.x)?;
            finite("twist.y", t.y)?;
            non_negative("twist.radius", t.radius)?;
            finite("twist.strength", t.strength)?;
            non_negative("twist.alpha_boost", t.alpha_boost)?;
            non_negative("twist.width_boost", t.width_boost)?;
        }
        Ok(())
    }
}

// ---------------- Layered preset ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub mul: Multipliers,
    /// Baseline as a fraction of viewport height.
    pub y_offset: f64,
    pub darken: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BandsConfig {
    pub enabled: bool,
    pub step: f64,
    /// Drawn in order, farthest first.
    pub bands: Vec<Band>,
}

impl Default for BandsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            step: BAND_STEP,
            bands: vec![
                Band {
                    mul: Multipliers::new(2.3, 0.65, 0.45),
                    y_offset: 0.80,
                    darken: 0.35,
                },
                Band {
                    mul: Multipliers::new(1.6, 0.8, 0.55),
                    y_offset: 0.74,
                    darken: 0.22,
                },
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreadsConfig {
    pub enabled: bool,
    pub count: usize,
    pub step: f64,
    pub amp_jitter: f64,
    pub len_jitter: f64,
    pub speed_jitter: f64,
    pub alpha: f64,
    pub width: f64,
}

impl Default for ThreadsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: THREAD_COUNT,
            step: THREAD_STEP,
            amp_jitter: THREAD_AMP_JITTER,
            len_jitter: THREAD_LEN_JITTER,
            speed_jitter: THREAD_SPEED_JITTER,
            alpha: THREAD_ALPHA,
            width: THREAD_WIDTH,
        }
    }
}

impl ThreadsConfig {
    /// Multipliers of thread `i`: a fixed linear spread around 1.0.
    #[inline]
    pub fn multipliers(&self, i: usize) -> Multipliers {
        let u = i as f64 / self.count as f64 - 0.5;
        Multipliers::new(
            1.0 + u * self.amp_jitter,
            1.0 + u * self.len_jitter,
            1.0 + u * self.speed_jitter,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuraStroke {
    pub width: f64,
    pub alpha: f64,
    pub mul: Multipliers,
    pub step: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuraConfig {
    pub enabled: bool,
    pub blend: Blend,
    pub strokes: Vec<AuraStroke>,
}

impl Default for AuraConfig {
    fn default() -> Self {
        let stroke = |width, alpha, amp| AuraStroke {
            width,
            alpha,
            mul: Multipliers::new(amp, 1.0, 1.0),
            step: AURA_STEP,
        };
        Self {
            enabled: true,
            blend: Blend::Lighter,
            strokes: vec![
                stroke(12.0, 0.07, 1.0),
                stroke(8.0, 0.055, 1.03),
                stroke(5.0, 0.04, 1.06),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlassConfig {
    pub enabled: bool,
    pub thickness: f64,
    pub thickness_variation: f64,
    pub mul: Multipliers,
    pub step: f64,
}

impl Default for GlassConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            thickness: GLASS_THICKNESS,
            thickness_variation: GLASS_THICKNESS_VARIATION,
            mul: Multipliers::new(GLASS_AMP_MUL, 1.0, 1.0),
            step: GLASS_STEP,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpecularConfig {
    pub enabled: bool,
    pub step: f64,
    pub mul: Multipliers,
}

impl Default for SpecularConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            step: SPECULAR_STEP,
            mul: Multipliers::new(SPECULAR_AMP_MUL, 1.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoamConfig {
    pub enabled: bool,
    pub step: f64,
    pub curvature_threshold: f64,
    pub noise_threshold: f64,
    pub alpha: f64,
}

impl Default for FoamConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            step: FOAM_STEP,
            curvature_threshold: FOAM_CURVATURE_THRESHOLD,
            noise_threshold: FOAM_NOISE_THRESHOLD,
            alpha: FOAM_ALPHA,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticlesConfig {
    pub enabled: bool,
    pub density: f64,
    pub alpha: f64,
    pub size: [f64; 2],
    pub jitter: f64,
    /// Mask alpha a particle must exceed to be kept.
    pub mask_threshold: u8,
    pub label: String,
    /// Label center as a fraction of viewport width/height.
    pub label_center: [f64; 2],
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            density: PARTICLE_DENSITY,
            alpha: PARTICLE_ALPHA,
            size: [PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX],
            jitter: PARTICLE_JITTER,
            mask_threshold: PARTICLE_MASK_THRESHOLD,
            label: LABEL_TEXT.to_string(),
            label_center: LABEL_CENTER,
        }
    }
}

/// Layered variant: background bands, threads, aura, glass, specular,
/// foam and a particle label, all along one horizontal crest.
#[derive(Clone, Debug, PartialEq)]
pub struct LayeredConfig {
    pub shape: WaveShape,
    pub y_offset: f64,
    pub palette: Palette,
    pub color_rate: f64,
    pub bands: BandsConfig,
    pub threads: ThreadsConfig,
    pub aura: AuraConfig,
    pub glass: GlassConfig,
    pub specular: SpecularConfig,
    pub foam: FoamConfig,
    pub particles: ParticlesConfig,
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self {
            shape: WaveShape {
                amplitude: LAYERED_AMPLITUDE,
                wavelength: LAYERED_WAVELENGTH,
                speed: LAYERED_SPEED,
            },
            y_offset: LAYERED_Y_OFFSET,
            palette: Palette::new(vec![
                Rgb::new(180, 18, 28),
                Rgb::new(210, 22, 36),
                Rgb::new(150, 10, 24),
                Rgb::new(180, 18, 28),
            ]),
            color_rate: LAYERED_COLOR_RATE,
            bands: BandsConfig::default(),
            threads: ThreadsConfig::default(),
            aura: AuraConfig::default(),
            glass: GlassConfig::default(),
            specular: SpecularConfig::default(),
            foam: FoamConfig::default(),
            particles: ParticlesConfig::default(),
        }
    }
}

impl LayeredConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("layered.palette", &self.palette)?;
        shape(&self.shape)?;
        finite("y_offset", self.y_offset)?;
        finite("color_rate", self.color_rate)?;
        if self.bands.enabled {
            positive("bands.step", self.bands.step)?;
            for b in &self.bands.bands {
                multipliers("bands.mul", b.mul)?;
                finite("bands.y_offset", b.y_offset)?;
                non_negative("bands.darken", b.darken)?;
            }
        }
        let th = &self.threads;
        if th.enabled {
            if th.count == 0 {
                return Err(ConfigError::ZeroCount("threads.count"));
            }
            positive("threads.step", th.step)?;
            finite("threads.amp_jitter", th.amp_jitter)?;
            finite("threads.len_jitter", th.len_jitter)?;
            finite("threads.speed_jitter", th.speed_jitter)?;
            non_negative("threads.alpha", th.alpha)?;
            non_negative("threads.width", th.width)?;
        }
        if self.aura.enabled {
            for s in &self.aura.strokes {
                positive("aura.step", s.step)?;
                non_negative("aura.width", s.width)?;
                non_negative("aura.alpha", s.alpha)?;
                multipliers("aura.mul", s.mul)?;
            }
        }
        let g = &self.glass;
        if g.enabled {
            positive("glass.step", g.step)?;
            non_negative("glass.thickness", g.thickness)?;
            non_negative("glass.thickness_variation", g.thickness_variation)?;
            multipliers("glass.mul", g.mul)?;
        }
        if self.specular.enabled {
            positive("specular.step", self.specular.step)?;
            multipliers("specular.mul", self.specular.mul)?;
        }
        let f = &self.foam;
        if f.enabled {
            positive("foam.step", f.step)?;
            finite("foam.curvature_threshold", f.curvature_threshold)?;
            finite("foam.noise_threshold", f.noise_threshold)?;
            non_negative("foam.alpha", f.alpha)?;
        }
        let p = &self.particles;
        if p.enabled {
            non_negative("particles.density", p.density)?;
            non_negative("particles.alpha", p.alpha)?;
            non_negative("particles.jitter", p.jitter)?;
            non_negative("particles.size", p.size[0])?;
            non_negative("particles.size", p.size[1])?;
            finite("particles.label_center", p.label_center[0])?;
            finite("particles.label_center", p.label_center[1])?;
            if p.size[0] > p.size[1] {
                return Err(ConfigError::InvertedSizeRange {
                    min: p.size[0],
                    max: p.size[1],
                });
            }
        }
        Ok(())
    }

    /// Baseline crest at `time_sec` with the given multipliers.
    pub fn crest(&self, height: f64, time_sec: f64, mul: Multipliers) -> crate::curve::Crest {
        crate::curve::Crest {
            shape: self.shape,
            harmonics: crate::curve::Harmonics::CREST,
            baseline: height * self.y_offset,
            time_sec,
            mul,
        }
    }
}

// ---------------- Preset selection ----------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    Columns,
    #[default]
    Layered,
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "columns" | "interactive" => Ok(Preset::Columns),
            "layered" | "glass" => Ok(Preset::Layered),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WaveConfig {
    Columns(ColumnsConfig),
    Layered(LayeredConfig),
}

impl WaveConfig {
    pub fn for_preset(preset: Preset) -> Self {
        match preset {
            Preset::Columns => WaveConfig::Columns(ColumnsConfig::default()),
            Preset::Layered => WaveConfig::Layered(LayeredConfig::default()),
        }
    }

    pub fn preset(&self) -> Preset {
        match self {
            WaveConfig::Columns(_) => Preset::Columns,
            WaveConfig::Layered(_) => Preset::Layered,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            WaveConfig::Columns(c) => c.validate(),
            WaveConfig::Layered(c) => c.validate(),
        }
    }

    /// Replace the particle label; no effect on the columns preset.
    pub fn with_label(mut self, label: &str) -> Self {
        if let WaveConfig::Layered(c) = &mut self {
            c.particles.label = label.to_string();
        }
        self
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self::for_preset(Preset::default())
    }
}
