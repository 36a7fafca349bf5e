//! Rendering and tuning constants shared by both wave presets.
//!
//! Defaults for the config structs are assembled from these so the numbers
//! live in one place and tests can reason about their relationships.

// Device pixel ratio clamp
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 1.5;

// Finite-difference steps (css px)
pub const SLOPE_STEP: f64 = 1.5;
pub const CURVATURE_STEP: f64 = 2.0;

// Sine-hash noise coefficients
pub const NOISE_X_SCALE: f64 = 12.9898;
pub const NOISE_T_SCALE: f64 = 2.233;
pub const NOISE_GAIN: f64 = 43758.5453;

// Twist field
pub const TWIST_SIGMA_RATIO: f64 = 0.66; // sigma = radius * ratio
pub const TWIST_MIN_INFLUENCE: f64 = 1e-3;
pub const TWIST_RADIUS_EPSILON: f64 = 1e-4;

// ---------------- Columns preset ----------------
pub const COLUMNS_COUNT: usize = 22;
pub const COLUMNS_AMPLITUDE: f64 = 26.0;
pub const COLUMNS_WAVELENGTH: f64 = 0.010;
pub const COLUMNS_SPEED: f64 = 0.22;
pub const COLUMNS_VIGNETTE: f64 = 0.25;
pub const COLUMNS_COLOR_RATE: f64 = 0.03; // palette cycles per second
pub const COLUMNS_WASH_ALPHA: f64 = 0.10;
pub const COLUMNS_STEP: f64 = 8.0;
pub const COLUMNS_OVERSCAN: f64 = 20.0;
pub const COLUMNS_SWAY_PX: f64 = 6.0; // horizontal sway per layer index
pub const COLUMNS_MIN_LINE_WIDTH: f64 = 1.0;
pub const COLUMNS_LINE_WIDTH_RATIO: f64 = 0.05; // of column width

pub const INTERACTION_RADIUS: f64 = 160.0;
pub const INTERACTION_Y_RADIUS: f64 = 160.0;
pub const INTERACTION_STRENGTH: f64 = 0.08;
pub const INTERACTION_ALPHA_BOOST: f64 = 0.12;
pub const INTERACTION_WIDTH_BOOST: f64 = 0.8;
pub const INTERACTION_FOLLOW: f64 = 0.15;

pub const TWIST_X: f64 = 0.5;
pub const TWIST_Y: f64 = 0.42;
pub const TWIST_RADIUS: f64 = 220.0;
pub const TWIST_STRENGTH: f64 = 0.35;
pub const TWIST_ALPHA_BOOST: f64 = 0.08;
pub const TWIST_WIDTH_BOOST: f64 = 0.4;

// ---------------- Layered preset ----------------
pub const LAYERED_AMPLITUDE: f64 = 60.0;
pub const LAYERED_WAVELENGTH: f64 = 0.0090;
pub const LAYERED_SPEED: f64 = 0.48;
pub const LAYERED_Y_OFFSET: f64 = 0.58; // baseline as fraction of height
pub const LAYERED_COLOR_RATE: f64 = 0.05;
pub const BAND_STEP: f64 = 6.0;

pub const THREAD_COUNT: usize = 22;
pub const THREAD_STEP: f64 = 7.0;
pub const THREAD_AMP_JITTER: f64 = 0.35;
pub const THREAD_LEN_JITTER: f64 = 0.3;
pub const THREAD_SPEED_JITTER: f64 = 0.35;
pub const THREAD_ALPHA: f64 = 0.14;
pub const THREAD_WIDTH: f64 = 1.2;

pub const AURA_STEP: f64 = 6.0;

pub const GLASS_THICKNESS: f64 = 34.0;
pub const GLASS_THICKNESS_VARIATION: f64 = 8.0;
pub const GLASS_AMP_MUL: f64 = 0.9;
pub const GLASS_STEP: f64 = 7.0;
pub const GLASS_CLAMP_MARGIN: f64 = 50.0;
pub const GLASS_GRADIENT_PAD: f64 = 20.0;

pub const SPECULAR_STEP: f64 = 6.0;
pub const SPECULAR_AMP_MUL: f64 = 0.95;
pub const SPECULAR_SLOPE_GAIN: f64 = 0.9;
pub const SPECULAR_MIN_INTENSITY: f64 = 0.02;

pub const FOAM_STEP: f64 = 14.0;
pub const FOAM_CURVATURE_THRESHOLD: f64 = 0.6;
pub const FOAM_NOISE_THRESHOLD: f64 = 0.82;
pub const FOAM_ALPHA: f64 = 0.12;
pub const FOAM_SIZE: f64 = 2.0;

pub const PARTICLE_DENSITY: f64 = 0.06; // candidates per css px of width
pub const PARTICLE_ALPHA: f64 = 0.10;
pub const PARTICLE_SIZE_MIN: f64 = 1.0;
pub const PARTICLE_SIZE_MAX: f64 = 2.0;
pub const PARTICLE_JITTER: f64 = 20.0;
pub const PARTICLE_MASK_THRESHOLD: u8 = 10;
pub const LABEL_TEXT: &str = "Saint";
pub const LABEL_FONT_RATIO: f64 = 0.12; // of viewport width
pub const LABEL_FONT_MIN: f64 = 28.0;
pub const LABEL_FONT_MAX: f64 = 96.0;
pub const LABEL_FONT_WEIGHT: u16 = 700;
pub const LABEL_CENTER: [f64; 2] = [0.5, 0.42];
