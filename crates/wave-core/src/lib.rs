//! Platform-independent core of the wavefield background.
//!
//! Nothing in this crate touches browser APIs: the web front-end supplies a
//! [`surface::Surface`] and a [`driver::FrameScheduler`], feeds events into a
//! [`context::RenderContext`] and asks a [`render::WaveRenderer`] for frames.

pub mod color;
pub mod config;
pub mod constants;
pub mod context;
pub mod curve;
pub mod driver;
pub mod fields;
pub mod render;
pub mod surface;
pub mod viewport;

pub use color::{Palette, Rgb, Rgba};
pub use config::{ConfigError, Preset, WaveConfig};
pub use context::{Clock, PointerState, RenderContext};
pub use driver::{FrameScheduler, LoopDriver, LoopState};
pub use render::WaveRenderer;
pub use surface::{AlphaMask, Blend, Font, Paint, Recorder, Surface};
pub use viewport::{clamp_dpr, Viewport};
