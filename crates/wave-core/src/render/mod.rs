//! Frame compositing for both presets.

pub mod columns;
pub mod layered;
pub mod particles;

use crate::config::{ConfigError, Preset, WaveConfig};
use crate::context::RenderContext;
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Owns a validated preset and the particle RNG; draws one frame per call.
pub struct WaveRenderer {
    config: WaveConfig,
    rng: StdRng,
}

impl WaveRenderer {
    pub fn new(config: WaveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::from_entropy(),
        })
    }

    /// Deterministic particle placement for tests and headless rendering.
    pub fn with_seed(config: WaveConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn preset(&self) -> Preset {
        self.config.preset()
    }

    /// Advance the clock to `timestamp_ms` and draw. Particles are skipped
    /// when no mask surface is available.
    pub fn frame<S: Surface>(
        &mut self,
        ctx: &mut RenderContext,
        timestamp_ms: f64,
        surface: &mut S,
        mask: Option<&mut S>,
    ) {
        ctx.clock.tick(timestamp_ms);
        self.render(ctx, surface, mask);
    }

    /// Draw at the context's current elapsed time.
    pub fn render<S: Surface>(
        &mut self,
        ctx: &mut RenderContext,
        surface: &mut S,
        mask: Option<&mut S>,
    ) {
        if ctx.viewport.is_empty() {
            return;
        }
        match &self.config {
            WaveConfig::Columns(cfg) => columns::render(cfg, ctx, surface),
            WaveConfig::Layered(cfg) => layered::render(cfg, ctx, surface, mask, &mut self.rng),
        }
    }
}
