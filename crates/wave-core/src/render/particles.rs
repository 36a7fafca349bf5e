use crate::config::ParticlesConfig;
use crate::constants::{LABEL_FONT_MAX, LABEL_FONT_MIN, LABEL_FONT_RATIO, LABEL_FONT_WEIGHT};
use crate::curve::Crest;
use crate::surface::{AlphaMask, Font};
use crate::viewport::Viewport;
use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub size: f64,
}

/// Label font scaled with the viewport width.
pub fn label_font(viewport: &Viewport) -> Font {
    Font {
        weight: LABEL_FONT_WEIGHT,
        px: (viewport.width * LABEL_FONT_RATIO).clamp(LABEL_FONT_MIN, LABEL_FONT_MAX),
    }
}

pub fn label_center(cfg: &ParticlesConfig, viewport: &Viewport) -> DVec2 {
    DVec2::new(
        viewport.width * cfg.label_center[0],
        viewport.height * cfg.label_center[1],
    )
}

/// Scatter `floor(width * density)` candidates along the crest and keep the
/// ones that land on the label. Candidates outside the viewport are dropped
/// before the mask is consulted.
pub fn scatter<R: Rng>(
    cfg: &ParticlesConfig,
    crest: &Crest,
    viewport: &Viewport,
    mask: &AlphaMask,
    rng: &mut R,
) -> Vec<Particle> {
    let candidates = (viewport.width * cfg.density).floor().max(0.0) as usize;
    let [size_min, size_max] = cfg.size;
    let mut out = Vec::new();
    for _ in 0..candidates {
        let x = rng.gen::<f64>() * viewport.width;
        let y = crest.y(x) + (rng.gen::<f64>() - 0.5) * cfg.jitter;
        if !viewport.contains(x, y) {
            continue;
        }
        match mask.alpha_at(x, y) {
            Some(a) if a > cfg.mask_threshold => {
                let size = size_min + rng.gen::<f64>() * (size_max - size_min);
                out.push(Particle {
                    pos: DVec2::new(x, y),
                    size,
                });
            }
            _ => {}
        }
    }
    out
}
