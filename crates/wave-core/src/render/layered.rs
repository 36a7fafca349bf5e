//! Layered glass wave, drawn back to front:
//! bands, threads, aura, glass band, specular, foam, particles.

use super::particles;
use crate::color::{cycle_phase, Rgb};
use crate::config::{BandsConfig, LayeredConfig};
use crate::constants::{
    GLASS_CLAMP_MARGIN, GLASS_GRADIENT_PAD, SPECULAR_MIN_INTENSITY, SPECULAR_SLOPE_GAIN, FOAM_SIZE,
};
use crate::context::RenderContext;
use crate::curve::{hash_noise, sample_range, Crest, Harmonics, Multipliers};
use crate::surface::{Blend, LinearGradient, Paint, Surface};
use crate::viewport::Viewport;
use glam::DVec2;
use rand::Rng;

/// Both edges of the glass ribbon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlassRibbon {
    pub top: Vec<DVec2>,
    pub bottom: Vec<DVec2>,
}

impl GlassRibbon {
    /// Vertical extent over both edges, `None` when empty or non-finite.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        let (lo, hi) = self
            .top
            .iter()
            .chain(self.bottom.iter())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        (lo.is_finite() && hi.is_finite()).then_some((lo, hi))
    }
}

pub fn glass_ribbon(cfg: &LayeredConfig, viewport: &Viewport, time_sec: f64) -> GlassRibbon {
    let g = &cfg.glass;
    let crest = cfg.crest(viewport.height, time_sec, g.mul);
    let (w, h) = (viewport.width, viewport.height);
    let step = g.step;
    let clamp_x = |v: f64| v.clamp(-GLASS_CLAMP_MARGIN, w + GLASS_CLAMP_MARGIN);
    let clamp_y = |v: f64| v.clamp(-GLASS_CLAMP_MARGIN, h + GLASS_CLAMP_MARGIN);

    let mut ribbon = GlassRibbon::default();
    for x in sample_range(0.0, w + step, step) {
        let y = crest.y(x);
        let y_prev = crest.y((x - step).max(0.0));
        let y_next = crest.y((x + step).min(w));
        let dy = (y_next - y_prev) / (2.0 * step);
        let inv_len = 1.0 / dy.hypot(1.0);
        let normal = DVec2::new(-dy * inv_len, inv_len);
        let thickness = g.thickness + (x * 0.01 + time_sec * 0.4).sin() * g.thickness_variation;
        let half = normal * (thickness * 0.5);
        let p = DVec2::new(x, y);
        let (t, b) = (p - half, p + half);
        ribbon.top.push(DVec2::new(clamp_x(t.x), clamp_y(t.y)));
        ribbon.bottom.push(DVec2::new(clamp_x(b.x), clamp_y(b.y)));
    }
    ribbon
}

/// Specular intensity in \[0, 1\]: flat stretches glow, steep ones fade.
#[inline]
pub fn specular_intensity(slope: f64) -> f64 {
    (1.0 - (slope.abs() * SPECULAR_SLOPE_GAIN).min(1.0)).max(0.0)
}

/// Foam sample positions (before the 1px upward offset).
pub fn foam_points(cfg: &LayeredConfig, viewport: &Viewport, time_sec: f64) -> Vec<DVec2> {
    let f = &cfg.foam;
    let crest = cfg.crest(viewport.height, time_sec, Multipliers::UNIT);
    sample_range(0.0, viewport.width, f.step)
        .filter(|&x| crest.curvature(x).abs() >= f.curvature_threshold)
        .filter(|&x| hash_noise(x, time_sec) > f.noise_threshold)
        .map(|x| DVec2::new(x, crest.y(x)))
        .collect()
}

fn band_path<S: Surface>(
    cfg: &LayeredConfig,
    bands: &BandsConfig,
    viewport: &Viewport,
    time_sec: f64,
    index: usize,
    surface: &mut S,
) {
    let band = bands.bands[index];
    let crest = Crest {
        shape: cfg.shape,
        harmonics: Harmonics::BAND,
        baseline: viewport.height * band.y_offset,
        time_sec,
        mul: band.mul,
    };
    surface.begin_path();
    surface.move_to(DVec2::new(0.0, crest.baseline));
    for p in crest.points(viewport.width, bands.step) {
        surface.line_to(p);
    }
    surface.line_to(DVec2::new(viewport.width, viewport.height));
    surface.line_to(DVec2::new(0.0, viewport.height));
    surface.close_path();
}

fn draw_bands<S: Surface>(cfg: &LayeredConfig, vp: &Viewport, t: f64, base: Rgb, surface: &mut S) {
    let bands = &cfg.bands;
    for (i, band) in bands.bands.iter().enumerate() {
        band_path(cfg, bands, vp, t, i, surface);
        surface.set_fill(&base.darken(band.darken).opaque().into());
        surface.fill();
    }
}

fn draw_threads<S: Surface>(
    cfg: &LayeredConfig,
    vp: &Viewport,
    t: f64,
    base: Rgb,
    surface: &mut S,
) {
    let th = &cfg.threads;
    surface.save();
    surface.set_blend(Blend::Lighter);
    for i in 0..th.count {
        let crest = cfg.crest(vp.height, t, th.multipliers(i));
        surface.polyline(crest.points(vp.width, th.step));
        surface.set_line_width(th.width);
        surface.set_stroke(&base.with_alpha(th.alpha).into());
        surface.stroke();
    }
    surface.restore();
}

fn draw_aura<S: Surface>(cfg: &LayeredConfig, vp: &Viewport, t: f64, base: Rgb, surface: &mut S) {
    let aura = &cfg.aura;
    surface.save();
    surface.set_blend(aura.blend);
    for s in &aura.strokes {
        let crest = cfg.crest(vp.height, t, s.mul);
        surface.polyline(crest.points(vp.width, s.step));
        surface.set_line_width(s.width);
        surface.set_stroke(&base.with_alpha(s.alpha).into());
        surface.stroke();
    }
    surface.restore();
}

fn draw_glass<S: Surface>(cfg: &LayeredConfig, vp: &Viewport, t: f64, base: Rgb, surface: &mut S) {
    let ribbon = glass_ribbon(cfg, vp, t);
    let Some((min_y, max_y)) = ribbon.y_extent() else {
        return;
    };

    surface.polyline(ribbon.top.iter().chain(ribbon.bottom.iter().rev()).copied());
    surface.close_path();
    let grad = LinearGradient::vertical(min_y - GLASS_GRADIENT_PAD, max_y + GLASS_GRADIENT_PAD)
        .stop(0.00, base.darken(0.25).opaque())
        .stop(0.30, base.darken(0.55).opaque())
        .stop(0.52, base.mix_with_white(0.70).opaque())
        .stop(0.70, base.darken(0.5).opaque())
        .stop(1.00, base.darken(0.22).opaque());
    surface.set_fill(&Paint::Linear(grad));
    surface.fill();

    surface.polyline(ribbon.top.iter().copied());
    surface.set_line_width(1.4);
    surface.set_stroke(&base.mix_with_white(0.82).opaque().into());
    surface.stroke();

    surface.polyline(ribbon.bottom.iter().copied());
    surface.set_line_width(1.2);
    surface.set_stroke(&base.darken(0.28).opaque().into());
    surface.stroke();
}

fn draw_specular<S: Surface>(
    cfg: &LayeredConfig,
    vp: &Viewport,
    t: f64,
    base: Rgb,
    surface: &mut S,
) {
    let sp = &cfg.specular;
    let crest = cfg.crest(vp.height, t, sp.mul);
    let tint = base.mix_with_white(0.85);
    surface.save();
    surface.set_blend(Blend::Lighter);
    for x in sample_range(0.0, vp.width, sp.step) {
        let intensity = specular_intensity(crest.slope(x));
        if intensity <= SPECULAR_MIN_INTENSITY {
            continue;
        }
        let y = crest.y(x);
        surface.polyline([
            DVec2::new(x - sp.step * 0.5, y),
            DVec2::new(x + sp.step * 0.5, y),
        ]);
        surface.set_line_width(1.0 + intensity * 1.8);
        surface.set_stroke(&tint.with_alpha(0.09 + intensity * 0.18).into());
        surface.stroke();
    }
    surface.restore();
}

fn draw_foam<S: Surface>(cfg: &LayeredConfig, vp: &Viewport, t: f64, base: Rgb, surface: &mut S) {
    let points = foam_points(cfg, vp, t);
    if points.is_empty() {
        return;
    }
    surface.save();
    surface.set_fill(&base.mix_with_white(0.92).with_alpha(cfg.foam.alpha).into());
    for p in points {
        surface.fill_rect(p.x, p.y - 1.0, FOAM_SIZE, FOAM_SIZE);
    }
    surface.restore();
}

fn draw_particles<S: Surface, R: Rng>(
    cfg: &LayeredConfig,
    vp: &Viewport,
    t: f64,
    base: Rgb,
    surface: &mut S,
    mask_surface: &mut S,
    rng: &mut R,
) {
    let p = &cfg.particles;
    mask_surface.clear(vp.width, vp.height);
    mask_surface.fill_text(
        &p.label,
        particles::label_center(p, vp),
        particles::label_font(vp),
    );
    let mask = mask_surface.read_alpha();
    let crest = cfg.crest(vp.height, t, Multipliers::UNIT);
    let kept = particles::scatter(p, &crest, vp, &mask, rng);

    surface.save();
    surface.set_blend(Blend::Lighter);
    surface.set_fill(&base.with_alpha(p.alpha).into());
    for particle in kept {
        surface.fill_rect(particle.pos.x, particle.pos.y, particle.size, particle.size);
    }
    surface.restore();
}

pub fn render<S: Surface, R: Rng>(
    cfg: &LayeredConfig,
    ctx: &RenderContext,
    surface: &mut S,
    mask: Option<&mut S>,
    rng: &mut R,
) {
    let vp = ctx.viewport;
    let t = ctx.time();
    surface.clear(vp.width, vp.height);
    let base = cfg.palette.at(cycle_phase(t, cfg.color_rate));

    if cfg.bands.enabled {
        draw_bands(cfg, &vp, t, base, surface);
    }
    if cfg.threads.enabled {
        draw_threads(cfg, &vp, t, base, surface);
    }
    if cfg.aura.enabled {
        draw_aura(cfg, &vp, t, base, surface);
    }
    if cfg.glass.enabled {
        draw_glass(cfg, &vp, t, base, surface);
    }
    if cfg.specular.enabled {
        draw_specular(cfg, &vp, t, base, surface);
    }
    if cfg.foam.enabled {
        draw_foam(cfg, &vp, t, base, surface);
    }
    if cfg.particles.enabled {
        if let Some(mask) = mask {
            draw_particles(cfg, &vp, t, base, surface, mask, rng);
        }
    }
}
