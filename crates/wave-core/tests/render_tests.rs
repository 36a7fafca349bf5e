// Host-side tests for the two compositors, drawn into a Recorder.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wave_core::config::{ColumnsConfig, LayeredConfig, ParticlesConfig};
use wave_core::curve::Multipliers;
use wave_core::render::layered::{foam_points, glass_ribbon, specular_intensity};
use wave_core::render::particles::{label_font, scatter};
use wave_core::surface::{DrawCmd, Font};
use wave_core::{
    AlphaMask, Blend, Paint, Recorder, RenderContext, Viewport, WaveConfig, WaveRenderer,
};

fn viewport() -> Viewport {
    Viewport::measure(800.0, 600.0, 1.0)
}

fn full_mask(w: usize, h: usize) -> AlphaMask {
    let mut m = AlphaMask::new(w, h);
    m.fill_rect(0, 0, w, h, 255);
    m
}

fn solid_alpha(paint: &Paint) -> Option<f64> {
    match paint {
        Paint::Solid(c) => Some(c.a),
        Paint::Linear(_) => None,
    }
}

fn particle_rects(rec: &Recorder) -> Vec<(f64, f64, f64, f64)> {
    rec.commands
        .iter()
        .filter_map(|c| match c {
            DrawCmd::FillRect { x, y, w, h, paint } if solid_alpha(paint) == Some(0.10) => {
                Some((*x, *y, *w, *h))
            }
            _ => None,
        })
        .collect()
}

// ---------------- particles ----------------

#[test]
fn full_mask_keeps_every_candidate() {
    let cfg = LayeredConfig::default();
    let vp = viewport();
    let crest = cfg.crest(vp.height, 3.0, Multipliers::UNIT);
    let mut rng = StdRng::seed_from_u64(42);
    let kept = scatter(&cfg.particles, &crest, &vp, &full_mask(800, 600), &mut rng);
    assert_eq!(kept.len(), 48);
    for p in &kept {
        assert!(vp.contains(p.pos.x, p.pos.y));
        assert!((1.0..=2.0).contains(&p.size));
    }
}

#[test]
fn empty_mask_keeps_nothing() {
    let cfg = LayeredConfig::default();
    let vp = viewport();
    let crest = cfg.crest(vp.height, 3.0, Multipliers::UNIT);
    let mut rng = StdRng::seed_from_u64(1);
    assert!(scatter(&cfg.particles, &crest, &vp, &AlphaMask::new(800, 600), &mut rng).is_empty());
}

#[test]
fn particles_only_land_on_label_pixels() {
    let cfg = ParticlesConfig {
        density: 0.5,
        ..ParticlesConfig::default()
    };
    let layered = LayeredConfig::default();
    let vp = viewport();
    let crest = layered.crest(vp.height, 0.7, Multipliers::UNIT);
    let mut mask = AlphaMask::new(800, 600);
    mask.fill_rect(400, 0, 400, 600, 200);
    // Below threshold: ignored.
    mask.fill_rect(0, 0, 100, 600, 10);
    let mut rng = StdRng::seed_from_u64(9);
    let kept = scatter(&cfg, &crest, &vp, &mask, &mut rng);
    assert!(!kept.is_empty());
    for p in kept {
        assert!(p.pos.x >= 400.0, "particle at {:?}", p.pos);
    }
}

#[test]
fn device_mask_is_read_in_css_units() {
    // 10x10 css pixels at dpr 1.5 is a 15x15 backing store.
    let mut rgba = vec![0u8; 15 * 15 * 4];
    for y in 0..15 {
        for x in 9..15 {
            rgba[(y * 15 + x) * 4 + 3] = 220;
        }
    }
    let mask = AlphaMask::from_rgba(15, 15, &rgba).with_scale(1.5);
    assert_eq!((mask.width, mask.height, mask.data.len()), (15, 15, 225));
    assert_eq!(mask.alpha_at(5.9, 3.0), Some(0));
    assert_eq!(mask.alpha_at(6.0, 3.0), Some(220));
    assert_eq!(mask.alpha_at(9.9, 9.9), Some(220));
    assert_eq!(mask.alpha_at(10.0, 3.0), None);
    assert_eq!(mask.alpha_at(-0.1, 3.0), None);
    assert_eq!(mask.alpha_at(f64::NAN, 3.0), None);
}

#[test]
fn scaled_mask_places_particles_on_label_pixels() {
    let layered = LayeredConfig::default();
    let vp = Viewport::measure(800.0, 600.0, 1.5);
    let (bw, bh) = vp.backing_size();
    let crest = layered.crest(vp.height, 0.7, Multipliers::UNIT);
    let mut mask = AlphaMask::new(bw as usize, bh as usize).with_scale(vp.dpr);
    // Right half of the backing store only.
    mask.fill_rect(600, 0, 600, 900, 200);
    let mut rng = StdRng::seed_from_u64(9);
    let kept = scatter(&layered.particles, &crest, &vp, &mask, &mut rng);
    assert!(!kept.is_empty());
    for p in kept {
        assert!(p.pos.x >= 400.0, "particle at {:?}", p.pos);
    }
}

#[test]
fn particles_outside_viewport_are_dropped_before_mask() {
    let layered = LayeredConfig::default();
    // The crest swings above the top edge of a short viewport.
    let vp = Viewport::measure(800.0, 100.0, 1.0);
    let crest = layered.crest(vp.height, 2.0, Multipliers::UNIT);
    let mut rng = StdRng::seed_from_u64(3);
    let cfg = ParticlesConfig {
        density: 1.0,
        ..ParticlesConfig::default()
    };
    let kept = scatter(&cfg, &crest, &vp, &full_mask(1600, 1200), &mut rng);
    assert!(kept.len() < 800);
    for p in kept {
        assert!(vp.contains(p.pos.x, p.pos.y));
    }
}

#[test]
fn label_font_is_clamped() {
    assert_eq!(label_font(&Viewport::measure(100.0, 100.0, 1.0)).px, 28.0);
    assert_eq!(label_font(&Viewport::measure(500.0, 100.0, 1.0)).px, 60.0);
    assert_eq!(label_font(&Viewport::measure(2000.0, 100.0, 1.0)).px, 96.0);
}

#[test]
fn font_css_carries_the_full_stack() {
    let css = Font {
        weight: 700,
        px: 60.0,
    }
    .to_css();
    assert!(css.starts_with("700 60px system-ui, -apple-system, "), "{css}");
    assert!(css.contains("Cantarell, 'Fira Sans'"), "{css}");
    assert!(css.ends_with("'Noto Sans', sans-serif"), "{css}");
}

// ---------------- layered passes ----------------

#[test]
fn glass_ribbon_has_configured_thickness() {
    let cfg = LayeredConfig::default();
    let vp = viewport();
    let ribbon = glass_ribbon(&cfg, &vp, 1.2);
    assert_eq!(ribbon.top.len(), ribbon.bottom.len());
    // Edges are offset along the normal, so only their midpoint sits on the crest.
    let crest = cfg.crest(vp.height, 1.2, cfg.glass.mul);
    let mid = (ribbon.top[0] + ribbon.bottom[0]) * 0.5;
    assert!((mid - DVec2::new(0.0, crest.y(0.0))).length() < 1e-9, "midpoint {mid:?}");
    let g = &cfg.glass;
    let (lo, hi) = (g.thickness - g.thickness_variation, g.thickness + g.thickness_variation);
    for (t, b) in ribbon.top.iter().zip(&ribbon.bottom) {
        let d = t.distance(*b);
        assert!(d >= lo - 1e-9 && d <= hi + 1e-9, "thickness {d}");
        assert!(t.y <= b.y);
    }
    let (min_y, max_y) = ribbon.y_extent().expect("finite ribbon");
    assert!(min_y < max_y);
}

#[test]
fn specular_fades_with_slope() {
    assert_eq!(specular_intensity(0.0), 1.0);
    assert!(specular_intensity(0.3) > specular_intensity(0.6));
    assert_eq!(specular_intensity(-5.0), 0.0);
}

#[test]
fn foam_respects_thresholds_and_is_repeatable() {
    let cfg = LayeredConfig::default();
    let vp = Viewport::measure(1920.0, 1080.0, 1.0);
    let crest = cfg.crest(vp.height, 5.5, Multipliers::UNIT);
    let points = foam_points(&cfg, &vp, 5.5);
    for p in &points {
        assert!(crest.curvature(p.x).abs() >= cfg.foam.curvature_threshold);
        assert_eq!(p.y, crest.y(p.x));
    }
    assert_eq!(points, foam_points(&cfg, &vp, 5.5));
}

#[test]
fn layered_frame_draws_every_pass() {
    let mut renderer = WaveRenderer::with_seed(WaveConfig::default(), 7).expect("valid defaults");
    let mut ctx = RenderContext::new(viewport());
    let mut surface = Recorder::new();
    let mut mask = Recorder::with_mask(full_mask(800, 600));
    renderer.frame(&mut ctx, 1000.0, &mut surface, Some(&mut mask));
    renderer.frame(&mut ctx, 3000.0, &mut surface, Some(&mut mask));
    assert_eq!(ctx.time(), 2.0);

    let rec = &surface;
    assert_eq!(rec.commands.first(), Some(&DrawCmd::Clear));
    let glass_fills =
        rec.count(|c| matches!(c, DrawCmd::Fill(Paint::Linear(g)) if g.stops.len() == 5));
    assert_eq!(glass_fills, 2);
    let threads = rec
        .strokes()
        .filter(|(p, w)| *w == 1.2 && solid_alpha(p) == Some(0.14))
        .count();
    assert_eq!(threads, 2 * 22);
    assert!(rec.count(|c| *c == DrawCmd::Blend(Blend::Lighter)) > 0);
    assert_eq!(rec.blend(), Blend::SourceOver);

    assert_eq!(particle_rects(rec).len(), 2 * 48);
    let labels = mask.count(|c| matches!(c, DrawCmd::Text { text, .. } if text == "Saint"));
    assert_eq!(labels, 2);
    assert_eq!(rec.count(|c| matches!(c, DrawCmd::Text { .. })), 0);
}

#[test]
fn layered_without_mask_skips_particles() {
    let mut renderer = WaveRenderer::with_seed(WaveConfig::default(), 7).expect("valid defaults");
    let mut ctx = RenderContext::new(viewport());
    let mut surface = Recorder::new();
    renderer.frame(&mut ctx, 0.0, &mut surface, None);
    assert!(!surface.commands.is_empty());
    assert!(particle_rects(&surface).is_empty());
}

#[test]
fn custom_label_reaches_the_mask() {
    let config = WaveConfig::default().with_label("Hello");
    let mut renderer = WaveRenderer::with_seed(config, 1).expect("valid config");
    let mut ctx = RenderContext::new(viewport());
    let mut surface = Recorder::new();
    let mut mask = Recorder::new();
    renderer.frame(&mut ctx, 0.0, &mut surface, Some(&mut mask));
    let expected_at = DVec2::new(800.0 * 0.5, 600.0 * 0.42);
    assert!(mask.commands.iter().any(
        |c| matches!(c, DrawCmd::Text { text, at, .. } if text == "Hello" && *at == expected_at)
    ));
}

#[test]
fn empty_viewport_draws_nothing() {
    let mut renderer = WaveRenderer::with_seed(WaveConfig::default(), 7).expect("valid defaults");
    let mut ctx = RenderContext::new(Viewport::measure(0.0, 0.0, 1.0));
    let mut surface = Recorder::new();
    renderer.frame(&mut ctx, 16.0, &mut surface, None);
    assert!(surface.commands.is_empty());
}

// ---------------- columns ----------------

#[test]
fn columns_frame_order() {
    let config = WaveConfig::Columns(ColumnsConfig::default());
    let mut renderer = WaveRenderer::with_seed(config, 0).expect("valid defaults");
    let mut ctx = RenderContext::new(viewport());
    let mut surface = Recorder::new();
    renderer.frame(&mut ctx, 500.0, &mut surface, None);

    assert_eq!(surface.commands.first(), Some(&DrawCmd::Clear));
    assert!(surface.commands.contains(&DrawCmd::GlobalAlpha(0.10)));
    assert_eq!(surface.strokes().count(), 3 * 22);
    match surface.commands.last() {
        Some(DrawCmd::FillRect {
            paint: Paint::Linear(g),
            w,
            h,
            ..
        }) => {
            assert_eq!(g.stops.len(), 4);
            assert_eq!((*w, *h), (800.0, 600.0));
            assert_eq!(g.stops[0].color.a, 0.25);
            assert_eq!(g.stops[1].color.a, 0.0);
        }
        other => panic!("expected vignette last, got {other:?}"),
    }
}

#[test]
fn columns_smooth_pointer_for_fine_input_only() {
    let config = WaveConfig::Columns(ColumnsConfig::default());
    let mut renderer = WaveRenderer::with_seed(config, 0).expect("valid defaults");

    let mut ctx = RenderContext::new(viewport());
    ctx.pointer.on_move(400.0, 300.0);
    renderer.frame(&mut ctx, 0.0, &mut Recorder::new(), None);
    assert!((ctx.pointer.pos - DVec2::new(60.0, 45.0)).length() < 1e-9);

    let mut coarse = RenderContext::new(viewport());
    coarse.coarse_pointer = true;
    coarse.pointer.on_move(400.0, 300.0);
    renderer.frame(&mut coarse, 0.0, &mut Recorder::new(), None);
    assert_eq!(coarse.pointer.pos, DVec2::ZERO);
}
