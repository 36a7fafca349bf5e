//! Interactive columns: one wavy vertical stroke per column and layer,
//! bent by the pointer and twist fields, over a palette wash and under a
//! vignette.

use crate::color::{cycle_phase, Rgb};
use crate::config::ColumnsConfig;
use crate::constants::{COLUMNS_LINE_WIDTH_RATIO, COLUMNS_MIN_LINE_WIDTH, COLUMNS_SWAY_PX};
use crate::context::RenderContext;
use crate::curve::{harmonic_sum, sample_range, Harmonics};
use crate::fields::{Boost, PointerColumn, Twist};
use crate::surface::{LinearGradient, Paint, Surface};
use glam::DVec2;

/// One column stroke, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnStroke {
    /// Column center after the pointer shift.
    pub center: f64,
    pub points: Vec<DVec2>,
    pub color: Rgb,
    pub alpha: f64,
    pub width: f64,
    pub boost: Boost,
}

/// Pointer smoothing and the pointer field only run for fine pointers.
#[inline]
pub fn pointer_field_enabled(cfg: &ColumnsConfig, ctx: &RenderContext) -> bool {
    cfg.interaction.enabled && !ctx.coarse_pointer
}

/// Undistorted center of column `i` in layer `l`.
#[inline]
pub fn base_center(col_w: f64, i: usize, l: usize, time_sec: f64) -> f64 {
    let (fi, fl) = (i as f64, l as f64);
    fi * col_w + col_w * 0.5 + ((time_sec + fi) * 0.2 + fl).sin() * COLUMNS_SWAY_PX * (fl + 1.0)
}

/// Build the stroke of column `i` in layer `l` at the context's time.
pub fn column_stroke(cfg: &ColumnsConfig, ctx: &RenderContext, l: usize, i: usize) -> ColumnStroke {
    let t = ctx.time();
    let vp = &ctx.viewport;
    let layer = cfg.layers[l];
    let col_w = vp.width / cfg.columns as f64;
    let base_phase = cycle_phase(t, cfg.color_rate);

    let interactive = ctx.pointer.inside;
    let pointer_on = pointer_field_enabled(cfg, ctx) && interactive;
    let mut center = base_center(col_w, i, l, t);
    let pointer = PointerColumn::new(&cfg.interaction, &ctx.pointer, center, pointer_on);
    center += pointer.center_shift();
    let mut boost = pointer.boost(&cfg.interaction);

    let twist = Twist::new(&cfg.twist, vp, interactive);
    let phase = t * cfg.shape.speed * layer.speed_mul + i as f64 * 0.7 + l as f64 * 0.6;
    let amp = cfg.shape.amplitude * layer.amp_mul;

    let mut twist_peak = 0.0_f64;
    let points = sample_range(-cfg.overscan, vp.height + cfg.overscan, cfg.step)
        .map(|y| {
            let mut x =
                center + harmonic_sum(y, cfg.shape.wavelength, phase, amp, &Harmonics::COLUMN);
            x += pointer.row_shift(y);
            let (shift, g) = twist.apply(DVec2::new(x, y));
            x += shift;
            twist_peak = twist_peak.max(g);
            DVec2::new(x, y)
        })
        .collect::<Vec<_>>();
    boost += Twist::boost(&cfg.twist, twist_peak);

    let spread = (i as f64 / cfg.columns as f64) * (0.5 + 0.3 * l as f64);
    let hue = (base_phase + spread).rem_euclid(1.0);
    ColumnStroke {
        center,
        points,
        color: cfg.palette.at(hue),
        alpha: layer.alpha + boost.alpha,
        width: COLUMNS_MIN_LINE_WIDTH.max(col_w * COLUMNS_LINE_WIDTH_RATIO) + boost.width,
        boost,
    }
}

pub fn render<S: Surface>(cfg: &ColumnsConfig, ctx: &mut RenderContext, surface: &mut S) {
    let (w, h) = (ctx.viewport.width, ctx.viewport.height);
    surface.clear(w, h);

    let wash = cfg.palette.at(cycle_phase(ctx.time(), cfg.color_rate));
    surface.set_fill(&wash.opaque().into());
    surface.set_global_alpha(cfg.wash_alpha);
    surface.fill_rect(0.0, 0.0, w, h);
    surface.set_global_alpha(1.0);

    if pointer_field_enabled(cfg, ctx) {
        ctx.pointer.smooth(cfg.interaction.follow);
    }

    for l in 0..cfg.layers.len() {
        for i in 0..cfg.columns {
            let stroke = column_stroke(cfg, ctx, l, i);
            surface.polyline(stroke.points.iter().copied());
            surface.set_line_width(stroke.width);
            surface.set_stroke(&stroke.color.with_alpha(stroke.alpha).into());
            surface.stroke();
        }
    }

    let edge = Rgb::default();
    let vignette = LinearGradient::vertical(0.0, h)
        .stop(0.0, edge.with_alpha(cfg.vignette))
        .stop(0.2, edge.with_alpha(0.0))
        .stop(0.8, edge.with_alpha(0.0))
        .stop(1.0, edge.with_alpha(cfg.vignette));
    surface.set_fill(&Paint::Linear(vignette));
    surface.fill_rect(0.0, 0.0, w, h);
}
