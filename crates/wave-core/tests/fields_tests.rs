// Host-side tests for the pointer and twist fields of the columns preset.

use glam::DVec2;
use wave_core::config::ColumnsConfig;
use wave_core::fields::{Boost, PointerColumn, Twist};
use wave_core::render::columns::{base_center, column_stroke};
use wave_core::{RenderContext, Viewport};

fn ctx_at(x: f64, y: f64, inside: bool, time: f64) -> RenderContext {
    let mut ctx = RenderContext::new(Viewport::measure(800.0, 600.0, 1.0));
    ctx.pointer.on_move(x, y);
    ctx.pointer.pos = DVec2::new(x, y);
    if !inside {
        ctx.pointer.on_leave();
    }
    ctx.clock.tick(0.0);
    ctx.clock.tick(time * 1000.0);
    ctx
}

fn undistorted() -> ColumnsConfig {
    let mut cfg = ColumnsConfig::default();
    cfg.interaction.enabled = false;
    cfg.twist.enabled = false;
    cfg
}

#[test]
fn zero_strength_keeps_base_centers() {
    let mut cfg = ColumnsConfig::default();
    cfg.interaction.strength = 0.0;
    cfg.twist.enabled = false;
    let ctx = ctx_at(300.0, 250.0, true, 4.0);
    let col_w = 800.0 / cfg.columns as f64;
    let plain = undistorted();
    for l in 0..cfg.layers.len() {
        for i in 0..cfg.columns {
            let s = column_stroke(&cfg, &ctx, l, i);
            assert_eq!(s.center, base_center(col_w, i, l, 4.0));
            assert_eq!(s.points, column_stroke(&plain, &ctx, l, i).points);
        }
    }
}

#[test]
fn pointer_outside_adds_nothing() {
    let cfg = ColumnsConfig::default();
    let ctx = ctx_at(400.0, 252.0, false, 1.5);
    let plain = undistorted();
    for l in 0..cfg.layers.len() {
        for i in 0..cfg.columns {
            let s = column_stroke(&cfg, &ctx, l, i);
            let p = column_stroke(&plain, &ctx, l, i);
            assert_eq!(s.boost, Boost::default());
            assert_eq!(s.points, p.points);
            assert_eq!(s.width, p.width);
        }
    }
}

#[test]
fn coarse_pointer_disables_pointer_field() {
    let mut cfg = ColumnsConfig::default();
    cfg.twist.enabled = false;
    let mut ctx = ctx_at(200.0, 300.0, true, 2.0);
    ctx.coarse_pointer = true;
    let col_w = 800.0 / cfg.columns as f64;
    for i in 0..cfg.columns {
        let s = column_stroke(&cfg, &ctx, 0, i);
        assert_eq!(s.center, base_center(col_w, i, 0, 2.0));
        assert_eq!(s.boost, Boost::default());
    }
}

#[test]
fn pointer_pulls_nearby_columns_toward_it() {
    let mut cfg = ColumnsConfig::default();
    cfg.twist.enabled = false;
    cfg.interaction.strength = 0.5;
    let ctx = ctx_at(400.0, 300.0, true, 0.0);
    let col_w = 800.0 / cfg.columns as f64;
    let i = 9;
    let base = base_center(col_w, i, 0, 0.0);
    let s = column_stroke(&cfg, &ctx, 0, i);
    assert!(base < 400.0);
    assert!(s.center > base && s.center < 400.0);
    assert!(s.boost.alpha > 0.0 && s.boost.width > 0.0);
}

#[test]
fn pointer_column_row_shift_decays_vertically() {
    let cfg = ColumnsConfig::default().interaction;
    let mut pointer = wave_core::PointerState::default();
    pointer.on_move(100.0, 300.0);
    pointer.pos = pointer.target;
    let col = PointerColumn::new(&cfg, &pointer, 60.0, true);
    let near = col.row_shift(300.0).abs();
    let far = col.row_shift(900.0).abs();
    assert!(near > far);
    assert_eq!(PointerColumn::new(&cfg, &pointer, 60.0, false), PointerColumn::NONE);
}

#[test]
fn twist_swirls_only_while_pointer_inside() {
    let mut cfg = ColumnsConfig::default();
    cfg.interaction.enabled = false;
    let inside = ctx_at(10.0, 10.0, true, 0.5);
    let plain = undistorted();
    let i = 11;
    let twisted = column_stroke(&cfg, &inside, 0, i);
    let flat = column_stroke(&plain, &inside, 0, i);
    assert_ne!(twisted.points, flat.points);
    assert!(twisted.boost.alpha > 0.0);

    let outside = ctx_at(10.0, 10.0, false, 0.5);
    assert_eq!(column_stroke(&cfg, &outside, 0, i).points, flat.points);
}

#[test]
fn twist_direction_flips_shift() {
    let mut cfg = ColumnsConfig::default().twist;
    let vp = Viewport::measure(800.0, 600.0, 1.0);
    let p = DVec2::new(400.0, 200.0);
    let (cw, _) = Twist::new(&cfg, &vp, true).apply(p);
    cfg.dir = wave_core::config::TwistDirection::CounterClockwise;
    let (ccw, _) = Twist::new(&cfg, &vp, true).apply(p);
    assert!(cw != 0.0);
    assert_eq!(cw, -ccw);
}

#[test]
fn twist_zero_radius_is_inert() {
    let mut cfg = ColumnsConfig::default().twist;
    cfg.radius = 0.0;
    let vp = Viewport::measure(800.0, 600.0, 1.0);
    let tw = Twist::new(&cfg, &vp, true);
    assert_eq!(tw.apply(DVec2::new(400.0, 252.0)), (0.0, 0.0));
    assert_eq!(Twist::boost(&cfg, 0.0), Boost::default());
}
