// Host-side tests for palette interpolation and color helpers.

use wave_core::color::{cycle_phase, lerp_color, Palette, Rgb};

const RED: Rgb = Rgb::new(255, 0, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

fn layered_palette() -> Palette {
    Palette::new(vec![
        Rgb::new(180, 18, 28),
        Rgb::new(210, 22, 36),
        Rgb::new(150, 10, 24),
        Rgb::new(180, 18, 28),
    ])
}

#[test]
fn palette_returns_exact_stop_at_boundaries() {
    let p = layered_palette();
    let n = p.len();
    for k in 0..n - 1 {
        let t = k as f64 / (n - 1) as f64;
        assert_eq!(p.at(t), p.stops()[k], "stop {k} at t={t}");
    }
}

#[test]
fn red_blue_midpoint_is_exact() {
    let p = Palette::new(vec![RED, BLUE]);
    // 127.5 rounds half away from zero
    assert_eq!(p.at(0.5), Rgb::new(128, 0, 128));
    assert_eq!(p.at(0.0), RED);
}

#[test]
fn palette_is_continuous() {
    let p = layered_palette();
    let eps = 1e-3;
    let bound = eps * (p.len() - 1) as f64 * p.max_channel_delta() as f64 + 1.0;
    let mut t = 0.0;
    while t + eps < 1.0 {
        let a = p.at(t);
        let b = p.at(t + eps);
        for (ca, cb) in [(a.r, b.r), (a.g, b.g), (a.b, b.b)] {
            let d = ca.abs_diff(cb) as f64;
            assert!(d <= bound, "jump {d} > {bound} at t={t}");
        }
        t += 0.0137;
    }
}

#[test]
fn single_stop_palette_is_constant() {
    let p = Palette::new(vec![Rgb::new(9, 8, 7)]);
    for t in [0.0, 0.3, 0.99] {
        assert_eq!(p.at(t), Rgb::new(9, 8, 7));
    }
}

#[test]
fn lerp_color_endpoints() {
    assert_eq!(lerp_color(RED, BLUE, 0.0), RED);
    assert_eq!(lerp_color(RED, BLUE, 1.0), BLUE);
}

#[test]
fn cycle_phase_wraps_into_unit_interval() {
    for t in [0.0, 1.0, 19.99, 20.0, 1234.5] {
        let ph = cycle_phase(t, 0.05);
        assert!((0.0..1.0).contains(&ph), "phase {ph} for t={t}");
    }
    assert!((cycle_phase(30.0, 0.05) - 0.5).abs() < 1e-12);
}

#[test]
fn max_channel_delta_of_layered_palette() {
    // 210 -> 150 on red is the largest adjacent jump
    assert_eq!(layered_palette().max_channel_delta(), 60);
}
