//! Color triples, palette interpolation and the small tint helpers used by
//! the compositing passes.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha value for stroke/fill styles.
    #[inline]
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba { rgb: self, a }
    }

    #[inline]
    pub fn opaque(self) -> Rgba {
        self.with_alpha(1.0)
    }

    /// Blend toward white by `amount` in \[0, 1\].
    pub fn mix_with_white(self, amount: f64) -> Self {
        let mix = |c: u8| round_channel(c as f64 + (255.0 - c as f64) * amount);
        Self::new(mix(self.r), mix(self.g), mix(self.b))
    }

    /// Scale every channel by `factor`, clamped to the displayable range.
    pub fn darken(self, factor: f64) -> Self {
        let scale = |c: u8| round_channel((c as f64 * factor).clamp(0.0, 255.0));
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.a
        )
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
fn round_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Channel-wise linear blend, rounded to the nearest integer.
pub fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    let ch = |a: u8, b: u8| round_channel(lerp(a as f64, b as f64, t));
    Rgb::new(ch(c1.r, c2.r), ch(c1.g, c2.g), ch(c1.b, c2.b))
}

/// Ordered color stops treated as a cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    stops: Vec<Rgb>,
}

impl Palette {
    pub fn new(stops: Vec<Rgb>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Color at phase `t` in \[0, 1). The phase is scaled by `N - 1`; the
    /// integer part picks the lower stop and the fraction blends toward the
    /// next one, both indices wrapping modulo `N`.
    pub fn at(&self, t: f64) -> Rgb {
        let n = self.stops.len();
        match n {
            0 => Rgb::default(),
            1 => self.stops[0],
            _ => {
                let scaled = t * (n - 1) as f64;
                let i = scaled.floor();
                let f = scaled - i;
                let i = (i as i64).rem_euclid(n as i64) as usize;
                lerp_color(self.stops[i], self.stops[(i + 1) % n], f)
            }
        }
    }

    /// Largest per-channel jump between adjacent stops.
    pub fn max_channel_delta(&self) -> u8 {
        self.stops
            .windows(2)
            .flat_map(|w| {
                [
                    w[0].r.abs_diff(w[1].r),
                    w[0].g.abs_diff(w[1].g),
                    w[0].b.abs_diff(w[1].b),
                ]
            })
            .max()
            .unwrap_or(0)
    }
}

/// Wrap an elapsed time into a palette phase.
#[inline]
pub fn cycle_phase(elapsed_sec: f64, rate: f64) -> f64 {
    (elapsed_sec * rate).rem_euclid(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_clamps_and_rounds() {
        let c = Rgb::new(200, 101, 3);
        assert_eq!(c.darken(0.5), Rgb::new(100, 51, 2));
        assert_eq!(c.darken(2.0), Rgb::new(255, 202, 6));
    }

    #[test]
    fn mix_with_white_endpoints() {
        let c = Rgb::new(180, 18, 28);
        assert_eq!(c.mix_with_white(0.0), c);
        assert_eq!(c.mix_with_white(1.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn css_formatting() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1, 2, 3)");
        assert_eq!(Rgb::new(1, 2, 3).with_alpha(0.5).to_string(), "rgba(1, 2, 3, 0.5)");
    }
}
