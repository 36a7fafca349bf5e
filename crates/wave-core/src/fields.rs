//! Pointer-follow and twist distortion of the columns preset.
//!
//! Both fields are Gaussians. The pointer field pulls a column's center
//! toward the pointer and, per sampled row, pulls the point again weighted
//! by the vertical falloff. The twist field pushes points tangentially
//! around a fixed center. Either one also thickens and brightens the
//! stroke it touches; the boosts simply add up.

use crate::config::{InteractionConfig, TwistConfig};
use crate::constants::{TWIST_MIN_INFLUENCE, TWIST_RADIUS_EPSILON, TWIST_SIGMA_RATIO};
use crate::context::PointerState;
use crate::viewport::Viewport;
use glam::DVec2;

/// Extra stroke alpha and width contributed by the fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Boost {
    pub alpha: f64,
    pub width: f64,
}

impl std::ops::AddAssign for Boost {
    fn add_assign(&mut self, rhs: Self) {
        self.alpha += rhs.alpha;
        self.width += rhs.width;
    }
}

#[inline]
fn gaussian(d2: f64, r2: f64) -> f64 {
    (-d2 / (2.0 * r2)).exp()
}

/// Pointer influence on one column, computed from the column center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerColumn {
    dx: f64,
    gx: f64,
    pointer_y: f64,
    y_radius: f64,
    strength: f64,
}

impl PointerColumn {
    /// No influence.
    pub const NONE: PointerColumn = PointerColumn {
        dx: 0.0,
        gx: 0.0,
        pointer_y: 0.0,
        y_radius: 1.0,
        strength: 0.0,
    };

    /// Evaluate the horizontal falloff for a column at `x_center`. Returns
    /// [`PointerColumn::NONE`] when `active` is false.
    pub fn new(
        cfg: &InteractionConfig,
        pointer: &PointerState,
        x_center: f64,
        active: bool,
    ) -> Self {
        if !active {
            return Self::NONE;
        }
        let dx = pointer.pos.x - x_center;
        let rx = cfg.radius;
        Self {
            dx,
            gx: gaussian(dx * dx, rx * rx),
            pointer_y: pointer.pos.y,
            y_radius: cfg.y_radius,
            strength: cfg.strength,
        }
    }

    /// Shift applied to the column center.
    #[inline]
    pub fn center_shift(&self) -> f64 {
        self.dx * self.strength * self.gx
    }

    /// Additional shift for a sampled row at `y`.
    #[inline]
    pub fn row_shift(&self, y: f64) -> f64 {
        if self.gx <= 0.0 {
            return 0.0;
        }
        let dy = self.pointer_y - y;
        let gy = gaussian(dy * dy, self.y_radius * self.y_radius);
        self.dx * self.strength * self.gx * gy
    }

    pub fn boost(&self, cfg: &InteractionConfig) -> Boost {
        Boost {
            alpha: self.gx * cfg.alpha_boost,
            width: self.gx * cfg.width_boost,
        }
    }
}

/// Fixed-point swirl resolved against a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Twist {
    center: DVec2,
    sigma2: f64,
    strength: f64,
    sign: f64,
    active: bool,
}

impl Twist {
    pub fn new(cfg: &TwistConfig, viewport: &Viewport, active: bool) -> Self {
        let r = cfg.radius;
        let sigma2 = if r > 0.0 {
            (r * TWIST_SIGMA_RATIO) * (r * TWIST_SIGMA_RATIO)
        } else {
            1.0
        };
        Self {
            center: DVec2::new(viewport.width * cfg.x, viewport.height * cfg.y),
            sigma2,
            strength: cfg.strength,
            sign: cfg.dir.sign(),
            active: active && cfg.enabled && r > 0.0,
        }
    }

    /// Tangential x-shift at `p` and the field intensity there.
    #[inline]
    pub fn apply(&self, p: DVec2) -> (f64, f64) {
        if !self.active {
            return (0.0, 0.0);
        }
        let d = p - self.center;
        let r2 = d.length_squared();
        let g = (-r2 / (2.0 * self.sigma2)).exp();
        if g <= TWIST_MIN_INFLUENCE {
            return (0.0, 0.0);
        }
        let r = r2.sqrt() + TWIST_RADIUS_EPSILON;
        let tan_x = (-d.y / r) * self.sign;
        (self.strength * tan_x * g, g)
    }

    pub fn boost(cfg: &TwistConfig, peak: f64) -> Boost {
        if peak <= 0.0 {
            return Boost::default();
        }
        Boost {
            alpha: peak * cfg.alpha_boost,
            width: peak * cfg.width_boost,
        }
    }
}
