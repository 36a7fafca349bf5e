//! Drawing-surface boundary between the compositor and the platform.
//!
//! Coordinates are css pixels; implementations apply the device pixel ratio
//! themselves when resized. [`Recorder`] is an in-memory implementation that
//! keeps every call, which is what tests and headless callers use.

use crate::color::Rgba;
use crate::viewport::Viewport;
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blend {
    #[default]
    SourceOver,
    /// Additive compositing (`lighter`).
    Lighter,
}

impl Blend {
    pub fn as_css(self) -> &'static str {
        match self {
            Blend::SourceOver => "source-over",
            Blend::Lighter => "lighter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

/// Linear gradient between two points; five stops fit inline.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: DVec2,
    pub to: DVec2,
    pub stops: SmallVec<[ColorStop; 5]>,
}

impl LinearGradient {
    pub fn vertical(y0: f64, y1: f64) -> Self {
        Self {
            from: DVec2::new(0.0, y0),
            to: DVec2::new(0.0, y1),
            stops: SmallVec::new(),
        }
    }

    pub fn stop(mut self, offset: f64, color: Rgba) -> Self {
        self.stops.push(ColorStop { offset, color });
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
}

impl From<Rgba> for Paint {
    fn from(c: Rgba) -> Self {
        Paint::Solid(c)
    }
}

/// Font for centered label text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub weight: u16,
    pub px: f64,
}

const FONT_STACK: &str = concat!(
    "system-ui, -apple-system, Segoe UI, Roboto, Ubuntu, Cantarell, ",
    "'Fira Sans', 'Droid Sans', 'Helvetica Neue', Arial, 'Noto Sans', sans-serif"
);

impl Font {
    pub fn to_css(self) -> String {
        format!("{} {}px {}", self.weight, self.px, FONT_STACK)
    }
}

/// Alpha channel read back from a surface.
///
/// `data` holds one byte per backing pixel; `scale` is backing pixels per
/// css pixel, so lookups take css coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct AlphaMask {
    pub width: usize,
    pub height: usize,
    pub scale: f64,
    pub data: Vec<u8>,
}

impl Default for AlphaMask {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl AlphaMask {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
            data: vec![0; width * height],
        }
    }

    /// Extract the alpha bytes from an RGBA buffer.
    pub fn from_rgba(width: usize, height: usize, rgba: &[u8]) -> Self {
        let data = rgba.chunks_exact(4).map(|px| px[3]).collect::<Vec<_>>();
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            scale: 1.0,
            data,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Alpha under css point `(x, y)`, or `None` outside the mask.
    #[inline]
    pub fn alpha_at(&self, x: f64, y: f64) -> Option<u8> {
        let (dx, dy) = (x * self.scale, y * self.scale);
        if !(dx >= 0.0 && dy >= 0.0) {
            return None;
        }
        let (xi, yi) = (dx.floor() as usize, dy.floor() as usize);
        if xi >= self.width || yi >= self.height {
            return None;
        }
        self.data.get(yi * self.width + xi).copied()
    }

    /// Fill a rectangle given in backing pixels.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, alpha: u8) {
        for row in y..(y + h).min(self.height) {
            for col in x..(x + w).min(self.width) {
                self.data[row * self.width + col] = alpha;
            }
        }
    }
}

pub trait Surface {
    fn resize(&mut self, viewport: &Viewport);
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn set_blend(&mut self, blend: Blend);
    fn set_global_alpha(&mut self, alpha: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn line_to(&mut self, p: DVec2);
    fn close_path(&mut self);
    fn set_fill(&mut self, paint: &Paint);
    fn set_stroke(&mut self, paint: &Paint);
    fn set_line_width(&mut self, width: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    /// Draw `text` centered (horizontally and vertically) at `at` in white.
    fn fill_text(&mut self, text: &str, at: DVec2, font: Font);
    fn read_alpha(&mut self) -> AlphaMask;

    /// Open a path through `points`.
    fn polyline<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = DVec2>,
        Self: Sized,
    {
        self.begin_path();
        let mut it = points.into_iter();
        if let Some(first) = it.next() {
            self.move_to(first);
            for p in it {
                self.line_to(p);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Resize(u32, u32),
    Clear,
    Save,
    Restore,
    Blend(Blend),
    GlobalAlpha(f64),
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    ClosePath,
    Fill(Paint),
    Stroke { paint: Paint, width: f64 },
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        paint: Paint,
    },
    Text {
        text: String,
        at: DVec2,
        font: Font,
    },
}

/// Records calls instead of drawing. `fill`/`stroke` capture the active
/// style so assertions do not need to replay state.
#[derive(Clone, Debug)]
pub struct Recorder {
    pub commands: Vec<DrawCmd>,
    pub mask: AlphaMask,
    fill: Paint,
    stroke: Paint,
    line_width: f64,
    blend: Blend,
    stack: Vec<(Paint, Paint, f64, Blend)>,
}

impl Default for Recorder {
    fn default() -> Self {
        let black = Paint::Solid(crate::color::Rgb::default().opaque());
        Self {
            commands: Vec::new(),
            mask: AlphaMask::default(),
            fill: black.clone(),
            stroke: black,
            line_width: 1.0,
            blend: Blend::SourceOver,
            stack: Vec::new(),
        }
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder whose [`Surface::read_alpha`] returns `mask`.
    pub fn with_mask(mask: AlphaMask) -> Self {
        Self {
            mask,
            ..Self::default()
        }
    }

    pub fn blend(&self) -> Blend {
        self.blend
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&Paint, f64)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Stroke { paint, width } => Some((paint, *width)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::FillRect { x, y, w, h, .. } => Some((*x, *y, *w, *h)),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for Recorder {
    fn resize(&mut self, viewport: &Viewport) {
        let (w, h) = viewport.backing_size();
        self.commands.push(DrawCmd::Resize(w, h));
    }
    fn clear(&mut self, _width: f64, _height: f64) {
        self.commands.push(DrawCmd::Clear);
    }
    fn save(&mut self) {
        self.stack
            .push((self.fill.clone(), self.stroke.clone(), self.line_width, self.blend));
        self.commands.push(DrawCmd::Save);
    }
    fn restore(&mut self) {
        if let Some((fill, stroke, width, blend)) = self.stack.pop() {
            self.fill = fill;
            self.stroke = stroke;
            self.line_width = width;
            self.blend = blend;
        }
        self.commands.push(DrawCmd::Restore);
    }
    fn set_blend(&mut self, blend: Blend) {
        self.blend = blend;
        self.commands.push(DrawCmd::Blend(blend));
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCmd::GlobalAlpha(alpha));
    }
    fn begin_path(&mut self) {
        self.commands.push(DrawCmd::BeginPath);
    }
    fn move_to(&mut self, p: DVec2) {
        self.commands.push(DrawCmd::MoveTo(p));
    }
    fn line_to(&mut self, p: DVec2) {
        self.commands.push(DrawCmd::LineTo(p));
    }
    fn close_path(&mut self) {
        self.commands.push(DrawCmd::ClosePath);
    }
    fn set_fill(&mut self, paint: &Paint) {
        self.fill = paint.clone();
    }
    fn set_stroke(&mut self, paint: &Paint) {
        self.stroke = paint.clone();
    }
    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }
    fn fill(&mut self) {
        self.commands.push(DrawCmd::Fill(self.fill.clone()));
    }
    fn stroke(&mut self) {
        self.commands.push(DrawCmd::Stroke {
            paint: self.stroke.clone(),
            width: self.line_width,
        });
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCmd::FillRect {
            x,
            y,
            w,
            h,
            paint: self.fill.clone(),
        });
    }
    fn fill_text(&mut self, text: &str, at: DVec2, font: Font) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            at,
            font,
        });
    }
    fn read_alpha(&mut self) -> AlphaMask {
        self.mask.clone()
    }
}
