use geo::{Coord, Rect};

use crate::config::Canvas;

/// Linear min/max normalization of `(lng, lat)` into the padded canvas, then a
/// uniform zoom about the canvas center plus a pan offset:
///
/// `screen = center + (base - center) * zoom + pan`
///
/// This is not a map projection: longitude is not corrected for latitude, which is
/// only acceptable over the extent of a single county.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    window: Rect<f64>,
    canvas: Canvas,
    zoom: f64,
    pan: Coord<f64>,
}

impl ScreenTransform {
    pub fn new(window: Rect<f64>, canvas: Canvas, zoom: f64, pan: Coord<f64>) -> Self {
        Self { window, canvas, zoom, pan }
    }

    #[inline] pub fn window(&self) -> Rect<f64> { self.window }

    /// Unzoomed, unpanned position. Higher latitude maps to smaller y.
    pub fn base(&self, c: &Coord<f64>) -> (f64, f64) {
        let Canvas { width, height, padding } = self.canvas;
        let nx = normalize(c.x, self.window.min().x, self.window.width());
        let ny = normalize(c.y, self.window.min().y, self.window.height());
        (nx * (width - 2.0 * padding) + padding, height - (ny * (height - 2.0 * padding) + padding))
    }

    pub fn project(&self, c: &Coord<f64>) -> (f64, f64) {
        let (bx, by) = self.base(c);
        let (cx, cy) = self.canvas.center();
        (cx + (bx - cx) * self.zoom + self.pan.x, cy + (by - cy) * self.zoom + self.pan.y)
    }
}

/// Position within a span; a degenerate span puts everything in the middle.
#[inline]
fn normalize(value: f64, min: f64, span: f64) -> f64 {
    if span > 0.0 { (value - min) / span } else { 0.5 }
}
