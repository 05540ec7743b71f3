//! Drawing surface consumed by the clock face, plus its backends.

pub mod canvas;
pub mod raster;
pub mod recording;
pub mod transform;

use crate::face::style::{StrokeStyle, TextStyle};

/// Width of one glyph as a fraction of the text size.
pub const GLYPH_ADVANCE: f64 = 0.6;

/// 2D drawing primitives with a save/rotate/restore transform stack.
///
/// Coordinates are host pixels with y growing downward.
pub trait Surface {
    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, style: &StrokeStyle);
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &StrokeStyle);
    /// `(x, y)` is the left end of the text baseline.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> f64;
    fn push_state(&mut self);
    fn rotate(&mut self, deg: f64, pivot_x: f64, pivot_y: f64);
    fn pop_state(&mut self);
}

/// Run `draw` inside a saved state, restoring afterwards.
pub fn with_saved<S, F>(surface: &mut S, draw: F)
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S),
{
    surface.push_state();
    draw(surface);
    surface.pop_state();
}

/// Scoped transform: save, rotate about the pivot, draw, restore.
pub fn with_rotation<S, F>(surface: &mut S, deg: f64, pivot: (f64, f64), draw: F)
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S),
{
    with_saved(surface, |s| {
        s.rotate(deg, pivot.0, pivot.1);
        draw(s);
    });
}
