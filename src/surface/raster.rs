//! Raster pipeline: ClockFace → RGB buffer via plotters → PNG bytes.
//!
//! Numerals are drawn as seven-segment stroke glyphs, so they rotate with the
//! transform like every other primitive and no font backend is needed.

use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{ClockError, ClockResult};
use crate::face::style::{Rgb, StrokeCap, StrokeStyle, TextStyle};
use crate::face::theme::Theme;
use crate::face::ClockFace;
use crate::surface::transform::TransformStack;
use crate::surface::{Surface, GLYPH_ADVANCE};

/// Glyph width and cap height as fractions of the text size.
const GLYPH_WIDTH: f64 = 0.45;
const GLYPH_HEIGHT: f64 = 0.7;
const GLYPH_STROKE: f64 = 0.1;

/// Largest image side, in pixels, the raster backend will allocate.
pub const MAX_RASTER_SIDE: u32 = 8192;

/// Segments a..g (bit 0..6) lit for each digit.
const DIGIT_SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

type Segment = ((f64, f64), (f64, f64));

impl From<Rgb> for RGBColor {
    fn from(rgb: Rgb) -> Self {
        RGBColor(rgb.0, rgb.1, rgb.2)
    }
}

/// Stroke segments for one character whose advance box starts at `x`.
/// Characters other than ASCII digits produce no strokes.
pub fn glyph_segments(ch: char, x: f64, baseline: f64, size: f64) -> Vec<Segment> {
    let Some(digit) = ch.to_digit(10) else {
        return Vec::new();
    };
    let mask = DIGIT_SEGMENTS[digit as usize];

    let x0 = x + (GLYPH_ADVANCE - GLYPH_WIDTH) * size / 2.0;
    let x1 = x0 + GLYPH_WIDTH * size;
    let top = baseline - GLYPH_HEIGHT * size;
    let mid = baseline - GLYPH_HEIGHT * size / 2.0;
    let bottom = baseline;

    let all: [Segment; 7] = [
        ((x0, top), (x1, top)),       // a
        ((x1, top), (x1, mid)),       // b
        ((x1, mid), (x1, bottom)),    // c
        ((x0, bottom), (x1, bottom)), // d
        ((x0, mid), (x0, bottom)),    // e
        ((x0, top), (x0, mid)),       // f
        ((x0, mid), (x1, mid)),       // g
    ];
    all.iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1 << bit) != 0)
        .map(|(_, seg)| *seg)
        .collect()
}

pub struct RasterSurface<'a, 'b> {
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    stack: TransformStack,
    error: Option<String>,
}

impl<'a, 'b> RasterSurface<'a, 'b> {
    pub fn new(area: &'a DrawingArea<BitMapBackend<'b>, Shift>) -> Self {
        Self {
            area,
            stack: TransformStack::new(),
            error: None,
        }
    }

    /// First drawing error, if any primitive failed.
    pub fn finish(self) -> ClockResult<()> {
        match self.error {
            Some(e) => Err(ClockError::Raster(e)),
            None => Ok(()),
        }
    }

    fn pixel(&self, x: f64, y: f64) -> (i32, i32) {
        let (tx, ty) = self.stack.apply(x, y);
        (tx.round() as i32, ty.round() as i32)
    }

    fn record<T, E: std::fmt::Display>(&mut self, result: Result<T, E>) {
        if let Err(e) = result {
            if self.error.is_none() {
                self.error = Some(e.to_string());
            }
        }
    }

    fn stroke(&mut self, from: (i32, i32), to: (i32, i32), color: RGBColor, width: f64, cap: StrokeCap) {
        let width = width.round().max(1.0) as u32;
        let result = self.area.draw(&PathElement::new(vec![from, to], color.stroke_width(width)));
        self.record(result);
        if cap == StrokeCap::Round && width > 1 {
            let r = (width / 2) as i32;
            for end in [from, to] {
                let result = self.area.draw(&Circle::new(end, r, color.filled()));
                self.record(result);
            }
        }
    }
}

impl Surface for RasterSurface<'_, '_> {
    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, style: &StrokeStyle) {
        let center = self.pixel(cx, cy);
        let color = RGBColor::from(style.color);
        let width = style.stroke_width.round().max(1.0) as u32;
        let result = self.area.draw(&Circle::new(
            center,
            radius.round() as i32,
            color.stroke_width(width),
        ));
        self.record(result);
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &StrokeStyle) {
        let from = self.pixel(x1, y1);
        let to = self.pixel(x2, y2);
        self.stroke(from, to, style.color.into(), style.stroke_width, style.stroke_cap);
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        let size = style.text_size;
        let color = RGBColor::from(style.color);
        for (i, ch) in text.chars().enumerate() {
            let origin = x + i as f64 * GLYPH_ADVANCE * size;
            for ((sx, sy), (ex, ey)) in glyph_segments(ch, origin, y, size) {
                let from = self.pixel(sx, sy);
                let to = self.pixel(ex, ey);
                self.stroke(from, to, color, GLYPH_STROKE * size, StrokeCap::Round);
            }
        }
    }

    fn measure_text_width(&self, text: &str, style: &TextStyle) -> f64 {
        text.chars().count() as f64 * style.text_size * GLYPH_ADVANCE
    }

    fn push_state(&mut self) {
        self.stack.push();
    }

    fn rotate(&mut self, deg: f64, pivot_x: f64, pivot_y: f64) {
        self.stack.rotate(deg, pivot_x, pivot_y);
    }

    fn pop_state(&mut self) {
        self.stack.pop();
    }
}

/// A rendered dial image.
#[derive(Debug, Clone)]
pub struct RenderedFace {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Render the face, with its current angles, at its measured size.
pub fn render_png(face: &ClockFace) -> ClockResult<RenderedFace> {
    let geometry = face.geometry();
    if !geometry.is_drawable() {
        return Err(ClockError::Raster(format!(
            "dial radius is {}, nothing to draw",
            geometry.radius
        )));
    }
    let (w, h) = geometry.desired_size();
    let max_side = f64::from(MAX_RASTER_SIDE);
    if w.ceil() > max_side || h.ceil() > max_side {
        return Err(ClockError::Raster(format!(
            "dial is {}x{} px, larger than {}x{}",
            w.ceil(),
            h.ceil(),
            MAX_RASTER_SIDE,
            MAX_RASTER_SIDE
        )));
    }
    let width = w.ceil() as u32;
    let height = h.ceil() as u32;
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| ClockError::Raster(format!("buffer for {}x{} px overflows", width, height)))?;
    let mut buf = vec![0u8; len];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&RGBColor::from(Theme::BACKGROUND))
            .map_err(|e| ClockError::Raster(format!("fill: {}", e)))?;

        let mut surface = RasterSurface::new(&root);
        face.render(&mut surface);
        surface.finish()?;

        root.present()
            .map_err(|e| ClockError::Raster(format!("present: {}", e)))?;
    }

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;
    Ok(RenderedFace {
        png_bytes,
        width,
        height,
    })
}

/// Encode a raw RGB pixel buffer to PNG.
fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> ClockResult<Vec<u8>> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder
        .write_image(rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| ClockError::Encode(e.to_string()))?;
    Ok(png)
}
