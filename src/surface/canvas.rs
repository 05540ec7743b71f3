//! Braille canvas backend for terminals without image support.
//!
//! Stroke widths and caps are not representable at braille resolution; every
//! stroke is drawn one dot wide. Text cannot rotate, so labels are printed
//! upright, centred on the rotated position of their box.

use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::canvas::{Circle, Context, Line as CanvasLine};

use crate::face::style::{Rgb, StrokeStyle, TextStyle};
use crate::surface::transform::TransformStack;
use crate::surface::Surface;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    stack: TransformStack,
    height: f64,
    cell_width: f64,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    /// `height` is the canvas y-bound; `cell_width` is how many dial units one
    /// terminal column spans.
    pub fn new(ctx: &'a mut Context<'b>, height: f64, cell_width: f64) -> Self {
        Self {
            ctx,
            stack: TransformStack::new(),
            height,
            cell_width,
        }
    }

    /// Apply the current transform and flip into canvas (y-up) coordinates.
    fn project(&self, x: f64, y: f64) -> (f64, f64) {
        let (tx, ty) = self.stack.apply(x, y);
        (tx, self.height - ty)
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, style: &StrokeStyle) {
        let (x, y) = self.project(cx, cy);
        self.ctx.draw(&Circle {
            x,
            y,
            radius,
            color: style.color.into(),
        });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &StrokeStyle) {
        let (x1, y1) = self.project(x1, y1);
        let (x2, y2) = self.project(x2, y2);
        self.ctx.draw(&CanvasLine::new(x1, y1, x2, y2, style.color.into()));
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        let width = self.measure_text_width(text, style);
        let (cx, cy) = self.project(x + width / 2.0, y - style.text_size / 2.0);
        let span = Span::styled(text.to_string(), Style::default().fg(style.color.into()));
        self.ctx.print(cx - width / 2.0, cy, span);
    }

    fn measure_text_width(&self, text: &str, _style: &TextStyle) -> f64 {
        text.chars().count() as f64 * self.cell_width
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::style::{StrokeCap, TextStyle};
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::symbols::Marker;
    use ratatui::widgets::canvas::Canvas;
    use ratatui::widgets::Widget;

    const SIZE: f64 = 100.0;
    const CELLS: u16 = 10;

    fn paint<F>(draw: F) -> Buffer
    where
        F: Fn(&mut CanvasSurface<'_, '_>),
    {
        let area = Rect::new(0, 0, CELLS, CELLS);
        let mut buf = Buffer::empty(area);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, SIZE])
            .y_bounds([0.0, SIZE])
            .paint(|ctx| {
                let mut surface = CanvasSurface::new(ctx, SIZE, SIZE / f64::from(CELLS));
                draw(&mut surface);
            })
            .render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..CELLS).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    /// Row and column where `text` starts.
    fn find_text(buf: &Buffer, text: &str) -> Option<(u16, usize)> {
        (0..CELLS).find_map(|y| row(buf, y).find(text).map(|col| (y, col)))
    }

    fn stroke() -> StrokeStyle {
        StrokeStyle {
            color: Rgb(255, 255, 255),
            stroke_width: 1.0,
            stroke_cap: StrokeCap::Butt,
            anti_alias: true,
        }
    }

    fn label_style() -> TextStyle {
        TextStyle {
            color: Rgb(255, 255, 255),
            text_size: 10.0,
            anti_alias: true,
        }
    }

    #[test]
    fn test_line_near_top_lands_in_top_row() {
        let buf = paint(|s| s.draw_line(0.0, 5.0, SIZE, 5.0, &stroke()));
        assert!(row(&buf, 0).chars().any(|c| c != ' '), "top row: {:?}", row(&buf, 0));
        assert!(row(&buf, CELLS - 1).chars().all(|c| c == ' '));
    }

    #[test]
    fn test_label_is_centred_on_anchor() {
        // box centre (50, 50)
        let buf = paint(|s| s.draw_text("12", 40.0, 55.0, &label_style()));
        let (y, col) = find_text(&buf, "12").expect("label printed");
        assert!((4..=5).contains(&y), "row {}", y);
        assert!((3..=4).contains(&col), "col {}", col);
    }

    #[test]
    fn test_label_follows_rotation() {
        let upright = paint(|s| s.draw_text("12", 40.0, 15.0, &label_style()));
        let (y, _) = find_text(&upright, "12").expect("label printed");
        assert!(y <= 1, "row {}", y);

        let flipped = paint(|s| {
            s.push_state();
            s.rotate(180.0, 50.0, 50.0);
            s.draw_text("12", 40.0, 15.0, &label_style());
            s.pop_state();
        });
        let (y, _) = find_text(&flipped, "12").expect("label printed");
        assert!(y >= 7, "row {}", y);
    }

    #[test]
    fn test_measure_uses_cell_width() {
        let buf = paint(|s| {
            assert_eq!(s.measure_text_width("10", &label_style()), 20.0);
        });
        assert!(find_text(&buf, "10").is_none());
    }
}
