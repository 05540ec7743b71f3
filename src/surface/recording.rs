//! Surface that records every call as a `DrawCommand`.

use crate::face::style::{StrokeStyle, TextStyle};
use crate::surface::{Surface, GLYPH_ADVANCE};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        style: StrokeStyle,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: StrokeStyle,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
    },
    Save,
    Rotate {
        deg: f64,
        pivot_x: f64,
        pivot_y: f64,
    },
    Restore,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Saves minus restores; zero after a balanced pass.
    pub fn open_states(&self) -> isize {
        self.commands.iter().fold(0, |depth, c| match c {
            DrawCommand::Save => depth + 1,
            DrawCommand::Restore => depth - 1,
            _ => depth,
        })
    }
}

impl Surface for RecordingSurface {
    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            radius,
            style: *style,
        });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            style: *style,
        });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style: *style,
        });
    }

    fn measure_text_width(&self, text: &str, style: &TextStyle) -> f64 {
        text.chars().count() as f64 * style.text_size * GLYPH_ADVANCE
    }

    fn push_state(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn rotate(&mut self, deg: f64, pivot_x: f64, pivot_y: f64) {
        self.commands.push(DrawCommand::Rotate { deg, pivot_x, pivot_y });
    }

    fn pop_state(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }
}
