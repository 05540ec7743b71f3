use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use ratatui_image::StatefulImage;

use crate::face::time::{SystemClock, TimeSample};
use crate::face::ClockFace;
use crate::persistence::config::Config;
use crate::surface::canvas::CanvasSurface;
use crate::surface::raster::render_png;
use crate::tui::event::is_quit;
use crate::tui::status::render_status_bar;
use crate::tui::theme::Theme;

pub struct App {
    pub face: ClockFace,
    pub config: Config,
    pub should_quit: bool,
    pub picker: Option<Picker>,
    /// Image protocol for the last rasterised sample (avoids re-encoding per frame).
    image_state: Option<StatefulProtocol>,
    image_sample: Option<TimeSample>,
    image_error: Option<String>,
}

impl App {
    pub fn new(picker: Option<Picker>, config: Config) -> Self {
        Self::with_face(picker, ClockFace::from_config(&config, SystemClock), config)
    }

    pub fn with_face(picker: Option<Picker>, mut face: ClockFace, config: Config) -> Self {
        face.measure(config.dial_width);
        Self {
            face,
            config,
            should_quit: false,
            picker,
            image_state: None,
            image_sample: None,
            image_error: None,
        }
    }

    /// Handle a key event. Returns true if the screen should be redrawn.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_quit(&key) {
            self.should_quit = true;
            return true;
        }
        match key.code {
            KeyCode::Char('c') => {
                let cadence = self.face.cadence().toggled();
                self.face.set_cadence(cadence);
                true
            }
            _ => false,
        }
    }

    pub fn redraw_due(&self, now: Instant) -> bool {
        self.face.redraw_due(now)
    }

    /// How long the event loop may block before the next scheduled redraw.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.face.next_redraw_in(now)
    }

    /// Render the full UI. Every call samples the clock and reschedules.
    pub fn render(&mut self, frame: &mut Frame) {
        let sample = self.face.tick(Instant::now());

        let outer = Layout::vertical([
            Constraint::Length(1), // Status bar
            Constraint::Min(3),    // Dial
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

        render_status_bar(frame, outer[0], Some(&sample), self.face.cadence());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title(Span::styled(" Clock ", Theme::title()));
        let inner = block.inner(outer[1]);
        frame.render_widget(block, outer[1]);

        let dial = fit_dial_area(inner);
        if self.picker.is_some() {
            self.render_image(frame, dial, sample);
        } else {
            self.render_canvas(frame, dial);
        }

        frame.render_widget(
            Paragraph::new(Span::styled(" q quit | c toggle redraw cadence", Theme::hint())),
            outer[2],
        );
    }

    /// Braille fallback: draw the face straight onto a canvas.
    fn render_canvas(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let (width, height) = self.face.geometry().desired_size();
        let cell_width = width / f64::from(area.width);
        let face = &self.face;
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                let mut surface = CanvasSurface::new(ctx, height, cell_width);
                face.render(&mut surface);
            });
        frame.render_widget(canvas, area);
    }

    /// Rasterise the face once per new sample and show it with ratatui-image.
    fn render_image(&mut self, frame: &mut Frame, area: Rect, sample: TimeSample) {
        if self.image_sample != Some(sample) {
            self.image_sample = Some(sample);
            self.refresh_image();
        }

        if let Some(err) = &self.image_error {
            let text = format!("[clock render error: {}]", err);
            frame.render_widget(Paragraph::new(Span::styled(text, Theme::error())), area);
            return;
        }
        if let Some(protocol) = self.image_state.as_mut() {
            let image_widget = StatefulImage::default();
            frame.render_stateful_widget(image_widget, area, protocol);
        }
    }

    fn refresh_image(&mut self) {
        let Some(picker) = &self.picker else {
            return;
        };
        let decoded = render_png(&self.face)
            .map_err(|e| e.to_string())
            .and_then(|rendered| image::load_from_memory(&rendered.png_bytes).map_err(|e| e.to_string()));
        match decoded {
            Ok(dyn_image) => {
                self.image_state = Some(picker.new_resize_protocol(dyn_image));
                self.image_error = None;
            }
            Err(e) => {
                log::warn!("clock image render failed: {}", e);
                self.image_state = None;
                self.image_error = Some(e);
            }
        }
    }
}

/// Largest centred region that shows the square dial round, assuming
/// terminal cells are twice as tall as they are wide.
pub fn fit_dial_area(area: Rect) -> Rect {
    let rows = area.height.min(area.width / 2);
    let cols = rows * 2;
    Rect {
        x: area.x + (area.width - cols) / 2,
        y: area.y + (area.height - rows) / 2,
        width: cols,
        height: rows,
    }
}
