//! The analog clock face: layout, time sampling, render pass and redraw scheduling.

pub mod angles;
pub mod geometry;
pub mod scale;
pub mod schedule;
pub mod style;
pub mod theme;
pub mod time;

use std::time::{Duration, Instant};

use crate::persistence::config::Config;
use crate::surface::{with_rotation, Surface};

use self::angles::{HandAngles, HourHand};
use self::geometry::{DialGeometry, DEFAULT_MARGIN};
use self::scale::{numerals, scale_marks, TickKind};
use self::schedule::{Cadence, RedrawScheduler};
use self::style::{
    ClockStyle, StrokeStyle, BIG_SCALE_LEN, BIG_SCALE_STROKE, RING_STROKE, SMALL_SCALE_LEN,
    SMALL_SCALE_STROKE,
};
use self::time::{TimeSample, TimeSource};

/// Hand tips sit this far above `y = radius` before rotation.
pub const HOUR_HAND_INSET: f64 = 100.0;
pub const MINUTE_HAND_INSET: f64 = 180.0;
pub const SECOND_HAND_INSET: f64 = 200.0;

pub struct ClockFace {
    style: ClockStyle,
    margin: f64,
    geometry: DialGeometry,
    hour_hand: HourHand,
    angles: HandAngles,
    last_sample: Option<TimeSample>,
    scheduler: RedrawScheduler,
    source: Box<dyn TimeSource>,
}

impl ClockFace {
    pub fn new(style: ClockStyle, source: impl TimeSource + 'static) -> Self {
        Self {
            style,
            margin: DEFAULT_MARGIN,
            geometry: DialGeometry::layout(0.0, DEFAULT_MARGIN),
            hour_hand: HourHand::default(),
            angles: HandAngles::default(),
            last_sample: None,
            scheduler: RedrawScheduler::new(Cadence::default()),
            source: Box::new(source),
        }
    }

    pub fn from_config(config: &Config, source: impl TimeSource + 'static) -> Self {
        Self::new(ClockStyle::from_overrides(&config.colors), source)
            .with_margin(config.margin)
            .with_hour_hand(config.hour_hand)
            .with_cadence(config.cadence)
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self.geometry = DialGeometry::layout(self.geometry.width(), margin);
        self
    }

    pub fn with_hour_hand(mut self, hour_hand: HourHand) -> Self {
        self.hour_hand = hour_hand;
        self
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.scheduler.set_cadence(cadence);
        self
    }

    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    pub fn geometry(&self) -> &DialGeometry {
        &self.geometry
    }

    pub fn angles(&self) -> HandAngles {
        self.angles
    }

    pub fn last_sample(&self) -> Option<TimeSample> {
        self.last_sample
    }

    pub fn cadence(&self) -> Cadence {
        self.scheduler.cadence()
    }

    pub fn set_cadence(&mut self, cadence: Cadence) {
        log::debug!("redraw cadence set to {}", cadence.label());
        self.scheduler.set_cadence(cadence);
    }

    /// Layout pass: recompute the dial for `available_width` and return the
    /// bounds the host should allocate.
    pub fn measure(&mut self, available_width: f64) -> (f64, f64) {
        let geometry = DialGeometry::layout(available_width, self.margin);
        if geometry != self.geometry {
            log::debug!(
                "dial layout: width={} radius={} center=({}, {})",
                geometry.width(),
                geometry.radius,
                geometry.center_x,
                geometry.center_y
            );
        }
        self.geometry = geometry;
        geometry.desired_size()
    }

    /// Read the time source and replace the hand angles in one step.
    pub fn sample_time(&mut self) -> TimeSample {
        let sample = TimeSample::sample(self.source.as_ref());
        self.angles = HandAngles::from_sample(&sample, self.hour_hand);
        self.last_sample = Some(sample);
        sample
    }

    /// Sample and schedule the next redraw; the caller renders afterwards.
    pub fn tick(&mut self, now: Instant) -> TimeSample {
        let sample = self.sample_time();
        self.scheduler.schedule_after_render(now);
        log::trace!(
            "redraw {:02}:{:02}:{:02}, next in {:?}",
            sample.hour,
            sample.minute,
            sample.second,
            self.scheduler.cadence().interval()
        );
        sample
    }

    /// Host draw callback: sample, render, and schedule the next redraw.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S, now: Instant) -> TimeSample {
        let sample = self.tick(now);
        self.render(surface);
        sample
    }

    pub fn redraw_due(&self, now: Instant) -> bool {
        self.scheduler.is_due(now)
    }

    pub fn next_redraw_in(&self, now: Instant) -> Duration {
        self.scheduler.time_until_due(now)
    }

    /// Render pass with the current angles. Returns false, drawing nothing,
    /// when the dial has no positive radius.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> bool {
        if !self.geometry.is_drawable() {
            log::debug!("skipping render: dial radius is {}", self.geometry.radius);
            return false;
        }
        self.draw_ring(surface);
        self.draw_numerals(surface);
        self.draw_scale(surface);
        self.draw_hand(surface, self.angles.hour_deg, HOUR_HAND_INSET, &self.style.hour);
        self.draw_hand(surface, self.angles.minute_deg, MINUTE_HAND_INSET, &self.style.minute);
        self.draw_hand(surface, self.angles.second_deg, SECOND_HAND_INSET, &self.style.second);
        true
    }

    fn center(&self) -> (f64, f64) {
        (self.geometry.center_x, self.geometry.center_y)
    }

    fn draw_ring<S: Surface + ?Sized>(&self, surface: &mut S) {
        let g = &self.geometry;
        surface.draw_circle(g.center_x, g.center_y, g.radius, &self.style.ring);
    }

    fn draw_numerals<S: Surface + ?Sized>(&self, surface: &mut S) {
        let g = &self.geometry;
        let text = &self.style.text;
        let baseline = g.margin + BIG_SCALE_LEN + text.text_size;
        for numeral in numerals() {
            let label = numeral.label.to_string();
            let width = surface.measure_text_width(&label, text);
            with_rotation(surface, numeral.angle_deg, self.center(), |s| {
                s.draw_text(&label, g.center_x - width / 2.0, baseline, text);
            });
        }
    }

    fn draw_scale<S: Surface + ?Sized>(&self, surface: &mut S) {
        let g = &self.geometry;
        for mark in scale_marks() {
            let (style, stroke, len) = match mark.kind {
                TickKind::Emphasis => (&self.style.second, BIG_SCALE_STROKE, BIG_SCALE_LEN),
                TickKind::Major => (&self.style.big_scale, BIG_SCALE_STROKE, BIG_SCALE_LEN),
                TickKind::Minor => (&self.style.small_scale, SMALL_SCALE_STROKE, SMALL_SCALE_LEN),
            };
            let outer = g.margin - stroke / 2.0 + RING_STROKE;
            let inner = g.margin + len;
            with_rotation(surface, mark.angle_deg, self.center(), |s| {
                s.draw_line(g.center_x, outer, g.center_x, inner, style);
            });
        }
    }

    fn draw_hand<S: Surface + ?Sized>(&self, surface: &mut S, deg: f64, inset: f64, style: &StrokeStyle) {
        let g = &self.geometry;
        with_rotation(surface, deg, self.center(), |s| {
            s.draw_line(g.center_x, g.center_y, g.center_x, g.radius - inset, style);
        });
    }
}
