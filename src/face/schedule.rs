//! Self-scheduled redraw cadence.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Delay between redraws at the once-per-second cadence.
pub const REDRAW_INTERVAL: Duration = Duration::from_millis(1000);
/// Frame interval of the terminal host loop.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cadence {
    #[default]
    EverySecond,
    EveryFrame,
}

impl Cadence {
    pub fn interval(self) -> Duration {
        match self {
            Cadence::EverySecond => REDRAW_INTERVAL,
            Cadence::EveryFrame => FRAME_INTERVAL,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Cadence::EverySecond => Cadence::EveryFrame,
            Cadence::EveryFrame => Cadence::EverySecond,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Cadence::EverySecond => "1s",
            Cadence::EveryFrame => "every frame",
        }
    }
}

/// Holds at most one pending redraw deadline.
#[derive(Debug, Clone)]
pub struct RedrawScheduler {
    cadence: Cadence,
    next_due: Option<Instant>,
}

impl RedrawScheduler {
    pub fn new(cadence: Cadence) -> Self {
        Self {
            cadence,
            next_due: None,
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Switching cadence drops the pending deadline so the next check redraws.
    pub fn set_cadence(&mut self, cadence: Cadence) {
        self.cadence = cadence;
        self.next_due = None;
    }

    /// Replace the pending deadline after a render pass at `now`.
    pub fn schedule_after_render(&mut self, now: Instant) {
        self.next_due = Some(now + self.cadence.interval());
    }

    /// Nothing rendered yet counts as due.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.map_or(true, |due| now >= due)
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due
            .map_or(Duration::ZERO, |due| due.saturating_duration_since(now))
    }
}
