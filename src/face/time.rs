//! Wall-clock sampling.

use chrono::{Local, NaiveTime, Timelike};

use crate::error::{ClockError, ClockResult};

/// A validated 24-hour wall-clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    hour24: u8,
    minute: u8,
    second: u8,
}

impl WallTime {
    pub fn new(hour24: u32, minute: u32, second: u32) -> ClockResult<Self> {
        if hour24 > 23 || minute > 59 || second > 59 {
            return Err(ClockError::InvalidTime {
                hour: hour24,
                minute,
                second,
            });
        }
        Ok(Self {
            hour24: hour24 as u8,
            minute: minute as u8,
            second: second as u8,
        })
    }

    pub fn hour24(&self) -> u8 {
        self.hour24
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }
}

impl From<NaiveTime> for WallTime {
    fn from(time: NaiveTime) -> Self {
        // Leap seconds surface as nanosecond overflow, never as second == 60.
        Self {
            hour24: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }
}

/// Where the dial reads the current time from.
pub trait TimeSource {
    fn now(&self) -> WallTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> WallTime {
        Local::now().time().into()
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub WallTime);

impl TimeSource for FixedClock {
    fn now(&self) -> WallTime {
        self.0
    }
}

/// Time on a 12-hour dial: `hour` is hours past the 12 mark (0..=11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeSample {
    pub fn from_wall_time(time: WallTime) -> Self {
        Self {
            hour: time.hour24 % 12,
            minute: time.minute,
            second: time.second,
        }
    }

    pub fn sample(source: &dyn TimeSource) -> Self {
        Self::from_wall_time(source.now())
    }
}
