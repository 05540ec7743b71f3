//! Hand angles in degrees, clockwise from 12 o'clock.

use serde::{Deserialize, Serialize};

use crate::face::time::TimeSample;

/// Degrees per minute/second step.
pub const HAND_MOVE_DEGREE: f64 = 6.0;
/// Degrees per hour step.
pub const HOUR_MOVE_DEGREE: f64 = 30.0;

/// How the hour hand moves between full hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HourHand {
    /// Jumps 30° on the hour.
    #[default]
    Stepped,
    /// Advances half a degree per minute.
    Sweep,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandAngles {
    pub hour_deg: f64,
    pub minute_deg: f64,
    pub second_deg: f64,
}

impl HandAngles {
    pub fn from_sample(sample: &TimeSample, hour_hand: HourHand) -> Self {
        let minute_deg = f64::from(sample.minute) * HAND_MOVE_DEGREE;
        let mut hour_deg = f64::from(sample.hour) * HOUR_MOVE_DEGREE;
        if hour_hand == HourHand::Sweep {
            hour_deg += f64::from(sample.minute) * (HOUR_MOVE_DEGREE / 60.0);
        }
        Self {
            hour_deg,
            minute_deg,
            second_deg: f64::from(sample.second) * HAND_MOVE_DEGREE,
        }
    }
}
