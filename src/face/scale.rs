//! The 60 scale marks and the 12 numerals around the dial.

use crate::face::angles::{HAND_MOVE_DEGREE, HOUR_MOVE_DEGREE};

pub const TICK_COUNT: usize = 60;

/// Labels in clockwise order, starting one hour step past 12.
pub const HOUR_NUMBERS: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Minor,
    Major,
    /// Major ticks at 12, 3, 6 and 9, drawn in the second-hand style.
    Emphasis,
}

impl TickKind {
    pub fn classify(index: usize) -> Self {
        if index % 5 != 0 {
            TickKind::Minor
        } else if index % 15 == 0 {
            TickKind::Emphasis
        } else {
            TickKind::Major
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMark {
    pub index: usize,
    pub kind: TickKind,
    pub angle_deg: f64,
}

pub fn scale_marks() -> impl Iterator<Item = ScaleMark> {
    (0..TICK_COUNT).map(|index| ScaleMark {
        index,
        kind: TickKind::classify(index),
        angle_deg: index as f64 * HAND_MOVE_DEGREE,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Numeral {
    pub label: u8,
    pub angle_deg: f64,
}

/// Numerals sit on the major ticks, offset one hour step so "12" lands at the top.
pub fn numerals() -> impl Iterator<Item = Numeral> {
    (0..TICK_COUNT).step_by(5).map(|i| Numeral {
        label: HOUR_NUMBERS[i / 5],
        angle_deg: HOUR_MOVE_DEGREE + i as f64 * HAND_MOVE_DEGREE,
    })
}
