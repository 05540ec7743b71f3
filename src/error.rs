//! Error types for the clock face.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClockError {
    #[error("Invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    #[error("Invalid color {0:?}: expected \"#rrggbb\"")]
    InvalidColor(String),

    #[error("Raster drawing failed: {0}")]
    Raster(String),

    #[error("PNG encode failed: {0}")]
    Encode(String),
}

pub type ClockResult<T> = Result<T, ClockError>;
