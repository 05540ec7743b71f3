pub mod error;
pub mod face;
pub mod persistence;
pub mod surface;
pub mod tui;

pub use error::{ClockError, ClockResult};
pub use face::ClockFace;
