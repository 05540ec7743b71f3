//! Dial layout derived from the host-provided width.

/// Distance between the ring and the edge of the view.
pub const DEFAULT_MARGIN: f64 = 100.0;

/// Center and radius of the dial, in host pixels (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub margin: f64,
}

impl DialGeometry {
    /// Compute the dial for one layout pass.
    ///
    /// Widths narrower than `2 * margin` are clamped so the radius never goes
    /// negative; such a dial has radius 0 and is not drawable.
    pub fn layout(width: f64, margin: f64) -> Self {
        let margin = if margin.is_finite() { margin.max(0.0) } else { 0.0 };
        let width = if width.is_finite() { width } else { 0.0 };
        let width = width.max(2.0 * margin);

        let radius = width / 2.0 - margin;
        Self {
            center_x: width / 2.0,
            center_y: radius + margin,
            radius,
            margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.center_x * 2.0
    }

    pub fn height(&self) -> f64 {
        self.center_y * 2.0
    }

    /// Bounds reported back to the host: `(width, 2 * center_y)`.
    pub fn desired_size(&self) -> (f64, f64) {
        (self.width(), self.height())
    }

    pub fn is_drawable(&self) -> bool {
        self.radius > 0.0
    }
}
