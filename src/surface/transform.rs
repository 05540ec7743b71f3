//! Rotation transforms for backends that place primitives themselves.

/// An affine rotation `[a b c; d e f]` in y-down coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
        e: 1.0,
        f: 0.0,
    };

    /// Positive degrees turn clockwise on screen.
    pub fn rotation(deg: f64, pivot_x: f64, pivot_y: f64) -> Self {
        let (sin, cos) = deg.to_radians().sin_cos();
        Self {
            a: cos,
            b: -sin,
            c: pivot_x - cos * pivot_x + sin * pivot_y,
            d: sin,
            e: cos,
            f: pivot_y - sin * pivot_x - cos * pivot_y,
        }
    }

    /// `self` applied after `inner`.
    pub fn then(&self, inner: &Transform) -> Transform {
        Transform {
            a: self.a * inner.a + self.b * inner.d,
            b: self.a * inner.b + self.b * inner.e,
            c: self.a * inner.c + self.b * inner.f + self.c,
            d: self.d * inner.a + self.e * inner.d,
            e: self.d * inner.b + self.e * inner.e,
            f: self.d * inner.c + self.e * inner.f + self.f,
        }
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.a * x + self.b * y + self.c, self.d * x + self.e * y + self.f)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Current transform plus saved states.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Transform,
    saved: Vec<Transform>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Transform {
        self.current
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Popping with nothing saved leaves the transform unchanged.
    pub fn pop(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.current = t;
        }
    }

    /// Rotations compose in call order, like a canvas matrix.
    pub fn rotate(&mut self, deg: f64, pivot_x: f64, pivot_y: f64) {
        self.current = self.current.then(&Transform::rotation(deg, pivot_x, pivot_y));
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        self.current.apply(x, y)
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.saved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_rotation_is_clockwise() {
        let t = Transform::rotation(90.0, 500.0, 500.0);
        // 12 o'clock moves to 3 o'clock
        assert_close(t.apply(500.0, 100.0), (900.0, 500.0));
        assert_close(t.apply(500.0, 500.0), (500.0, 500.0));
    }

    #[test]
    fn test_rotations_accumulate() {
        let mut stack = TransformStack::new();
        stack.rotate(30.0, 0.0, 0.0);
        stack.rotate(60.0, 0.0, 0.0);
        assert_close(stack.apply(0.0, -1.0), (1.0, 0.0));
    }

    #[test]
    fn test_push_pop_restores() {
        let mut stack = TransformStack::new();
        stack.push();
        stack.rotate(45.0, 10.0, 10.0);
        assert_eq!(stack.depth(), 1);
        stack.pop();
        assert_eq!(stack.current(), Transform::IDENTITY);
        stack.pop();
        assert_eq!(stack.current(), Transform::IDENTITY);
    }
}
