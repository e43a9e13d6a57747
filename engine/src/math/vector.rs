//! 2D vector type re-exported from glam
//!
//! glam already provides the pure forms (`a + b`, `a - b`, `v * s`,
//! `length_squared`). The [`VectorOps`] trait adds the in-place forms the
//! flight model mutates on its hot path, and pins down the zero-vector
//! policy for normalization: a zero vector normalizes to zero, never NaN.

pub use glam::Vec2 as Vector2D;

/// Extra vector operations in both pure and in-place form.
///
/// Methods ending in `_in_place` mutate the receiver and return nothing.
/// Everything else returns a new value and leaves the receiver untouched.
pub trait VectorOps: Sized {
    /// Sum of squared components. Pure.
    fn mag_squared(self) -> f32;

    /// Unit-length copy, or the zero vector when the input has no length. Pure.
    fn normalized(self) -> Self;

    /// Rescale to unit length in place. A zero vector stays zero.
    fn normalize_in_place(&mut self);

    /// Component-wise add in place.
    fn add_in_place(&mut self, other: Self);

    /// Component-wise subtract in place.
    fn sub_in_place(&mut self, other: Self);

    /// Multiply both components by `s` in place.
    fn scale_in_place(&mut self, s: f32);

    /// Copy rescaled to exactly `magnitude`, or zero when the input has no length. Pure.
    fn with_magnitude(self, magnitude: f32) -> Self {
        let mut v = self.normalized();
        v.scale_in_place(magnitude);
        v
    }
}

impl VectorOps for Vector2D {
    #[inline]
    fn mag_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    fn normalized(self) -> Self {
        self.normalize_or_zero()
    }

    #[inline]
    fn normalize_in_place(&mut self) {
        *self = self.normalized();
    }

    #[inline]
    fn add_in_place(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }

    #[inline]
    fn sub_in_place(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }

    #[inline]
    fn scale_in_place(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
    }
}
