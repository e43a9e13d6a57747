//! Rigid 2D transform (rotation + translation)
//!
//! `Matrix2D` stores a 2x2 linear part and a translation, applied as
//! `linear * v + translation`. Steering accumulates rotation with
//! [`Matrix2D::compose`]; world position is tracked separately by the shape,
//! so composing keeps the receiver's translation.

use std::ops::Mul;

use glam::Mat2;

use super::Vector2D;

/// A 2D affine transform built from a rotation and a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2D {
    linear: Mat2,
    translation: Vector2D,
}

impl Default for Matrix2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        linear: Mat2::IDENTITY,
        translation: Vector2D::ZERO,
    };

    /// The identity transform.
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Counter-clockwise rotation about the origin, angle in degrees.
    pub fn rotation_degrees(degrees: f32) -> Self {
        Self::rotation_radians(degrees.to_radians())
    }

    /// Counter-clockwise rotation about the origin, angle in radians.
    pub fn rotation_radians(radians: f32) -> Self {
        Self {
            linear: Mat2::from_angle(radians),
            translation: Vector2D::ZERO,
        }
    }

    /// Rotate by `degrees`, then translate by `translation`.
    pub fn rotation_and_translation(degrees: f32, translation: Vector2D) -> Self {
        Self {
            linear: Mat2::from_angle(degrees.to_radians()),
            translation,
        }
    }

    /// Pure translation.
    pub fn translation_only(translation: Vector2D) -> Self {
        Self {
            linear: Mat2::IDENTITY,
            translation,
        }
    }

    /// Transform a point: rotate, then translate.
    #[inline]
    pub fn apply(&self, v: Vector2D) -> Vector2D {
        self.linear * v + self.translation
    }

    /// Transform a direction: rotation only, translation ignored.
    #[inline]
    pub fn apply_vector(&self, v: Vector2D) -> Vector2D {
        self.linear * v
    }

    /// Fold `other`'s rotation into this transform.
    ///
    /// The result rotates by `self * other` and keeps `self`'s translation.
    /// Not commutative in general; steering uses
    /// `current.compose(&increment)`.
    pub fn compose(&self, other: &Matrix2D) -> Matrix2D {
        Matrix2D {
            linear: self.linear * other.linear,
            translation: self.translation,
        }
    }

    /// In-place form of [`Matrix2D::compose`].
    pub fn compose_in_place(&mut self, other: &Matrix2D) {
        *self = self.compose(other);
    }

    /// Translation component.
    pub fn translation(&self) -> Vector2D {
        self.translation
    }

    /// Rotation angle in radians, in `(-PI, PI]`.
    pub fn angle_radians(&self) -> f32 {
        self.linear.x_axis.y.atan2(self.linear.x_axis.x)
    }

    /// Linear (rotation) part.
    pub fn linear(&self) -> Mat2 {
        self.linear
    }
}

impl Mul<Vector2D> for Matrix2D {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        self.apply(rhs)
    }
}

impl Mul<Vector2D> for &Matrix2D {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        self.apply(rhs)
    }
}
