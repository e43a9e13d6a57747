//! Flight dynamics
//!
//! Pure per-frame functions used by [`Craft::update`](super::Craft::update).
//! Fixed time step: every quantity is "per frame", so integration is a
//! plain sum.
//!
//! # Invariants
//!
//! - After [`calc_velocity`], `|v| <= max_air_speed` and
//!   `v.y >= max_down_speed` (down clamp first, then the uniform cap; the cap
//!   only shrinks |v.y|, so both hold).
//! - [`bounce_impulse`] is exactly zero when no bound is crossed and has
//!   magnitude `max_air_speed` otherwise.

use glam::Vec2;

use super::CraftTuning;
use crate::math::{Matrix2D, Vector2D, VectorOps};

/// Thrust vector while the thrust button is held: heading scaled by the
/// thrust magnitude, capped at the maximum acceleration.
pub fn thrust_vector(heading: Vector2D, tuning: &CraftTuning) -> Vector2D {
    let thrust = heading * tuning.thrust_magnitude;
    if thrust.mag_squared() > tuning.max_acceleration_sq {
        thrust.with_magnitude(tuning.max_acceleration)
    } else {
        thrust
    }
}

/// Thrust vector one frame after the button is released.
#[inline]
pub fn decay_thrust(thrust: Vector2D, tuning: &CraftTuning) -> Vector2D {
    thrust * tuning.thrust_decay
}

/// Incremental steering rotation for a steer axis of -1, 0 or +1.
///
/// Positive angles are counter-clockwise in world space. The screen
/// transform mirrors the X axis, so `+1` (right) turns the nose to the
/// right on screen.
pub fn steer_rotation(steer_axis: i32, tuning: &CraftTuning) -> Option<Matrix2D> {
    if steer_axis == 0 {
        return None;
    }
    Some(Matrix2D::rotation_degrees(
        steer_axis.signum() as f32 * tuning.turn_rate_degrees,
    ))
}

/// Integrate and clamp: `vel + thrust + gravity`, then limit the fall speed,
/// then cap the overall speed.
pub fn calc_velocity(
    vel: Vector2D,
    thrust: Vector2D,
    gravity: Vector2D,
    tuning: &CraftTuning,
) -> Vector2D {
    let mut v = vel + thrust + gravity;

    if v.y < tuning.max_down_speed {
        v.y = tuning.max_down_speed;
    }

    if v.mag_squared() > tuning.max_air_speed_sq {
        v.normalize_in_place();
        v.scale_in_place(tuning.max_air_speed);
    }

    v
}

/// Velocity kick that pushes a craft back inside the play box.
///
/// Each axis whose predicted coordinate lies outside `±bounds` contributes a
/// component of `max_air_speed` pointing back inside; the sum is then
/// rescaled to `max_air_speed`. Inside the box the result is `Vec2::ZERO`.
pub fn bounce_impulse(predicted: Vector2D, bounds: Vec2, max_air_speed: f32) -> Vector2D {
    let axis = |p: f32, limit: f32| {
        if p > limit {
            -max_air_speed
        } else if p < -limit {
            max_air_speed
        } else {
            0.0
        }
    };

    let impulse = Vector2D::new(axis(predicted.x, bounds.x), axis(predicted.y, bounds.y));
    if impulse == Vector2D::ZERO {
        return Vector2D::ZERO;
    }
    impulse.with_magnitude(max_air_speed)
}
