//! Craft Tuning
//!
//! Flight-feel constants. [`CraftConfig`] is the serde-facing form loaded
//! from config files; [`CraftTuning`] is the validated, immutable copy a
//! craft carries, with the squared limits precomputed for the clamp path.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Flight-model tuning as it appears in a config file.
///
/// All speeds are world units per frame; the model runs at a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftConfig {
    /// Thrust added per frame while the thrust button is held
    pub thrust_magnitude: f32,
    /// Multiplier applied to the thrust vector each frame while coasting
    pub thrust_decay: f32,
    /// Rotation per frame while a steering button is held (degrees)
    pub turn_rate_degrees: f32,
    /// Most negative Y velocity allowed (falling speed limit, <= 0)
    pub max_down_speed: f32,
    /// Speed cap applied to the whole velocity vector
    pub max_air_speed: f32,
    /// Cap on the thrust vector magnitude
    pub max_acceleration: f32,
    /// Half-extents of the play box; crossing it triggers a bounce
    pub bounds: Vec2,
    /// Distance behind the craft where the exhaust anchor sits
    pub effect_offset: f32,
    /// Hull stroke thickness
    pub line_thickness: f32,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            thrust_magnitude: 0.08,
            thrust_decay: 0.6,
            turn_rate_degrees: 1.5,
            max_down_speed: -1.5,
            max_air_speed: 2.0,
            max_acceleration: 0.5,
            bounds: Vec2::new(76.0, 56.0),
            effect_offset: 8.0,
            line_thickness: 1.0,
        }
    }
}

impl CraftConfig {
    /// Reject values the flight model cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_air_speed > 0.0) {
            return Err(ConfigError::invalid("craft.max_air_speed", "must be > 0"));
        }
        if !(self.max_down_speed <= 0.0) {
            return Err(ConfigError::invalid("craft.max_down_speed", "must be <= 0"));
        }
        if !(0.0..=1.0).contains(&self.thrust_decay) {
            return Err(ConfigError::invalid("craft.thrust_decay", "must be within [0, 1]"));
        }
        if !(self.max_acceleration > 0.0) {
            return Err(ConfigError::invalid("craft.max_acceleration", "must be > 0"));
        }
        if !(self.bounds.x > 0.0 && self.bounds.y > 0.0) {
            return Err(ConfigError::invalid("craft.bounds", "both half-extents must be > 0"));
        }
        if !(self.thrust_magnitude >= 0.0) {
            return Err(ConfigError::invalid("craft.thrust_magnitude", "must be >= 0"));
        }
        if !(self.turn_rate_degrees >= 0.0 && self.turn_rate_degrees < 360.0) {
            return Err(ConfigError::invalid("craft.turn_rate_degrees", "must be within [0, 360)"));
        }
        if !(self.effect_offset >= 0.0) {
            return Err(ConfigError::invalid("craft.effect_offset", "must be >= 0"));
        }
        if !(self.line_thickness > 0.0) {
            return Err(ConfigError::invalid("craft.line_thickness", "must be > 0"));
        }
        Ok(())
    }
}

/// Immutable per-craft constants, derived once from a [`CraftConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraftTuning {
    pub thrust_magnitude: f32,
    pub thrust_decay: f32,
    pub turn_rate_degrees: f32,
    pub max_down_speed: f32,
    pub max_air_speed: f32,
    pub max_air_speed_sq: f32,
    pub max_acceleration: f32,
    pub max_acceleration_sq: f32,
    pub bounds: Vec2,
    pub effect_offset: f32,
    pub line_thickness: f32,
}

impl From<&CraftConfig> for CraftTuning {
    fn from(cfg: &CraftConfig) -> Self {
        Self {
            thrust_magnitude: cfg.thrust_magnitude,
            thrust_decay: cfg.thrust_decay,
            turn_rate_degrees: cfg.turn_rate_degrees,
            max_down_speed: cfg.max_down_speed,
            max_air_speed: cfg.max_air_speed,
            max_air_speed_sq: cfg.max_air_speed * cfg.max_air_speed,
            max_acceleration: cfg.max_acceleration,
            max_acceleration_sq: cfg.max_acceleration * cfg.max_acceleration,
            bounds: cfg.bounds,
            effect_offset: cfg.effect_offset,
            line_thickness: cfg.line_thickness,
        }
    }
}

impl Default for CraftTuning {
    fn default() -> Self {
        Self::from(&CraftConfig::default())
    }
}
