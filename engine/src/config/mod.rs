//! Config Module
//!
//! Engine configuration loaded from JSON. Every field has a default, so a
//! config file only needs the values it changes:
//!
//! ```json
//! { "world": { "gravity": [0.0, -0.03] }, "craft": { "max_air_speed": 2.5 } }
//! ```

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::craft::CraftConfig;
use crate::math::{Matrix2D, Vector2D};

/// Error type for loading and validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON or wrong field types.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A value parsed fine but is outside its allowed range.
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

/// World-wide constants: gravity and the screen the world projects onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Constant per-frame acceleration applied to crafts
    pub gravity: Vec2,
    /// Screen size in pixels; the world origin maps to its centre
    pub screen_size: Vec2,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -0.02),
            screen_size: Vec2::new(400.0, 240.0),
        }
    }
}

impl WorldConfig {
    /// Model-to-screen transform: rotate 180 degrees, then translate to the
    /// screen centre.
    pub fn screen_transform(&self) -> Matrix2D {
        Matrix2D::rotation_and_translation(180.0, self.screen_size * 0.5)
    }

    pub fn gravity(&self) -> Vector2D {
        self.gravity
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_size.x > 0.0 && self.screen_size.y > 0.0) {
            return Err(ConfigError::invalid("world.screen_size", "must be positive"));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::invalid("world.gravity", "must be finite"));
        }
        Ok(())
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub world: WorldConfig,
    pub craft: CraftConfig,
}

impl EngineConfig {
    /// Parse and validate a JSON config string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()?;
        self.craft.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_world() {
        let w = WorldConfig::default();
        assert_eq!(w.gravity, Vec2::new(0.0, -0.02));
        assert_eq!(w.screen_size, Vec2::new(400.0, 240.0));
    }

    #[test]
    fn test_screen_transform_maps_origin_to_centre() {
        let m = WorldConfig::default().screen_transform();
        let centre = m.apply(Vector2D::ZERO);
        assert_eq!(centre, Vec2::new(200.0, 120.0));

        // World up is screen up (smaller y)
        let up = m.apply(Vector2D::new(0.0, 10.0));
        assert!((up - Vec2::new(200.0, 110.0)).length() < 1e-4);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = EngineConfig::from_json_str(r#"{ "craft": { "max_air_speed": 3.0 } }"#)
            .expect("valid config");
        assert_eq!(cfg.craft.max_air_speed, 3.0);
        assert_eq!(cfg.craft.thrust_magnitude, 0.08);
        assert_eq!(cfg.world, WorldConfig::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        let cfg = EngineConfig::from_json_str("{}").expect("valid config");
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn test_round_trip_through_json() {
        let cfg = EngineConfig::default();
        let text = cfg.to_json_pretty().expect("serialize");
        assert_eq!(EngineConfig::from_json_str(&text).expect("parse"), cfg);
    }

    #[test]
    fn test_malformed_json() {
        let err = EngineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }

    #[test]
    fn test_invalid_value() {
        let err = EngineConfig::from_json_str(r#"{ "world": { "screen_size": [0, 240] } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "world.screen_size", .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
