//! Updraft Engine Library
//!
//! Core of an arcade flying-craft game: a 2D scene graph of line-drawn
//! polygons projected to screen space every frame, and the flight model of
//! the player craft (thrust, gravity, speed limits, boundary bounce).
//!
//! # Modules
//!
//! - [`math`] - `Vector2D` (glam) and `Matrix2D` rigid transforms
//! - [`scene`] - `Shape`, `World` and the per-frame update/render passes
//! - [`craft`] - flight dynamics and the thrust state machine
//! - [`input`] - level-triggered controller input
//! - [`effects`] - effect-system seam and an exhaust particle trail
//! - [`render`] - draw-target seam and a line recorder
//! - [`frame`] - scheduler callbacks and the `FlightGame` session
//! - [`config`] - JSON configuration
//!
//! # Example
//!
//! ```rust
//! use updraft_engine::config::EngineConfig;
//! use updraft_engine::effects::EffectLog;
//! use updraft_engine::frame::{FixedStepScheduler, FlightGame, FrameScheduler};
//! use updraft_engine::input::ButtonState;
//! use updraft_engine::render::LineRecorder;
//!
//! let config = EngineConfig::default();
//! let mut game = FlightGame::new(&config, ButtonState::new(), EffectLog::new());
//! let mut screen = LineRecorder::new();
//!
//! let stats = FixedStepScheduler::new(10).run(&mut game, &mut screen);
//! assert_eq!(stats.updates, 10);
//! assert!(game.player().unwrap().velocity().y < 0.0); // falling
//! ```

pub mod config;
pub mod craft;
pub mod effects;
pub mod frame;
pub mod input;
pub mod math;
pub mod render;
pub mod scene;

pub use config::{ConfigError, EngineConfig, WorldConfig};
pub use craft::{Craft, CraftConfig};
pub use math::{Matrix2D, Vector2D, VectorOps};
pub use scene::{Node, SceneError, Shape, ShapeHandle, World};
