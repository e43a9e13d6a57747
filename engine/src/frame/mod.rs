//! Frame Module
//!
//! The frame loop seam: the scheduler callbacks the engine registers, a
//! headless fixed-step scheduler, and the [`FlightGame`] session that ties
//! world, input and effects together.

pub mod game;
pub mod scheduler;

pub use game::{FlightGame, PLAYER_THRUSTER};
pub use scheduler::{FixedStepScheduler, FrameHandler, FrameScheduler, FrameStats};
