//! Craft Module
//!
//! Flight dynamics for the player craft, layered on a [`Shape`](crate::scene::Shape)
//! by composition.
//!
//! # Per-frame Update Order
//!
//! 1. Refresh hull render points from the current position (one-frame render lag)
//! 2. Read thrust: thrusting sets `thrust = heading * 0.08`; coasting decays it by 0.6
//! 3. Read steering: ±1.5° composed into the hull transform
//! 4. `vel + thrust + gravity`, clamp fall speed, cap overall speed
//! 5. Bounce impulse if the predicted position leaves the ±76 × ±56 box
//! 6. Commit position and velocity, re-derive heading from the rotation
//! 7. Fire the pending thrust edge (effect start / particle clear) once
//!
//! # Submodules
//!
//! - [`config`] - `CraftConfig` (serde) and `CraftTuning` (derived constants)
//! - [`dynamics`] - pure velocity, clamp and bounce functions
//! - [`thrust`] - coasting/thrusting state machine with one-shot edges
//! - [`flight`] - the `Craft` itself

pub mod config;
pub mod dynamics;
pub mod flight;
pub mod thrust;

pub use config::{CraftConfig, CraftTuning};
pub use dynamics::{bounce_impulse, calc_velocity};
pub use flight::{Craft, LOCAL_FORWARD, ThrusterEffect};
pub use thrust::{ThrustEdge, ThrustMachine, ThrustState};
