//! Scene Module
//!
//! The scene graph: shapes and crafts held in draw order by a [`World`],
//! which owns gravity and the model-to-screen transform and drives the
//! per-frame update and render passes.
//!
//! # Frame Contract
//!
//! A full [`World::update`] pass finishes before any [`World::render`] pass
//! starts. Nodes must not add or remove nodes from inside their own update
//! or render; the world is borrowed mutably for the whole pass, so this is
//! enforced by the borrow checker.

pub mod error;
pub mod node;
pub mod shape;
pub mod world;

pub use error::SceneError;
pub use node::Node;
pub use shape::Shape;
pub use world::{ShapeHandle, World};

use crate::effects::EffectSink;
use crate::input::InputSource;
use crate::math::{Matrix2D, Vector2D};

/// Everything a node may read or poke during an update pass.
pub struct UpdateContext<'a> {
    /// Constant per-frame acceleration
    pub gravity: Vector2D,
    /// Model-to-screen transform
    pub screen: &'a Matrix2D,
    /// Controller, polled once per update
    pub input: &'a dyn InputSource,
    /// Effect system for thrust edges
    pub effects: &'a mut dyn EffectSink,
}
