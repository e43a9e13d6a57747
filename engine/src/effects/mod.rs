//! Effects Module
//!
//! The effect-system collaborator. The craft triggers its thruster effect
//! through [`EffectSink`] and never inspects the result; every call is
//! fire-and-forget.
//!
//! - [`ExhaustParticles`] - CPU particle trail that implements the sink
//! - [`EffectLog`] - records calls, for tests and replays
//! - [`NoEffects`] - discards everything

pub mod particles;

pub use particles::{ExhaustParticles, MAX_PARTICLES, Particle};

use crate::math::Vector2D;

/// Identifies a startable effect (e.g. the thruster flame burst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectHandle(pub u32);

/// Identifies a particle sprite / visual anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub u32);

/// Fire-and-forget effect system.
pub trait EffectSink {
    /// Start (or restart) an effect.
    fn start_effect(&mut self, effect: EffectHandle);

    /// Drop every live particle belonging to `sprite`.
    fn clear_particles(&mut self, sprite: SpriteHandle);

    /// Move the visual anchor of `sprite` to a screen-space position.
    fn move_anchor(&mut self, sprite: SpriteHandle, screen_pos: Vector2D);
}

/// One recorded [`EffectSink`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectCall {
    Start(EffectHandle),
    Clear(SpriteHandle),
    MoveAnchor(SpriteHandle, Vector2D),
}

/// Effect sink that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct EffectLog {
    calls: Vec<EffectCall>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[EffectCall] {
        &self.calls
    }

    /// Number of `start_effect` calls.
    pub fn starts(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, EffectCall::Start(_)))
            .count()
    }

    /// Number of `clear_particles` calls.
    pub fn clears(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, EffectCall::Clear(_)))
            .count()
    }

    /// Last anchor position set for `sprite`, if any.
    pub fn last_anchor(&self, sprite: SpriteHandle) -> Option<Vector2D> {
        self.calls.iter().rev().find_map(|c| match c {
            EffectCall::MoveAnchor(s, pos) if *s == sprite => Some(*pos),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl EffectSink for EffectLog {
    fn start_effect(&mut self, effect: EffectHandle) {
        self.calls.push(EffectCall::Start(effect));
    }

    fn clear_particles(&mut self, sprite: SpriteHandle) {
        self.calls.push(EffectCall::Clear(sprite));
    }

    fn move_anchor(&mut self, sprite: SpriteHandle, screen_pos: Vector2D) {
        self.calls.push(EffectCall::MoveAnchor(sprite, screen_pos));
    }
}

/// Effect sink that ignores every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffects;

impl EffectSink for NoEffects {
    fn start_effect(&mut self, _effect: EffectHandle) {}

    fn clear_particles(&mut self, _sprite: SpriteHandle) {}

    fn move_anchor(&mut self, _sprite: SpriteHandle, _screen_pos: Vector2D) {}
}
