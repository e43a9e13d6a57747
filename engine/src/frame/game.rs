//! Flight game session
//!
//! Owns the world, the controller and the effect system, and plugs them into
//! a scheduler as its single update handler and single paint handler.

use tracing::{info, warn};

use super::FrameHandler;
use crate::config::EngineConfig;
use crate::craft::{Craft, ThrusterEffect};
use crate::effects::{EffectHandle, EffectSink, SpriteHandle};
use crate::input::InputSource;
use crate::math::Vector2D;
use crate::render::DrawTarget;
use crate::scene::{Shape, ShapeHandle, World};

/// Effect handles used for the player craft's thruster.
pub const PLAYER_THRUSTER: ThrusterEffect = ThrusterEffect {
    effect: EffectHandle(0),
    sprite: SpriteHandle(0),
};

/// A running game: world + input + effects.
pub struct FlightGame<I, E> {
    world: World,
    player: ShapeHandle,
    input: I,
    effects: E,
    ticks: u64,
}

impl<I: InputSource, E: EffectSink> FlightGame<I, E> {
    /// Standard scene: an outline of the play box, then the player craft at
    /// the origin.
    pub fn new(config: &EngineConfig, input: I, effects: E) -> Self {
        let mut world = World::new(&config.world);

        let bounds = config.craft.bounds;
        world.add(Shape::quad(bounds.x, bounds.y));

        let craft = Craft::with_default_hull(&config.craft).with_thruster(PLAYER_THRUSTER);
        let player = world.add(craft);

        info!(
            gravity = ?config.world.gravity,
            screen = ?config.world.screen_size,
            "flight game ready"
        );
        Self::with_world(world, player, input, effects)
    }

    /// Wrap an already-populated world. `player` should refer to a craft.
    pub fn with_world(world: World, player: ShapeHandle, input: I, effects: E) -> Self {
        Self {
            world,
            player,
            input,
            effects,
            ticks: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player_handle(&self) -> ShapeHandle {
        self.player
    }

    pub fn player(&self) -> Option<&Craft> {
        self.world.craft(self.player)
    }

    /// Respawn the player at `pos`.
    pub fn respawn(&mut self, pos: Vector2D) {
        let effects = &mut self.effects;
        match self.world.modify_craft(self.player, |craft| craft.reset(pos, effects)) {
            Ok(()) => info!(?pos, "player respawned"),
            Err(err) => warn!(%err, "respawn skipped"),
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut E {
        &mut self.effects
    }

    /// Updates run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl<I: InputSource, E: EffectSink> FrameHandler for FlightGame<I, E> {
    fn on_update(&mut self) {
        self.world.update(&self.input, &mut self.effects);
        self.ticks += 1;
    }

    fn on_paint(&mut self, target: &mut dyn DrawTarget) {
        self.world.render(target, &mut self.effects);
    }
}
