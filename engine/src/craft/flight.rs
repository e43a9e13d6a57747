//! Player craft
//!
//! A [`Shape`] plus flight state. The craft owns its hull shape and drives
//! it: the shape's transform carries the accumulated steering rotation and
//! its world position is the craft's position.

use tracing::debug;

use super::dynamics::{bounce_impulse, calc_velocity, decay_thrust, steer_rotation, thrust_vector};
use super::thrust::{ThrustEdge, ThrustMachine, ThrustState};
use super::{CraftConfig, CraftTuning};
use crate::effects::{EffectHandle, EffectSink, SpriteHandle};
use crate::input::{Button, InputSource};
use crate::math::{Matrix2D, Vector2D};
use crate::render::DrawTarget;
use crate::scene::{Shape, UpdateContext};

/// Canonical "forward" direction in the hull's local space.
pub const LOCAL_FORWARD: Vector2D = Vector2D::Y;

/// Effect handles the craft drives: the flame burst started when thrust
/// begins and the particle sprite cleared when it stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrusterEffect {
    pub effect: EffectHandle,
    pub sprite: SpriteHandle,
}

/// A player-controlled craft.
#[derive(Debug, Clone)]
pub struct Craft {
    shape: Shape,
    tuning: CraftTuning,
    heading: Vector2D,
    velocity: Vector2D,
    thrust: Vector2D,
    thrust_machine: ThrustMachine,
    thruster: Option<ThrusterEffect>,
}

impl Craft {
    /// Build a craft around a hull shape. The hull should point along +Y.
    pub fn new(hull: Shape, config: &CraftConfig) -> Self {
        let hull = hull.with_line_thickness(config.line_thickness);
        let mut craft = Self {
            shape: hull,
            tuning: CraftTuning::from(config),
            heading: LOCAL_FORWARD,
            velocity: Vector2D::ZERO,
            thrust: Vector2D::ZERO,
            thrust_machine: ThrustMachine::new(),
            thruster: None,
        };
        craft.refresh_heading();
        craft
    }

    /// Default four-point arrowhead hull.
    pub fn default_hull() -> Shape {
        Shape::new(vec![
            Vector2D::new(0.0, 6.0),
            Vector2D::new(4.0, -4.0),
            Vector2D::new(0.0, -2.0),
            Vector2D::new(-4.0, -4.0),
        ])
    }

    /// Craft with the default hull.
    pub fn with_default_hull(config: &CraftConfig) -> Self {
        Self::new(Self::default_hull(), config)
    }

    /// Attach the thruster effect the craft should drive.
    pub fn with_thruster(mut self, thruster: ThrusterEffect) -> Self {
        self.thruster = Some(thruster);
        self
    }

    pub fn with_world_pos(mut self, pos: Vector2D) -> Self {
        self.shape.set_world_pos(pos);
        self
    }

    /// Advance one frame.
    ///
    /// Render points are refreshed first from the position committed last
    /// frame, so the hull drawn this frame lags the physics by one update.
    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        // 1. hull render points from current position / rotation
        self.shape.update(ctx.screen);

        // 2. thrust mode
        let mode = self.thrust_machine.feed(ctx.input.is_pressed(Button::Thrust));
        self.thrust = match mode {
            ThrustState::Thrusting => thrust_vector(self.heading, &self.tuning),
            ThrustState::Coasting => decay_thrust(self.thrust, &self.tuning),
        };

        // 3. steering
        if let Some(rotation) = steer_rotation(ctx.input.steer_axis(), &self.tuning) {
            self.shape.rotate_by(&rotation);
        }

        // 4. integrate + clamp
        let mut new_vel = calc_velocity(self.velocity, self.thrust, ctx.gravity, &self.tuning);

        // 5. bounce off the play box
        let predicted = self.shape.world_pos() + new_vel;
        new_vel += bounce_impulse(predicted, self.tuning.bounds, self.tuning.max_air_speed);

        // 6. commit
        self.shape.set_world_pos(self.shape.world_pos() + new_vel);
        self.velocity = new_vel;
        self.refresh_heading();

        // 7. one-shot effect edges
        if let Some(edge) = self.thrust_machine.take_edge() {
            self.fire_edge(edge, ctx.effects);
        }
    }

    /// Draw the hull, then park the exhaust anchor behind the craft.
    pub fn render(
        &self,
        target: &mut dyn DrawTarget,
        screen: &Matrix2D,
        effects: &mut dyn EffectSink,
    ) {
        self.shape.render(target);
        if let Some(thruster) = self.thruster {
            effects.move_anchor(thruster.sprite, self.exhaust_anchor(screen));
        }
    }

    /// Screen-space point `effect_offset` units behind the craft.
    pub fn exhaust_anchor(&self, screen: &Matrix2D) -> Vector2D {
        let behind = self.shape.world_pos() - self.heading * self.tuning.effect_offset;
        screen.apply(behind)
    }

    /// Respawn at `pos`: stationary, unrotated, coasting.
    ///
    /// A running thruster effect is cleared.
    pub fn reset(&mut self, pos: Vector2D, effects: &mut dyn EffectSink) {
        if self.thrust_machine.is_thrusting() {
            self.fire_edge(ThrustEdge::Stopped, effects);
        }
        self.thrust_machine.reset();
        self.shape.set_transform(Matrix2D::identity());
        self.shape.set_world_pos(pos);
        self.velocity = Vector2D::ZERO;
        self.thrust = Vector2D::ZERO;
        self.refresh_heading();
    }

    fn refresh_heading(&mut self) {
        self.heading = self.shape.transform().apply_vector(LOCAL_FORWARD);
    }

    fn fire_edge(&self, edge: ThrustEdge, effects: &mut dyn EffectSink) {
        debug!(?edge, pos = ?self.shape.world_pos(), "thrust edge");
        let Some(thruster) = self.thruster else {
            return;
        };
        match edge {
            ThrustEdge::Began => effects.start_effect(thruster.effect),
            ThrustEdge::Stopped => effects.clear_particles(thruster.sprite),
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    /// Replace the hull rotation; the heading follows immediately.
    pub fn set_transform(&mut self, transform: Matrix2D) {
        self.shape.set_transform(transform);
        self.refresh_heading();
    }

    pub fn heading(&self) -> Vector2D {
        self.heading
    }

    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    pub fn set_velocity(&mut self, vel: Vector2D) {
        self.velocity = vel;
    }

    pub fn thrust(&self) -> Vector2D {
        self.thrust
    }

    pub fn thrust_state(&self) -> ThrustState {
        self.thrust_machine.state()
    }

    pub fn world_pos(&self) -> Vector2D {
        self.shape.world_pos()
    }

    pub fn tuning(&self) -> &CraftTuning {
        &self.tuning
    }

    pub fn thruster(&self) -> Option<ThrusterEffect> {
        self.thruster
    }
}
