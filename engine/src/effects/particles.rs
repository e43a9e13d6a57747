//! Exhaust Particle Trail
//!
//! A small CPU particle system for the thruster flame. Particles live in
//! screen space, spawn at the sprite's anchor while the effect is running,
//! and fade out over a few dozen frames. Rendering draws each particle as a
//! short streak along its velocity.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use super::{EffectHandle, EffectSink, SpriteHandle};
use crate::math::Vector2D;
use crate::render::DrawTarget;

/// Maximum number of live particles per trail.
pub const MAX_PARTICLES: usize = 256;

/// A single exhaust particle.
#[derive(Copy, Clone, Debug)]
pub struct Particle {
    /// Screen position
    pub position: Vector2D,
    /// Screen-space velocity (pixels per frame)
    pub velocity: Vector2D,
    /// Remaining lifetime (1.0 = just spawned, 0.0 = dead)
    pub lifetime: f32,
    /// Lifetime lost per frame
    pub decay_rate: f32,
    /// Stroke thickness
    pub size: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vector2D::ZERO,
            velocity: Vector2D::new(0.0, 1.0),
            lifetime: 1.0,
            decay_rate: 1.0 / 20.0,
            size: 1.0,
        }
    }
}

impl Particle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }
}

/// Seed used unless [`ExhaustParticles::with_seed`] says otherwise.
pub const DEFAULT_SEED: u64 = 12345;

/// Thruster trail bound to one effect handle and one sprite handle.
#[derive(Debug, Clone)]
pub struct ExhaustParticles {
    effect: EffectHandle,
    sprite: SpriteHandle,
    anchor: Vector2D,
    emitting: bool,
    particles: Vec<Particle>,
    rng: SmallRng,
    spawn_per_step: usize,
}

impl ExhaustParticles {
    pub fn new(effect: EffectHandle, sprite: SpriteHandle) -> Self {
        Self {
            effect,
            sprite,
            anchor: Vector2D::ZERO,
            emitting: false,
            particles: Vec::with_capacity(MAX_PARTICLES),
            rng: SmallRng::seed_from_u64(DEFAULT_SEED),
            spawn_per_step: 2,
        }
    }

    /// Particles spawned per [`ExhaustParticles::step`] while emitting.
    pub fn with_spawn_rate(mut self, per_step: usize) -> Self {
        self.spawn_per_step = per_step;
        self
    }

    /// Reseed the spawn jitter. Equal seeds give identical trails.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn is_emitting(&self) -> bool {
        self.emitting
    }

    pub fn anchor(&self) -> Vector2D {
        self.anchor
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    /// Advance one frame: age and move live particles, drop dead ones,
    /// then spawn new ones at the anchor if the effect is running.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.position += p.velocity;
            p.lifetime -= p.decay_rate;
        }
        self.particles.retain(Particle::is_alive);

        if self.emitting {
            for _ in 0..self.spawn_per_step {
                if self.particles.len() >= MAX_PARTICLES {
                    break;
                }
                let particle = self.create_particle();
                self.particles.push(particle);
            }
        }
    }

    /// Draw every live particle as a streak trailing its velocity.
    pub fn render(&self, target: &mut dyn DrawTarget) {
        for p in &self.particles {
            let tail = p.position - p.velocity;
            target.draw_line(p.position.x, p.position.y, tail.x, tail.y, p.size * p.lifetime);
        }
    }

    fn create_particle(&mut self) -> Particle {
        let rng = &mut self.rng;
        let offset = Vector2D::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        let velocity = Vector2D::new(rng.gen_range(-0.4..0.4), rng.gen_range(-0.4..0.4));
        let frames: f32 = rng.gen_range(10.0..30.0);
        let size: f32 = rng.gen_range(1.0..2.0);

        Particle {
            position: self.anchor + offset,
            velocity,
            lifetime: 1.0,
            decay_rate: 1.0 / frames,
            size,
        }
    }
}

impl EffectSink for ExhaustParticles {
    fn start_effect(&mut self, effect: EffectHandle) {
        if effect == self.effect {
            self.emitting = true;
        } else {
            trace!(?effect, "ignoring start for unknown effect");
        }
    }

    fn clear_particles(&mut self, sprite: SpriteHandle) {
        if sprite == self.sprite {
            self.emitting = false;
            self.particles.clear();
        } else {
            trace!(?sprite, "ignoring clear for unknown sprite");
        }
    }

    fn move_anchor(&mut self, sprite: SpriteHandle, screen_pos: Vector2D) {
        if sprite == self.sprite {
            self.anchor = screen_pos;
        }
    }
}
