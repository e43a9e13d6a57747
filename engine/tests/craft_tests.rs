//! Craft Tests - Flight Scenarios, Heading and Thrust Effects
//!
//! Drives a craft through whole update passes of a world and checks the
//! flight model end to end.

use updraft_engine::config::{EngineConfig, WorldConfig};
use updraft_engine::craft::{Craft, CraftConfig, ThrustState, ThrusterEffect};
use updraft_engine::effects::{EffectCall, EffectHandle, EffectLog, SpriteHandle};
use updraft_engine::input::ButtonState;
use updraft_engine::math::{Matrix2D, Vector2D};
use updraft_engine::render::LineRecorder;
use updraft_engine::scene::{ShapeHandle, World};

const EPS: f32 = 1e-5;

const THRUSTER: ThrusterEffect = ThrusterEffect {
    effect: EffectHandle(7),
    sprite: SpriteHandle(9),
};

fn close(a: Vector2D, b: Vector2D) -> bool {
    (a - b).length() < EPS
}

fn world_with_craft(craft: Craft) -> (World, ShapeHandle) {
    let mut world = World::new(&WorldConfig::default());
    let handle = world.add(craft);
    (world, handle)
}

fn default_craft() -> Craft {
    Craft::with_default_hull(&CraftConfig::default()).with_thruster(THRUSTER)
}

fn thrust() -> ButtonState {
    ButtonState {
        thrust: true,
        ..ButtonState::default()
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_single_thrust_tick() {
    let (mut world, h) = world_with_craft(default_craft());
    let mut effects = EffectLog::new();

    world.update(&thrust(), &mut effects);

    let craft = world.craft(h).expect("craft");
    assert!(close(craft.velocity(), Vector2D::new(0.0, 0.06)));
    assert!(close(craft.world_pos(), Vector2D::new(0.0, 0.06)));
    assert_eq!(craft.thrust_state(), ThrustState::Thrusting);
}

#[test]
fn test_coasting_falls_under_gravity() {
    let (mut world, h) = world_with_craft(default_craft());
    let mut effects = EffectLog::new();
    let idle = ButtonState::new();

    for _ in 0..5 {
        world.update(&idle, &mut effects);
        let craft = world.craft(h).expect("craft");
        // Decaying a zero thrust keeps it zero
        assert_eq!(craft.thrust(), Vector2D::ZERO);
    }

    let craft = world.craft(h).expect("craft");
    assert!(close(craft.velocity(), Vector2D::new(0.0, -0.10)));
    assert!(effects.calls().is_empty());
}

#[test]
fn test_thrust_decays_after_release() {
    let (mut world, h) = world_with_craft(default_craft());
    let mut effects = EffectLog::new();

    world.update(&thrust(), &mut effects);
    world.update(&ButtonState::new(), &mut effects);

    let craft = world.craft(h).expect("craft");
    assert!((craft.thrust().y - 0.08 * 0.6).abs() < EPS);
    assert_eq!(craft.thrust_state(), ThrustState::Coasting);
}

#[test]
fn test_right_wall_bounce() {
    let craft = default_craft().with_world_pos(Vector2D::new(79.0, 0.0));
    let (mut world, h) = world_with_craft(craft);
    world
        .modify_craft(h, |craft| craft.set_velocity(Vector2D::new(1.0, 0.0)))
        .expect("craft");

    world.update(&ButtonState::new(), &mut EffectLog::new());

    // Predicted x = 80 > 76: impulse (-2, 0) added to vel (1, -0.02)
    let craft = world.craft(h).expect("craft");
    assert!(close(craft.velocity(), Vector2D::new(-1.0, -0.02)));
    assert!(craft.world_pos().x < 79.0);
}

#[test]
fn test_craft_stays_near_box_over_long_flight() {
    let (mut world, h) = world_with_craft(default_craft());
    let mut effects = EffectLog::new();
    let input = ButtonState {
        thrust: true,
        right: true,
        left: false,
    };

    for _ in 0..5000 {
        world.update(&input, &mut effects);
        let pos = world.craft(h).expect("craft").world_pos();
        // One frame of overshoot at most
        assert!(pos.x.abs() < 76.0 + 2.0 * 2.0 + EPS, "x escaped: {pos:?}");
        assert!(pos.y.abs() < 56.0 + 2.0 * 2.0 + EPS, "y escaped: {pos:?}");
    }
}

// ============================================================================
// Heading and steering
// ============================================================================

#[test]
fn test_heading_tracks_rotation() {
    let (mut world, h) = world_with_craft(default_craft());
    let mut effects = EffectLog::new();
    let input = ButtonState {
        right: true,
        ..ButtonState::default()
    };

    for _ in 0..60 {
        world.update(&input, &mut effects);
        let craft = world.craft(h).expect("craft");
        let expected = craft.shape().transform().apply(Vector2D::Y);
        assert!(close(craft.heading(), expected));
    }

    // 60 frames at +1.5 degrees = a quarter turn counter-clockwise in world space
    let craft = world.craft(h).expect("craft");
    assert!((craft.heading() - Vector2D::new(-1.0, 0.0)).length() < 1e-3);
}

#[test]
fn test_left_and_right_cancel() {
    let (mut world, h) = world_with_craft(default_craft());
    let input = ButtonState {
        left: true,
        right: true,
        thrust: false,
    };
    world.update(&input, &mut EffectLog::new());
    assert_eq!(*world.craft(h).expect("craft").shape().transform(), Matrix2D::identity());
}

#[test]
fn test_thrust_follows_heading() {
    let mut craft = default_craft();
    craft.set_transform(Matrix2D::rotation_degrees(90.0));
    assert!(close(craft.heading(), Vector2D::new(-1.0, 0.0)));
    let (mut world, h) = world_with_craft(craft);

    world.update(&thrust(), &mut EffectLog::new());

    let thrust_vec = world.craft(h).expect("craft").thrust();
    assert!(close(thrust_vec, Vector2D::new(-0.08, 0.0)));
}

// ============================================================================
// Render lag and effects
// ============================================================================

#[test]
fn test_render_points_lag_one_frame() {
    let (mut world, h) = world_with_craft(default_craft());
    let mut effects = EffectLog::new();
    let screen = *world.screen_transform();

    world.update(&thrust(), &mut effects);

    let craft = world.craft(h).expect("craft");
    // Hull drawn at the pre-update position (origin), not at (0, 0.06)
    let nose = craft.shape().render_points()[0];
    assert!(close(nose, screen.apply(Vector2D::new(0.0, 6.0))));

    world.update(&thrust(), &mut effects);
    let craft = world.craft(h).expect("craft");
    let nose = craft.shape().render_points()[0];
    assert!(close(nose, screen.apply(Vector2D::new(0.0, 6.06))));
}

#[test]
fn test_effect_edges_fire_once() {
    let (mut world, _h) = world_with_craft(default_craft());
    let mut effects = EffectLog::new();

    for _ in 0..10 {
        world.update(&thrust(), &mut effects);
    }
    for _ in 0..10 {
        world.update(&ButtonState::new(), &mut effects);
    }
    for _ in 0..3 {
        world.update(&thrust(), &mut effects);
    }

    assert_eq!(
        effects.calls(),
        &[
            EffectCall::Start(THRUSTER.effect),
            EffectCall::Clear(THRUSTER.sprite),
            EffectCall::Start(THRUSTER.effect),
        ]
    );
}

#[test]
fn test_render_moves_anchor_behind_craft() {
    let craft = default_craft().with_world_pos(Vector2D::new(10.0, 20.0));
    let (mut world, h) = world_with_craft(craft);
    let mut effects = EffectLog::new();
    let mut target = LineRecorder::new();

    world.render(&mut target, &mut effects);

    // Heading (0, 1), offset 8: anchor at world (10, 12)
    let screen = world.screen_transform();
    let anchor = effects.last_anchor(THRUSTER.sprite).expect("anchor moved");
    assert!(close(anchor, screen.apply(Vector2D::new(10.0, 12.0))));

    // Hull drawn as a closed 4-gon
    assert_eq!(target.len(), world.craft(h).expect("craft").shape().vertex_count());
}

#[test]
fn test_craft_without_thruster_is_silent() {
    let craft = Craft::with_default_hull(&CraftConfig::default());
    let (mut world, _h) = world_with_craft(craft);
    let mut effects = EffectLog::new();

    world.update(&thrust(), &mut effects);
    world.update(&ButtonState::new(), &mut effects);
    world.render(&mut LineRecorder::new(), &mut effects);

    assert!(effects.calls().is_empty());
}

#[test]
fn test_reset_clears_running_thruster() {
    let (mut world, h) = world_with_craft(default_craft());
    let mut effects = EffectLog::new();

    world.update(&thrust(), &mut effects);
    world
        .modify_craft(h, |craft| craft.reset(Vector2D::new(5.0, 5.0), &mut effects))
        .expect("craft");

    let craft = world.craft(h).expect("craft");
    assert_eq!(craft.world_pos(), Vector2D::new(5.0, 5.0));
    assert_eq!(craft.velocity(), Vector2D::ZERO);
    assert_eq!(craft.heading(), Vector2D::Y);
    assert_eq!(craft.thrust_state(), ThrustState::Coasting);
    assert_eq!(effects.clears(), 1);
}

#[test]
fn test_custom_config_drives_tuning() {
    let config = EngineConfig::from_json_str(
        r#"{ "world": { "gravity": [0.0, 0.0] }, "craft": { "thrust_magnitude": 0.5 } }"#,
    )
    .expect("valid config");

    let mut world = World::new(&config.world);
    let h = world.add(Craft::with_default_hull(&config.craft));
    world.update(&thrust(), &mut EffectLog::new());

    assert!(close(world.craft(h).expect("craft").velocity(), Vector2D::new(0.0, 0.5)));
}
