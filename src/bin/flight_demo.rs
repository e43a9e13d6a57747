//! Flight Demo - headless scripted flight
//!
//! Run with: `cargo run --bin flight_demo [config.json] [ticks]`
//!
//! Flies the default craft through a scripted pattern (climb, turn, coast,
//! bounce off the walls) on the fixed-step scheduler and logs a summary once
//! per simulated second. The script presses keys on a `KeyboardState` with
//! the default bindings, the same path a windowed front end would use. Set `RUST_LOG=debug` to see thrust edges and scene
//! changes.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use updraft_engine::config::EngineConfig;
use updraft_engine::effects::ExhaustParticles;
use updraft_engine::frame::{
    FixedStepScheduler, FlightGame, FrameHandler, FrameScheduler, PLAYER_THRUSTER,
};
use updraft_engine::input::{Button, InputSource, KeyCode, KeyboardState};
use updraft_engine::render::DrawTarget;

/// Updates per simulated second
const TICKS_PER_SECOND: u64 = 30;

/// Default run length (20 simulated seconds)
const DEFAULT_TICKS: u64 = 600;

/// Length of one loop of the flight script
const SCRIPT_PERIOD: u64 = 240;

/// Draw target that only counts what it is given.
#[derive(Default)]
struct LineCounter {
    lines: u64,
}

impl DrawTarget for LineCounter {
    fn draw_line(&mut self, _x0: f32, _y0: f32, _x1: f32, _y1: f32, _thickness: f32) {
        self.lines += 1;
    }
}

/// Presses keys on a fixed timeline, then hands the tick to the game.
struct ScriptedPilot {
    game: FlightGame<KeyboardState, ExhaustParticles>,
}

impl ScriptedPilot {
    fn keys_for(tick: u64) -> [(KeyCode, bool); 3] {
        let t = tick % SCRIPT_PERIOD;
        [
            (KeyCode::Space, t < 90 || (150..200).contains(&t)),
            (KeyCode::ArrowLeft, (160..200).contains(&t)),
            (KeyCode::ArrowRight, (60..90).contains(&t)),
        ]
    }
}

impl FrameHandler for ScriptedPilot {
    fn on_update(&mut self) {
        let tick = self.game.ticks();
        for (key, down) in Self::keys_for(tick) {
            self.game.input_mut().handle_key(key, down);
        }

        self.game.on_update();
        self.game.effects_mut().step();

        if self.game.ticks() % TICKS_PER_SECOND == 0 {
            if let Some(craft) = self.game.player() {
                info!(
                    second = self.game.ticks() / TICKS_PER_SECOND,
                    pos = ?craft.world_pos(),
                    vel = ?craft.velocity(),
                    heading = ?craft.heading(),
                    thrusting = self.game.input().is_pressed(Button::Thrust),
                    particles = self.game.effects().live_count(),
                    "flight"
                );
            }
        }
    }

    fn on_paint(&mut self, target: &mut dyn DrawTarget) {
        self.game.on_paint(target);
        self.game.effects().render(target);
    }
}

fn load_config(path: Option<&str>) -> Result<EngineConfig, updraft_engine::ConfigError> {
    match path {
        Some(path) => {
            info!(path, "loading config");
            EngineConfig::load(path)
        }
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match load_config(args.first().map(String::as_str)) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "could not load config");
            return ExitCode::FAILURE;
        }
    };

    let ticks = match args.get(1).map(|s| s.parse::<u64>()) {
        None => DEFAULT_TICKS,
        Some(Ok(ticks)) => ticks,
        Some(Err(err)) => {
            error!(%err, "tick count must be a non-negative integer");
            return ExitCode::FAILURE;
        }
    };

    let effects = ExhaustParticles::new(PLAYER_THRUSTER.effect, PLAYER_THRUSTER.sprite);
    let mut pilot = ScriptedPilot {
        game: FlightGame::new(&config, KeyboardState::new(), effects),
    };
    let mut screen = LineCounter::default();

    // Update at 30 Hz, paint at 15 Hz
    let stats = FixedStepScheduler::new(ticks)
        .paint_every(2)
        .run(&mut pilot, &mut screen);

    info!(
        updates = stats.updates,
        paints = stats.paints,
        lines = screen.lines,
        nodes = pilot.game.world().len(),
        "demo finished"
    );
    ExitCode::SUCCESS
}
