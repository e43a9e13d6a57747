//! Input Module
//!
//! Level-triggered button input for the craft. The flight model polls
//! [`InputSource::is_pressed`] once per update; it never sees key events.
//!
//! # Example
//!
//! ```rust
//! use updraft_engine::input::{Button, InputSource, KeyCode, KeyboardState};
//!
//! let mut keyboard = KeyboardState::new();
//! keyboard.handle_key(KeyCode::Space, true);
//! assert!(keyboard.is_pressed(Button::Thrust));
//! assert_eq!(keyboard.steer_axis(), 0);
//! ```

pub mod bindings;
pub mod keyboard;

pub use bindings::KeyBindings;
pub use keyboard::{KeyCode, KeyboardState};

/// Logical controls the craft reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Thrust,
    Left,
    Right,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Thrust, Button::Left, Button::Right];

    /// Dense index, usable for per-button tables.
    pub const fn index(self) -> usize {
        match self {
            Button::Thrust => 0,
            Button::Left => 1,
            Button::Right => 2,
        }
    }
}

/// A polled controller.
pub trait InputSource {
    /// Whether `button` is held right now.
    fn is_pressed(&self, button: Button) -> bool;

    /// Steering direction: -1 for left, +1 for right, 0 for none or both.
    fn steer_axis(&self) -> i32 {
        i32::from(self.is_pressed(Button::Right)) - i32::from(self.is_pressed(Button::Left))
    }
}

/// Button state set directly by code (scripted pilots, tests, replays).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub thrust: bool,
    pub left: bool,
    pub right: bool,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        match button {
            Button::Thrust => self.thrust = pressed,
            Button::Left => self.left = pressed,
            Button::Right => self.right = pressed,
        }
    }

    /// Release everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl InputSource for ButtonState {
    fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Thrust => self.thrust,
            Button::Left => self.left,
            Button::Right => self.right,
        }
    }
}
