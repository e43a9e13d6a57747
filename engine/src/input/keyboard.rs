//! Keyboard Input Module
//!
//! Level-triggered keyboard state. The windowing layer (or a scripted
//! pilot) feeds key events in through [`KeyboardState::handle_key`]; the
//! bindings fold the held keys into a [`ButtonState`] that the craft polls
//! once per update through [`InputSource`].

use std::collections::HashSet;

use super::{Button, ButtonState, InputSource, KeyBindings};

/// Generic key codes, independent of any windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters used by common layouts
    W,
    A,
    S,
    D,
    Z,
    X,

    Space,
    Enter,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Pressed-key set plus the bindings that turn keys into buttons.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
    bindings: KeyBindings,
}

impl KeyboardState {
    /// Keyboard with the default bindings and nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            pressed: HashSet::new(),
            bindings,
        }
    }

    /// Record a key press or release.
    ///
    /// Returns `true` if the key is bound to a button.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if pressed {
            self.pressed.insert(key);
        } else {
            self.pressed.remove(&key);
        }
        self.bindings.button_for(key).is_some()
    }

    /// Button levels for the keys held right now.
    pub fn buttons(&self) -> ButtonState {
        self.bindings.resolve(&self.pressed)
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Release every key (e.g. on focus loss).
    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}

impl InputSource for KeyboardState {
    fn is_pressed(&self, button: Button) -> bool {
        self.buttons().is_pressed(button)
    }
}
