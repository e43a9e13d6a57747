//! Key Bindings
//!
//! Each button owns a short list of keys; any one of them held means the
//! button is held. A key drives at most one button, so binding a key that is
//! already in use moves it.

use std::collections::HashSet;

use super::{Button, ButtonState, KeyCode};

/// Key lists per button, indexed by [`Button::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    keys: [Vec<KeyCode>; 3],
}

impl Default for KeyBindings {
    /// Arrows plus a WASD-style fallback: Space/ArrowUp thrust,
    /// ArrowLeft/A left, ArrowRight/D right.
    fn default() -> Self {
        Self {
            keys: [
                vec![KeyCode::Space, KeyCode::ArrowUp],
                vec![KeyCode::ArrowLeft, KeyCode::A],
                vec![KeyCode::ArrowRight, KeyCode::D],
            ],
        }
    }
}

impl KeyBindings {
    /// No key bound to anything.
    pub fn empty() -> Self {
        Self {
            keys: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Keys currently driving `button`, in binding order.
    pub fn keys(&self, button: Button) -> &[KeyCode] {
        &self.keys[button.index()]
    }

    /// Add `key` to `button`, taking it away from whichever button had it.
    pub fn bind(&mut self, key: KeyCode, button: Button) {
        self.unbind(key);
        self.keys[button.index()].push(key);
    }

    /// Drop `key` from its button, returning the button it drove.
    pub fn unbind(&mut self, key: KeyCode) -> Option<Button> {
        let button = self.button_for(key)?;
        self.keys[button.index()].retain(|k| *k != key);
        Some(button)
    }

    pub fn button_for(&self, key: KeyCode) -> Option<Button> {
        Button::ALL
            .into_iter()
            .find(|b| self.keys[b.index()].contains(&key))
    }

    /// Collapse a set of held keys into button levels.
    pub fn resolve(&self, pressed: &HashSet<KeyCode>) -> ButtonState {
        let mut state = ButtonState::new();
        for button in Button::ALL {
            let held = self.keys(button).iter().any(|k| pressed.contains(k));
            state.set(button, held);
        }
        state
    }
}
