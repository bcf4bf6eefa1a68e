//! Keyboard state sampled once per frame
//!
//! The host feeds key-down/key-up events in between frames; paddles only
//! ever read from it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Numeric key identifier (DOM `KeyboardEvent.keyCode` values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const W: KeyCode = KeyCode(87);
    pub const S: KeyCode = KeyCode(83);
    pub const UP_ARROW: KeyCode = KeyCode(38);
    pub const DOWN_ARROW: KeyCode = KeyCode(40);
}

/// Pressed/released state per key. Keys never seen read as released.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<KeyCode, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `code` as held down
    pub fn trigger(&mut self, code: KeyCode) {
        self.keys.insert(code, true);
    }

    /// Mark `code` as released
    pub fn un_trigger(&mut self, code: KeyCode) {
        self.keys.insert(code, false);
    }

    pub fn is_down(&self, code: KeyCode) -> bool {
        self.keys.get(&code).copied().unwrap_or(false)
    }

    /// Release every key (e.g. when the window loses focus and key-up
    /// events will never arrive)
    pub fn release_all(&mut self) {
        for pressed in self.keys.values_mut() {
            *pressed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_is_up() {
        let input = InputState::new();
        assert!(!input.is_down(KeyCode::W));
        assert!(!input.is_down(KeyCode(12345)));
    }

    #[test]
    fn test_trigger_and_release() {
        let mut input = InputState::new();
        input.trigger(KeyCode::UP_ARROW);
        assert!(input.is_down(KeyCode::UP_ARROW));
        assert!(!input.is_down(KeyCode::DOWN_ARROW));

        input.un_trigger(KeyCode::UP_ARROW);
        assert!(!input.is_down(KeyCode::UP_ARROW));

        // Releasing a key that was never pressed is a no-op
        input.un_trigger(KeyCode::S);
        assert!(!input.is_down(KeyCode::S));
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::new();
        input.trigger(KeyCode::W);
        input.trigger(KeyCode::DOWN_ARROW);
        input.release_all();
        assert!(!input.is_down(KeyCode::W));
        assert!(!input.is_down(KeyCode::DOWN_ARROW));
    }

    #[test]
    fn test_key_code_serializes_as_number() {
        let json = serde_json::to_string(&KeyCode::W).unwrap();
        assert_eq!(json, "87");
        let code: KeyCode = serde_json::from_str("40").unwrap();
        assert_eq!(code, KeyCode::DOWN_ARROW);
    }
}
