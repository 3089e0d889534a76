//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level keyboard events.
//
// This module abstracts away platform-specific input (e.g. Winit, SDL)
// into a unified, engine-friendly format used by the input subsystem.
//
// Responsibilities:
// - Represent keyboard input in a stable, portable way
// - Provide equality and hashing semantics for table lookups
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    CommandMapper (key bindings)
//         ↓
//    Command (high-level game input)
// ```
//
// The game recognizes a deliberately small key surface: the digit row
// (answer selection), Space (confirm), Enter and Escape. Everything else
// maps to `Unidentified` and is filtered before it crosses the platform
// boundary.
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// `Digit1` is always the same physical key regardless of keyboard
/// layout (QWERTY vs AZERTY).
///
/// Platform mapping:
/// - Winit: Uses `winit::keyboard::KeyCode`
///
/// Additional keys can be added as needed without breaking existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    /// Fallback for keys not explicitly mapped by the input layer.
    ///
    /// Used when the platform reports a key that isn't in the enum.
    /// The platform layer filters these before sending.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level keyboard event from the platform layer.
///
/// Only discrete key transitions cross the platform boundary; the
/// platform layer filters OS key-repeat events so each physical press
/// produces exactly one `KeyDown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),
}

impl InputEvent {
    /// Returns the key this event refers to.
    pub fn key(&self) -> KeyCode {
        match *self {
            Self::KeyDown(key) | Self::KeyUp(key) => key,
        }
    }

    /// Returns `true` for `KeyDown` events.
    pub fn is_press(&self) -> bool {
        matches!(self, Self::KeyDown(_))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn key_accessor_returns_key_for_both_variants() {
        assert_eq!(InputEvent::KeyDown(KeyCode::Space).key(), KeyCode::Space);
        assert_eq!(InputEvent::KeyUp(KeyCode::Digit3).key(), KeyCode::Digit3);
    }

    #[test]
    fn is_press_distinguishes_down_from_up() {
        assert!(InputEvent::KeyDown(KeyCode::Digit1).is_press());
        assert!(!InputEvent::KeyUp(KeyCode::Digit1).is_press());
    }

    #[test]
    fn down_and_up_of_same_key_are_not_equal() {
        let down = InputEvent::KeyDown(KeyCode::Space);
        let up = InputEvent::KeyUp(KeyCode::Space);
        assert_ne!(down, up);
    }

    #[test]
    fn keycode_is_copy() {
        let key = KeyCode::Digit4;
        let copied = key;
        assert_eq!(key, copied);
    }

    #[test]
    fn keycode_is_hashable() {
        let mut set = HashSet::new();
        set.insert(KeyCode::Digit1);
        set.insert(KeyCode::Digit1);
        set.insert(KeyCode::Space);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&KeyCode::Digit1));
    }

    #[test]
    fn events_with_different_keys_are_not_equal() {
        assert_ne!(
            InputEvent::KeyDown(KeyCode::Digit1),
            InputEvent::KeyDown(KeyCode::Digit2)
        );
    }
}
