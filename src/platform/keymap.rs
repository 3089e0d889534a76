//=========================================================================
// Platform Key Mapper
//
// Converts Winit keyboard events to engine-level `InputEvent`s.
// Provides a clean separation between OS-specific input and the
// game's internal event representation.
//
// Responsibilities:
// - Translate the supported key subset (digits, Space, Enter, Escape)
// - Filter OS key-repeat events so one press yields one `KeyDown`
// - Filter unmapped keys before they cross the channel
//
//=========================================================================

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::KeyCode as WinitKeyCode;
use winit::keyboard::PhysicalKey;

use crate::core::input::event::{InputEvent, KeyCode};

//=== Key Conversion ======================================================

/// Maps `WinitKeyCode` values to the game's internal `KeyCode` enum.
/// Only the quiz key surface is supported; all others map to
/// `Unidentified` and are filtered by the event conversion.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Numeric keys -------------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Special keys -------------------------------------------------
            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,

            //--- Fallback -----------------------------------------------------
            _ => KeyCode::Unidentified,
        }
    }
}

//=== Event Conversion ====================================================

/// Converts a Winit `KeyEvent` into an engine `InputEvent`.
///
/// Returns `None` for key repeats, non-code physical keys, and keys
/// outside the supported subset.
pub(crate) fn convert_key_event(event: &KeyEvent) -> Option<InputEvent> {
    if event.repeat {
        return None;
    }

    let key = match event.physical_key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        _ => return None,
    };

    if matches!(key, KeyCode::Unidentified) {
        return None;
    }

    Some(match event.state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
