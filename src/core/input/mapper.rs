//=========================================================================
// Command Mapper
//=========================================================================
//
// Maps raw keyboard events to game commands based on configured bindings.
//
// Architecture:
//   KeyDown(key) → HashMap → Command
//
// The mapper is deliberately phase-blind: a `Confirm` resolved on the win
// screen and a `Confirm` resolved on the start screen are the same
// command. What a command *means* in the current phase is decided by the
// match session, which ignores commands that don't apply.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== Command =============================================================

/// High-level game command produced by the input layer.
///
/// Commands are the only input the match session ever sees. The mapper
/// can emit `Answer` indices 0–3 exclusively, which makes out-of-range
/// candidate selection structurally impossible downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start the match, or restart it from an end screen.
    Confirm,

    /// Select answer candidate `0..=3`.
    Answer(usize),
}

//=== CommandMapper =======================================================

/// Maps key presses to commands via a key → command lookup table.
///
/// Only `KeyDown` events resolve; releases are ignored. Bindings can be
/// replaced at runtime with [`CommandMapper::bind_key`].
pub struct CommandMapper {
    bindings: HashMap<KeyCode, Command>,
}

impl CommandMapper {
    //--- Construction -----------------------------------------------------

    /// Creates a mapper with no bindings.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Creates a mapper with the game's default bindings:
    ///
    /// - `Space` → [`Command::Confirm`]
    /// - `Digit1`..`Digit4` → [`Command::Answer`] 0..=3
    pub fn with_default_bindings() -> Self {
        let mut mapper = Self::new();
        mapper.bind_key(KeyCode::Space, Command::Confirm);
        mapper.bind_key(KeyCode::Digit1, Command::Answer(0));
        mapper.bind_key(KeyCode::Digit2, Command::Answer(1));
        mapper.bind_key(KeyCode::Digit3, Command::Answer(2));
        mapper.bind_key(KeyCode::Digit4, Command::Answer(3));
        mapper
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to a command, replacing any previous binding.
    pub fn bind_key(&mut self, key: KeyCode, command: Command) {
        if let Some(previous) = self.bindings.insert(key, command) {
            debug!("Rebound {:?}: {:?} -> {:?}", key, previous, command);
        }
    }

    /// Removes the binding for a key, if any.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    //--- Resolution -------------------------------------------------------

    /// Resolves an input event to a command.
    ///
    /// Returns `None` for key releases and unbound keys.
    pub fn resolve(&self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::KeyDown(key) => self.bindings.get(key).copied(),
            InputEvent::KeyUp(_) => None,
        }
    }
}

impl Default for CommandMapper {
    fn default() -> Self {
        Self::with_default_bindings()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
