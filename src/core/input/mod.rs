//=========================================================================
// Input System
//
// High-level interface for input handling within the game.
//
// Responsibilities:
// - Define the portable keyboard event model (`event`)
// - Map key presses to game commands via configurable bindings (`mapper`)
//
// Notes:
// The platform layer produces `InputEvent`s; the core runtime resolves
// them to `Command`s each tick and feeds those to the match session.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
pub mod mapper;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode};
pub use mapper::{Command, CommandMapper};
