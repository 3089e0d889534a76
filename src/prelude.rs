//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use cloudclash::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Game facade
pub use crate::game::{Game, GameBuilder};

// Platform bridge (render contract)
pub use crate::core::platform_bridge::{DiagnosticBackend, RenderBackend};

// Frame description
pub use crate::core::render::{
    Align, Color, DrawCommand, FramePacket, TextStyle, SCREEN_HEIGHT, SCREEN_WIDTH,
};

// Assets
pub use crate::core::assets::{AssetPaths, Sprite, SpriteId, SpriteSet};

// Input
pub use crate::core::input::{Command, CommandMapper, InputEvent, KeyCode};

// Quiz content
pub use crate::core::quiz::{Question, QuestionDeck, ServiceEntry};

// Match session
pub use crate::core::session::{Phase, Session, Shooter, MAX_HEALTH};
