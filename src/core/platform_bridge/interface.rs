//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events, errors, render contract).
//
// Defines the contract for communication between the platform layer and
// the logic thread, plus the outbound rendering contract. Everything
// here is platform-agnostic: the core never sees winit types, and the
// backend never sees the session.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::assets::{SpriteId, SpriteSet};
use crate::core::input::event::InputEvent;
use crate::core::render::FramePacket;

//=== PlatformEvent =======================================================

/// Events sent from platform to core via the input channel.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched keyboard events for a frame.
    Inputs(Vec<InputEvent>),

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are the game's only fatal error class. Error payloads are
/// stringified so the core stays decoupled from the windowing crate.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// Event loop execution error.
    EventLoopExecution(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== RenderBackend =======================================================

/// The opaque rasterization backend the platform hands frames to.
///
/// The core describes each frame declaratively as a [`FramePacket`];
/// how those commands become pixels (and how text is shaped) is entirely
/// the backend's business. Backends are swappable without touching core
/// code — the same dependency inversion the input side uses.
///
/// # Contract
///
/// - `mount_sprites` is called once, before the first `present`, with
///   the decoded fighter sprites (or their placeholders).
/// - `present` is called at most once per display refresh with the most
///   recently composed frame. Packets arrive in composition order but
///   intermediate ones may be skipped.
pub trait RenderBackend {
    /// Receives the decoded sprite set before the first frame.
    ///
    /// Default implementation ignores it (not every backend draws
    /// sprites).
    fn mount_sprites(&mut self, _sprites: &SpriteSet) {}

    /// Presents one composed frame.
    fn present(&mut self, frame: &FramePacket);
}

//=== DiagnosticBackend ===================================================

/// Default backend: logs frame traffic instead of drawing it.
///
/// Useful for headless runs and as the stand-in until a real rasterizer
/// is plugged in via [`crate::Game::run_with_backend`].
#[derive(Debug, Default)]
pub struct DiagnosticBackend {
    frames: u64,
}

impl DiagnosticBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderBackend for DiagnosticBackend {
    fn mount_sprites(&mut self, sprites: &SpriteSet) {
        debug!(
            target: "render",
            "sprites mounted: player {}x{}, enemy {}x{}",
            sprites.get(SpriteId::Player).width(),
            sprites.get(SpriteId::Player).height(),
            sprites.get(SpriteId::Enemy).width(),
            sprites.get(SpriteId::Enemy).height(),
        );
    }

    fn present(&mut self, frame: &FramePacket) {
        self.frames += 1;
        trace!(
            target: "render",
            "frame {}: {} commands",
            self.frames,
            frame.commands.len()
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::Color;

    #[test]
    fn platform_event_is_cloneable_and_debug() {
        let event = PlatformEvent::WindowClosed;
        let cloned = event.clone();
        assert!(format!("{:?}", cloned).contains("WindowClosed"));
    }

    #[test]
    fn platform_error_implements_error_and_display() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();

        let error = PlatformError::EventLoopCreation("no display".into());
        assert!(error.to_string().contains("no display"));
    }

    #[test]
    fn diagnostic_backend_counts_presented_frames() {
        let mut backend = DiagnosticBackend::new();
        let frame = FramePacket {
            clear: Color::BACKGROUND,
            commands: Vec::new(),
        };

        backend.present(&frame);
        backend.present(&frame);

        assert_eq!(backend.frames(), 2);
    }
}
