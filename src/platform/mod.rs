//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the logic thread via channels.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  CoreRuntime @ TPS   │
//  │   ↓                      │    │                      │
//  │  keymap (convert/filter) │    │  CommandMapper       │
//  │   ↓                      │    │  ↓                   │
//  │  pending: Vec<InputEvent>│    │  Session             │
//  │   ↓                      │    │  ↓                   │
//  │  RedrawRequested         │    │  compose()           │
//  │   ├─ flush ──────────────┼───►│  PlatformEvent       │
//  │   ├─ drain frames ◄──────┼────┼─ FramePacket         │
//  │   └─ RenderBackend       │    └──────────────────────┘
//  └──────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → Buffered input sent atomically (empty batches are NOT sent)
//    → Latest composed frame handed to the render backend (stale
//      packets are skipped; latest wins)
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: Batches all input atomically,
//   ensuring deterministic order even with high event rates
// - **Graceful channel disconnect**: If the logic thread dies, the
//   platform logs a warning but continues running so the user can close
//   the window
// - **Main thread requirement**: Winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Game::run()`
//
// Responsibilities:
// - Create and manage the 800×600 OS window
// - Convert Winit keyboard events → engine InputEvents (keymap)
// - Buffer input until the frame boundary, then send it to the core
// - Forward the most recent FramePacket to the render backend
//
//=========================================================================

//=== Submodules ==========================================================

mod keymap;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::input::event::InputEvent;
use crate::core::platform_bridge::{PlatformError, PlatformEvent, RenderBackend};
use crate::core::render::{FramePacket, SCREEN_HEIGHT, SCREEN_WIDTH};

//=== Platform ============================================================

/// Window manager, input aggregator, and frame presenter.
///
/// Runs on the main thread (Winit requirement on macOS/iOS). Sends
/// batched keyboard events to the logic thread and hands incoming frame
/// packets to the render backend.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` — wires the two channels
/// 2. **Execution**: `platform.run()` — starts the event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: user closes window → sends `WindowClosed` → exits
///
/// # Thread Safety
///
/// This type is NOT Send/Sync — it must remain on the main thread.
/// Communication with the logic thread occurs exclusively via channels.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` is called).
    window: Option<Window>,

    /// Keyboard events buffered until the next frame boundary.
    pending: Vec<InputEvent>,

    /// Channel carrying input batches to the logic thread.
    event_sender: Sender<PlatformEvent>,

    /// Channel carrying composed frames from the logic thread.
    frame_receiver: Receiver<FramePacket>,

    /// The rasterization backend frames are handed to.
    backend: Box<dyn RenderBackend>,

    /// Window title.
    title: String,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance.
    ///
    /// Does not create the window yet — that happens lazily in
    /// `resumed()`.
    pub(crate) fn new(
        event_sender: Sender<PlatformEvent>,
        frame_receiver: Receiver<FramePacket>,
        title: String,
        backend: Box<dyn RenderBackend>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            pending: Vec::new(),
            event_sender,
            frame_receiver,
            backend,
            title,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop and blocks until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if event loop creation or execution
    /// fails — the game's only fatal condition.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new()
            .map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered input events to the logic thread.
    ///
    /// Empty buffers are not sent. If the channel is disconnected (the
    /// logic thread exited early), the events are dropped with a warning
    /// so the user can still close the window normally.
    fn flush_input_buffer(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let batch = std::mem::take(&mut self.pending);
        trace!(target: "platform::input", "Flushing {} input events", batch.len());

        if let Err(e) = self.event_sender.send(PlatformEvent::Inputs(batch)) {
            warn!(target: "platform::input", "Channel disconnected, dropping events: {}", e);
        }
    }

    /// Presents the most recent frame the logic thread has published.
    ///
    /// Drains the frame channel so a slow display refresh skips stale
    /// packets instead of replaying them.
    fn present_latest_frame(&mut self) {
        let mut latest = None;
        while let Ok(frame) = self.frame_receiver.try_recv() {
            latest = Some(frame);
        }

        if let Some(frame) = latest {
            self.backend.present(&frame);
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                // Notify the core so the logic thread shuts down too.
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(input) = keymap::convert_key_event(key_event) {
                    self.pending.push(input);
                } else {
                    trace!(target: "platform::input", "Unmapped or repeated key ignored");
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush input, then present the newest
                // composed frame.
                self.flush_input_buffer();
                self.present_latest_frame();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Resized, Focused, cursor events, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
