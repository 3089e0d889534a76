//=========================================================================
// Cloud Clash Game
//
// Main entry point and coordinator for the game.
//
// Architecture:
// ```text
//     GameBuilder  ──build()──>  Game  ──run()──>  [Runtime]
//         │                        │
//         ├─ with_tps()            └─ loads sprites
//         ├─ with_title()             spawns logic thread
//         ├─ with_asset_paths()       runs platform
//         └─ with_channel_capacity()  blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::assets::{AssetPaths, SpriteSet};
use crate::core::platform_bridge::{DiagnosticBackend, PlatformEvent, RenderBackend};
use crate::core::render::FramePacket;
use crate::core::CoreRuntime;
use crate::platform::Platform;

//=== Constants ===========================================================

/// Frame channel depth. Two packets give the platform one in hand and
/// one in flight; anything older is stale by definition.
const FRAME_CHANNEL_CAPACITY: usize = 2;

//=== GameBuilder =========================================================

/// Builder for configuring and constructing a [`Game`].
///
/// Provides a fluent API for setting game parameters before
/// construction.
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Title**: "Cloud Clash"
/// - **Assets**: `player.png` / `enemy.png` in the working directory
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use cloudclash::GameBuilder;
///
/// GameBuilder::new().build().run();
/// ```
///
/// Advanced configuration:
/// ```no_run
/// # use cloudclash::GameBuilder;
/// GameBuilder::new()
///     .with_tps(120.0)              // High refresh rate
///     .with_channel_capacity(256)   // Extra input buffering
///     .with_title("Cloud Clash: AWS Duel")
///     .build()
///     .run();
/// ```
pub struct GameBuilder {
    tps: f64,
    channel_capacity: usize,
    title: String,
    assets: AssetPaths,
}

impl GameBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            title: "Cloud Clash".to_string(),
            assets: AssetPaths::default(),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// The logic thread maintains this update rate using a fixed
    /// timestep loop. Animation speeds are defined in px/sec, so a
    /// different tick rate preserves wall-clock speed.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the sprite image locations.
    ///
    /// Missing or unreadable files fall back to placeholder shapes at
    /// runtime; they never fail the build or the run.
    pub fn with_asset_paths(mut self, assets: AssetPaths) -> Self {
        self.assets = assets;
        self
    }

    /// Builds the game instance.
    pub fn build(self) -> Game {
        info!(
            "Building game (TPS: {}, channel: {})",
            self.tps, self.channel_capacity
        );

        Game {
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            title: self.title,
            assets: self.assets,
        }
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Game ================================================================

/// Cloud Clash runtime.
///
/// Coordinates the platform layer and the logic thread, and manages the
/// execution lifecycle. Create via [`GameBuilder`].
///
/// # Architecture
///
/// ```text
/// Game (Main Thread)
///   ├─► CoreRuntime (Logic Thread @ TPS)
///   │     └─► CommandMapper, Session, frame composer
///   │
///   └─► Platform (Winit Event Loop)
///         └─► Window, keyboard, RenderBackend
///
/// Communication: bounded channels
///   PlatformEvent →  (input)
///   ← FramePacket    (frames, latest wins)
/// ```
pub struct Game {
    tps: f64,
    channel_capacity: usize,
    title: String,
    assets: AssetPaths,
}

impl Game {
    //--- Execution --------------------------------------------------------

    /// Runs the game with the default diagnostic render backend.
    ///
    /// See [`Game::run_with_backend`] to plug in a real rasterizer.
    pub fn run(self) {
        self.run_with_backend(Box::new(DiagnosticBackend::new()));
    }

    /// Starts the game runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Loads the fighter sprites (placeholders on failure) and
    ///    mounts them on the backend
    /// 2. Creates the input and frame channels
    /// 3. Spawns the logic thread at the configured TPS
    /// 4. Runs the platform event loop (blocks here)
    /// 5. On window close: platform exits → logic thread terminates →
    ///    join
    ///
    /// # Thread Panic Handling
    ///
    /// If the logic thread panics, the error is logged and shutdown
    /// proceeds; the platform has already exited at that point.
    pub fn run_with_backend(self, mut backend: Box<dyn RenderBackend>) {
        info!("Starting game runtime (TPS: {})", self.tps);

        //--- 1. Load assets ----------------------------------------------
        let sprites = SpriteSet::load(&self.assets);
        backend.mount_sprites(&sprites);

        //--- 2. Create communication channels ----------------------------
        let (event_tx, event_rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (frame_tx, frame_rx): (Sender<FramePacket>, Receiver<FramePacket>) =
            bounded(FRAME_CHANNEL_CAPACITY);

        info!("Channels created (input capacity: {})", self.channel_capacity);

        //--- 3. Spawn the core logic thread ------------------------------
        let core_handle = CoreRuntime::new().spawn_core_thread(event_rx, frame_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 4. Launch the platform subsystem ----------------------------
        let platform = Platform::new(event_tx, frame_rx, self.title, backend);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 5. Cleanup: wait for the logic thread -----------------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Game shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
