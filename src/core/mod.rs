//=========================================================================
// Core Runtime
//
// Central coordinator for the simulation running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own the match session, command mapper, and RNG
// - Receive and process platform events via the input channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Publish one composed frame per tick to the platform
//
// Notes:
// The runtime runs independently from the platform layer. It owns all
// mutable game state directly and updates it at a fixed rate in a
// background thread: input apply → session tick → frame composition,
// strictly in sequence. Communication with the platform occurs only
// through message passing, ensuring the session has exactly one writer.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod assets;
pub mod input;
pub mod platform_bridge;
pub mod quiz;
pub mod render;
pub mod session;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

//=== Internal Modules ====================================================

use input::CommandMapper;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::FramePacket;
use session::Session;

//=== CoreRuntime =========================================================

/// Owns the simulation and steps it at a fixed tick rate.
///
/// Constructed on the main thread, then moved wholesale onto the logic
/// thread by [`CoreRuntime::spawn_core_thread`].
pub(crate) struct CoreRuntime {
    mapper: CommandMapper,
    session: Session,
    rng: StdRng,
}

impl CoreRuntime {
    //--- Construction -----------------------------------------------------

    /// Initializes the simulation with default key bindings and an
    /// entropy-seeded RNG.
    pub(crate) fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let session = Session::new(&mut rng);

        Self {
            mapper: CommandMapper::with_default_bindings(),
            session,
            rng,
        }
    }

    //--- spawn_core_thread() ---------------------------------------------

    /// Spawns the logic thread stepping the simulation at `tps`.
    ///
    /// Each tick:
    ///  1. Collects platform events (exits on window close/disconnect)
    ///  2. Resolves key presses to commands and applies them
    ///  3. Advances the animation-driven session state
    ///  4. Publishes the composed frame (dropped if the platform is busy)
    ///  5. Sleeps the tick remainder to maintain fixed pacing
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        frame_sender: Sender<FramePacket>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let tick_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut runtime = self;
            let mut collector = EventCollector::new(receiver);

            info!("Core thread running at {} TPS", tps);

            loop {
                let tick_start = Instant::now();

                //--- Step 1: Gather platform events -----------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting.");
                    break;
                }

                //--- Step 2: Apply input ----------------------------------
                for batch in collector.take_batches() {
                    for event in batch {
                        if let Some(command) = runtime.mapper.resolve(&event) {
                            runtime.session.handle_command(command, &mut runtime.rng);
                        }
                    }
                }

                //--- Step 3: Advance the simulation -----------------------
                runtime.session.tick(&mut runtime.rng);

                //--- Step 4: Publish the frame ----------------------------
                let frame = render::compose(&runtime.session);
                match frame_sender.try_send(frame) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        trace!("frame channel full, dropping frame");
                    }
                    Err(TrySendError::Disconnected(_)) => {
                        info!("Frame channel closed, core thread exiting.");
                        break;
                    }
                }

                //--- Step 5: Maintain deterministic pacing ----------------
                let elapsed = tick_start.elapsed();
                if elapsed < tick_duration {
                    thread::sleep(tick_duration - elapsed);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
