//=========================================================================
// Cloud Clash — Library Root
//
// This crate defines the public API surface of Cloud Clash, an arcade
// quiz duel: answer cloud-service trivia correctly to fire at the enemy,
// answer wrong and the enemy fires back.
//
// Responsibilities:
// - Expose the game interface (`Game`, `GameBuilder`)
// - Expose the simulation building blocks under `core` (session, quiz
//   deck, frame composition) for embedding and testing
// - Keep the OS-specific `platform` module hidden from end users
//
// Typical usage:
// ```no_run
// use cloudclash::GameBuilder;
//
// fn main() {
//     GameBuilder::new().build().run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the simulation: quiz deck, match session, animator,
// frame composer, and the platform-bridge contract. It is exposed
// publicly so custom render backends and harnesses can drive the game,
// but normal application code will mostly use the top-level `Game`
// facade.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event loop) and is kept private, as it is not part of the public API
// surface.
//
// `game` defines the main game entry point and initialization logic.
//
mod game;
mod platform;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the `Game` types as the main entry point for applications.
// This allows users to simply `use cloudclash::GameBuilder;` without
// having to know the internal module structure.
//
pub use game::{Game, GameBuilder};
