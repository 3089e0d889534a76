//=========================================================================
// Cloud Clash — Binary Entry Point
//
// Launches the windowed game session. No command-line arguments;
// logging is configured through the standard RUST_LOG environment
// variable.
//
//=========================================================================

use cloudclash::GameBuilder;

fn main() {
    env_logger::init();

    GameBuilder::new().build().run();
}
