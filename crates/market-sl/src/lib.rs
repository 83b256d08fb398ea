/*
[INPUT]:  Public API exports for market-sl crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod runner;

// Re-export main types for convenience
pub use config::Settings;
pub use runner::{run, OrderArgs, RunOutcome};
