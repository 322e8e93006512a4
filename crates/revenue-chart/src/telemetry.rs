// File: crates/revenue-chart/src/telemetry.rs
// Summary: tracing subscriber setup for the binary.
//
// Events go to stderr so stdout carries only the completion line. The level is
// fixed; the program reads no environment variables.

use tracing_subscriber::filter::LevelFilter;

/// Installs a compact fmt subscriber at `WARN`.
///
/// Returns `false` if a global subscriber was already set.
#[must_use]
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::WARN)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
