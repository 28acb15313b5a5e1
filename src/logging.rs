//! Process-wide `tracing` subscriber.

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Parses a level name, falling back to `INFO` for anything unrecognised.
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

/// Installs the fmt subscriber at the given level.
///
/// Returns `false` if a global subscriber was already installed, which is
/// harmless (tests and embedders may install their own).
pub fn init(level: &str) -> bool {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(level))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
