use std::sync::OnceLock;

pub mod commands;
pub mod nbt;
pub mod scoreboard;

/// Application-level verbosity
pub static VERBOSE: OnceLock<bool> = OnceLock::new();

/// Whether verbose diagnostics are enabled for this process
pub fn verbose() -> bool {
    VERBOSE.get().copied().unwrap_or(false)
}
