use anyhow::{Context, Result};
use serde::Serialize;

use crate::scoreboard::Scoreboard;

pub mod dump;
pub mod show;
pub mod version;

#[derive(Debug, Serialize)]
struct ErrorPayload {
    error: String,
}

/// Render an extraction result into the wire contract: an array of records
/// on success, a single `{"error"}` object on failure. Partial output is
/// never produced.
pub fn render_output(result: Result<Vec<Scoreboard>>) -> Result<String> {
    match result {
        Ok(boards) => serde_json::to_string_pretty(&boards),
        Err(e) => serde_json::to_string_pretty(&ErrorPayload {
            error: format!("{e:#}"),
        }),
    }
    .context("Failed to serialise scoreboards to JSON")
}
