use serde::Serialize;

/// One player's score under one objective.
///
/// The capitalized keys mirror the raw save-data fields and are part of the
/// wire contract, even though the enclosing record uses snake case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    /// Player (or fake-player) name
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Score")]
    pub score: i32,
}

/// A fully extracted scoreboard objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    /// Objective name, unique per file; the join key for raw score entries
    pub internal_name: String,
    /// Human-readable label; falls back to `internal_name`
    pub display_name: String,
    pub criteria_name: String,
    /// Sorted score entries
    pub data: Vec<ScoreEntry>,
}
