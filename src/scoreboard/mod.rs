use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::nbt::Value;

pub mod default;
pub mod registry;
pub mod sort;
pub mod types;
pub mod v3120;
pub mod v4325;
pub mod version;

pub use default::DefaultParser;
pub use registry::ParserRegistry;
pub use types::{ScoreEntry, Scoreboard};
pub use v3120::V3120Parser;
pub use v4325::V4325Parser;
pub use version::{data_version, DEFAULT_DATA_VERSION};

/// A version-specific scoreboard extraction strategy.
///
/// `parse` is the shared pipeline — read the objectives table, join the raw
/// player scores onto it, sort. Schema revisions differ only in how a
/// display name is read, how a score is read, and the criteria value
/// assumed when an objective carries none; variants override exactly those
/// points.
pub trait ScoreboardParser: Send + Sync {
    /// Extract sorted scoreboards from a decoded save-data tree
    fn parse(&self, root: &Value) -> Result<Vec<Scoreboard>> {
        let mut boards = self.extract_objectives(root)?;
        self.populate_scores(root, &mut boards)?;

        let mut boards = boards.into_values().collect::<Vec<_>>();
        for board in &mut boards {
            sort::sort_entries(&mut board.data);
        }
        sort::sort_boards(&mut boards);

        Ok(boards)
    }

    /// Build the objective table keyed by internal name. A duplicated name
    /// keeps the later objective.
    fn extract_objectives(&self, root: &Value) -> Result<BTreeMap<String, Scoreboard>> {
        let objectives = root
            .get("data")
            .and_then(|data| data.get("Objectives"))
            .and_then(Value::as_list)
            .context("Scoreboard data has no Objectives section")?;

        let mut boards = BTreeMap::new();
        for objective in objectives {
            let internal_name = objective
                .get("Name")
                .and_then(Value::as_str)
                .context("Objective has no Name")?;
            let display_name = self.display_name(objective.get("DisplayName"), internal_name);
            let criteria_name = objective
                .get("CriteriaName")
                .and_then(Value::as_str)
                .unwrap_or_else(|| self.criteria_fallback());

            boards.insert(
                internal_name.to_string(),
                Scoreboard {
                    internal_name: internal_name.to_string(),
                    display_name,
                    criteria_name: criteria_name.to_string(),
                    data: Vec::new(),
                },
            );
        }

        Ok(boards)
    }

    /// Join the raw player scores onto the objective table. Entries whose
    /// objective is unknown are dropped.
    fn populate_scores(
        &self,
        root: &Value,
        boards: &mut BTreeMap<String, Scoreboard>,
    ) -> Result<()> {
        let entries = root
            .get("data")
            .and_then(|data| data.get("PlayerScores"))
            .and_then(Value::as_list)
            .context("Scoreboard data has no PlayerScores section")?;

        for entry in entries {
            let name = entry
                .get("Name")
                .and_then(Value::as_str)
                .context("Score entry has no Name")?;
            let objective = entry
                .get("Objective")
                .and_then(Value::as_str)
                .context("Score entry has no Objective")?;
            let score = self
                .score(entry)
                .with_context(|| format!("Bad score entry for {name:?}"))?;

            if let Some(board) = boards.get_mut(objective) {
                board.data.push(ScoreEntry {
                    name: name.to_string(),
                    score,
                });
            }
        }

        Ok(())
    }

    /// Turn the raw DisplayName node into a label, falling back to the
    /// objective's internal name
    fn display_name(&self, raw: Option<&Value>, internal_name: &str) -> String;

    /// Read the score off one raw entry
    fn score(&self, entry: &Value) -> Result<i32>;

    /// Criteria value assumed when an objective carries none
    fn criteria_fallback(&self) -> &'static str {
        "unknown"
    }
}
