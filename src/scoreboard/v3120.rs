use anyhow::{Context, Result};

use super::{default::rich_text_label, ScoreboardParser};
use crate::{nbt::Value, verbose};

/// DataVersion 3120: display names arrive either as JSON rich text or as an
/// already-structured compound. Unparsable rich text falls back to the
/// internal name instead of failing the extraction.
pub struct V3120Parser;

impl ScoreboardParser for V3120Parser {
    fn display_name(&self, raw: Option<&Value>, internal_name: &str) -> String {
        match raw {
            Some(Value::String(s)) => rich_text_label(s).unwrap_or_else(|| {
                if verbose() {
                    eprintln!(
                        "Unparsable display name {s:?}, falling back to {internal_name:?}"
                    );
                }
                internal_name.to_string()
            }),
            Some(node) => node
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or(internal_name)
                .to_string(),
            None => internal_name.to_string(),
        }
    }

    fn score(&self, entry: &Value) -> Result<i32> {
        entry
            .get("Score")
            .and_then(Value::as_int)
            .context("Score entry has no Score value")
    }
}
