use anyhow::Result;

use super::ScoreboardParser;
use crate::nbt::Value;

/// DataVersion 4325: display names are stored as plain text, not rich-text
/// JSON, and zero scores may be omitted from the file entirely.
pub struct V4325Parser;

impl ScoreboardParser for V4325Parser {
    fn display_name(&self, raw: Option<&Value>, internal_name: &str) -> String {
        match raw {
            Some(Value::String(s)) => s.clone(),
            Some(node) => node
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or(internal_name)
                .to_string(),
            None => internal_name.to_string(),
        }
    }

    fn score(&self, entry: &Value) -> Result<i32> {
        Ok(entry.get("Score").and_then(Value::as_int).unwrap_or(0))
    }

    fn criteria_fallback(&self) -> &'static str {
        "dummy"
    }
}

#[cfg(test)]
mod tests {
    use super::V4325Parser;
    use crate::scoreboard::test_fixtures::{compound, objective, save_tree, score, string};
    use crate::scoreboard::ScoreboardParser;

    #[test]
    fn test_plain_string_display_name_is_verbatim() {
        // No JSON parsing under this schema revision
        let name = V4325Parser.display_name(Some(&string(r#"{"text":"Kills"}"#)), "kills");

        assert_eq!(name, r#"{"text":"Kills"}"#);
    }

    #[test]
    fn test_structured_display_name_reads_text() {
        let display = compound(vec![("text", string("Kills"))]);

        let name = V4325Parser.display_name(Some(&display), "kills");

        assert_eq!(name, "Kills");
    }

    #[test]
    fn test_missing_score_defaults_to_zero() {
        let tree = save_tree(
            vec![objective("kills", string("Kills"), None)],
            vec![
                score("Alice", "kills", Some(3)),
                score("Bob", "kills", None),
            ],
        );

        let boards = V4325Parser.parse(&tree).unwrap();

        let data = boards[0]
            .data
            .iter()
            .map(|e| (e.name.as_str(), e.score))
            .collect::<Vec<_>>();
        // The defaulted entry still lands in the score-ordered tier,
        // below the positive score
        assert_eq!(data, [("Alice", 3), ("Bob", 0)]);
    }

    #[test]
    fn test_missing_criteria_defaults_to_dummy() {
        let tree = save_tree(vec![objective("kills", string("Kills"), None)], vec![]);

        let boards = V4325Parser.parse(&tree).unwrap();

        assert_eq!(boards[0].criteria_name, "dummy");
    }
}
