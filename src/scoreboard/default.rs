use anyhow::{Context, Result};

use super::ScoreboardParser;
use crate::nbt::Value;

/// Reads the `text` key out of a JSON-encoded rich-text display name
pub(super) fn rich_text_label(raw: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(raw).ok()?;
    parsed.get("text")?.as_str().map(str::to_string)
}

/// Baseline strategy: display names are JSON rich text, scores are
/// mandatory
pub struct DefaultParser;

impl ScoreboardParser for DefaultParser {
    fn display_name(&self, raw: Option<&Value>, internal_name: &str) -> String {
        raw.and_then(Value::as_str)
            .and_then(rich_text_label)
            .unwrap_or_else(|| internal_name.to_string())
    }

    fn score(&self, entry: &Value) -> Result<i32> {
        entry
            .get("Score")
            .and_then(Value::as_int)
            .context("Score entry has no Score value")
    }
}

#[cfg(test)]
mod tests {
    use super::DefaultParser;
    use crate::scoreboard::test_fixtures::{
        compound, objective, save_tree, score, string,
    };
    use crate::scoreboard::ScoreboardParser;
    use crate::nbt::Value;

    #[test]
    fn test_display_name_from_rich_text() {
        let name = DefaultParser.display_name(Some(&string(r#"{"text":"Kills"}"#)), "kills");

        assert_eq!(name, "Kills");
    }

    #[test]
    fn test_unparsable_display_name_falls_back() {
        let name = DefaultParser.display_name(Some(&string("not json")), "kills");

        assert_eq!(name, "kills");
    }

    #[test]
    fn test_rich_text_without_a_text_key_falls_back() {
        let name = DefaultParser.display_name(Some(&string(r#"{"translate":"x"}"#)), "kills");

        assert_eq!(name, "kills");
    }

    #[test]
    fn test_missing_display_name_falls_back() {
        let name = DefaultParser.display_name(None, "kills");

        assert_eq!(name, "kills");
    }

    #[test]
    fn test_missing_criteria_defaults_to_unknown() {
        let tree = save_tree(
            vec![objective("kills", string(r#"{"text":"Kills"}"#), None)],
            vec![],
        );

        let boards = DefaultParser.parse(&tree).unwrap();

        assert_eq!(boards[0].criteria_name, "unknown");
    }

    #[test]
    fn test_missing_score_aborts_the_parse() {
        let tree = save_tree(
            vec![objective("kills", string(r#"{"text":"Kills"}"#), None)],
            vec![score("Alice", "kills", None)],
        );

        let err = DefaultParser.parse(&tree).unwrap_err();

        assert!(format!("{err:#}").contains("Alice"));
    }

    #[test]
    fn test_non_integer_score_aborts_the_parse() {
        let tree = save_tree(
            vec![objective("kills", string(r#"{"text":"Kills"}"#), None)],
            vec![compound(vec![
                ("Name", string("Alice")),
                ("Objective", string("kills")),
                ("Score", string("ten")),
            ])],
        );

        assert!(DefaultParser.parse(&tree).is_err());
    }

    #[test]
    fn test_narrow_score_tags_widen() {
        let tree = save_tree(
            vec![objective("kills", string(r#"{"text":"Kills"}"#), None)],
            vec![compound(vec![
                ("Name", string("Alice")),
                ("Objective", string("kills")),
                ("Score", Value::Short(12)),
            ])],
        );

        let boards = DefaultParser.parse(&tree).unwrap();

        assert_eq!(boards[0].data[0].score, 12);
    }
}
