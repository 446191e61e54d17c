use super::types::{Scoreboard, ScoreEntry};

fn leads_alphanumeric(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
}

fn entry_key(entry: &ScoreEntry) -> (u8, i64, String) {
    if leads_alphanumeric(&entry.name) {
        (1, -i64::from(entry.score), entry.name.to_lowercase())
    } else {
        (0, 0, entry.name.to_lowercase())
    }
}

/// Order the entries of one objective: names not starting with an ASCII
/// letter or digit first (case-insensitive name order), then everything
/// else by score descending with a case-insensitive name tie-break.
pub fn sort_entries(entries: &mut [ScoreEntry]) {
    entries.sort_by_cached_key(entry_key);
}

/// Order objectives by display name
pub fn sort_boards(boards: &mut [Scoreboard]) {
    boards.sort_by(|a, b| a.display_name.cmp(&b.display_name));
}

#[cfg(test)]
mod tests {
    use super::{sort_boards, sort_entries};
    use crate::scoreboard::types::{ScoreEntry, Scoreboard};

    fn entry(name: &str, score: i32) -> ScoreEntry {
        ScoreEntry {
            name: name.to_string(),
            score,
        }
    }

    fn names(entries: &[ScoreEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_symbol_prefixed_names_come_first() {
        let mut entries = vec![
            entry("Alice", 100),
            entry("#total", 3),
            entry("_hidden", 9999),
            entry("bob", 50),
        ];

        sort_entries(&mut entries);

        assert_eq!(names(&entries), ["#total", "_hidden", "Alice", "bob"]);
    }

    #[test]
    fn test_scores_descend_with_name_tiebreak() {
        let mut entries = vec![
            entry("zed", 10),
            entry("Amy", 10),
            entry("bob", 25),
        ];

        sort_entries(&mut entries);

        assert_eq!(names(&entries), ["bob", "Amy", "zed"]);
    }

    #[test]
    fn test_negative_scores_sort_below_zero() {
        let mut entries = vec![entry("down", -5), entry("flat", 0), entry("up", 5)];

        sort_entries(&mut entries);

        assert_eq!(names(&entries), ["up", "flat", "down"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let mut entries = vec![
            entry("$sum", 1),
            entry("Carol", 7),
            entry("dave", 7),
            entry("erin", 2),
        ];

        sort_entries(&mut entries);
        let once = entries.clone();
        sort_entries(&mut entries);

        assert_eq!(entries, once);
    }

    #[test]
    fn test_boards_sort_case_sensitively_by_display_name() {
        let board = |display: &str| Scoreboard {
            internal_name: display.to_string(),
            display_name: display.to_string(),
            criteria_name: "dummy".to_string(),
            data: vec![],
        };
        let mut boards = vec![board("deaths"), board("Kills"), board("assists")];

        sort_boards(&mut boards);

        let order = boards
            .iter()
            .map(|b| b.display_name.as_str())
            .collect::<Vec<_>>();
        // Byte order: uppercase before lowercase
        assert_eq!(order, ["Kills", "assists", "deaths"]);
    }
}
