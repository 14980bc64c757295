use crate::domain::model::{Board, Category, DraftBoard, Team, DRAFT_MARKER};
use chrono::{DateTime, SecondsFormat, Utc};

/// Renders a complete board as canonical game text. Deterministic: equal
/// boards produce byte-identical output. No marker line.
pub fn serialize_game(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(&format!("Title: {}\n\n", board.title));
    for category in &board.categories {
        push_category(&mut out, category);
    }
    out
}

/// Renders a partial board as draft text: marker line, title, creation
/// timestamp, team names, then whatever categories exist. Nothing is
/// skipped; empty fields render as empty strings between `|` delimiters.
pub fn serialize_draft(draft: &DraftBoard, teams: &[Team], timestamp: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(DRAFT_MARKER);
    out.push('\n');
    out.push_str(&format!("Title: {}\n", draft.title));
    out.push_str(&format!(
        "Created: {}\n",
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
    out.push_str(&format!("Teams: {}\n\n", names.join(", ")));
    for category in &draft.categories {
        push_category(&mut out, category);
    }
    out
}

fn push_category(out: &mut String, category: &Category) {
    out.push_str(&format!("Category: {}\n", category.name));
    for clue in &category.clues {
        out.push_str(&format!("{}|{}|{}\n", clue.value, clue.question, clue.answer));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{value_for_row, Clue};
    use chrono::TimeZone;

    fn one_category(name: &str) -> Category {
        Category {
            name: name.to_string(),
            clues: (0..5)
                .map(|row| Clue {
                    value: value_for_row(row),
                    question: format!("q{}", row),
                    answer: format!("a{}", row),
                })
                .collect(),
        }
    }

    #[test]
    fn test_game_text_layout() {
        let board = Board {
            title: "Geo".to_string(),
            categories: (1..=5).map(|i| one_category(&format!("C{}", i))).collect(),
        };
        let text = serialize_game(&board);
        assert!(text.starts_with("Title: Geo\n\nCategory: C1\n100|q0|a0\n"));
        assert!(!text.contains(DRAFT_MARKER));
        assert!(text.ends_with("500|q4|a4\n\n"));
    }

    #[test]
    fn test_draft_header_layout() {
        let draft = DraftBoard {
            title: "WIP".to_string(),
            categories: vec![],
        };
        let teams = vec![Team::new("A"), Team::new("B")];
        let ts = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let text = serialize_draft(&draft, &teams, ts);
        assert_eq!(
            text,
            "[JEOPARDY DRAFT]\nTitle: WIP\nCreated: 2026-08-07T12:00:00Z\nTeams: A, B\n\n"
        );
    }

    #[test]
    fn test_draft_renders_empty_fields() {
        let draft = DraftBoard {
            title: String::new(),
            categories: vec![Category {
                name: "C1".to_string(),
                clues: vec![Clue {
                    value: 0,
                    question: String::new(),
                    answer: String::new(),
                }],
            }],
        };
        let text = serialize_draft(&draft, &[], Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        assert!(text.contains("Category: C1\n0||\n"));
    }
}
