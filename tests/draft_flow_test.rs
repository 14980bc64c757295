use chrono::{TimeZone, Utc};
use trivia_board::domain::model::{Category, Clue, FormDraftSnapshot, Team};
use trivia_board::{assemble, classify_upload, extract, serialize_draft, UploadKind};

#[test]
fn test_minimal_draft_scenario() {
    let text = "[JEOPARDY DRAFT]\nTitle: X\nTeams: A, B\n\nCategory: C1\n100|q|a\n";

    assert_eq!(classify_upload(text), UploadKind::Draft);

    let tree = extract(text);
    assert!(tree.marker);
    assert_eq!(tree.teams, vec!["A".to_string(), "B".to_string()]);

    let draft = assemble(&tree);
    assert_eq!(draft.title, "X");
    assert_eq!(draft.categories.len(), 1);
    assert_eq!(draft.categories[0].clues.len(), 1);
    assert_eq!(draft.categories[0].clues[0].value, 100);
}

#[test]
fn test_form_draft_exports_and_reimports() {
    let snapshot = FormDraftSnapshot {
        title: "Friday quiz".to_string(),
        categories: vec![Category {
            name: "History".to_string(),
            clues: vec![
                Clue {
                    value: 100,
                    question: "First US president".to_string(),
                    answer: "Washington".to_string(),
                },
                Clue {
                    value: 200,
                    question: String::new(),
                    answer: String::new(),
                },
            ],
        }],
        teams: vec![Team::new("Red"), Team::new("Blue")],
        last_modified: Utc.with_ymd_and_hms(2026, 8, 1, 18, 0, 0).unwrap(),
    };

    let text = serialize_draft(
        &snapshot.to_draft_board(),
        &snapshot.teams,
        snapshot.last_modified,
    );
    assert!(text.starts_with("[JEOPARDY DRAFT]\n"));
    assert!(text.contains("Teams: Red, Blue\n"));

    let tree = extract(&text);
    let reimported = assemble(&tree);
    assert_eq!(reimported.categories, snapshot.categories);
    assert_eq!(tree.teams, vec!["Red".to_string(), "Blue".to_string()]);
}

#[test]
fn test_created_line_is_skipped_not_merged() {
    // Re-importing exported draft text must not leak the timestamp into the
    // title or any clue field.
    let text = "[JEOPARDY DRAFT]\nCreated: 2026-08-01T18:00:00Z\nTitle: Quiz\n\nCategory: C\n100|q|a\n";
    let tree = extract(text);
    let draft = assemble(&tree);

    assert_eq!(draft.title, "Quiz");
    assert_eq!(tree.created.as_deref(), Some("2026-08-01T18:00:00Z"));
    assert!(!draft.categories[0].clues[0].question.contains("2026"));
}

#[test]
fn test_unknown_lines_and_malformed_rows_are_ignored() {
    let text = "Title: Quiz\n# a stray comment\nCategory: C1\n100|lonely question\nnot a row at all\n100|q|a\n";
    let draft = assemble(&extract(text));

    assert_eq!(draft.categories.len(), 1);
    assert_eq!(draft.categories[0].clues.len(), 1);
    assert_eq!(draft.categories[0].clues[0].question, "q");
}

#[test]
fn test_non_numeric_value_text_becomes_zero() {
    // Hand-authored drafts may carry junk values; assembly normalizes to 0.
    let mut tree = extract("Title: T\nCategory: C\n100|q|a\n");
    tree.categories[0].rows[0].value_text = "not-a-number".to_string();
    let draft = assemble(&tree);
    assert_eq!(draft.categories[0].clues[0].value, 0);
}
