use trivia_board::{validate_for_play, PlayRejection};

fn complete_game_text() -> String {
    let mut text = String::from("Title: Geo\n\n");
    for c in 1..=5 {
        text.push_str(&format!("Category: C{}\n", c));
        for row in 1..=5 {
            text.push_str(&format!("{}|q{}|a{}\n", row * 100, row, row));
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_complete_board_is_accepted() {
    assert_eq!(validate_for_play(&complete_game_text()), Ok(()));
}

#[test]
fn test_marker_rejects_regardless_of_content() {
    // A fully complete board is still rejected once the marker appears.
    let text = format!("[JEOPARDY DRAFT]\n{}", complete_game_text());
    assert_eq!(
        validate_for_play(&text),
        Err(PlayRejection::DraftMarkerPresent)
    );

    let trailing = format!("{}[JEOPARDY DRAFT]\n", complete_game_text());
    assert_eq!(
        validate_for_play(&trailing),
        Err(PlayRejection::DraftMarkerPresent)
    );
}

#[test]
fn test_missing_title_is_rejected() {
    let text = complete_game_text().replace("Title: Geo\n", "Geo\n");
    assert_eq!(
        validate_for_play(&text),
        Err(PlayRejection::MissingOrInvalidTitle)
    );
    assert_eq!(
        validate_for_play(""),
        Err(PlayRejection::MissingOrInvalidTitle)
    );
}

#[test]
fn test_too_few_categories_is_rejected() {
    let mut text = complete_game_text();
    let cut = text.rfind("Category:").unwrap();
    text.truncate(cut);
    assert_eq!(
        validate_for_play(&text),
        Err(PlayRejection::TooFewCategories { found: 4 })
    );
}

#[test]
fn test_incomplete_middle_category_is_rejected() {
    // The short category sits in the middle of the file, not at the end.
    let mut text = String::from("Title: Geo\n\n");
    for c in 1..=5 {
        text.push_str(&format!("Category: C{}\n", c));
        let rows = if c == 2 { 3 } else { 5 };
        for row in 1..=rows {
            text.push_str(&format!("{}|q{}|a{}\n", row * 100, row, row));
        }
        text.push('\n');
    }
    assert_eq!(
        validate_for_play(&text),
        Err(PlayRejection::IncompleteCategory {
            name: "C2".to_string(),
            complete: 3
        })
    );
}

#[test]
fn test_blank_question_does_not_count_as_complete() {
    let text = complete_game_text().replacen("300|q3|a3", "300||a3", 1);
    assert_eq!(
        validate_for_play(&text),
        Err(PlayRejection::IncompleteCategory {
            name: "C1".to_string(),
            complete: 4
        })
    );
}

#[test]
fn test_rejection_order_marker_first() {
    // Marker beats the missing title, which beats category checks.
    assert_eq!(
        validate_for_play("[JEOPARDY DRAFT]\nno title here\n"),
        Err(PlayRejection::DraftMarkerPresent)
    );
    assert_eq!(
        validate_for_play("no title here\nCategory: C1\n"),
        Err(PlayRejection::MissingOrInvalidTitle)
    );
}

#[test]
fn test_each_reason_has_a_distinct_message() {
    let reasons = [
        PlayRejection::DraftMarkerPresent.to_string(),
        PlayRejection::MissingOrInvalidTitle.to_string(),
        PlayRejection::TooFewCategories { found: 3 }.to_string(),
        PlayRejection::IncompleteCategory {
            name: "C2".to_string(),
            complete: 3,
        }
        .to_string(),
    ];
    for (i, a) in reasons.iter().enumerate() {
        assert!(!a.is_empty());
        for b in reasons.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
