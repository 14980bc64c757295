use crate::core::grammar::{classify_line, clue_row_pattern, LineKind};
use crate::domain::model::BOARD_SIZE;
use crate::utils::error::PlayRejection;

/// Verdict for a generic upload. Total: every string classifies, nothing is
/// rejected on this path. Even a `Complete` file is routed to the editor by
/// callers; only the explicit play entry point starts a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Draft,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CategoryScan {
    name: String,
    complete_rows: usize,
}

/// Incremental category scan: a category's completeness is fixed by the rows
/// seen before the next `category:` header (or end of input), so a short
/// category in the middle of the file is caught, not just the last one.
fn scan_categories(text: &str) -> Vec<CategoryScan> {
    let clue_row = clue_row_pattern();
    let mut categories: Vec<CategoryScan> = Vec::new();
    let mut in_category = false;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        match classify_line(line, &clue_row) {
            LineKind::Category(name) => {
                categories.push(CategoryScan {
                    name: name.to_string(),
                    complete_rows: 0,
                });
                in_category = true;
            }
            LineKind::ClueRow if in_category => {
                if row_is_complete(line) {
                    if let Some(current) = categories.last_mut() {
                        current.complete_rows += 1;
                    }
                }
            }
            _ => {}
        }
    }

    categories
}

/// A complete row has at least 3 `|`-delimited fields with a non-empty
/// question and a non-empty response.
fn row_is_complete(line: &str) -> bool {
    let fields: Vec<&str> = line.split('|').collect();
    fields.len() >= 3
        && !fields[1].trim().is_empty()
        && !fields[2..].join("|").trim().is_empty()
}

fn contains_marker(text: &str) -> bool {
    let clue_row = clue_row_pattern();
    text.lines()
        .any(|line| classify_line(line.trim(), &clue_row) == LineKind::Marker)
}

fn first_line_is_title(text: &str) -> bool {
    let clue_row = clue_row_pattern();
    for raw_line in text.lines() {
        let line = raw_line.trim();
        match classify_line(line, &clue_row) {
            LineKind::Blank => continue,
            LineKind::Title(_) => return true,
            _ => return false,
        }
    }
    false
}

/// Decides whether uploaded text is an editable draft or a structurally
/// complete game. Never fails: unrecognizable input is just a draft.
pub fn classify_upload(text: &str) -> UploadKind {
    if contains_marker(text) {
        return UploadKind::Draft;
    }
    if !first_line_is_title(text) {
        return UploadKind::Draft;
    }

    let categories = scan_categories(text);
    if categories.len() < BOARD_SIZE {
        return UploadKind::Draft;
    }
    if categories.iter().any(|c| c.complete_rows < BOARD_SIZE) {
        return UploadKind::Draft;
    }

    UploadKind::Complete
}

/// Strict gate for the "Play" entry point. The first failing rule wins, in
/// order: draft marker, title line, category count, category completeness.
pub fn validate_for_play(text: &str) -> Result<(), PlayRejection> {
    if contains_marker(text) {
        return Err(PlayRejection::DraftMarkerPresent);
    }
    if !first_line_is_title(text) {
        return Err(PlayRejection::MissingOrInvalidTitle);
    }

    let categories = scan_categories(text);
    if categories.len() < BOARD_SIZE {
        return Err(PlayRejection::TooFewCategories {
            found: categories.len(),
        });
    }
    for category in categories.iter().take(BOARD_SIZE) {
        if category.complete_rows < BOARD_SIZE {
            return Err(PlayRejection::IncompleteCategory {
                name: category.name.clone(),
                complete: category.complete_rows,
            });
        }
    }

    Ok(())
}
