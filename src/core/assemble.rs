use crate::domain::model::{value_for_row, Board, Category, Clue, DraftBoard, RawTree, BOARD_SIZE};
use crate::utils::error::{BoardError, Result};

/// Structural copy of the raw tree into a `DraftBoard`. No padding, no
/// truncation, no validation; value text parses to an integer where numeric,
/// otherwise 0.
pub fn assemble(tree: &RawTree) -> DraftBoard {
    DraftBoard {
        title: tree.title.clone().unwrap_or_default(),
        categories: tree
            .categories
            .iter()
            .map(|cat| Category {
                name: cat.name.clone(),
                clues: cat
                    .rows
                    .iter()
                    .map(|row| Clue {
                        value: row.value_text.trim().parse().unwrap_or(0),
                        question: row.question.clone(),
                        answer: row.answer.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Builds the only representation allowed into play mode: exactly 5
/// categories of exactly 5 rows, every question and response non-empty.
/// Values are re-derived from row position (100..500) so hand-edited files
/// cannot smuggle in off-ladder numbers.
pub fn assemble_strict(tree: &RawTree) -> Result<Board> {
    if tree.categories.len() != BOARD_SIZE {
        return Err(BoardError::AssemblyError {
            message: format!(
                "Expected {} categories, found {}",
                BOARD_SIZE,
                tree.categories.len()
            ),
        });
    }

    let mut categories = Vec::with_capacity(BOARD_SIZE);
    for cat in &tree.categories {
        if cat.rows.len() != BOARD_SIZE {
            return Err(BoardError::AssemblyError {
                message: format!(
                    "Category '{}' has {} clue rows, expected {}",
                    cat.name,
                    cat.rows.len(),
                    BOARD_SIZE
                ),
            });
        }

        let mut clues = Vec::with_capacity(BOARD_SIZE);
        for (row_idx, row) in cat.rows.iter().enumerate() {
            if row.question.trim().is_empty() || row.answer.trim().is_empty() {
                return Err(BoardError::AssemblyError {
                    message: format!(
                        "Category '{}' row {} is missing its question or response",
                        cat.name,
                        row_idx + 1
                    ),
                });
            }
            clues.push(Clue {
                value: value_for_row(row_idx),
                question: row.question.clone(),
                answer: row.answer.clone(),
            });
        }

        categories.push(Category {
            name: cat.name.clone(),
            clues,
        });
    }

    Ok(Board {
        title: tree.title.clone().unwrap_or_default(),
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grammar::extract;

    fn complete_text() -> String {
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
    fn test_assemble_keeps_partial_structure() {
        let tree = extract("Title: Partial\n\nCategory: C1\n100|q|a\nabc\n");
        let draft = assemble(&tree);
        assert_eq!(draft.title, "Partial");
        assert_eq!(draft.categories.len(), 1);
        assert_eq!(draft.categories[0].clues.len(), 1);
        assert_eq!(draft.categories[0].clues[0].value, 100);
    }

    #[test]
    fn test_assemble_strict_accepts_complete_board() {
        let board = assemble_strict(&extract(&complete_text())).unwrap();
        assert_eq!(board.title, "Geo");
        assert_eq!(board.categories.len(), 5);
        for category in &board.categories {
            assert_eq!(category.clues.len(), 5);
        }
    }

    #[test]
    fn test_assemble_strict_rederives_values_from_position() {
        // Hand-edited values are ignored in favor of the 100..500 ladder.
        let text = complete_text().replace("100|q1|a1", "9999|q1|a1");
        let board = assemble_strict(&extract(&text)).unwrap();
        for category in &board.categories {
            let values: Vec<i64> = category.clues.iter().map(|c| c.value).collect();
            assert_eq!(values, vec![100, 200, 300, 400, 500]);
        }
    }

    #[test]
    fn test_assemble_strict_rejects_missing_category() {
        let mut text = complete_text();
        let cut = text.rfind("Category:").unwrap();
        text.truncate(cut);
        assert!(assemble_strict(&extract(&text)).is_err());
    }

    #[test]
    fn test_assemble_strict_rejects_blank_answer() {
        let text = complete_text().replace("300|q3|a3", "300|q3| ");
        assert!(assemble_strict(&extract(&text)).is_err());
    }
}
