use crate::utils::error::{BoardError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed grid dimension: 5 categories × 5 clues.
pub const BOARD_SIZE: usize = 5;

/// The literal line that unconditionally flags text as a draft.
pub const DRAFT_MARKER: &str = "[JEOPARDY DRAFT]";

const IMAGE_MARKER: &str = "<img>";

/// Canonical point value for a row: 100, 200, 300, 400, 500.
pub fn value_for_row(row: usize) -> i64 {
    100 * (row as i64 + 1)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    pub value: i64,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub clues: Vec<Clue>,
}

impl Category {
    pub fn is_complete(&self) -> bool {
        self.clues.len() == BOARD_SIZE
            && self
                .clues
                .iter()
                .all(|c| !c.question.trim().is_empty() && !c.answer.trim().is_empty())
    }
}

/// The complete, playable 5×5 structure. Only `assemble_strict` builds one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub title: String,
    pub categories: Vec<Category>,
}

/// Same shape as `Board` but partial: 0..5 categories, empty fields allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftBoard {
    pub title: String,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub score: i64,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    /// Scores change only through here: +value on a correct response,
    /// -value on a wrong one.
    pub fn award(&mut self, delta: i64) {
        self.score += delta;
    }
}

/// A `row,col` cell identifier as stored in the used-cells slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId {
    pub row: usize,
    pub col: usize,
}

impl CellId {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for CellId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        let (row, col) = s.split_once(',').ok_or_else(|| BoardError::Processing {
            message: format!("Invalid cell id: {}", s),
        })?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| BoardError::Processing {
                    message: format!("Invalid cell id: {}", s),
                })
        };
        Ok(Self {
            row: parse(row)?,
            col: parse(col)?,
        })
    }
}

/// Durable form-in-progress, independent of any uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDraftSnapshot {
    pub title: String,
    pub categories: Vec<Category>,
    pub teams: Vec<Team>,
    pub last_modified: DateTime<Utc>,
}

impl FormDraftSnapshot {
    pub fn to_draft_board(&self) -> DraftBoard {
        DraftBoard {
            title: self.title.clone(),
            categories: self.categories.clone(),
        }
    }
}

/// Raw extraction result of the line grammar, prior to any assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTree {
    pub marker: bool,
    pub title: Option<String>,
    pub teams: Vec<String>,
    pub created: Option<String>,
    pub categories: Vec<RawCategory>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawCategory {
    pub name: String,
    pub rows: Vec<RawRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub value_text: String,
    pub question: String,
    pub answer: String,
}

/// Which side of a clue a field belongs to. Question images and answer
/// images resolve against distinct directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Question,
    Answer,
}

/// A field starting with `<img>` carries an image key instead of display
/// text. The key is resolved at the presentation boundary; the core never
/// checks that the file exists.
pub fn image_key(field: &str) -> Option<&str> {
    field.trim().strip_prefix(IMAGE_MARKER).map(str::trim)
}
