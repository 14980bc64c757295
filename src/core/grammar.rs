use crate::domain::model::{RawCategory, RawRow, RawTree, DRAFT_MARKER};
use regex::Regex;

/// Semantic classification of one trimmed line. The extractor and the
/// incremental scanners in `classify` share this tokenizer so they agree on
/// what counts as a category header or a clue row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Marker,
    Title(&'a str),
    Teams(&'a str),
    Created(&'a str),
    Category(&'a str),
    ClueRow,
    Other,
}

/// Clue rows start with one or more digits followed by `|`.
pub(crate) fn clue_row_pattern() -> Regex {
    Regex::new(r"^\d+\|").unwrap()
}

pub fn classify_line<'a>(line: &'a str, clue_row: &Regex) -> LineKind<'a> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line == DRAFT_MARKER {
        return LineKind::Marker;
    }
    if let Some(rest) = strip_prefix_ci(line, "title:") {
        return LineKind::Title(rest.trim());
    }
    if let Some(rest) = strip_prefix_ci(line, "teams:") {
        return LineKind::Teams(rest.trim());
    }
    if let Some(rest) = strip_prefix_ci(line, "created:") {
        return LineKind::Created(rest.trim());
    }
    if let Some(rest) = strip_prefix_ci(line, "category:") {
        return LineKind::Category(rest.trim());
    }
    if clue_row.is_match(line) {
        return LineKind::ClueRow;
    }
    LineKind::Other
}

fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}

/// Category-boundary handling as an explicit two-state machine: `Idle` until
/// the first `category:` header, `InCategory` while rows accumulate. Blank
/// lines never change state; end of input flushes the open category.
enum ScanState {
    Idle,
    InCategory(RawCategory),
}

impl ScanState {
    fn open(&mut self, name: &str, categories: &mut Vec<RawCategory>) {
        if let ScanState::InCategory(done) = std::mem::replace(self, ScanState::Idle) {
            categories.push(done);
        }
        *self = ScanState::InCategory(RawCategory {
            name: name.to_string(),
            rows: Vec::new(),
        });
    }

    fn push_row(&mut self, row: RawRow) {
        // Rows before any category header have nowhere to go and are dropped.
        if let ScanState::InCategory(current) = self {
            current.rows.push(row);
        }
    }

    fn finish(self, categories: &mut Vec<RawCategory>) {
        if let ScanState::InCategory(done) = self {
            categories.push(done);
        }
    }
}

/// Tokenizes a text blob into a raw, possibly-incomplete category/clue tree.
/// Unknown lines are skipped, malformed clue rows are dropped, and the worst
/// case is an empty tree. Never fails.
pub fn extract(text: &str) -> RawTree {
    let clue_row = clue_row_pattern();
    let mut tree = RawTree::default();
    let mut state = ScanState::Idle;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        match classify_line(line, &clue_row) {
            LineKind::Blank => {}
            LineKind::Marker => tree.marker = true,
            LineKind::Title(rest) => {
                // Only the first title line is honored.
                if tree.title.is_none() {
                    tree.title = Some(rest.to_string());
                }
            }
            LineKind::Teams(rest) => {
                tree.teams = rest.split(',').map(|t| t.trim().to_string()).collect();
            }
            LineKind::Created(rest) => {
                // Retained on the raw tree only; never merged into any board
                // or title field on import.
                if tree.created.is_none() {
                    tree.created = Some(rest.to_string());
                }
            }
            LineKind::Category(rest) => state.open(rest, &mut tree.categories),
            LineKind::ClueRow => {
                if let Some(row) = parse_clue_row(line) {
                    state.push_row(row);
                }
            }
            LineKind::Other => {}
        }
    }

    state.finish(&mut tree.categories);
    tree
}

/// Split on `|`: value, question, then everything else rejoined so literal
/// `|` characters inside a response survive. Rows with fewer than 3 fields
/// are malformed and silently dropped.
fn parse_clue_row(line: &str) -> Option<RawRow> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 3 {
        return None;
    }
    Some(RawRow {
        value_text: fields[0].to_string(),
        question: fields[1].to_string(),
        answer: fields[2..].join("|"),
    })
}
