use crate::core::assemble::assemble_strict;
use crate::core::classify::validate_for_play;
use crate::core::grammar::extract;
use crate::core::serialize::serialize_game;
use crate::core::session::SessionStore;
use crate::domain::model::{Board, CellId, FormDraftSnapshot, Team};
use crate::domain::ports::SlotBackend;
use crate::utils::error::Result;
use std::collections::BTreeSet;

/// What the UI should show after startup reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub enum StartupState {
    /// A stored game is authoritative; restore grid, used cells and scores.
    ActiveGame {
        board: Board,
        title: String,
        used_cells: BTreeSet<CellId>,
        teams: Vec<Team>,
    },
    /// No active game, but an in-progress form draft exists. Surface a
    /// non-blocking prompt; never auto-load it.
    ResumeDraftPrompt { draft: FormDraftSnapshot },
    Fresh,
}

/// Startup reconciliation: stored board text wins, then the form draft, then
/// nothing. Stored text that no longer assembles strictly is treated like a
/// corrupt slot and skipped.
pub fn reconcile<S: SlotBackend>(store: &SessionStore<S>) -> StartupState {
    if let Some(text) = store.board_text() {
        match assemble_strict(&extract(&text)) {
            Ok(board) => {
                let title = resolve_title(store, &board);
                let used_cells = store.used_cells();
                let teams = store.teams();
                tracing::info!(
                    "Restored active game '{}' ({} cells used, {} teams)",
                    title,
                    used_cells.len(),
                    teams.len()
                );
                return StartupState::ActiveGame {
                    board,
                    title,
                    used_cells,
                    teams,
                };
            }
            Err(e) => {
                tracing::warn!("Stored board text no longer assembles, ignoring it: {}", e);
            }
        }
    }

    if let Some(draft) = store.form_draft() {
        tracing::info!(
            "Found an in-progress draft (last modified {})",
            draft.last_modified
        );
        return StartupState::ResumeDraftPrompt { draft };
    }

    StartupState::Fresh
}

/// Displayed title: the title slot if present and non-empty, else the title
/// carried by the board text. A title derived from board text is back-filled
/// into its own slot.
fn resolve_title<S: SlotBackend>(store: &SessionStore<S>, board: &Board) -> String {
    match store.title() {
        Some(stored) if !stored.trim().is_empty() => stored,
        _ => {
            let derived = board.title.clone();
            if !derived.is_empty() {
                if let Err(e) = store.set_title(&derived) {
                    tracing::warn!("Could not back-fill the title slot: {}", e);
                }
            }
            derived
        }
    }
}

/// The "Play" entry point: strict validation, strict assembly, then the
/// canonical serialized text is stored (never the user's raw bytes), so the
/// board slot always reassembles at the next startup. Used cells reset for
/// the new game; team rosters carry over.
pub fn activate_board<S: SlotBackend>(store: &SessionStore<S>, text: &str) -> Result<Board> {
    validate_for_play(text)?;
    let board = assemble_strict(&extract(text))?;

    store.set_board_text(&serialize_game(&board))?;
    store.set_title(&board.title)?;
    store.set_used_cells(&BTreeSet::new())?;

    tracing::info!(
        "Activated game '{}' with {} categories",
        board.title,
        board.categories.len()
    );
    Ok(board)
}
