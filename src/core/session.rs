use crate::domain::model::{CellId, FormDraftSnapshot, Team};
use crate::domain::ports::SlotBackend;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeSet;

pub const SLOT_BOARD_TEXT: &str = "board_text";
pub const SLOT_TITLE: &str = "title";
pub const SLOT_USED_CELLS: &str = "used_cells";
pub const SLOT_TEAMS: &str = "teams";
pub const SLOT_FORM_DRAFT: &str = "form_draft";

const ALL_SLOTS: [&str; 5] = [
    SLOT_BOARD_TEXT,
    SLOT_TITLE,
    SLOT_USED_CELLS,
    SLOT_TEAMS,
    SLOT_FORM_DRAFT,
];

/// The named durable slots of one play/authoring session. Every write
/// replaces the whole slot value; a failed or corrupt read degrades to
/// "slot absent" with a warning, never a hard failure. `clear_all` is the
/// only operation that may remove every slot together.
pub struct SessionStore<S: SlotBackend> {
    backend: S,
}

impl<S: SlotBackend> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    fn read_text(&self, slot: &str) -> Option<String> {
        match self.backend.read(slot) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Slot '{}' unavailable, treating as absent: {}", slot, e);
                None
            }
        }
    }

    fn read_json<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let raw = self.read_text(slot)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Slot '{}' is corrupt, treating as absent: {}", slot, e);
                None
            }
        }
    }

    fn write_json<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        self.backend.write(slot, &serde_json::to_string(value)?)
    }

    pub fn board_text(&self) -> Option<String> {
        self.read_text(SLOT_BOARD_TEXT)
    }

    pub fn set_board_text(&self, text: &str) -> Result<()> {
        self.backend.write(SLOT_BOARD_TEXT, text)
    }

    pub fn title(&self) -> Option<String> {
        self.read_text(SLOT_TITLE)
    }

    pub fn set_title(&self, title: &str) -> Result<()> {
        self.backend.write(SLOT_TITLE, title)
    }

    /// Ids that fail to parse are skipped: a stale or mangled entry degrades
    /// to "cell not marked used".
    pub fn used_cells(&self) -> BTreeSet<CellId> {
        let ids: Vec<String> = self.read_json(SLOT_USED_CELLS).unwrap_or_default();
        ids.iter().filter_map(|id| id.parse().ok()).collect()
    }

    pub fn set_used_cells(&self, cells: &BTreeSet<CellId>) -> Result<()> {
        let ids: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
        self.write_json(SLOT_USED_CELLS, &ids)
    }

    pub fn teams(&self) -> Vec<Team> {
        self.read_json(SLOT_TEAMS).unwrap_or_default()
    }

    pub fn set_teams(&self, teams: &[Team]) -> Result<()> {
        self.write_json(SLOT_TEAMS, &teams)
    }

    pub fn form_draft(&self) -> Option<FormDraftSnapshot> {
        self.read_json(SLOT_FORM_DRAFT)
    }

    pub fn set_form_draft(&self, draft: &FormDraftSnapshot) -> Result<()> {
        self.write_json(SLOT_FORM_DRAFT, draft)
    }

    /// The sole effect of the reset action. Callers reinitialize an empty
    /// board afterwards.
    pub fn clear_all(&self) -> Result<()> {
        for slot in ALL_SLOTS {
            self.backend.delete(slot)?;
        }
        Ok(())
    }
}
