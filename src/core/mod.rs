pub mod assemble;
pub mod classify;
pub mod grammar;
pub mod serialize;
pub mod session;
pub mod startup;

pub use crate::domain::model::{Board, DraftBoard, RawTree};
pub use crate::domain::ports::SlotBackend;
pub use crate::utils::error::Result;
