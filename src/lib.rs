pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::FileStore;
pub use crate::config::toml_config::BoardConfig;
pub use crate::core::assemble::{assemble, assemble_strict};
pub use crate::core::classify::{classify_upload, validate_for_play, UploadKind};
pub use crate::core::grammar::extract;
pub use crate::core::serialize::{serialize_draft, serialize_game};
pub use crate::core::session::SessionStore;
pub use crate::core::startup::{activate_board, reconcile, StartupState};
pub use crate::utils::error::{BoardError, PlayRejection, Result};
