use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid config value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Board assembly failed: {message}")]
    AssemblyError { message: String },

    #[error("Data processing error: {message}")]
    Processing { message: String },

    #[error(transparent)]
    Rejected(#[from] PlayRejection),
}

/// Why a text blob was refused on the "Play" entry point. Exactly one reason
/// is reported per failure, first failing rule wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayRejection {
    #[error("This file is marked as a draft ([JEOPARDY DRAFT]). Finish it in the editor before playing.")]
    DraftMarkerPresent,

    #[error("The file must begin with a 'Title:' line.")]
    MissingOrInvalidTitle,

    #[error("A playable board needs 5 categories; this file has {found}.")]
    TooFewCategories { found: usize },

    #[error("Category '{name}' has {complete} of 5 complete clues (question and response both filled in).")]
    IncompleteCategory { name: String, complete: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Config,
    Validation,
    Processing,
}

impl BoardError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BoardError::Rejected(_) => ErrorSeverity::Medium,
            BoardError::ConfigError { .. }
            | BoardError::InvalidConfigValueError { .. }
            | BoardError::MissingConfigError { .. } => ErrorSeverity::Medium,
            BoardError::AssemblyError { .. } | BoardError::Processing { .. } => {
                ErrorSeverity::High
            }
            BoardError::SerializationError(_) => ErrorSeverity::High,
            BoardError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            BoardError::IoError(_) => ErrorCategory::Storage,
            BoardError::ConfigError { .. }
            | BoardError::InvalidConfigValueError { .. }
            | BoardError::MissingConfigError { .. } => ErrorCategory::Config,
            BoardError::Rejected(_) => ErrorCategory::Validation,
            BoardError::SerializationError(_)
            | BoardError::AssemblyError { .. }
            | BoardError::Processing { .. } => ErrorCategory::Processing,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BoardError::Rejected(reason) => reason.to_string(),
            BoardError::IoError(e) => format!("Could not read or write a file: {}", e),
            BoardError::SerializationError(_) => {
                "Saved session data could not be decoded.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BoardError::Rejected(PlayRejection::DraftMarkerPresent) => {
                "Remove the [JEOPARDY DRAFT] line once every clue is filled in"
            }
            BoardError::Rejected(PlayRejection::MissingOrInvalidTitle) => {
                "Add a 'Title: <name>' line at the top of the file"
            }
            BoardError::Rejected(_) => "Fill in 5 categories with 5 clues each, then retry",
            BoardError::ConfigError { .. }
            | BoardError::InvalidConfigValueError { .. }
            | BoardError::MissingConfigError { .. } => {
                "Check the configuration file and command line flags"
            }
            BoardError::AssemblyError { .. } => {
                "Re-import the board file; the stored copy is not a complete 5×5 game"
            }
            BoardError::IoError(_) => "Check that the storage directory exists and is writable",
            _ => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
