//! Error types for flashcard-import.

use thiserror::Error;

/// Result type alias using ImportError.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors that can occur while importing a flashcard collection.
///
/// Messages are meant to be shown to the user as-is.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid JSON card")]
    InvalidCard { index: usize },

    #[error("Invalid JSON card fields")]
    InvalidCardFields { index: usize },

    #[error("Missing cards array")]
    MissingCards,

    #[error("Invalid createdAt date: {value}")]
    InvalidDate { value: String },

    #[error("Unsupported JSON format")]
    UnsupportedFormat,

    #[error("Unsupported file type: {file_name}")]
    UnsupportedFileType { file_name: String },

    #[error("Empty CSV")]
    EmptyCsv,

    #[error("Invalid CSV headers. Expected: Question,Answer")]
    InvalidHeaders,

    #[error("No cards found")]
    NoCardsFound,
}

/// Broad failure category, for callers that branch on the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    UnsupportedFormat,
    EmptyInput,
    InvalidHeader,
    NoCardsFound,
}

impl ImportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidJson(_)
            | Self::InvalidCard { .. }
            | Self::InvalidCardFields { .. }
            | Self::MissingCards
            | Self::InvalidDate { .. } => ErrorKind::MalformedInput,
            Self::UnsupportedFormat | Self::UnsupportedFileType { .. } => {
                ErrorKind::UnsupportedFormat
            }
            Self::EmptyCsv => ErrorKind::EmptyInput,
            Self::InvalidHeaders => ErrorKind::InvalidHeader,
            Self::NoCardsFound => ErrorKind::NoCardsFound,
        }
    }
}
