//! Error types for notation parsing and interval naming.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TheoryError>;

/// Errors that can occur while parsing or expanding tonal notation.
#[derive(Debug, Error)]
pub enum TheoryError {
    #[error("notation cannot be empty")]
    EmptyNotation,
    #[error("invalid note letter '{found}' in '{notation}' (expected one of A-G)")]
    InvalidLetter { notation: String, found: char },
    #[error("invalid accidental '{found}' in '{notation}' (expected 'b' or '#')")]
    InvalidAccidental { notation: String, found: char },
    #[error("invalid interval ordinal in '{notation}'")]
    InvalidOrdinal { notation: String },
    #[error("invalid interval quality '{quality}' in '{notation}'")]
    InvalidQuality { notation: String, quality: String },
    #[error("unsupported interval distance {distance} (expected 1-7)")]
    UnsupportedDistance { distance: i32 },
    #[error("invalid tuning configuration: {0}")]
    InvalidTuning(#[from] serde_json::Error),
}

impl TheoryError {
    /// Stable error code for programmatic handling, e.g. "THEORY_001".
    pub fn code(&self) -> &'static str {
        match self {
            TheoryError::EmptyNotation => "THEORY_001",
            TheoryError::InvalidLetter { .. } => "THEORY_002",
            TheoryError::InvalidAccidental { .. } => "THEORY_003",
            TheoryError::InvalidOrdinal { .. } => "THEORY_004",
            TheoryError::InvalidQuality { .. } => "THEORY_005",
            TheoryError::UnsupportedDistance { .. } => "THEORY_006",
            TheoryError::InvalidTuning(_) => "THEORY_007",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        match self {
            TheoryError::InvalidTuning(_) => "config",
            _ => "notation",
        }
    }
}
