//! Error handling for PatternKit
//!
//! Failures of pattern operations are local: an operation that cannot be
//! applied leaves the pattern untouched and reports one of these errors.
//! Degenerate geometry (zero length edges) never surfaces here, the
//! geometry kernel absorbs it.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Pattern operation error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// An operation addressed a piece id that does not exist
    #[error("Pattern piece not found: {id}")]
    PieceNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A piece with the same id is already part of the pattern
    #[error("Pattern piece id already in use: {id}")]
    DuplicatePieceId {
        /// The conflicting id.
        id: String,
    },

    /// The piece does not have the points the operation needs
    #[error("Invalid shape for piece {id}: {reason}")]
    InvalidPieceShape {
        /// The id of the offending piece.
        id: String,
        /// What the operation required.
        reason: String,
    },

    /// The operation acts on the current selection but nothing is selected
    #[error("No pattern piece selected")]
    NoSelection,
}

impl PatternError {
    /// Create a not-found error for the given id
    pub fn not_found(id: impl Into<String>) -> Self {
        PatternError::PieceNotFound { id: id.into() }
    }

    /// Create an invalid-shape error
    pub fn invalid_shape(id: impl Into<String>, reason: impl Into<String>) -> Self {
        PatternError::InvalidPieceShape {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error refers to a missing piece
    pub fn is_not_found(&self) -> bool {
        matches!(self, PatternError::PieceNotFound { .. })
    }
}

/// Result type using PatternError
pub type Result<T> = std::result::Result<T, PatternError>;
