//=========================================================================
// Presentation Errors
//=========================================================================
//
// Recoverable API errors. Advisory lifecycle warnings are not errors and
// go through `Diagnostic` instead.
//
//=========================================================================

use thiserror::Error;

/// Errors returned by presentation and player operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    /// A content index outside of the presentation was requested.
    #[error("content index {index} is out of range (presentation has {len} contents)")]
    ContentOutOfRange { index: usize, len: usize },

    /// The player owning the command queue has been dropped.
    #[error("player is no longer receiving navigation commands")]
    PlayerDisconnected,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, PresentationError>;
