//! Error types for core module
//!
//! Board configuration and grid conversions are the only fallible operations in
//! the crate. None of these errors reach the player: callers log them and fall
//! back to a no-op or to the default configuration.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Board configuration rejected by [`crate::core::BoardConfig::validate`]
    #[error("Invalid board configuration: {reason}")]
    InvalidBoard { reason: String },

    /// A world or grid position that does not land on a board cell
    #[error("Position ({x}, {z}) is outside the {size}x{size} board")]
    OffBoard { x: i32, z: i32, size: u8 },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
