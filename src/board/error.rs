//! Error types for the board module
//!
//! Setup-time configuration failures. Steady-state drop handling never fails:
//! invalid targets snap back and unknown pieces are ignored.

use thiserror::Error;

/// Errors that can occur while building a board
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    /// Width or depth is zero or odd
    #[error("Invalid board dimensions {width}x{depth}: both must be even and greater than zero")]
    InvalidDimensions { width: u8, depth: u8 },

    /// Cell radius is not a positive finite number
    #[error("Invalid cell radius {radius}: must be finite and greater than zero")]
    InvalidCellRadius { radius: f32 },
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
