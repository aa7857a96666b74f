//! Board module - engine-agnostic checkerboard core
//!
//! Everything here is plain data plus Bevy math types; nothing depends on the
//! ECS, so the board can be driven and tested without an `App`.
//!
//! - `coords` - cells, board frame and the world ↔ grid transform
//! - `grid` - occupancy map, opening layout, drop/swap resolution
//! - `host` - the [`VisualHost`] capability the engine provides
//! - `error` - setup-time configuration errors

pub mod coords;
pub mod error;
pub mod grid;
pub mod host;

pub use coords::{BoardFrame, BoardGeometry, GridCoord};
pub use error::{BoardError, BoardResult};
pub use grid::{opening_layout, opening_rows, BoardGrid, DropOutcome, Piece, PieceId, PieceSide};
pub use host::VisualHost;
