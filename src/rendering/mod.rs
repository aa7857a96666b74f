//! Rendering module - board squares and piece visuals
//!
//! # Architecture
//!
//! - `board` - square meshes laid out in the board frame
//! - `pieces` - piece entities and [`EcsVisualHost`], the ECS implementation
//!   of the board's visual capability
//! - `utils` - shared mesh/material handles and the square marker
//!
//! Meshes are unit-sized primitives (a plane per square, a cylinder per piece)
//! scaled by the cell diameter, so materials and meshes are shared between all
//! squares and all same-side pieces.

pub mod board;
pub mod pieces;
pub mod utils;

// Re-export commonly used items
pub use board::BoardRoot;
pub use pieces::{BoardPiece, EcsVisualHost};
pub use utils::{BoardSquare, BoardVisuals};
