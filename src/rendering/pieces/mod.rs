//! Piece entities and their visual host
pub mod pieces;

pub use pieces::{BoardPiece, EcsVisualHost};
