//! Checkerboard - drag-and-drop pieces on a checkers grid in a 3D scene
//!
//! - [`board`] - engine-agnostic grid: layout, world ↔ grid mapping, drops
//! - [`core`] - startup configuration
//! - [`game`] - ECS resources, messages and systems around the board
//! - [`input`] - pointer picking and the drag state machine
//! - [`rendering`] - square and piece visuals

pub mod board;
pub mod core;
pub mod game;
pub mod input;
pub mod rendering;
