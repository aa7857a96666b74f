//! Board resources - global state shared by systems and observers
//!
//! - [`ActiveBoard`] - the board in play
//! - [`DragState`] - which piece the pointer is carrying

pub mod board;
pub mod selection;

pub use board::ActiveBoard;
pub use selection::DragState;
