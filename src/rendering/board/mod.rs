//! Board square rendering
pub mod board;

pub use board::BoardRoot;
pub(crate) use board::spawn_board_squares;
