//! Board systems
//!
//! - [`game_init`] - builds the board and its pieces on startup
//! - [`movement`] - resolves queued drops against the board
//!
//! Pointer handling lives in [`crate::input`]; it only queues drops.

pub mod game_init;
pub mod movement;

pub use game_init::spawn_checkerboard;
pub use movement::{apply_drop_requests, log_drop_outcomes};
