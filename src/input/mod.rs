//! Input module - pointer picking for pieces
//!
//! # Architecture
//!
//! - `picker` - [`PiecePicker`], the engine-independent drag state machine,
//!   and [`pointer_hit`] for ray/board-plane intersection
//! - `pointer` - Bevy observers that feed pointer drag events into the picker
//!   and queue drops for the board, plus pointer-cancel handling
//! - `debug` - optional gizmo drawing of the pointer ray
//!
//! The observer pattern routes drag events straight to the piece entity that
//! was grabbed, so there is no per-frame polling of pointer state.

pub mod debug;
pub mod picker;
pub mod pointer;

// Re-export commonly used items
pub use picker::{pointer_hit, DropRequest, PiecePicker};
pub use debug::PointerDebugPlugin;
pub use pointer::{
    cancel_drag_on_pointer_cancel, on_piece_drag, on_piece_drag_end, on_piece_drag_start,
};
