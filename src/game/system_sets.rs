//! System organization using SystemSets
//!
//! Pointer observers run whenever picking dispatches events and only queue
//! [`DropPiece`](super::events::DropPiece) messages. The board is mutated in
//! one place, [`BoardSystems::ApplyDrops`], once per frame in `Update`, after
//! any requests queued by [`BoardSystems::Input`].

use bevy::prelude::*;

/// System execution order for board logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum BoardSystems {
    /// Turn raw pointer input into board requests
    ///
    /// Systems: `cancel_drag_on_pointer_cancel`
    Input,

    /// Resolve queued drops against the board
    ///
    /// Systems: `apply_drop_requests`
    ApplyDrops,

    /// Anything reacting to resolved drops
    ///
    /// Systems: `log_drop_outcomes`
    React,
}
