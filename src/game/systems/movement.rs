//! Drop resolution system
//!
//! Applies queued [`DropPiece`] messages to the [`ActiveBoard`]. Each message
//! is resolved completely (move, swap or snap-back) before the next one is
//! read, and the board is only ever mutated here.

use bevy::prelude::*;

use crate::game::events::{DropPiece, DropResolved};
use crate::game::resources::ActiveBoard;
use crate::rendering::{BoardVisuals, EcsVisualHost};

/// Resolve every drop queued since the last frame
pub fn apply_drop_requests(
    mut requests: MessageReader<DropPiece>,
    mut resolved: MessageWriter<DropResolved>,
    mut commands: Commands,
    board: Option<ResMut<ActiveBoard>>,
    visuals: Res<BoardVisuals>,
) {
    let Some(mut board) = board else {
        if !requests.is_empty() {
            warn!("[DROP] {} drop(s) received before the board exists", requests.len());
            requests.clear();
        }
        return;
    };

    let scale = board.geometry().cell_diameter();
    let mut host = EcsVisualHost::new(&mut commands, &visuals, scale);
    for request in requests.read() {
        let outcome = board.drop_piece(request.piece, request.world_position, &mut host);
        resolved.write(DropResolved(outcome));
    }
}

/// Log what each drop did
pub fn log_drop_outcomes(mut resolved: MessageReader<DropResolved>) {
    for DropResolved(outcome) in resolved.read() {
        if outcome.changed_board() {
            info!("[DROP] {:?}", outcome);
        } else {
            debug!("[DROP] {:?}", outcome);
        }
    }
}
