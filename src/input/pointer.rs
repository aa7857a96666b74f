//! Pointer drag observers for pieces
//!
//! Each piece entity registers these observers when it is spawned:
//!
//! ```rust,ignore
//! commands.spawn(piece_bundle)
//!     .observe(on_piece_drag_start) // Pointer<DragStart>: grab the piece
//!     .observe(on_piece_drag)       // Pointer<Drag>: move the preview
//!     .observe(on_piece_drag_end);  // Pointer<DragEnd>: queue the drop
//! ```
//!
//! The observers never mutate the board. Dragging only moves the piece's own
//! transform; the release is queued as a [`DropPiece`] message and resolved by
//! `apply_drop_requests`, which writes the final transform.
//!
//! # Board Hits
//!
//! The pointer position is turned into a ray from the first 3D camera and
//! intersected with the board plane, so pieces and other scenery never block
//! the drop point.
//!
//! # Cancelled Pointers
//!
//! A cancelled pointer (e.g. an interrupted touch) never produces `DragEnd`.
//! [`cancel_drag_on_pointer_cancel`] watches raw pointer input instead, drops
//! the drag and sends the held piece back to its own cell.

use bevy::picking::events::{Drag, DragEnd, DragStart, Pointer};
use bevy::picking::pointer::{PointerAction, PointerButton, PointerInput};
use bevy::prelude::*;

use crate::core::BoardConfig;
use crate::game::events::DropPiece;
use crate::game::resources::{ActiveBoard, DragState};
use crate::input::picker::pointer_hit;
use crate::rendering::BoardPiece;

/// Helper to check if primary button (left click) was used
fn is_primary(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary)
}

/// Board-plane point under a viewport position, seen from the first 3D camera
fn board_hit_under_pointer(
    cameras: &Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    viewport_position: Vec2,
    board: &ActiveBoard,
    max_distance: f32,
) -> Option<Vec3> {
    let (camera, camera_transform) = cameras.iter().next()?;
    let ray = camera
        .viewport_to_world(camera_transform, viewport_position)
        .ok()?;
    pointer_hit(ray, board.geometry().frame(), max_distance)
}

/// Grab a piece when a primary-button drag starts on it
pub fn on_piece_drag_start(
    drag: On<Pointer<DragStart>>,
    board: Option<Res<ActiveBoard>>,
    drag_state: Option<ResMut<DragState>>,
) {
    if !is_primary(drag.event.button) {
        return;
    }
    let (Some(board), Some(mut drag_state)) = (board, drag_state) else {
        return;
    };
    let Some(piece) = board.piece_for_entity(drag.entity) else {
        warn!("[PICKER] Dragged entity {:?} is not a piece on the board", drag.entity);
        return;
    };

    if drag_state.begin_drag(piece.id) {
        debug!("[PICKER] Picked up {:?} {:?}", piece.side, piece.id);
    }
}

/// Move the carried piece with the pointer
///
/// Over a playable cell the piece floats above the pointer; over a
/// non-playable cell it sits back on its own cell until the pointer returns.
pub fn on_piece_drag(
    drag: On<Pointer<Drag>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    config: Res<BoardConfig>,
    board: Option<Res<ActiveBoard>>,
    drag_state: Option<ResMut<DragState>>,
    mut transforms: Query<&mut Transform, With<BoardPiece>>,
) {
    if !is_primary(drag.event.button) {
        return;
    }
    let (Some(board), Some(mut drag_state)) = (board, drag_state) else {
        return;
    };
    let Some(piece_id) = drag_state.selected() else {
        return;
    };

    let hit = board_hit_under_pointer(
        &cameras,
        drag.pointer_location.position,
        &board,
        config.ray_distance,
    );
    let Some(preview) = drag_state.track(&board.0, hit) else {
        return;
    };

    let Some(visual) = board.piece(piece_id).map(|piece| piece.visual) else {
        return;
    };
    if let Ok(mut transform) = transforms.get_mut(visual) {
        transform.translation = preview;
    }
}

/// Release the carried piece and queue its drop
pub fn on_piece_drag_end(
    drag: On<Pointer<DragEnd>>,
    board: Option<Res<ActiveBoard>>,
    drag_state: Option<ResMut<DragState>>,
    mut drops: MessageWriter<DropPiece>,
) {
    if !is_primary(drag.event.button) {
        return;
    }
    let (Some(board), Some(mut drag_state)) = (board, drag_state) else {
        return;
    };

    if let Some(request) = drag_state.release(&board.0) {
        debug!(
            "[PICKER] Released {:?} at ({:.2}, {:.2}, {:.2})",
            request.piece, request.world_position.x, request.world_position.y, request.world_position.z
        );
        drops.write(DropPiece::from(request));
    }
}

/// Abandon the drag when its pointer is cancelled
///
/// The held piece is queued to drop on its own resting position, which puts
/// the visual back on its cell and leaves the board unchanged.
pub fn cancel_drag_on_pointer_cancel(
    mut inputs: MessageReader<PointerInput>,
    board: Option<Res<ActiveBoard>>,
    drag_state: Option<ResMut<DragState>>,
    mut drops: MessageWriter<DropPiece>,
) {
    let cancelled = inputs
        .read()
        .any(|input| matches!(input.action, PointerAction::Cancel));
    if !cancelled {
        return;
    }
    let (Some(board), Some(mut drag_state)) = (board, drag_state) else {
        return;
    };
    let Some(piece) = drag_state.selected() else {
        return;
    };

    drag_state.clear();
    if let Some(world_position) = board.resting_position(piece) {
        debug!("[PICKER] Pointer cancelled while holding {:?}; returning it", piece);
        drops.write(DropPiece {
            piece,
            world_position,
        });
    }
}
