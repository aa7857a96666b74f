//! Board initialization system
//!
//! Runs once in `Startup`: validates the geometry from [`BoardConfig`],
//! spawns the squares, generates the opening layout through
//! [`EcsVisualHost`] and inserts the [`ActiveBoard`] and [`DragState`]
//! resources.
//!
//! # Execution Order
//!
//! The config is loaded in `PreStartup` by the core plugin. If it is missing
//! (loading failed and an exit was requested) this system does nothing. An
//! invalid geometry is reported and the app exits before any piece exists.

use bevy::prelude::*;

use crate::board::BoardGrid;
use crate::core::BoardConfig;
use crate::game::resources::{ActiveBoard, DragState};
use crate::rendering::board::spawn_board_squares;
use crate::rendering::{BoardPiece, BoardVisuals, EcsVisualHost};

/// System that builds the board and its pieces
pub fn spawn_checkerboard(
    mut commands: Commands,
    config: Option<Res<BoardConfig>>,
    visuals: Res<BoardVisuals>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(config) = config else {
        warn!("[BOARD_INIT] No board config available, skipping board setup");
        return;
    };

    let geometry = match config.geometry() {
        Ok(geometry) => geometry,
        Err(e) => {
            error!("[BOARD_INIT] Refusing to build board: {}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    spawn_board_squares(&mut commands, &geometry, &visuals);

    let board = {
        let mut host = EcsVisualHost::new(&mut commands, &visuals, geometry.cell_diameter());
        BoardGrid::new(geometry, &mut host)
    };

    for piece in board.pieces() {
        commands.entity(piece.visual).insert((
            BoardPiece {
                id: piece.id,
                side: piece.side,
            },
            Name::new(format!(
                "{:?} piece {} ({}, {})",
                piece.side, piece.id.0, piece.cell.x, piece.cell.z
            )),
        ));
    }

    info!(
        "[BOARD_INIT] Board ready: {}x{} with {} pieces",
        geometry.width(),
        geometry.depth(),
        board.piece_count()
    );
    commands.insert_resource(ActiveBoard(board));
    commands.insert_resource(DragState::new(config.piece_lift));
}
