//! Board square creation
//!
//! One flat square per cell, laid out in the board frame. Playable cells use
//! the dark material. Squares are scenery only; the picker intersects the
//! board plane directly, so squares carry no observers.

use bevy::prelude::*;

use crate::board::BoardGeometry;
use crate::rendering::utils::{BoardSquare, BoardVisuals};

/// Marks the root entity all board squares are parented to
#[derive(Component, Debug)]
pub struct BoardRoot;

pub(crate) fn spawn_board_squares(
    commands: &mut Commands,
    geometry: &BoardGeometry,
    visuals: &BoardVisuals,
) -> Entity {
    let diameter = geometry.cell_diameter();
    let rotation = geometry.frame().rotation;

    // Collect the bundles first, then spawn them under one root
    let squares: Vec<_> = geometry
        .cells()
        .map(|cell| {
            let transform = Transform::from_translation(geometry.cell_center(cell))
                .with_rotation(rotation)
                .with_scale(Vec3::new(diameter, 1.0, diameter));
            (
                Mesh3d(visuals.square_mesh.clone()),
                MeshMaterial3d(visuals.square_material(cell)),
                transform,
                BoardSquare { cell },
                Name::new(format!("Square ({}, {})", cell.x, cell.z)),
            )
        })
        .collect();

    let root = commands
        .spawn((
            BoardRoot,
            Transform::default(),
            Visibility::Inherited,
            Name::new("Board"),
        ))
        .id();
    for square in squares {
        let square = commands.spawn(square).id();
        commands.entity(root).add_child(square);
    }

    debug!(
        "[BOARD] Spawned {} squares for a {}x{} board",
        geometry.cell_count(),
        geometry.width(),
        geometry.depth()
    );
    root
}
