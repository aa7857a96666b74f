//! Piece entities - the Bevy side of [`VisualHost`]
//!
//! [`EcsVisualHost`] is how the board creates and moves piece visuals inside
//! the ECS. Each piece is a parent entity carrying the [`BoardPiece`] marker,
//! the transform the board writes, and the drag observers; its mesh is a
//! scaled child so the parent transform is exactly the cell position.
//!
//! Picking events raised on the child mesh bubble up to the parent, where the
//! drag observers live.

use bevy::prelude::*;

use crate::board::{PieceId, PieceSide, VisualHost};
use crate::input::pointer::{on_piece_drag, on_piece_drag_end, on_piece_drag_start};
use crate::rendering::utils::{BoardVisuals, PIECE_HEIGHT};

/// Links a piece entity to its board identity
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPiece {
    pub id: PieceId,
    pub side: PieceSide,
}

/// Spawns and moves piece entities through `Commands`
///
/// `scale` is the cell diameter; the unit piece mesh is scaled by it.
pub struct EcsVisualHost<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    visuals: &'a BoardVisuals,
    scale: f32,
}

impl<'a, 'w, 's> EcsVisualHost<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, visuals: &'a BoardVisuals, scale: f32) -> Self {
        Self {
            commands,
            visuals,
            scale,
        }
    }
}

impl VisualHost for EcsVisualHost<'_, '_, '_> {
    type Handle = Entity;

    fn create_visual(&mut self, side: PieceSide) -> Entity {
        let mesh = self.visuals.piece_mesh.clone();
        let material = self.visuals.piece_material(side);
        // Sit the cylinder on the board surface rather than half inside it
        let mesh_transform = Transform::from_translation(Vec3::Y * PIECE_HEIGHT * 0.5 * self.scale)
            .with_scale(Vec3::splat(self.scale));

        self.commands
            .spawn((
                Transform::default(),
                Visibility::Inherited,
                Name::new(format!("{side:?} piece")),
            ))
            .observe(on_piece_drag_start)
            .observe(on_piece_drag)
            .observe(on_piece_drag_end)
            .with_children(|parent| {
                parent.spawn((Mesh3d(mesh), MeshMaterial3d(material), mesh_transform));
            })
            .id()
    }

    fn set_world_position(&mut self, handle: Entity, position: Vec3) {
        self.commands
            .entity(handle)
            .insert(Transform::from_translation(position));
    }
}
