//! Board rendering utilities - shared mesh and material handles
//!
//! - **BoardSquare**: Component identifying a board square's cell
//! - **BoardVisuals**: Resource holding the mesh and material handles used for
//!   squares and pieces
//!
//! Meshes are unit-sized; spawners scale them by the cell diameter so one set
//! of assets serves any board configuration.
//!
//! # Headless Use
//!
//! `BoardVisuals` derives `Default` (every handle is the default handle), which
//! lets tests run the board plugins under `MinimalPlugins` without any asset
//! storage.

use bevy::color::palettes::tailwind::*;
use bevy::prelude::*;

use crate::board::{GridCoord, PieceSide};

/// Radius of the unit piece mesh (relative to a cell diameter of 1.0)
pub const PIECE_RADIUS: f32 = 0.4;
/// Height of the unit piece mesh
pub const PIECE_HEIGHT: f32 = 0.2;

/// Marks a board square entity with its cell
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSquare {
    pub cell: GridCoord,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct BoardVisuals {
    pub piece_mesh: Handle<Mesh>,
    pub light_piece: Handle<StandardMaterial>,
    pub dark_piece: Handle<StandardMaterial>,
    pub square_mesh: Handle<Mesh>,
    /// Material for playable (dark) squares
    pub playable_square: Handle<StandardMaterial>,
    /// Material for non-playable (light) squares
    pub blocked_square: Handle<StandardMaterial>,
}

impl BoardVisuals {
    pub fn piece_material(&self, side: PieceSide) -> Handle<StandardMaterial> {
        match side {
            PieceSide::Light => self.light_piece.clone(),
            PieceSide::Dark => self.dark_piece.clone(),
        }
    }

    pub fn square_material(&self, cell: GridCoord) -> Handle<StandardMaterial> {
        if cell.is_playable() {
            self.playable_square.clone()
        } else {
            self.blocked_square.clone()
        }
    }
}

impl FromWorld for BoardVisuals {
    fn from_world(world: &mut World) -> Self {
        let (piece_mesh, square_mesh) = {
            let mut meshes = world
                .get_resource_mut::<Assets<Mesh>>()
                .expect("Assets<Mesh> should be initialized before BoardVisuals");
            (
                meshes.add(Cylinder::new(PIECE_RADIUS, PIECE_HEIGHT)),
                meshes.add(Plane3d::default().mesh().size(1.0, 1.0)),
            )
        };

        let mut materials = world
            .get_resource_mut::<Assets<StandardMaterial>>()
            .expect("Assets<StandardMaterial> should be initialized before BoardVisuals");
        BoardVisuals {
            piece_mesh,
            light_piece: materials.add(Color::from(AMBER_100)),
            dark_piece: materials.add(Color::from(RED_800)),
            square_mesh,
            playable_square: materials.add(Color::from(STONE_800)),
            blocked_square: materials.add(Color::from(STONE_200)),
        }
    }
}

