//! The live board resource

use bevy::prelude::*;

use crate::board::{BoardGrid, Piece};

/// The board in play, with piece visuals as entities
///
/// Inserted by the board setup system; systems and observers receive it as a
/// resource rather than searching the world for it.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct ActiveBoard(pub BoardGrid<Entity>);

impl ActiveBoard {
    /// Piece whose visual is `entity`
    pub fn piece_for_entity(&self, entity: Entity) -> Option<&Piece<Entity>> {
        self.0.piece_by_visual(entity)
    }
}
