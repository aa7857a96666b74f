//! Visual capability supplied by the host engine
//!
//! The board never touches meshes, entities or transforms directly. Whatever
//! engine renders the pieces implements [`VisualHost`]; the board asks it to
//! create one visual per piece and to move visuals when pieces are placed.

use bevy::math::Vec3;
use std::fmt::Debug;

use super::grid::PieceSide;

/// Engine-side operations the board needs for piece visuals
pub trait VisualHost {
    /// Opaque handle to one visual piece object (an `Entity` under Bevy)
    type Handle: Copy + Eq + Debug;

    /// Instantiate the visual for a new piece of the given side
    fn create_visual(&mut self, side: PieceSide) -> Self::Handle;

    /// Move a visual to a world position
    fn set_world_position(&mut self, handle: Self::Handle, position: Vec3);
}
