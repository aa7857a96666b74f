//! Board messages
//!
//! [`DropPiece`] is the board's inbound call: one per pointer release.
//! [`DropResolved`] reports what each drop did, for anything that wants to
//! react (sound, UI, tests); the board itself never reads it.

use bevy::prelude::*;

use crate::board::{DropOutcome, PieceId};
use crate::input::picker::DropRequest;

/// Drop `piece` at `world_position`
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct DropPiece {
    pub piece: PieceId,
    pub world_position: Vec3,
}

impl From<DropRequest> for DropPiece {
    fn from(request: DropRequest) -> Self {
        Self {
            piece: request.piece,
            world_position: request.world_position,
        }
    }
}

/// Result of applying one [`DropPiece`]
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResolved(pub DropOutcome);
