//! Drag resource for the piece being carried by the pointer

use bevy::prelude::*;

use crate::input::picker::PiecePicker;

/// Resource wrapping the picker state for the primary pointer
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct DragState(pub PiecePicker);

impl DragState {
    pub fn new(lift: f32) -> Self {
        Self(PiecePicker::new(lift))
    }

    pub fn clear(&mut self) {
        self.0.cancel();
    }
}
