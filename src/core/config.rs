//! Board configuration resource
//!
//! The configuration surface supplied once at startup: board dimensions, cell
//! size, where the board sits in the world, and the picker's tuning values.
//! It is immutable for the rest of the session.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{BoardFrame, BoardGeometry, BoardResult};

/// Startup configuration for the board and the piece picker
///
/// Missing fields in a config file take their default values.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of columns (must be even)
    pub width: u8,
    /// Number of rows (must be even)
    pub depth: u8,
    /// Half the width of one cell in world units
    pub cell_radius: f32,
    /// World position of the board centre
    pub origin: [f32; 3],
    /// Board rotation about the world up axis
    pub yaw_degrees: f32,
    /// Height a dragged piece floats above the pointer hit point
    pub piece_lift: f32,
    /// Maximum distance from the camera at which the board can be hit
    pub ray_distance: f32,
    /// Draw the pointer ray and hit point with gizmos
    pub debug_pointer: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 8,
            depth: 8,
            cell_radius: 0.5,
            origin: [0.0, 0.0, 0.0],
            yaw_degrees: 0.0,
            piece_lift: 0.5,
            ray_distance: 1000.0,
            debug_pointer: false,
        }
    }
}

impl BoardConfig {
    pub fn frame(&self) -> BoardFrame {
        BoardFrame::from_yaw(Vec3::from_array(self.origin), self.yaw_degrees)
    }

    /// Validated board geometry for this configuration
    pub fn geometry(&self) -> BoardResult<BoardGeometry> {
        BoardGeometry::new(self.width, self.depth, self.cell_radius, self.frame())
    }

    /// Check the configuration without keeping the geometry
    pub fn validate(&self) -> BoardResult<()> {
        self.geometry().map(|_| ())
    }
}
