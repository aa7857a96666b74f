//! Grid coordinates and the world ↔ grid transform
//!
//! A board is a `width x depth` grid of cells laid out on a plane. The plane is
//! positioned in the world by a [`BoardFrame`] (translation + rotation). Cell
//! `(0, 0)` is the bottom-left corner; `x` grows along the frame's right axis
//! and `z` grows along the frame's forward axis.
//!
//! # Checkerboard Coloring
//!
//! Only cells whose `x` and `z` share parity are playable. With `(0, 0)`
//! playable, this is the dark-square diagonal pattern of a checkers board.
//!
//! # World → Grid
//!
//! The conversion is saturating: world positions are normalized against the
//! board extents, clamped to `[0, 1]` and rounded to the nearest cell, so any
//! position (even far outside the board) maps to an in-range cell.

use bevy::math::{Quat, Vec3};

use super::error::{BoardError, BoardResult};

/// One discrete cell on the board grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub x: u8,
    pub z: u8,
}

impl GridCoord {
    pub const fn new(x: u8, z: u8) -> Self {
        Self { x, z }
    }

    /// Returns true if this cell is playable (x and z share parity)
    pub fn is_playable(&self) -> bool {
        self.x % 2 == self.z % 2
    }
}

impl From<(u8, u8)> for GridCoord {
    fn from((x, z): (u8, u8)) -> Self {
        Self { x, z }
    }
}

/// Placement of the board plane in world space
///
/// Scale is not part of the frame; cell size is controlled by the cell radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardFrame {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for BoardFrame {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl BoardFrame {
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Frame rotated about the world up axis by `yaw_degrees`
    pub fn from_yaw(translation: Vec3, yaw_degrees: f32) -> Self {
        Self::new(translation, Quat::from_rotation_y(yaw_degrees.to_radians()))
    }

    /// Board-local +X in world space (direction of increasing `x`)
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Board-local +Z in world space (direction of increasing `z`)
    ///
    /// Note this is the board's depth axis, not Bevy's `Transform::forward`
    /// (which points down -Z).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Board-local +Y in world space (normal of the board plane)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Express a world-space point in board-local coordinates
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse() * (world - self.translation)
    }
}

/// Board dimensions plus everything needed to map between cells and world space
///
/// Construction validates the dimensions, so every `BoardGeometry` in
/// existence describes a well-formed even-sized board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    width: u8,
    depth: u8,
    cell_radius: f32,
    frame: BoardFrame,
    /// World-space bottom-left corner of the grid
    anchor: Vec3,
}

impl BoardGeometry {
    /// Validate the dimensions and precompute the anchor
    pub fn new(width: u8, depth: u8, cell_radius: f32, frame: BoardFrame) -> BoardResult<Self> {
        if width == 0 || depth == 0 || width % 2 != 0 || depth % 2 != 0 {
            return Err(BoardError::InvalidDimensions { width, depth });
        }
        if !cell_radius.is_finite() || cell_radius <= 0.0 {
            return Err(BoardError::InvalidCellRadius {
                radius: cell_radius,
            });
        }

        let mut geometry = Self {
            width,
            depth,
            cell_radius,
            frame,
            anchor: Vec3::ZERO,
        };
        geometry.anchor = frame.translation
            - frame.right() * geometry.half_width()
            - frame.forward() * geometry.half_depth();
        Ok(geometry)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn cell_radius(&self) -> f32 {
        self.cell_radius
    }

    pub fn cell_diameter(&self) -> f32 {
        self.cell_radius * 2.0
    }

    pub fn frame(&self) -> &BoardFrame {
        &self.frame
    }

    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Half the board's world size along its right axis
    pub fn half_width(&self) -> f32 {
        self.width as f32 * self.cell_radius
    }

    /// Half the board's world size along its forward axis
    pub fn half_depth(&self) -> f32 {
        self.depth as f32 * self.cell_radius
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.depth as usize
    }

    pub fn contains(&self, cell: GridCoord) -> bool {
        cell.x < self.width && cell.z < self.depth
    }

    /// Row-major index into a `width * depth` slot array
    pub(crate) fn index(&self, cell: GridCoord) -> usize {
        cell.z as usize * self.width as usize + cell.x as usize
    }

    /// World position of a cell's centre
    pub fn cell_center(&self, cell: GridCoord) -> Vec3 {
        let diameter = self.cell_diameter();
        let x_offset = cell.x as f32 * diameter + self.cell_radius;
        let z_offset = cell.z as f32 * diameter + self.cell_radius;
        self.anchor + self.frame.right() * x_offset + self.frame.forward() * z_offset
    }

    /// Nearest cell to a world position, saturating at the board edges
    pub fn cell_at(&self, world: Vec3) -> GridCoord {
        let local = self.frame.to_local(world);
        let percent_x = normalized(local.x, self.half_width());
        let percent_z = normalized(local.z, self.half_depth());
        GridCoord {
            x: nearest_index(self.width, percent_x),
            z: nearest_index(self.depth, percent_z),
        }
    }

    /// Every cell on the board, row by row
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> {
        let (width, depth) = (self.width, self.depth);
        (0..depth).flat_map(move |z| (0..width).map(move |x| GridCoord { x, z }))
    }
}

/// Map a local offset in `[-half, half]` to `[0, 1]`, clamping anything outside
fn normalized(offset: f32, half_extent: f32) -> f32 {
    ((offset + half_extent) / (half_extent * 2.0)).clamp(0.0, 1.0)
}

fn nearest_index(dimension: u8, percent: f32) -> u8 {
    let scaled = ((dimension - 1) as f32 * percent).round_ties_even();
    // NaN casts to 0; the clamp above already bounds the finite case
    scaled as u8
}
