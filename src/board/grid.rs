//! Board grid - occupancy, opening layout and drop resolution
//!
//! [`BoardGrid`] is the single owner of piece placement. Each piece stores the
//! cell it sits on, and the occupancy map stores which piece sits on each
//! cell. Both sides of that relationship are only ever written by the private
//! placement primitive ([`BoardGrid::place`]), so they cannot drift apart.
//!
//! # Drop Resolution
//!
//! [`BoardGrid::drop_piece`] turns a world position into a cell and then:
//!
//! - non-playable cell → the piece snaps back to its own cell
//! - empty playable cell → the piece moves there
//! - cell held by another piece → the two pieces swap cells
//! - cell held by the piece itself → the piece stays
//! - unknown piece id → nothing happens
//!
//! Every branch finishes all of its mutations before returning.

use bevy::math::Vec3;
use std::fmt::Debug;
use tracing::{debug, trace, warn};

use super::coords::{BoardGeometry, GridCoord};
use super::host::VisualHost;

/// Maximum number of rows each side fills in the opening layout
pub const OPENING_ROWS: u8 = 3;

/// Which side a piece belongs to (display only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PieceSide {
    #[default]
    Light,
    Dark,
}

/// Stable identity of a piece, assigned in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u16);

impl PieceId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One piece on the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece<H> {
    pub id: PieceId,
    pub side: PieceSide,
    pub cell: GridCoord,
    /// World position derived from `cell`
    pub position: Vec3,
    pub visual: H,
}

/// What a drop did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved to an empty playable cell
    Moved {
        piece: PieceId,
        from: GridCoord,
        to: GridCoord,
    },
    /// The piece traded cells with the occupant of the target
    Swapped {
        piece: PieceId,
        other: PieceId,
        from: GridCoord,
        to: GridCoord,
    },
    /// The target was the piece's own cell
    Stayed { piece: PieceId, cell: GridCoord },
    /// The target was not playable; the piece snapped back to `cell`
    Rejected {
        piece: PieceId,
        target: GridCoord,
        cell: GridCoord,
    },
    /// The piece id does not exist on this board
    Ignored { piece: PieceId },
}

impl DropOutcome {
    /// True if any piece changed cell
    pub fn changed_board(&self) -> bool {
        matches!(self, DropOutcome::Moved { .. } | DropOutcome::Swapped { .. })
    }
}

/// Rows each side fills at the start: three, or fewer on boards too shallow
/// for two non-overlapping blocks of three
pub fn opening_rows(depth: u8) -> u8 {
    OPENING_ROWS.min(depth / 2)
}

/// Opening arrangement for a `width x depth` board
///
/// Light pieces fill the playable cells of the first rows, dark pieces the
/// playable cells of the last rows. Order matches piece id assignment.
pub fn opening_layout(width: u8, depth: u8) -> Vec<(PieceSide, GridCoord)> {
    let rows = opening_rows(depth);
    let blocks = [
        (PieceSide::Light, 0..rows),
        (PieceSide::Dark, depth - rows..depth),
    ];

    let mut layout = Vec::new();
    for (side, block) in blocks {
        for x in (0..width).step_by(2) {
            for z in block.clone() {
                let grid_x = if z % 2 == 0 { x } else { x + 1 };
                layout.push((side, GridCoord::new(grid_x, z)));
            }
        }
    }
    layout
}

/// The board: geometry, occupancy map and pieces
///
/// `H` is the host's visual handle type.
#[derive(Debug, Clone)]
pub struct BoardGrid<H> {
    geometry: BoardGeometry,
    /// Row-major occupancy map, `width * depth` slots
    slots: Vec<Option<PieceId>>,
    pieces: Vec<Piece<H>>,
}

impl<H: Copy + Eq + Debug> BoardGrid<H> {
    /// Build the board and generate the opening layout
    ///
    /// The geometry is already validated, so this cannot fail.
    pub fn new<V>(geometry: BoardGeometry, host: &mut V) -> Self
    where
        V: VisualHost<Handle = H>,
    {
        let layout = opening_layout(geometry.width(), geometry.depth());
        let mut board = Self {
            geometry,
            slots: vec![None; geometry.cell_count()],
            pieces: Vec::with_capacity(layout.len()),
        };

        for (side, cell) in layout {
            let id = PieceId(board.pieces.len() as u16);
            let visual = host.create_visual(side);
            board.pieces.push(Piece {
                id,
                side,
                cell,
                position: geometry.cell_center(cell),
                visual,
            });
            board.place(id, cell, host);
        }

        debug!(
            "[BOARD] Generated {}x{} board with {} pieces",
            geometry.width(),
            geometry.depth(),
            board.pieces.len()
        );
        board
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece<H>> {
        self.pieces.get(id.index())
    }

    pub fn pieces(&self) -> &[Piece<H>] {
        &self.pieces
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Piece whose visual is `handle`
    pub fn piece_by_visual(&self, handle: H) -> Option<&Piece<H>> {
        self.pieces.iter().find(|piece| piece.visual == handle)
    }

    /// Occupant of a cell, `None` for empty or out-of-range cells
    pub fn piece_at(&self, cell: GridCoord) -> Option<PieceId> {
        if !self.geometry.contains(cell) {
            return None;
        }
        self.slots[self.geometry.index(cell)]
    }

    /// The occupancy map, row-major
    pub fn occupancy(&self) -> &[Option<PieceId>] {
        &self.slots
    }

    /// Owned copy of the occupancy map, for before/after comparisons
    pub fn snapshot(&self) -> Vec<Option<PieceId>> {
        self.slots.clone()
    }

    /// Cells that currently hold a piece, row by row
    pub fn occupied_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.geometry
            .cells()
            .filter(|cell| self.slots[self.geometry.index(*cell)].is_some())
    }

    pub fn is_playable(&self, cell: GridCoord) -> bool {
        self.geometry.contains(cell) && cell.is_playable()
    }

    pub fn cell_at(&self, world: Vec3) -> GridCoord {
        self.geometry.cell_at(world)
    }

    pub fn cell_center(&self, cell: GridCoord) -> Vec3 {
        self.geometry.cell_center(cell)
    }

    /// World position of the cell a piece currently occupies
    pub fn resting_position(&self, id: PieceId) -> Option<Vec3> {
        self.piece(id).map(|piece| piece.position)
    }

    /// Resolve a drop of `id` at `world` into a move, swap or snap-back
    pub fn drop_piece<V>(&mut self, id: PieceId, world: Vec3, host: &mut V) -> DropOutcome
    where
        V: VisualHost<Handle = H>,
    {
        let Some(from) = self.piece(id).map(|piece| piece.cell) else {
            warn!("[BOARD] Drop ignored: unknown piece {:?}", id);
            return DropOutcome::Ignored { piece: id };
        };

        let target = self.geometry.cell_at(world);
        if !target.is_playable() {
            debug!(
                "[BOARD] Drop of {:?} on non-playable ({}, {}); snapping back to ({}, {})",
                id, target.x, target.z, from.x, from.z
            );
            self.place(id, from, host);
            return DropOutcome::Rejected {
                piece: id,
                target,
                cell: from,
            };
        }

        match self.piece_at(target) {
            None => {
                self.place(id, target, host);
                debug!(
                    "[BOARD] Moved {:?} ({}, {}) -> ({}, {})",
                    id, from.x, from.z, target.x, target.z
                );
                DropOutcome::Moved {
                    piece: id,
                    from,
                    to: target,
                }
            }
            Some(occupant) if occupant == id => {
                self.place(id, from, host);
                DropOutcome::Stayed {
                    piece: id,
                    cell: from,
                }
            }
            Some(occupant) => {
                self.swap(id, occupant, host);
                debug!(
                    "[BOARD] Swapped {:?} ({}, {}) with {:?} ({}, {})",
                    id, from.x, from.z, occupant, target.x, target.z
                );
                DropOutcome::Swapped {
                    piece: id,
                    other: occupant,
                    from,
                    to: target,
                }
            }
        }
    }

    /// Put a piece back on its own cell (visual only changes)
    pub fn snap_back<V>(&mut self, id: PieceId, host: &mut V) -> bool
    where
        V: VisualHost<Handle = H>,
    {
        let Some(cell) = self.piece(id).map(|piece| piece.cell) else {
            return false;
        };
        self.place(id, cell, host);
        true
    }

    /// Exchange the cells of two pieces; unknown ids make this a no-op
    fn swap<V>(&mut self, a: PieceId, b: PieceId, host: &mut V)
    where
        V: VisualHost<Handle = H>,
    {
        let (Some(a_cell), Some(b_cell)) = (
            self.piece(a).map(|piece| piece.cell),
            self.piece(b).map(|piece| piece.cell),
        ) else {
            return;
        };
        self.place(a, b_cell, host);
        self.place(b, a_cell, host);
    }

    /// The placement primitive
    ///
    /// Writes the cell and world position to the piece and the host, stores
    /// the piece in the occupancy map and clears the slot it previously held.
    /// `cell` must be on the board and `id` must exist.
    fn place<V>(&mut self, id: PieceId, cell: GridCoord, host: &mut V)
    where
        V: VisualHost<Handle = H>,
    {
        debug_assert!(self.geometry.contains(cell), "placement outside board: {cell:?}");
        let position = self.geometry.cell_center(cell);
        let old_index = self.geometry.index(self.pieces[id.index()].cell);
        let new_index = self.geometry.index(cell);

        // A swap may already have written another piece into our old slot
        if self.slots[old_index] == Some(id) {
            self.slots[old_index] = None;
        }
        self.slots[new_index] = Some(id);

        let piece = &mut self.pieces[id.index()];
        piece.cell = cell;
        piece.position = position;
        host.set_world_position(piece.visual, position);
        trace!("[BOARD] Placed {:?} at ({}, {})", id, cell.x, cell.z);
    }

    /// True if the occupancy map and the pieces agree with each other and
    /// every piece sits on a playable cell
    pub fn is_consistent(&self) -> bool {
        let pieces_agree = self.pieces.iter().all(|piece| {
            self.geometry.contains(piece.cell)
                && piece.cell.is_playable()
                && self.slots[self.geometry.index(piece.cell)] == Some(piece.id)
                && piece.position == self.geometry.cell_center(piece.cell)
        });
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        pieces_agree && occupied == self.pieces.len()
    }
}
