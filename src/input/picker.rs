//! Piece picker - drag state machine
//!
//! Tracks which piece is being dragged and where the pointer last hit the
//! board, independently of how pointer events are delivered. The Bevy
//! observers in [`super::pointer`] feed it; tests drive it directly.
//!
//! # Drag Lifecycle
//!
//! 1. [`PiecePicker::begin_drag`] - a piece is grabbed (ignored while another
//!    piece is already held)
//! 2. [`PiecePicker::track`] - every pointer move: records the board hit and
//!    returns where the dragged visual should be drawn
//! 3. [`PiecePicker::release`] - the pointer is released: yields the drop to
//!    apply to the board
//!
//! While dragging over a non-playable cell the preview reverts to the piece's
//! resting cell on every such frame, and follows the pointer again once it is
//! back over a playable cell.

use bevy::math::{primitives::InfinitePlane3d, Ray3d, Vec3};

use crate::board::{BoardFrame, BoardGrid, PieceId};

/// A request to drop a piece at a world position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropRequest {
    pub piece: PieceId,
    pub world_position: Vec3,
}

/// Drag state for a single pointer
#[derive(Debug, Clone, PartialEq)]
pub struct PiecePicker {
    selected: Option<PieceId>,
    hit_point: Option<Vec3>,
    /// Height the dragged piece floats above the hit point
    lift: f32,
}

impl PiecePicker {
    pub fn new(lift: f32) -> Self {
        Self {
            selected: None,
            hit_point: None,
            lift,
        }
    }

    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.selected.is_some()
    }

    /// Last recorded board hit for the current drag
    pub fn hit_point(&self) -> Option<Vec3> {
        self.hit_point
    }

    /// Grab a piece. Returns false if a piece is already held.
    pub fn begin_drag(&mut self, piece: PieceId) -> bool {
        if self.selected.is_some() {
            return false;
        }
        self.selected = Some(piece);
        self.hit_point = None;
        true
    }

    /// Record a pointer move and return the preview position for the held piece
    ///
    /// Returns `None` when nothing is held or the pointer missed the board.
    pub fn track<H>(&mut self, board: &BoardGrid<H>, hit: Option<Vec3>) -> Option<Vec3>
    where
        H: Copy + Eq + std::fmt::Debug,
    {
        let piece = self.selected?;
        let hit = hit?;
        self.hit_point = Some(hit);

        if board.is_playable(board.cell_at(hit)) {
            Some(hit + board.geometry().frame().up() * self.lift)
        } else {
            board.resting_position(piece)
        }
    }

    /// Let go of the held piece
    ///
    /// Without any recorded hit the drop targets the piece's own cell, which
    /// the board resolves as staying put.
    pub fn release<H>(&mut self, board: &BoardGrid<H>) -> Option<DropRequest>
    where
        H: Copy + Eq + std::fmt::Debug,
    {
        let piece = self.selected.take()?;
        let hit = self.hit_point.take();
        let world_position = hit.or_else(|| board.resting_position(piece))?;
        Some(DropRequest {
            piece,
            world_position,
        })
    }

    /// Forget the current drag without dropping
    pub fn cancel(&mut self) {
        self.selected = None;
        self.hit_point = None;
    }
}

/// Intersect a pointer ray with the board plane
///
/// Hits behind the ray origin or farther than `max_distance` are misses.
pub fn pointer_hit(ray: Ray3d, frame: &BoardFrame, max_distance: f32) -> Option<Vec3> {
    let plane = InfinitePlane3d::new(frame.up());
    let distance = ray.intersect_plane(frame.translation, plane)?;
    (distance <= max_distance).then(|| ray.get_point(distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardGeometry, GridCoord, PieceSide, VisualHost};
    use bevy::math::Dir3;

    struct NullHost;

    impl VisualHost for NullHost {
        type Handle = u16;

        fn create_visual(&mut self, _side: PieceSide) -> u16 {
            0
        }

        fn set_world_position(&mut self, _handle: u16, _position: Vec3) {}
    }

    fn board() -> BoardGrid<u16> {
        let geometry =
            BoardGeometry::new(8, 8, 0.5, BoardFrame::default()).expect("valid board");
        BoardGrid::new(geometry, &mut NullHost)
    }

    #[test]
    fn test_second_grab_is_ignored() {
        let mut picker = PiecePicker::new(0.5);
        assert!(picker.begin_drag(PieceId(3)));
        assert!(!picker.begin_drag(PieceId(4)));
        assert_eq!(picker.selected(), Some(PieceId(3)));
    }

    #[test]
    fn test_track_follows_pointer_over_playable_cell() {
        let board = board();
        let mut picker = PiecePicker::new(0.5);
        picker.begin_drag(PieceId(0));

        let hit = board.cell_center(GridCoord::new(3, 3));
        let preview = picker.track(&board, Some(hit));

        assert_eq!(preview, Some(hit + Vec3::Y * 0.5));
        assert_eq!(picker.hit_point(), Some(hit));
    }

    #[test]
    fn test_track_reverts_over_non_playable_cell() {
        //! Hovering a non-playable cell puts the preview back on the piece's cell
        let board = board();
        let mut picker = PiecePicker::new(0.5);
        picker.begin_drag(PieceId(0));

        let preview = picker.track(&board, Some(board.cell_center(GridCoord::new(0, 1))));

        assert_eq!(preview, board.resting_position(PieceId(0)));
    }

    #[test]
    fn test_track_without_drag_or_hit_does_nothing() {
        let board = board();
        let mut picker = PiecePicker::new(0.5);
        assert_eq!(picker.track(&board, Some(Vec3::ZERO)), None);

        picker.begin_drag(PieceId(0));
        assert_eq!(picker.track(&board, None), None);
        assert_eq!(picker.hit_point(), None);
    }

    #[test]
    fn test_release_uses_last_hit() {
        let board = board();
        let mut picker = PiecePicker::new(0.5);
        picker.begin_drag(PieceId(2));
        picker.track(&board, Some(Vec3::new(1.0, 0.0, 1.0)));
        picker.track(&board, Some(Vec3::new(0.5, 0.0, 0.5)));

        let request = picker.release(&board);

        assert_eq!(
            request,
            Some(DropRequest {
                piece: PieceId(2),
                world_position: Vec3::new(0.5, 0.0, 0.5),
            })
        );
        assert!(!picker.is_dragging());
        assert_eq!(picker.release(&board), None);
    }

    #[test]
    fn test_release_without_hit_targets_resting_cell() {
        let board = board();
        let mut picker = PiecePicker::new(0.5);
        picker.begin_drag(PieceId(1));

        let request = picker.release(&board).expect("held piece produces a drop");

        assert_eq!(Some(request.world_position), board.resting_position(PieceId(1)));
    }

    #[test]
    fn test_cancel_clears_drag() {
        let mut picker = PiecePicker::new(0.5);
        picker.begin_drag(PieceId(1));
        picker.cancel();
        assert!(!picker.is_dragging());
        assert!(picker.begin_drag(PieceId(2)));
    }

    #[test]
    fn test_pointer_hit_on_board_plane() {
        let frame = BoardFrame::default();
        let ray = Ray3d::new(Vec3::new(1.0, 10.0, 2.0), Dir3::NEG_Y);

        assert_eq!(pointer_hit(ray, &frame, 1000.0), Some(Vec3::new(1.0, 0.0, 2.0)));
        assert_eq!(pointer_hit(ray, &frame, 5.0), None);
    }

    #[test]
    fn test_pointer_hit_misses_when_facing_away() {
        let frame = BoardFrame::default();
        let ray = Ray3d::new(Vec3::new(0.0, 10.0, 0.0), Dir3::Y);
        assert_eq!(pointer_hit(ray, &frame, 1000.0), None);
    }
}
