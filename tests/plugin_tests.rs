//! Integration tests for the checkerboard plugin
//!
//! Runs the board inside a headless Bevy app (MinimalPlugins, no renderer)
//! and checks that setup spawns the pieces and that queued drops are applied
//! to both the board resource and the piece transforms.
//!
//! Pointer tests trigger the picking events by hand and use a camera whose
//! projection and viewport size are filled in directly, since no render
//! plugin runs to compute them.

use bevy::camera::{ComputedCameraValues, NormalizedRenderTarget, RenderTargetInfo};
use bevy::picking::backend::HitData;
use bevy::picking::events::{Drag, DragEnd, DragStart, Pointer};
use bevy::picking::pointer::{Location, PointerAction, PointerButton, PointerId, PointerInput};
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_4;
use checkerboard::board::{DropOutcome, GridCoord, PieceId};
use checkerboard::core::{BoardConfig, CorePlugin};
use checkerboard::game::events::{DropPiece, DropResolved};
use checkerboard::game::resources::{ActiveBoard, DragState};
use checkerboard::game::system_sets::BoardSystems;
use checkerboard::game::CheckerBoardPlugin;
use checkerboard::rendering::{BoardPiece, BoardVisuals};

/// Collects every resolved drop for inspection
#[derive(Resource, Default, Debug)]
struct OutcomeLog(Vec<DropOutcome>);

fn record_outcomes(mut resolved: MessageReader<DropResolved>, mut log: ResMut<OutcomeLog>) {
    log.0.extend(resolved.read().map(|DropResolved(outcome)| *outcome));
}

/// Headless app with a pre-inserted config so nothing is read from disk
fn board_app(config: BoardConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(BoardVisuals::default())
        .insert_resource(config)
        .init_resource::<OutcomeLog>()
        .add_plugins((CorePlugin, CheckerBoardPlugin))
        .add_systems(Update, record_outcomes.after(BoardSystems::React));
    app
}

fn piece_translation(app: &App, id: PieceId) -> Vec3 {
    let visual = app
        .world()
        .resource::<ActiveBoard>()
        .piece(id)
        .expect("piece exists")
        .visual;
    app.world()
        .get::<Transform>(visual)
        .expect("piece has a transform")
        .translation
}

#[test]
fn test_startup_spawns_board_and_pieces() {
    //! The default config produces 24 piece entities sitting on their cells
    let mut app = board_app(BoardConfig::default());
    app.update();

    let board = app.world().resource::<ActiveBoard>();
    assert_eq!(board.piece_count(), 24);
    assert!(board.is_consistent());
    let pieces: Vec<_> = board.pieces().to_vec();

    let mut query = app.world_mut().query::<&BoardPiece>();
    assert_eq!(query.iter(app.world()).count(), 24);

    for piece in pieces {
        let marker = app
            .world()
            .get::<BoardPiece>(piece.visual)
            .expect("visual carries its piece marker");
        assert_eq!(marker.id, piece.id);
        let by_entity = app
            .world()
            .resource::<ActiveBoard>()
            .piece_for_entity(piece.visual)
            .map(|found| found.id);
        assert_eq!(by_entity, Some(piece.id));
        assert_eq!(piece_translation(&app, piece.id), piece.position);
    }

    assert!(app.world().contains_resource::<DragState>());
    assert!(app.should_exit().is_none());
}

#[test]
fn test_drop_message_swaps_pieces() {
    let mut app = board_app(BoardConfig::default());
    app.update();

    let (target, occupant) = {
        let board = app.world().resource::<ActiveBoard>();
        let cell = GridCoord::new(1, 7);
        (board.cell_center(cell), board.piece_at(cell).expect("dark piece"))
    };

    app.world_mut().write_message(DropPiece {
        piece: PieceId(0),
        world_position: target,
    });
    app.update();

    let log = &app.world().resource::<OutcomeLog>().0;
    assert_eq!(
        log.as_slice(),
        [DropOutcome::Swapped {
            piece: PieceId(0),
            other: occupant,
            from: GridCoord::new(0, 0),
            to: GridCoord::new(1, 7),
        }]
    );

    let board = app.world().resource::<ActiveBoard>();
    assert_eq!(board.piece_at(GridCoord::new(1, 7)), Some(PieceId(0)));
    assert_eq!(board.piece_at(GridCoord::new(0, 0)), Some(occupant));
    let origin_cell = board.cell_center(GridCoord::new(0, 0));

    assert_eq!(piece_translation(&app, PieceId(0)), target);
    assert_eq!(piece_translation(&app, occupant), origin_cell);
}

#[test]
fn test_rejected_drop_restores_transform() {
    //! A drop on a non-playable cell leaves the board alone and puts the
    //! visual back on its cell, even if a drag preview had moved it
    let mut app = board_app(BoardConfig::default());
    app.update();

    let (visual, resting, target) = {
        let board = app.world().resource::<ActiveBoard>();
        let piece = board.piece(PieceId(0)).expect("piece exists");
        (piece.visual, piece.position, board.cell_center(GridCoord::new(0, 1)))
    };
    app.world_mut()
        .get_mut::<Transform>(visual)
        .expect("piece has a transform")
        .translation = Vec3::new(9.0, 9.0, 9.0);

    app.world_mut().write_message(DropPiece {
        piece: PieceId(0),
        world_position: target,
    });
    app.update();

    let log = &app.world().resource::<OutcomeLog>().0;
    assert!(matches!(log.as_slice(), [DropOutcome::Rejected { .. }]));
    assert_eq!(piece_translation(&app, PieceId(0)), resting);
}

#[test]
fn test_custom_size_from_config() {
    let mut app = board_app(BoardConfig {
        width: 4,
        depth: 4,
        ..default()
    });
    app.update();

    // Two rows per side on a 4-deep board, two pieces per row
    let board = app.world().resource::<ActiveBoard>();
    assert_eq!(board.piece_count(), 8);
    assert!(board.is_consistent());
}

#[test]
fn test_odd_dimensions_refuse_to_start() {
    //! An odd width never produces a board; the app asks to exit with an error
    let mut app = board_app(BoardConfig {
        width: 7,
        ..default()
    });
    app.update();

    assert!(!app.world().contains_resource::<ActiveBoard>());
    assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
}

const VIEWPORT: UVec2 = UVec2::new(800, 600);

/// Pointer location in the middle of the viewport
fn viewport_centre() -> Location {
    Location {
        target: NormalizedRenderTarget::None {
            width: VIEWPORT.x,
            height: VIEWPORT.y,
        },
        position: VIEWPORT.as_vec2() / 2.0,
    }
}

/// Camera transform straight above `target`, looking down at it
fn above(target: Vec3) -> GlobalTransform {
    GlobalTransform::from(
        Transform::from_translation(target + Vec3::Y * 10.0).looking_at(target, Vec3::Z),
    )
}

fn spawn_camera(app: &mut App, target: Vec3) -> Entity {
    let aspect = VIEWPORT.x as f32 / VIEWPORT.y as f32;
    let camera = Camera {
        computed: ComputedCameraValues {
            clip_from_view: Mat4::perspective_infinite_reverse_rh(FRAC_PI_4, aspect, 0.1),
            target_info: Some(RenderTargetInfo {
                physical_size: VIEWPORT,
                scale_factor: 1.0,
            }),
            ..default()
        },
        ..default()
    };
    app.world_mut()
        .spawn((Camera3d::default(), camera, above(target)))
        .id()
}

fn move_camera(app: &mut App, camera: Entity, target: Vec3) {
    *app.world_mut()
        .get_mut::<GlobalTransform>(camera)
        .expect("camera has a global transform") = above(target);
}

fn start_drag(app: &mut App, piece: Entity, camera: Entity, button: PointerButton) {
    let event = DragStart {
        button,
        hit: HitData::new(camera, 10.0, None, None),
    };
    app.world_mut()
        .trigger(Pointer::new(PointerId::Mouse, viewport_centre(), event, piece));
}

fn drag(app: &mut App, piece: Entity, button: PointerButton) {
    let event = Drag {
        button,
        distance: Vec2::ZERO,
        delta: Vec2::ZERO,
    };
    app.world_mut()
        .trigger(Pointer::new(PointerId::Mouse, viewport_centre(), event, piece));
}

fn end_drag(app: &mut App, piece: Entity, button: PointerButton) {
    let event = DragEnd {
        button,
        distance: Vec2::ZERO,
    };
    app.world_mut()
        .trigger(Pointer::new(PointerId::Mouse, viewport_centre(), event, piece));
}

fn visual_of(app: &App, id: PieceId) -> Entity {
    app.world()
        .resource::<ActiveBoard>()
        .piece(id)
        .expect("piece exists")
        .visual
}

fn cell_center(app: &App, cell: GridCoord) -> Vec3 {
    app.world().resource::<ActiveBoard>().cell_center(cell)
}

#[test]
fn test_drag_preview_follows_pointer_and_reverts_over_blocked_cells() {
    //! The preview floats above playable cells, sits back on the piece's own
    //! cell over a non-playable one, and the release queues exactly one drop
    let mut app = board_app(BoardConfig::default());
    app.update();

    let piece = visual_of(&app, PieceId(0));
    let open_cell = cell_center(&app, GridCoord::new(3, 3));
    let blocked_cell = cell_center(&app, GridCoord::new(0, 1));
    let resting = cell_center(&app, GridCoord::new(0, 0));
    let camera = spawn_camera(&mut app, open_cell);

    start_drag(&mut app, piece, camera, PointerButton::Primary);
    assert_eq!(app.world().resource::<DragState>().selected(), Some(PieceId(0)));

    drag(&mut app, piece, PointerButton::Primary);
    assert!(piece_translation(&app, PieceId(0)).abs_diff_eq(open_cell + Vec3::Y * 0.5, 1e-3));

    move_camera(&mut app, camera, blocked_cell);
    drag(&mut app, piece, PointerButton::Primary);
    assert!(piece_translation(&app, PieceId(0)).abs_diff_eq(resting, 1e-3));

    move_camera(&mut app, camera, open_cell);
    drag(&mut app, piece, PointerButton::Primary);
    assert!(piece_translation(&app, PieceId(0)).abs_diff_eq(open_cell + Vec3::Y * 0.5, 1e-3));

    end_drag(&mut app, piece, PointerButton::Primary);
    assert!(!app.world().resource::<DragState>().is_dragging());
    app.update();

    let log = &app.world().resource::<OutcomeLog>().0;
    assert_eq!(
        log.as_slice(),
        [DropOutcome::Moved {
            piece: PieceId(0),
            from: GridCoord::new(0, 0),
            to: GridCoord::new(3, 3),
        }]
    );
    assert!(piece_translation(&app, PieceId(0)).abs_diff_eq(open_cell, 1e-5));
}

#[test]
fn test_secondary_button_drag_is_ignored() {
    let mut app = board_app(BoardConfig::default());
    app.update();

    let piece = visual_of(&app, PieceId(0));
    let resting = cell_center(&app, GridCoord::new(0, 0));
    let target = cell_center(&app, GridCoord::new(3, 3));
    let camera = spawn_camera(&mut app, target);

    start_drag(&mut app, piece, camera, PointerButton::Secondary);
    assert!(!app.world().resource::<DragState>().is_dragging());

    drag(&mut app, piece, PointerButton::Secondary);
    end_drag(&mut app, piece, PointerButton::Secondary);
    app.update();

    assert!(app.world().resource::<OutcomeLog>().0.is_empty());
    assert_eq!(piece_translation(&app, PieceId(0)), resting);
}

#[test]
fn test_cancelled_pointer_releases_drag_and_returns_piece() {
    //! A cancel arrives without any DragEnd; the held piece goes home and the
    //! next piece can be picked up
    let mut app = board_app(BoardConfig::default());
    app.update();

    let piece = visual_of(&app, PieceId(0));
    let resting = cell_center(&app, GridCoord::new(0, 0));
    let target = cell_center(&app, GridCoord::new(3, 3));
    let camera = spawn_camera(&mut app, target);

    start_drag(&mut app, piece, camera, PointerButton::Primary);
    drag(&mut app, piece, PointerButton::Primary);
    assert!(!piece_translation(&app, PieceId(0)).abs_diff_eq(resting, 1e-3));

    app.world_mut().write_message(PointerInput::new(
        PointerId::Mouse,
        viewport_centre(),
        PointerAction::Cancel,
    ));
    app.update();

    assert!(!app.world().resource::<DragState>().is_dragging());
    let log = &app.world().resource::<OutcomeLog>().0;
    assert_eq!(
        log.as_slice(),
        [DropOutcome::Stayed {
            piece: PieceId(0),
            cell: GridCoord::new(0, 0),
        }]
    );
    assert_eq!(piece_translation(&app, PieceId(0)), resting);

    let other = visual_of(&app, PieceId(1));
    start_drag(&mut app, other, camera, PointerButton::Primary);
    assert_eq!(app.world().resource::<DragState>().selected(), Some(PieceId(1)));
}

#[test]
fn test_cancel_without_drag_queues_nothing() {
    let mut app = board_app(BoardConfig::default());
    app.update();

    app.world_mut().write_message(PointerInput::new(
        PointerId::Mouse,
        viewport_centre(),
        PointerAction::Cancel,
    ));
    app.update();

    assert!(app.world().resource::<OutcomeLog>().0.is_empty());
}
