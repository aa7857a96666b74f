//! Pointer ray debug drawing
//!
//! With `debug_pointer` set in [`BoardConfig`], the mouse ray is drawn each
//! frame: red while idle, yellow while a piece is held. During a drag the
//! board hit point is marked with a blue sphere.
//!
//! Lives in its own plugin because `Gizmos` needs the gizmo plugin from
//! `DefaultPlugins`, which headless apps do not have.

use bevy::color::palettes::basic::{BLUE, RED, YELLOW};
use bevy::math::Ray3d;
use bevy::picking::pointer::{PointerId, PointerLocation};
use bevy::prelude::*;

use crate::core::BoardConfig;
use crate::game::resources::{ActiveBoard, DragState};
use crate::input::picker::pointer_hit;

/// Radius of the hit marker, as a fraction of the cell radius
const HIT_MARKER_SCALE: f32 = 0.5;

pub struct PointerDebugPlugin;

impl Plugin for PointerDebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_pointer_debug.run_if(pointer_debug_enabled));
    }
}

fn pointer_debug_enabled(config: Option<Res<BoardConfig>>) -> bool {
    config.is_some_and(|config| config.debug_pointer)
}

/// Ray colour for the current drag state
pub fn debug_ray_color(dragging: bool) -> Color {
    if dragging {
        YELLOW.into()
    } else {
        RED.into()
    }
}

/// Far end of the drawn ray segment
pub fn debug_ray_end(ray: Ray3d, max_distance: f32) -> Vec3 {
    ray.get_point(max_distance)
}

fn draw_pointer_debug(
    mut gizmos: Gizmos,
    config: Res<BoardConfig>,
    board: Option<Res<ActiveBoard>>,
    drag_state: Option<Res<DragState>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    pointers: Query<(&PointerId, &PointerLocation)>,
) {
    let Some(position) = pointers
        .iter()
        .filter(|(id, _)| id.is_mouse())
        .find_map(|(_, location)| location.location().map(|location| location.position))
    else {
        return;
    };
    let Some((camera, camera_transform)) = cameras.iter().next() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, position) else {
        return;
    };

    let dragging = drag_state.is_some_and(|drag| drag.is_dragging());
    gizmos.line(
        ray.origin,
        debug_ray_end(ray, config.ray_distance),
        debug_ray_color(dragging),
    );

    if !dragging {
        return;
    }
    let Some(board) = board else {
        return;
    };
    let geometry = board.geometry();
    if let Some(hit) = pointer_hit(ray, geometry.frame(), config.ray_distance) {
        gizmos.sphere(
            Isometry3d::from_translation(hit),
            geometry.cell_radius() * HIT_MARKER_SCALE,
            BLUE,
        );
    }
}
