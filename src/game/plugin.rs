//! Checkerboard plugin - board setup, drop resolution and picking glue
//!
//! # Plugin Dependencies
//!
//! - [`crate::core::CorePlugin`] - loads [`BoardConfig`](crate::core::BoardConfig)
//!   in `PreStartup`
//! - `MeshPickingPlugin` (from `DefaultPlugins` + picking) - delivers the
//!   pointer drag events the piece observers listen to
//!
//! # Resources
//!
//! [`BoardVisuals`] is created in [`Plugin::finish`], after every other plugin
//! has registered its asset storage. A `BoardVisuals` inserted ahead of time is
//! kept, which is how headless tests avoid needing mesh/material assets.

use bevy::picking::pointer::PointerInput;
use bevy::prelude::*;

use super::events::{DropPiece, DropResolved};
use super::system_sets::BoardSystems;
use super::systems::{apply_drop_requests, log_drop_outcomes, spawn_checkerboard};
use crate::input::cancel_drag_on_pointer_cancel;
use crate::rendering::BoardVisuals;

/// Plugin wiring the board into a Bevy app
pub struct CheckerBoardPlugin;

impl Plugin for CheckerBoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DropPiece>()
            .add_message::<DropResolved>()
            // Normally registered by the picking plugins, which headless apps lack
            .add_message::<PointerInput>();

        app.configure_sets(
            Update,
            (
                BoardSystems::Input,
                BoardSystems::ApplyDrops,
                BoardSystems::React,
            )
                .chain(),
        );

        app.add_systems(Startup, spawn_checkerboard)
            .add_systems(
                Update,
                (
                    cancel_drag_on_pointer_cancel.in_set(BoardSystems::Input),
                    apply_drop_requests.in_set(BoardSystems::ApplyDrops),
                    log_drop_outcomes.in_set(BoardSystems::React),
                ),
            );
    }

    fn finish(&self, app: &mut App) {
        if !app.world().contains_resource::<BoardVisuals>() {
            app.init_resource::<BoardVisuals>();
        }
    }
}
