//! Core plugin
//!
//! Loads the board configuration before anything else runs.
//!
//! # Plugin Order
//!
//! Add [`CorePlugin`] before [`crate::game::CheckerBoardPlugin`]; the board is
//! generated in `Startup` from the [`BoardConfig`] this plugin inserts in
//! `PreStartup`.
//!
//! [`BoardConfig`]: super::BoardConfig

use bevy::prelude::*;

use super::settings_persistence::{load_board_config_system, ConfigSource};
use super::window_config::sync_window_title;

/// Core plugin for configuration loading
///
/// # Usage
///
/// ```rust,ignore
/// App::new()
///     .insert_resource(ConfigSource { path: Some("board.json".into()), ..default() })
///     .add_plugins(CorePlugin)
///     .add_plugins(CheckerBoardPlugin)
/// ```
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ConfigSource>() {
            app.init_resource::<ConfigSource>();
        }
        app.add_systems(PreStartup, load_board_config_system)
            .add_systems(Startup, sync_window_title);
    }
}
