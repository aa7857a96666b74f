//! Primary window settings
//!
//! The title names the board being played, so several boards opened side by
//! side can be told apart.

use bevy::prelude::*;
use bevy::window::{
    PresentMode, PrimaryWindow, Window, WindowResizeConstraints, WindowResolution,
};

use super::config::BoardConfig;

/// Smallest window in which a full board stays usable
const MIN_WINDOW_SIZE: Vec2 = Vec2::new(640.0, 480.0);

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Logical pixels
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Checkerboard".to_string(),
            width: 1366,
            height: 768,
        }
    }
}

impl WindowConfig {
    /// Window settings titled after a board size
    pub fn for_board(width: u8, depth: u8) -> Self {
        Self {
            title: format!("Checkerboard {width}x{depth}"),
            ..default()
        }
    }

    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resize_constraints: WindowResizeConstraints {
                min_width: MIN_WINDOW_SIZE.x,
                min_height: MIN_WINDOW_SIZE.y,
                ..default()
            },
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

impl From<&BoardConfig> for WindowConfig {
    fn from(config: &BoardConfig) -> Self {
        Self::for_board(config.width, config.depth)
    }
}

/// Retitle the primary window once the board config is known
pub fn sync_window_title(
    config: Option<Res<BoardConfig>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Some(config) = config else {
        return;
    };
    let title = WindowConfig::from(&*config).title;
    for mut window in &mut windows {
        window.title.clone_from(&title);
    }
}
