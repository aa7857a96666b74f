//! Board configuration persistence
//!
//! Loads [`BoardConfig`] from a JSON file before the board is generated, and
//! can write the defaults out as a starting point for editing.
//!
//! # File Location
//!
//! By default the config lives in `board.json` in the user's configuration
//! directory, falling back to the working directory when no such directory
//! exists. A path given on the command line replaces the default.
//!
//! # Error Handling
//!
//! - Default location missing → defaults are used
//! - Default location unreadable or malformed → logged, defaults are used
//! - Explicit path unreadable or malformed → fatal, the app exits
//! - Any invalid board geometry (odd or zero dimensions) → fatal, the app exits
//!
//! Invalid geometry is always rejected here, before any layout is generated.

use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use super::config::BoardConfig;
use super::error::ConfigResult;

/// Config filename
const CONFIG_FILENAME: &str = "board.json";

/// Where the config comes from and which values the command line overrides
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigSource {
    /// Explicit config file; `None` means the default location
    pub path: Option<PathBuf>,
    pub width: Option<u8>,
    pub depth: Option<u8>,
}

impl ConfigSource {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_config_path)
    }

    /// Apply command line overrides on top of a loaded config
    pub fn apply_overrides(&self, config: &mut BoardConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
    }
}

/// Resolve the default config file path
///
/// E.g. ~/.config/checkerboard/board.json on Linux. Falls back to a local
/// "board.json" if the system config dir cannot be found.
pub fn default_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "checkerboard", "Checkerboard") {
        proj_dirs.config_dir().join(CONFIG_FILENAME)
    } else {
        PathBuf::from(CONFIG_FILENAME)
    }
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> ConfigResult<BoardConfig> {
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str::<BoardConfig>(&contents)?;
    Ok(config)
}

/// Write a config file, creating its directory if needed
pub fn save_config(path: &Path, config: &BoardConfig) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// Resolve the final configuration for a source
///
/// Returns an error only for failures that must stop startup.
pub fn resolve_config(source: &ConfigSource) -> ConfigResult<BoardConfig> {
    let path = source.resolved_path();
    let mut config = match read_config(&path) {
        Ok(config) => {
            info!("[CONFIG] Loaded board config from {:?}", path);
            config
        }
        Err(e) if source.path.is_some() => return Err(e),
        Err(e) if e.is_not_found() => {
            info!("[CONFIG] No config file found at {:?}. Using defaults.", path);
            BoardConfig::default()
        }
        Err(e) => {
            warn!(
                "[CONFIG] Failed to load config at {:?}: {}. Using defaults.",
                path, e
            );
            BoardConfig::default()
        }
    };

    source.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Load the board config on startup
///
/// Runs in `PreStartup` so the config exists before the board is generated.
/// A config inserted ahead of time (e.g. by tests) is left untouched.
pub fn load_board_config_system(
    mut commands: Commands,
    source: Res<ConfigSource>,
    existing: Option<Res<BoardConfig>>,
    mut exit: MessageWriter<AppExit>,
) {
    if existing.is_some() {
        debug!("[CONFIG] Board config already present, skipping load");
        return;
    }

    match resolve_config(&source) {
        Ok(config) => {
            debug!(
                "[CONFIG] Board {}x{}, cell radius {}",
                config.width, config.depth, config.cell_radius
            );
            commands.insert_resource(config);
        }
        Err(e) => {
            error!("[CONFIG] Unusable board configuration: {}", e);
            exit.write(AppExit::error());
        }
    }
}
