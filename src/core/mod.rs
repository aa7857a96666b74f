//! Core module - configuration and application infrastructure
//!
//! # Resources
//!
//! - [`BoardConfig`] - board dimensions, placement and picker tuning
//! - [`ConfigSource`] - where the config is read from, plus CLI overrides
//! - [`WindowConfig`] - primary window settings
//!
//! The [`CorePlugin`] loads and validates the board configuration in
//! `PreStartup`, so a malformed board is rejected before any piece exists.

pub mod config;
pub mod error;
pub mod plugin;
pub mod settings_persistence;
pub mod window_config;

// Re-export commonly used items
pub use config::BoardConfig;
pub use error::{ConfigError, ConfigResult};
pub use plugin::CorePlugin;
pub use settings_persistence::{default_config_path, read_config, save_config, ConfigSource};
pub use window_config::WindowConfig;
