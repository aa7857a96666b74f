use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use checkerboard::core::{save_config, BoardConfig, ConfigSource, CorePlugin, WindowConfig};
use checkerboard::game::CheckerBoardPlugin;
use checkerboard::input::PointerDebugPlugin;

/// Drag-and-drop checkers pieces on a 3D board
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Board config file (JSON); defaults to board.json in the user config dir
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the board width (must be even)
    #[arg(long)]
    width: Option<u8>,

    /// Override the board depth (must be even)
    #[arg(long)]
    depth: Option<u8>,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> AppExit {
    let cli = Cli::parse();
    let source = ConfigSource {
        path: cli.config,
        width: cli.width,
        depth: cli.depth,
    };

    if cli.write_default_config {
        let path = source.resolved_path();
        return match save_config(&path, &BoardConfig::default()) {
            Ok(()) => {
                println!("Wrote default board config to {}", path.display());
                AppExit::Success
            }
            Err(e) => {
                eprintln!("Failed to write board config to {}: {}", path.display(), e);
                AppExit::error()
            }
        };
    }

    let window = WindowConfig::default().to_window();

    App::new()
        .insert_resource(source)
        // Core plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(MeshPickingPlugin)
        // Board
        .add_plugins((CorePlugin, CheckerBoardPlugin, PointerDebugPlugin))
        // Startup systems
        .add_systems(Startup, setup)
        .run()
}

fn setup(mut commands: Commands, config: Option<Res<BoardConfig>>) {
    let (target, extent) = config
        .map(|config| {
            let size = config.width.max(config.depth) as f32 * config.cell_radius * 2.0;
            (Vec3::from_array(config.origin), size)
        })
        .unwrap_or((Vec3::ZERO, 8.0));

    // Lighting
    commands.spawn((
        PointLight {
            shadows_enabled: true,
            intensity: 2_000_000.0,
            range: extent * 4.0,
            ..default()
        },
        Transform::from_translation(target + Vec3::new(extent * 0.5, extent, extent * 0.5)),
    ));

    // Camera looking down at the board from the light side
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(target + Vec3::new(0.0, extent * 1.1, -extent))
            .looking_at(target, Vec3::Y),
    ));
}
