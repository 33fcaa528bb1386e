// Support configuring Bevy lints within code.
#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]
// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

#[cfg(feature = "dev_native")]
mod debug_tools;

mod camera;
mod hud;
mod input;
mod level;
mod player;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use tavern_shared::{LevelPreset, PlayerSim};

use crate::{level::Level, player::PlayerStart};

/// Usage: `tavern-client [platformer | tavern | tavern-free]`
fn main() -> AppExit {
    let preset = match std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<LevelPreset>())
        .transpose()
    {
        Ok(preset) => preset.unwrap_or_default(),
        Err(err) => {
            eprintln!("{err}");
            return AppExit::error();
        }
    };

    // Validate the level before opening a window.
    let grid = match preset.build_grid() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("level `{}` is malformed: {err}", preset.name);
            return AppExit::error();
        }
    };
    let sim = match PlayerSim::spawn(&preset, &grid) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("cannot spawn the player in `{}`: {err}", preset.name);
            return AppExit::error();
        }
    };

    App::new()
        .insert_resource(Level { preset, grid })
        .insert_resource(PlayerStart(sim))
        .add_plugins(AppPlugin)
        .run()
}

pub struct AppPlugin;
impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Window {
                        title: "Tavern".to_string(),
                        fit_canvas_to_parent: true,
                        ..default()
                    }
                    .into(),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "wgpu=error,naga=warn,tavern_shared=debug,tavern_client=debug"
                        .to_string(),
                    ..default()
                })
                // Tiles are flat colour blocks; keep edges crisp.
                .set(ImagePlugin::default_nearest()),
        );

        app.insert_resource(ClearColor(Color::BLACK));

        app.add_plugins((
            input::plugin,
            level::plugin,
            player::plugin,
            camera::plugin,
            hud::plugin,
        ));

        #[cfg(feature = "dev_native")]
        app.add_plugins(debug_tools::plugin);
    }
}
