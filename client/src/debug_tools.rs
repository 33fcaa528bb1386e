//! Debug/performance tooling for native dev builds.
//!
//! Compiled only with `dev_native`. `F3` dumps the player's actor state to the log.

use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use iyes_perf_ui::prelude::*;
use leafwing_input_manager::prelude::ActionState;
use tracing::info;

use crate::{
    input::InputAction,
    level::Level,
    player::{Player, Sim},
};

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.add_systems(Startup, spawn_perf_ui);
    app.add_systems(Update, dump_actor_state);
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn(PerfUiAllEntries::default());
}

fn dump_actor_state(
    actions: Res<ActionState<InputAction>>,
    level: Res<Level>,
    player: Single<&Sim, With<Player>>,
) {
    if !actions.just_pressed(&InputAction::DumpState) {
        return;
    }
    let state = &player.state;
    info!(
        position = ?(state.position.x, state.position.y),
        tile = ?level.grid.world_to_tile(state.position),
        velocity = ?(state.velocity.x, state.velocity.y),
        acceleration = ?(state.acceleration.x, state.acceleration.y),
        standing = state.standing,
        cutscene = state.cutscene_active,
        animation = ?state.animation,
        policy = ?player.controller.policy,
        "actor state"
    );
}
