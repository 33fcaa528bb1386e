use bevy::{prelude::*, window::PrimaryWindow};
use tavern_shared::{Vec2 as WorldVec, follow_target};

use crate::{
    level::{Level, world_to_scene},
    player::{Player, Sim},
};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
    app.add_systems(PostUpdate, follow_player);
}

const CAMERA_Z: f32 = 100.0;
const CAMERA_DECAY_RATE: f32 = 8.0;

fn add_camera(mut commands: Commands, level: Res<Level>) {
    // Start over the middle of the map; the follow system pans from there.
    let center = level.grid.size_in_pixels() * 0.5;
    commands.spawn((
        Camera2d,
        Transform::from_translation(world_to_scene(center, CAMERA_Z)),
    ));
}

fn follow_player(
    mut cam_tf: Single<&mut Transform, With<Camera2d>>,
    player: Single<&Sim, With<Player>>,
    window: Single<&Window, With<PrimaryWindow>>,
    level: Res<Level>,
    time: Res<Time>,
) {
    let view = window.size();
    let focus = follow_target(
        player.state.position,
        WorldVec::new(view.x, view.y),
        level.grid.size_in_pixels(),
    );

    let target = world_to_scene(focus, CAMERA_Z);
    cam_tf
        .translation
        .smooth_nudge(&target, CAMERA_DECAY_RATE, time.delta_secs());
}
