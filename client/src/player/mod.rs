use bevy::prelude::*;
use tavern_shared::{AnimationKey, PlayerSim, SIM_TICK_HZ};

use crate::level::{Z_ACTOR, world_to_scene};

mod render;
mod simulate;

pub(super) fn plugin(app: &mut App) {
    // The controller and body advance on a fixed tick; rendering catches up in between.
    app.insert_resource(Time::<Fixed>::from_hz(SIM_TICK_HZ));

    app.add_systems(Startup, spawn_player);
    app.add_systems(FixedUpdate, simulate::step_player);
    app.add_systems(
        Update,
        (
            render::follow_sim,
            render::apply_animation,
            render::draw_body_outline.run_if(render::outline_enabled),
        ),
    );
}

/// The simulation the player entity is spawned with, validated before the app starts.
#[derive(Resource)]
pub struct PlayerStart(pub PlayerSim);

#[derive(Component)]
pub struct Player;

/// Authoritative actor state. The entity's `Transform` only ever follows it.
#[derive(Component, Deref, DerefMut)]
pub struct Sim(pub PlayerSim);

/// Animation last shown on the sprite.
#[derive(Component, Default)]
struct CurrentAnimation(Option<AnimationKey>);

fn spawn_player(mut commands: Commands, start: Res<PlayerStart>) {
    let sim = start.0.clone();
    let size = sim.state.body_size;

    commands.spawn((
        Name::new("Player"),
        Player,
        Sprite::from_color(render::animation_tint(None), Vec2::new(size.x, size.y)),
        Transform::from_translation(world_to_scene(sim.state.position, Z_ACTOR)),
        CurrentAnimation::default(),
        Sim(sim),
    ));
}
