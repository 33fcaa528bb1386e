use bevy::prelude::*;
use tavern_shared::AnimationKey;
use tracing::debug;

use super::{CurrentAnimation, Player, Sim};
use crate::level::{ShowCollision, Z_ACTOR, world_to_scene};

const FOLLOW_DECAY: f32 = 24.0;

/// Drive the rendered transform toward the simulated position.
///
/// Cutscene frames are already a tween, and the exit reset is a teleport, so both snap.
pub(super) fn follow_sim(time: Res<Time>, mut player_q: Query<(&mut Transform, &Sim), With<Player>>) {
    let dt = time.delta_secs();

    for (mut transform, sim) in &mut player_q {
        let target = world_to_scene(sim.state.position, Z_ACTOR);
        if sim.in_cutscene() {
            transform.translation = target;
        } else {
            transform.translation.smooth_nudge(&target, FOLLOW_DECAY, dt);
        }
        // World angles are measured with y down.
        transform.rotation = Quat::from_rotation_z(-sim.state.rotation);
    }
}

pub(super) fn animation_tint(key: Option<AnimationKey>) -> Color {
    match key {
        None | Some(AnimationKey::Idle) => Color::srgb(0.85, 0.75, 0.55),
        Some(AnimationKey::Left) | Some(AnimationKey::Right) => Color::srgb(0.95, 0.65, 0.35),
        Some(AnimationKey::Move) => Color::srgb(0.95, 0.8, 0.4),
        Some(AnimationKey::Turn) => Color::srgb(0.75, 0.55, 0.9),
    }
}

pub(super) fn apply_animation(
    mut player_q: Query<(&Sim, &mut CurrentAnimation, &mut Sprite), With<Player>>,
) {
    for (sim, mut current, mut sprite) in &mut player_q {
        let next = sim.state.animation;
        if current.0 == next {
            continue;
        }
        current.0 = next;

        sprite.color = animation_tint(next);
        match next {
            Some(AnimationKey::Left) => sprite.flip_x = true,
            Some(AnimationKey::Right) => sprite.flip_x = false,
            _ => {}
        }
        if let Some(key) = next {
            debug!("animation: {key}");
        }
    }
}

pub(super) fn outline_enabled(show: Res<ShowCollision>) -> bool {
    show.0
}

pub(super) fn draw_body_outline(mut gizmos: Gizmos, player_q: Query<&Sim, With<Player>>) {
    for sim in &player_q {
        let center = world_to_scene(sim.state.position, 0.0).truncate();
        let size = sim.state.body_size;
        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            Vec2::new(size.x, size.y),
            Color::srgb(0.2, 1.0, 0.4),
        );
    }
}
