//! Arcade-style body integration.
//!
//! This is the physics collaborator of the movement controller: it applies an [`IntentSet`] to
//! an [`ActorState`] and advances the state by one step against a [`TileGrid`]. It is the only
//! place that writes `standing`.

use crate::{
    Vec2,
    actor::ActorState,
    collision::{Aabb, Axis, is_supported, sweep_axis},
    constants::MAX_STEP_DT,
    intent::{Intent, IntentSet},
    tilemap::TileGrid,
};

/// World-wide physics parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldParams {
    /// Downward acceleration (px/s^2). Zero for top-down levels.
    pub gravity: f32,
}

/// What happened to the body during one integration step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub landed: bool,
    pub lifted_off: bool,
    pub blocked_x: bool,
    pub blocked_y: bool,
}

/// Write `intents` into `state` in order; later intents overwrite earlier ones.
pub fn apply_intents(state: &mut ActorState, intents: &IntentSet) {
    for intent in intents {
        match *intent {
            Intent::SetAccelerationX(a) => state.acceleration.x = a,
            Intent::SetVelocityX(v) => state.velocity.x = v,
            Intent::SetVelocityY(v) => state.velocity.y = v,
            Intent::SetRotation(r) => state.rotation = r,
            Intent::PlayAnimation(key) => state.animation = Some(key),
        }
    }
}

/// Advance `state` by `dt` seconds.
///
/// Behavior
/// - Clamps `dt` to `[0, MAX_STEP_DT]`.
/// - Per axis: accelerates when acceleration is non-zero, otherwise friction decays the
///   velocity toward zero without crossing it.
/// - Adds gravity to the vertical velocity, then clamps velocity to `±max_velocity`.
/// - Sweeps the body box against solid tiles, X first then Y; a blocked axis loses its velocity.
/// - Derives `standing` from ground support, but never while moving upward, so a jump impulse
///   clears it on the step it is applied.
/// - Keeps the body inside the map's pixel bounds. Hitting a bound stops motion on that axis
///   like a solid tile does, so the top edge acts as a ceiling even though the sky is open.
pub fn integrate(
    state: &mut ActorState,
    grid: &TileGrid,
    world: WorldParams,
    dt_seconds: f32,
) -> StepReport {
    let dt = dt_seconds.clamp(0.0, MAX_STEP_DT);
    let was_standing = state.standing;

    state.velocity.x = advance_axis(
        state.velocity.x,
        state.acceleration.x,
        state.friction.x,
        dt,
    );
    state.velocity.y = advance_axis(
        state.velocity.y,
        state.acceleration.y,
        state.friction.y,
        dt,
    );
    state.velocity.y += world.gravity * dt;

    state.velocity.x = state
        .velocity
        .x
        .clamp(-state.max_velocity.x, state.max_velocity.x);
    state.velocity.y = state
        .velocity
        .y
        .clamp(-state.max_velocity.y, state.max_velocity.y);

    let half = state.half_extents();

    let mx = sweep_axis(
        grid,
        Aabb::new(state.position, half),
        Axis::X,
        state.velocity.x * dt,
    );
    state.position.x += mx.travelled;
    if mx.blocked {
        state.velocity.x = 0.0;
    }

    let my = sweep_axis(
        grid,
        Aabb::new(state.position, half),
        Axis::Y,
        state.velocity.y * dt,
    );
    state.position.y += my.travelled;
    if my.blocked {
        state.velocity.y = 0.0;
    }

    let bounded = clamp_to_bounds(state.position, half, grid.size_in_pixels());
    let bound_x = bounded.x != state.position.x;
    let bound_y = bounded.y != state.position.y;
    state.position = bounded;
    if bound_x {
        state.velocity.x = 0.0;
    }
    if bound_y {
        state.velocity.y = 0.0;
    }

    state.standing =
        state.velocity.y >= 0.0 && is_supported(grid, Aabb::new(state.position, half));

    let report = StepReport {
        landed: !was_standing && state.standing,
        lifted_off: was_standing && !state.standing,
        blocked_x: mx.blocked || bound_x,
        blocked_y: my.blocked || bound_y,
    };

    if report.landed {
        log::trace!("body landed at ({:.1}, {:.1})", state.position.x, state.position.y);
    } else if report.lifted_off {
        log::trace!("body left the ground, vy={:.1}", state.velocity.y);
    }

    report
}

#[inline]
fn advance_axis(velocity: f32, acceleration: f32, friction: f32, dt: f32) -> f32 {
    if acceleration != 0.0 {
        return velocity + acceleration * dt;
    }

    let decay = friction.max(0.0) * dt;
    if velocity > decay {
        velocity - decay
    } else if velocity < -decay {
        velocity + decay
    } else {
        0.0
    }
}

fn clamp_to_bounds(position: Vec2, half: Vec2, world: Vec2) -> Vec2 {
    let keep_inside = |p: f32, h: f32, size: f32| {
        if size >= 2.0 * h { p.clamp(h, size - h) } else { p }
    };
    Vec2::new(
        keep_inside(position.x, half.x, world.x),
        keep_inside(position.y, half.y, world.y),
    )
}
