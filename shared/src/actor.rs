use crate::{
    Vec2,
    constants::{
        AIR_ACCELERATION, FRICTION_X, FRICTION_Y, GROUND_ACCELERATION, JUMP_SPEED, MAX_VELOCITY_X,
        MAX_VELOCITY_Y, PLAYER_BODY_HEIGHT, PLAYER_BODY_WIDTH,
    },
    intent::AnimationKey,
};

/// Spawn-time configuration of an actor's body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorTuning {
    /// Per-axis velocity clamp (px/s).
    pub max_velocity: Vec2,
    /// Per-axis velocity decay while that axis has no acceleration (px/s^2).
    pub friction: Vec2,
    pub ground_acceleration: f32,
    pub air_acceleration: f32,
    pub jump_speed: f32,
    /// Collision box (width, height) centered on `position`.
    pub body_size: Vec2,
}

impl Default for ActorTuning {
    fn default() -> Self {
        Self {
            max_velocity: Vec2::new(MAX_VELOCITY_X, MAX_VELOCITY_Y),
            friction: Vec2::new(FRICTION_X, FRICTION_Y),
            ground_acceleration: GROUND_ACCELERATION,
            air_acceleration: AIR_ACCELERATION,
            jump_speed: JUMP_SPEED,
            body_size: Vec2::new(PLAYER_BODY_WIDTH, PLAYER_BODY_HEIGHT),
        }
    }
}

/// Physical state of one actor, owned by the host between ticks.
///
/// World space is in pixels with y growing downward. The movement controller only reads this;
/// `standing` in particular is written by the body integrator alone.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorState {
    /// Center of the collision box.
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub max_velocity: Vec2,
    pub friction: Vec2,
    pub ground_acceleration: f32,
    pub air_acceleration: f32,
    pub jump_speed: f32,
    pub body_size: Vec2,
    /// Facing in radians, from +X toward +Y.
    pub rotation: f32,
    pub standing: bool,
    pub cutscene_active: bool,
    pub animation: Option<AnimationKey>,
}

impl ActorState {
    pub fn spawn(position: Vec2, tuning: ActorTuning) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            acceleration: Vec2::zeros(),
            max_velocity: tuning.max_velocity,
            friction: tuning.friction,
            ground_acceleration: tuning.ground_acceleration,
            air_acceleration: tuning.air_acceleration,
            jump_speed: tuning.jump_speed,
            body_size: tuning.body_size,
            rotation: 0.0,
            standing: false,
            cutscene_active: false,
            animation: None,
        }
    }

    /// Horizontal acceleration available this tick, ground or air.
    #[inline]
    pub fn current_acceleration(&self) -> f32 {
        if self.standing {
            self.ground_acceleration
        } else {
            self.air_acceleration
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.body_size * 0.5
    }

    /// Drop all motion, e.g. when teleporting for a cutscene.
    pub fn halt(&mut self) {
        self.velocity = Vec2::zeros();
        self.acceleration = Vec2::zeros();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_copies_tuning_and_starts_at_rest() {
        let tuning = ActorTuning::default();
        let state = ActorState::spawn(Vec2::new(64.0, 300.0), tuning);

        assert_eq!(state.position, Vec2::new(64.0, 300.0));
        assert_eq!(state.velocity, Vec2::zeros());
        assert_eq!(state.max_velocity, Vec2::new(500.0, 400.0));
        assert_eq!(state.ground_acceleration, 1200.0);
        assert_eq!(state.air_acceleration, 600.0);
        assert_eq!(state.jump_speed, 1000.0);
        assert!(!state.standing);
        assert!(!state.cutscene_active);
    }

    #[test]
    fn current_acceleration_tracks_standing() {
        let mut state = ActorState::spawn(Vec2::zeros(), ActorTuning::default());
        assert_eq!(state.current_acceleration(), 600.0);
        state.standing = true;
        assert_eq!(state.current_acceleration(), 1200.0);
    }
}
