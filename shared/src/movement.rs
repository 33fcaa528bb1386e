use crate::{
    actor::ActorState,
    constants::{DIRECT_SPEED, FREE_MOVE_SPEED},
    input::{Direction, InputSnapshot},
    intent::{AnimationKey, Intent, IntentSet},
};

/// What a policy emits on a tick where none of its driving keys are held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Emit nothing; the previous acceleration/velocity persists on the body.
    Hold,
    /// Explicitly zero the driven quantity.
    Zero,
}

/// How directional input is turned into physical intent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MovementPolicy {
    /// Platformer style: horizontal acceleration (ground/air) plus a standing-gated jump.
    Accelerating { release: Release },
    /// Top-down style: exactly one direction (left > right > up > down) sets one velocity axis.
    DirectVelocity { speed: f32, release: Release },
    /// Eight-way style: both velocity axes are rewritten every tick and the actor faces its motion.
    FreeMove { speed: f32 },
}

impl MovementPolicy {
    pub fn accelerating() -> Self {
        MovementPolicy::Accelerating {
            release: Release::Zero,
        }
    }

    pub fn direct_velocity() -> Self {
        MovementPolicy::DirectVelocity {
            speed: DIRECT_SPEED,
            release: Release::Hold,
        }
    }

    pub fn free_move() -> Self {
        MovementPolicy::FreeMove {
            speed: FREE_MOVE_SPEED,
        }
    }
}

/// Stateless mapping from `(InputSnapshot, ActorState)` to an [`IntentSet`].
///
/// The controller holds its policy and nothing else. `standing` and `cutscene_active` are read
/// from the state every tick, never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementController {
    pub policy: MovementPolicy,
}

impl MovementController {
    pub fn new(policy: MovementPolicy) -> Self {
        Self { policy }
    }

    /// Compute this tick's intents.
    ///
    /// Behavior
    /// - Returns an empty set while `state.cutscene_active` is set, for every policy.
    /// - Otherwise dispatches on the configured policy.
    /// - Pure: identical arguments always produce identical intent sets.
    pub fn tick(&self, input: InputSnapshot, state: &ActorState) -> IntentSet {
        if state.cutscene_active {
            return IntentSet::new();
        }

        match self.policy {
            MovementPolicy::Accelerating { release } => accelerating(input, state, release),
            MovementPolicy::DirectVelocity { speed, release } => {
                direct_velocity(input, speed, release)
            }
            MovementPolicy::FreeMove { speed } => free_move(input, speed),
        }
    }
}

fn accelerating(input: InputSnapshot, state: &ActorState, release: Release) -> IntentSet {
    let mut out = IntentSet::new();
    let accel = state.current_acceleration();

    // Left wins when both are held.
    if input.left {
        out.push(Intent::SetAccelerationX(-accel));
    } else if input.right {
        out.push(Intent::SetAccelerationX(accel));
    } else if release == Release::Zero {
        out.push(Intent::SetAccelerationX(0.0));
    }

    // Emitted on every standing tick `up` is held; lift-off clears `standing` before the next one.
    if input.up && state.standing {
        out.push(Intent::SetVelocityY(-state.jump_speed));
    }

    out
}

fn direct_velocity(input: InputSnapshot, speed: f32, release: Release) -> IntentSet {
    let mut out = IntentSet::new();

    match input.first_by_priority() {
        Some(Direction::Left) => {
            out.push(Intent::SetVelocityX(-speed));
            out.push(Intent::PlayAnimation(AnimationKey::Left));
        }
        Some(Direction::Right) => {
            out.push(Intent::SetVelocityX(speed));
            out.push(Intent::PlayAnimation(AnimationKey::Right));
        }
        Some(Direction::Up) => {
            out.push(Intent::SetVelocityY(-speed));
            out.push(Intent::PlayAnimation(AnimationKey::Turn));
        }
        Some(Direction::Down) => {
            out.push(Intent::SetVelocityY(speed));
            out.push(Intent::PlayAnimation(AnimationKey::Turn));
        }
        None => {
            if release == Release::Zero {
                out.push(Intent::SetVelocityX(0.0));
                out.push(Intent::SetVelocityY(0.0));
                out.push(Intent::PlayAnimation(AnimationKey::Turn));
            }
        }
    }

    out
}

fn free_move(input: InputSnapshot, speed: f32) -> IntentSet {
    let vx = if input.left {
        -speed
    } else if input.right {
        speed
    } else {
        0.0
    };
    let vy = if input.up {
        -speed
    } else if input.down {
        speed
    } else {
        0.0
    };

    let mut out = IntentSet::new();
    out.push(Intent::SetVelocityX(vx));
    out.push(Intent::SetVelocityY(vy));

    if vx != 0.0 || vy != 0.0 {
        out.push(Intent::SetRotation(vy.atan2(vx)));
        out.push(Intent::PlayAnimation(AnimationKey::Move));
    } else {
        out.push(Intent::PlayAnimation(AnimationKey::Idle));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vec2, actor::ActorTuning};

    fn all_inputs() -> impl Iterator<Item = InputSnapshot> {
        (0u8..16).map(|bits| InputSnapshot {
            left: bits & 1 != 0,
            right: bits & 2 != 0,
            up: bits & 4 != 0,
            down: bits & 8 != 0,
        })
    }

    fn state(standing: bool) -> ActorState {
        let mut s = ActorState::spawn(Vec2::new(64.0, 300.0), ActorTuning::default());
        s.standing = standing;
        s
    }

    fn policies() -> [MovementPolicy; 5] {
        [
            MovementPolicy::accelerating(),
            MovementPolicy::Accelerating {
                release: Release::Hold,
            },
            MovementPolicy::direct_velocity(),
            MovementPolicy::DirectVelocity {
                speed: 100.0,
                release: Release::Zero,
            },
            MovementPolicy::free_move(),
        ]
    }

    #[test]
    fn cutscene_suppresses_every_policy() {
        for policy in policies() {
            let controller = MovementController::new(policy);
            for standing in [false, true] {
                let mut s = state(standing);
                s.cutscene_active = true;
                for input in all_inputs() {
                    assert!(
                        controller.tick(input, &s).is_empty(),
                        "{policy:?} emitted during cutscene for {input:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn accelerating_left_wins_tie() {
        let controller = MovementController::new(MovementPolicy::accelerating());
        for standing in [false, true] {
            let s = state(standing);
            let both = InputSnapshot {
                left: true,
                right: true,
                ..Default::default()
            };
            let left_only = InputSnapshot {
                left: true,
                ..Default::default()
            };
            assert_eq!(
                controller.tick(both, &s).acceleration_x(),
                controller.tick(left_only, &s).acceleration_x()
            );
        }
    }

    #[test]
    fn accelerating_jump_only_when_standing_and_up() {
        let controller = MovementController::new(MovementPolicy::accelerating());
        for standing in [false, true] {
            let s = state(standing);
            for input in all_inputs() {
                let jumped = controller.tick(input, &s).velocity_y().is_some();
                assert_eq!(jumped, input.up && standing, "input={input:?} standing={standing}");
            }
        }
    }

    #[test]
    fn accelerating_magnitude_tracks_standing() {
        let controller = MovementController::new(MovementPolicy::accelerating());
        let right = InputSnapshot {
            right: true,
            ..Default::default()
        };

        assert_eq!(controller.tick(right, &state(true)).acceleration_x(), Some(1200.0));
        assert_eq!(controller.tick(right, &state(false)).acceleration_x(), Some(600.0));
    }

    #[test]
    fn accelerating_release_policies() {
        let idle = InputSnapshot::default();

        let zero = MovementController::new(MovementPolicy::accelerating());
        assert_eq!(zero.tick(idle, &state(true)).acceleration_x(), Some(0.0));

        let hold = MovementController::new(MovementPolicy::Accelerating {
            release: Release::Hold,
        });
        assert!(hold.tick(idle, &state(true)).is_empty());
    }

    #[test]
    fn standing_left_scenario() {
        let controller = MovementController::new(MovementPolicy::accelerating());
        let input = InputSnapshot {
            left: true,
            ..Default::default()
        };
        let intents = controller.tick(input, &state(true));
        assert_eq!(
            intents,
            [Intent::SetAccelerationX(-1200.0)].into_iter().collect()
        );
    }

    #[test]
    fn airborne_right_scenario() {
        let controller = MovementController::new(MovementPolicy::accelerating());
        let input = InputSnapshot {
            right: true,
            ..Default::default()
        };
        let intents = controller.tick(input, &state(false));
        assert_eq!(
            intents,
            [Intent::SetAccelerationX(600.0)].into_iter().collect()
        );
    }

    #[test]
    fn standing_jump_scenario() {
        let controller = MovementController::new(MovementPolicy::accelerating());
        let input = InputSnapshot {
            up: true,
            ..Default::default()
        };
        let intents = controller.tick(input, &state(true));
        assert_eq!(
            intents,
            [Intent::SetAccelerationX(0.0), Intent::SetVelocityY(-1000.0)]
                .into_iter()
                .collect()
        );
    }

    #[test]
    fn standing_jump_keeps_ground_acceleration() {
        let controller = MovementController::new(MovementPolicy::accelerating());
        let cases = [
            (
                InputSnapshot {
                    up: true,
                    left: true,
                    ..Default::default()
                },
                -1200.0,
            ),
            (
                InputSnapshot {
                    up: true,
                    right: true,
                    ..Default::default()
                },
                1200.0,
            ),
        ];

        for (input, accel) in cases {
            let intents = controller.tick(input, &state(true));
            assert_eq!(
                intents,
                [Intent::SetAccelerationX(accel), Intent::SetVelocityY(-1000.0)]
                    .into_iter()
                    .collect()
            );
        }
    }

    #[test]
    fn direct_velocity_fires_first_flag_only() {
        let controller = MovementController::new(MovementPolicy::direct_velocity());
        let s = state(false);

        for input in all_inputs() {
            let intents = controller.tick(input, &s);
            let velocity_writes = intents
                .iter()
                .filter(|i| matches!(i, Intent::SetVelocityX(_) | Intent::SetVelocityY(_)))
                .count();

            match input.first_by_priority() {
                None => assert!(intents.is_empty()),
                Some(dir) => {
                    assert_eq!(velocity_writes, 1, "input={input:?}");
                    let expected = match dir {
                        Direction::Left => (Some(-160.0), None, AnimationKey::Left),
                        Direction::Right => (Some(160.0), None, AnimationKey::Right),
                        Direction::Up => (None, Some(-160.0), AnimationKey::Turn),
                        Direction::Down => (None, Some(160.0), AnimationKey::Turn),
                    };
                    assert_eq!(
                        (intents.velocity_x(), intents.velocity_y(), intents.animation().unwrap()),
                        expected
                    );
                }
            }
        }
    }

    #[test]
    fn direct_velocity_left_and_down_scenario() {
        let controller = MovementController::new(MovementPolicy::direct_velocity());
        let input = InputSnapshot {
            left: true,
            down: true,
            ..Default::default()
        };
        let intents = controller.tick(input, &state(false));
        assert_eq!(
            intents,
            [
                Intent::SetVelocityX(-160.0),
                Intent::PlayAnimation(AnimationKey::Left)
            ]
            .into_iter()
            .collect()
        );
    }

    #[test]
    fn direct_velocity_zero_release_stops() {
        let controller = MovementController::new(MovementPolicy::DirectVelocity {
            speed: 160.0,
            release: Release::Zero,
        });
        let intents = controller.tick(InputSnapshot::default(), &state(false));
        assert_eq!(intents.velocity_x(), Some(0.0));
        assert_eq!(intents.velocity_y(), Some(0.0));
    }

    #[test]
    fn free_move_diagonal_faces_motion() {
        let controller = MovementController::new(MovementPolicy::free_move());
        let input = InputSnapshot {
            right: true,
            down: true,
            ..Default::default()
        };
        let intents = controller.tick(input, &state(false));

        assert_eq!(intents.velocity_x(), Some(150.0));
        assert_eq!(intents.velocity_y(), Some(150.0));
        let rotation = intents.rotation().unwrap();
        assert!((rotation - std::f32::consts::FRAC_PI_4).abs() < 1.0e-6);
        assert_eq!(intents.animation(), Some(AnimationKey::Move));
    }

    #[test]
    fn free_move_idle_resets_velocity_keeps_facing() {
        let controller = MovementController::new(MovementPolicy::free_move());
        let intents = controller.tick(InputSnapshot::default(), &state(false));

        assert_eq!(intents.velocity_x(), Some(0.0));
        assert_eq!(intents.velocity_y(), Some(0.0));
        assert_eq!(intents.rotation(), None);
        assert_eq!(intents.animation(), Some(AnimationKey::Idle));
    }

    #[test]
    fn tick_is_idempotent() {
        for policy in policies() {
            let controller = MovementController::new(policy);
            for standing in [false, true] {
                let s = state(standing);
                for input in all_inputs() {
                    assert_eq!(controller.tick(input, &s), controller.tick(input, &s));
                }
            }
        }
    }
}
