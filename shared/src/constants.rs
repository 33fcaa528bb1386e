use std::time::Duration;

/// Edge length of one square tile in world units (pixels).
pub const TILE_SIZE: f32 = 32.0;

/// Rate of the fixed simulation step driven by the host.
pub const SIM_TICK_HZ: f64 = 60.0;

/// Upper bound on a single integration step (seconds).
///
/// A stalled frame must not let a body tunnel through a one-tile wall.
pub const MAX_STEP_DT: f32 = 1.0 / 20.0;

/// Horizontal acceleration while standing (px/s^2).
pub const GROUND_ACCELERATION: f32 = 1200.0;

/// Horizontal acceleration while airborne (px/s^2).
///
/// Convention:
/// - equal to `GROUND_ACCELERATION` = full air control
/// - 0.0 = no air control
pub const AIR_ACCELERATION: f32 = 600.0;

/// Upward velocity applied by a jump (px/s). Applied as `-JUMP_SPEED` since y grows downward.
pub const JUMP_SPEED: f32 = 1000.0;

/// Per-axis velocity clamp (px/s).
pub const MAX_VELOCITY_X: f32 = 500.0;
pub const MAX_VELOCITY_Y: f32 = 400.0;

/// Per-axis velocity decay while no acceleration is applied on that axis (px/s^2).
pub const FRICTION_X: f32 = 800.0;
pub const FRICTION_Y: f32 = 0.0;

/// Downward gravity of the platformer level (px/s^2).
pub const PLATFORMER_GRAVITY: f32 = 200.0;

/// Constant speed of the four-way top-down policy (px/s).
pub const DIRECT_SPEED: f32 = 160.0;

/// Constant speed of the eight-way free-move policy (px/s).
pub const FREE_MOVE_SPEED: f32 = 150.0;

/// Default collision box of the player sprite (px).
pub const PLAYER_BODY_WIDTH: f32 = 32.0;
pub const PLAYER_BODY_HEIGHT: f32 = 48.0;

/// Length of the entrance cutscene tween.
pub const CUTSCENE_DURATION: Duration = Duration::from_millis(1500);
