pub mod actor;
pub mod body;
pub mod camera;
pub mod collision;
pub mod constants;
pub mod cutscene;
pub mod input;
pub mod intent;
pub mod movement;
pub mod preset;
pub mod sim;
pub mod tilemap;

/// World-space vector in pixels, y pointing down.
pub type Vec2 = nalgebra::Vector2<f32>;

pub use actor::{ActorState, ActorTuning};
pub use body::{StepReport, WorldParams, apply_intents, integrate};
pub use camera::follow_target;
pub use constants::{CUTSCENE_DURATION, MAX_STEP_DT, SIM_TICK_HZ, TILE_SIZE};
pub use cutscene::{Cutscene, CutsceneError, CutsceneFrame};
pub use input::{Direction, InputSnapshot};
pub use intent::{AnimationKey, Intent, IntentSet};
pub use movement::{MovementController, MovementPolicy, Release};
pub use preset::{LevelPreset, PresetError};
pub use sim::{PlayerSim, SimReport};
pub use tilemap::{LayerKind, ObjectRect, TileGrid, TileGridError, TileKind};
