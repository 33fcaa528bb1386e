//! Built-in levels.
//!
//! A preset ties a map layout to the movement policy and physics it was designed for.

use std::str::FromStr;

use thiserror::Error;

use crate::{
    Vec2,
    actor::ActorTuning,
    body::WorldParams,
    constants::{PLATFORMER_GRAVITY, TILE_SIZE},
    movement::MovementPolicy,
    tilemap::{TileGrid, TileGridError},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresetError {
    #[error("unknown level `{0}`, expected one of: platformer, tavern, tavern-free")]
    Unknown(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelPreset {
    pub name: &'static str,
    pub rows: &'static [&'static str],
    pub policy: MovementPolicy,
    pub world: WorldParams,
    pub tuning: ActorTuning,
    /// Play the entrance cutscene when the player spawns.
    pub intro_cutscene: bool,
    pub help: &'static str,
}

impl LevelPreset {
    pub fn platformer() -> Self {
        Self {
            name: "platformer",
            rows: PLATFORMER_ROWS,
            policy: MovementPolicy::accelerating(),
            world: WorldParams {
                gravity: PLATFORMER_GRAVITY,
            },
            tuning: ActorTuning::default(),
            intro_cutscene: false,
            help: "Arrow keys to move. Press \"up\" to jump.",
        }
    }

    pub fn tavern() -> Self {
        Self {
            name: "tavern",
            rows: TAVERN_ROWS,
            policy: MovementPolicy::direct_velocity(),
            world: WorldParams { gravity: 0.0 },
            tuning: top_down_tuning(),
            intro_cutscene: true,
            help: "Arrow keys or WASD to walk. C shows the collision layer.",
        }
    }

    pub fn tavern_free() -> Self {
        Self {
            name: "tavern-free",
            policy: MovementPolicy::free_move(),
            help: "Arrow keys or WASD to walk in eight directions. C shows the collision layer.",
            ..Self::tavern()
        }
    }

    pub fn build_grid(&self) -> Result<TileGrid, TileGridError> {
        TileGrid::from_rows(TILE_SIZE, self.rows)
    }
}

impl Default for LevelPreset {
    fn default() -> Self {
        Self::platformer()
    }
}

impl FromStr for LevelPreset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "platformer" => Ok(Self::platformer()),
            "tavern" => Ok(Self::tavern()),
            "tavern-free" | "tavern_free" => Ok(Self::tavern_free()),
            _ => Err(PresetError::Unknown(s.to_owned())),
        }
    }
}

fn top_down_tuning() -> ActorTuning {
    ActorTuning {
        friction: Vec2::zeros(),
        body_size: Vec2::new(20.0, 20.0),
        ..ActorTuning::default()
    }
}

const PLATFORMER_ROWS: &[&str] = &[
    "                                        ",
    "                                        ",
    "                                        ",
    "                          ====          ",
    "                                        ",
    "                 ====             ===   ",
    "=                                      =",
    "=          ===                         =",
    "=                       ======         =",
    "=                                      =",
    "=    ===                          ==   =",
    "=                ==                    =",
    "=                ==        =           =",
    "= S              ==        =           =",
    "========================================",
];

const TAVERN_ROWS: &[&str] = &[
    "#########################",
    "#.......~~~.............#",
    "#..###..~~~....####.....#",
    "#..###.........####..XX.#",
    "#....................XX.#",
    "#.......................#",
    "#..##....######.........#",
    "#..##....######.....##..#",
    "#...................##..#",
    "#.....S.................#",
    "#.......................#",
    "#...~~~......###........#",
    "#...~~~......###........#",
    "#.......................#",
    "######.E.################",
];
