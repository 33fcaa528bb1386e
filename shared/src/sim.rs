use crate::{
    Vec2,
    actor::ActorState,
    body::{StepReport, WorldParams, apply_intents, integrate},
    constants::CUTSCENE_DURATION,
    cutscene::{Cutscene, CutsceneError},
    input::InputSnapshot,
    intent::IntentSet,
    movement::MovementController,
    preset::LevelPreset,
    tilemap::TileGrid,
};

/// Output of a single [`PlayerSim::step`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimReport {
    /// Intents the controller emitted this tick.
    pub intents: IntentSet,
    /// Body integration result; `None` while a cutscene holds the actor.
    pub body: Option<StepReport>,
    pub cutscene_finished: bool,
    /// The actor walked into the exit and was sent back to the entrance.
    pub reset_to_entrance: bool,
}

/// The player actor together with its controller and any running cutscene.
#[derive(Clone, Debug)]
pub struct PlayerSim {
    pub state: ActorState,
    pub controller: MovementController,
    cutscene: Option<Cutscene>,
}

impl PlayerSim {
    pub fn new(state: ActorState, controller: MovementController) -> Self {
        Self {
            state,
            controller,
            cutscene: None,
        }
    }

    /// Spawn the player for `preset` on `grid`.
    ///
    /// The actor starts on the `start` object (feet on the tile's bottom edge when the level has
    /// gravity), or in the middle of the map if there is none. Presets with an intro cutscene
    /// start at the entrance instead.
    pub fn spawn(preset: &LevelPreset, grid: &TileGrid) -> Result<Self, CutsceneError> {
        let half = preset.tuning.body_size * 0.5;
        let position = match grid.object("start") {
            Some(start) if preset.world.gravity > 0.0 => {
                Vec2::new(start.center().x, start.max().y - half.y)
            }
            Some(start) => start.center(),
            None => grid.size_in_pixels() * 0.5,
        };

        let mut sim = Self::new(
            ActorState::spawn(position, preset.tuning),
            MovementController::new(preset.policy),
        );
        if preset.intro_cutscene {
            sim.reset_to_entrance(grid)?;
        }
        Ok(sim)
    }

    #[inline]
    pub fn in_cutscene(&self) -> bool {
        self.cutscene.is_some()
    }

    /// Teleport to the `entrance` object and tween to `start` with input locked out.
    pub fn reset_to_entrance(&mut self, grid: &TileGrid) -> Result<(), CutsceneError> {
        let entrance = grid
            .object("entrance")
            .ok_or(CutsceneError::MissingObject("entrance"))?
            .center();
        let start = grid
            .object("start")
            .ok_or(CutsceneError::MissingObject("start"))?
            .center();

        self.state.position = entrance;
        self.state.halt();
        self.state.cutscene_active = true;
        self.cutscene = Some(Cutscene::new(entrance, start, CUTSCENE_DURATION));

        log::debug!(
            "cutscene started: ({:.0}, {:.0}) -> ({:.0}, {:.0})",
            entrance.x,
            entrance.y,
            start.x,
            start.y
        );
        Ok(())
    }

    /// Run one host tick.
    ///
    /// Order
    /// 1. Advance a running cutscene; on completion control returns to the player this tick.
    /// 2. Ask the controller for intents and apply them to the actor.
    /// 3. Integrate the body unless a cutscene still holds it.
    /// 4. Walking into the `exit` object restarts the entrance cutscene.
    pub fn step(
        &mut self,
        input: InputSnapshot,
        grid: &TileGrid,
        world: WorldParams,
        dt_seconds: f32,
    ) -> Result<SimReport, CutsceneError> {
        let mut report = SimReport::default();

        if let Some(tween) = self.cutscene.as_mut() {
            let frame = tween.advance(dt_seconds);
            self.state.position = frame.position;
            if frame.finished {
                self.cutscene = None;
                self.state.cutscene_active = false;
                report.cutscene_finished = true;
                log::debug!("cutscene finished, control returned to player");
            }
        }

        report.intents = self.controller.tick(input, &self.state);
        apply_intents(&mut self.state, &report.intents);

        if self.in_cutscene() {
            return Ok(report);
        }

        report.body = Some(integrate(&mut self.state, grid, world, dt_seconds));

        let at_exit = grid
            .object("exit")
            .is_some_and(|exit| exit.contains(self.state.position));
        if at_exit {
            log::debug!("player reached the exit");
            self.reset_to_entrance(grid)?;
            report.reset_to_entrance = true;
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{intent::AnimationKey, movement::MovementPolicy};

    const DT: f32 = 1.0 / 60.0;

    fn run_idle(sim: &mut PlayerSim, grid: &TileGrid, world: WorldParams, ticks: usize) {
        for _ in 0..ticks {
            sim.step(InputSnapshot::default(), grid, world, DT).unwrap();
        }
    }

    #[test]
    fn platformer_spawns_on_start_and_stands() {
        let preset = LevelPreset::platformer();
        let grid = preset.build_grid().unwrap();
        let mut sim = PlayerSim::spawn(&preset, &grid).unwrap();

        assert!(!sim.in_cutscene());
        run_idle(&mut sim, &grid, preset.world, 2);
        assert!(sim.state.standing);
    }

    #[test]
    fn platformer_jump_leaves_ground_then_lands() {
        let preset = LevelPreset::platformer();
        let grid = preset.build_grid().unwrap();
        let mut sim = PlayerSim::spawn(&preset, &grid).unwrap();
        run_idle(&mut sim, &grid, preset.world, 2);
        let ground_y = sim.state.position.y;

        let up = InputSnapshot {
            up: true,
            ..Default::default()
        };
        let report = sim.step(up, &grid, preset.world, DT).unwrap();
        assert_eq!(report.intents.velocity_y(), Some(-1000.0));
        assert!(report.body.unwrap().lifted_off);

        // Holding `up` in the air never re-triggers the impulse.
        for _ in 0..10 {
            let report = sim.step(up, &grid, preset.world, DT).unwrap();
            assert_eq!(report.intents.velocity_y(), None);
        }

        run_idle(&mut sim, &grid, preset.world, 600);
        assert!(sim.state.standing);
        assert!((sim.state.position.y - ground_y).abs() < 1.0e-2);
    }

    #[test]
    fn tavern_intro_locks_input_until_tween_ends() {
        let preset = LevelPreset::tavern();
        let grid = preset.build_grid().unwrap();
        let mut sim = PlayerSim::spawn(&preset, &grid).unwrap();

        let entrance = grid.object("entrance").unwrap().center();
        let start = grid.object("start").unwrap().center();
        assert!(sim.in_cutscene());
        assert!(sim.state.cutscene_active);
        assert_eq!(sim.state.position, entrance);

        let left = InputSnapshot {
            left: true,
            ..Default::default()
        };
        let report = sim.step(left, &grid, preset.world, 0.5).unwrap();
        assert!(report.intents.is_empty());
        assert!(report.body.is_none());

        let report = sim.step(left, &grid, preset.world, 1.0).unwrap();
        assert!(report.cutscene_finished);
        assert!(!sim.state.cutscene_active);
        // Control returns on the finishing tick.
        assert_eq!(report.intents.animation(), Some(AnimationKey::Left));
        assert!(sim.state.position.x < start.x);
    }

    #[test]
    fn walking_into_exit_restarts_cutscene() {
        let preset = LevelPreset::tavern();
        let grid = preset.build_grid().unwrap();
        let mut sim = PlayerSim::spawn(&preset, &grid).unwrap();

        // Skip the intro, then drop the player just left of the exit.
        run_idle(&mut sim, &grid, preset.world, 120);
        assert!(!sim.in_cutscene());
        let exit = grid.object("exit").unwrap().clone();
        sim.state.position = Vec2::new(exit.min.x - 12.0, exit.center().y);

        let right = InputSnapshot {
            right: true,
            ..Default::default()
        };
        let mut reset = false;
        for _ in 0..60 {
            if sim.step(right, &grid, preset.world, DT).unwrap().reset_to_entrance {
                reset = true;
                break;
            }
        }

        assert!(reset);
        assert!(sim.in_cutscene());
        assert_eq!(sim.state.position, grid.object("entrance").unwrap().center());
        assert_eq!(sim.state.velocity, Vec2::zeros());
    }

    #[test]
    fn reset_without_entrance_is_an_error() {
        let grid = TileGrid::from_rows(32.0, &["#####", "#.S.#", "#####"]).unwrap();
        let mut sim = PlayerSim::new(
            ActorState::spawn(Vec2::new(80.0, 48.0), Default::default()),
            MovementController::new(MovementPolicy::direct_velocity()),
        );

        assert_eq!(
            sim.reset_to_entrance(&grid),
            Err(CutsceneError::MissingObject("entrance"))
        );
        assert!(!sim.in_cutscene());
    }
}
