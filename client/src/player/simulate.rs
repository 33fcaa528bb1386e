use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;
use tracing::{debug, error, info, trace};

use super::{Player, Sim};
use crate::{
    input::{InputAction, snapshot},
    level::Level,
};

pub(super) fn step_player(
    time: Res<Time<Fixed>>,
    actions: Res<ActionState<InputAction>>,
    level: Res<Level>,
    mut sim: Single<&mut Sim, With<Player>>,
) {
    let input = snapshot(&actions);
    let report = match sim.step(input, &level.grid, level.preset.world, time.delta_secs()) {
        Ok(report) => report,
        Err(err) => {
            error!("player step failed: {err}");
            return;
        }
    };

    if report.cutscene_finished {
        info!("cutscene over, player has control");
    }
    if report.reset_to_entrance {
        info!("player left through the exit, back to the entrance");
    }
    if let Some(body) = report.body {
        if body.landed {
            debug!(y = sim.state.position.y, "landed");
        }
        if body.lifted_off {
            debug!(vy = sim.state.velocity.y, "lifted off");
        }
        if body.blocked_x || body.blocked_y {
            trace!(x = body.blocked_x, y = body.blocked_y, "movement blocked");
        }
    }
}
