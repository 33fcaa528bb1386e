use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use tavern_shared::{Direction, InputSnapshot};

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    Left,
    Right,
    Up,
    Down,
    ToggleCollision,
    DumpState,
}

impl From<Direction> for InputAction {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Left => InputAction::Left,
            Direction::Right => InputAction::Right,
            Direction::Up => InputAction::Up,
            Direction::Down => InputAction::Down,
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let mut input_map = InputMap::<InputAction>::default();
    // Cursor keys and WASD drive the same actions.
    input_map.insert(InputAction::Left, KeyCode::ArrowLeft);
    input_map.insert(InputAction::Left, KeyCode::KeyA);
    input_map.insert(InputAction::Right, KeyCode::ArrowRight);
    input_map.insert(InputAction::Right, KeyCode::KeyD);
    input_map.insert(InputAction::Up, KeyCode::ArrowUp);
    input_map.insert(InputAction::Up, KeyCode::KeyW);
    input_map.insert(InputAction::Down, KeyCode::ArrowDown);
    input_map.insert(InputAction::Down, KeyCode::KeyS);
    input_map.insert(InputAction::ToggleCollision, KeyCode::KeyC);
    input_map.insert(InputAction::DumpState, KeyCode::F3);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());
}

/// Directions held right now, as the controller sees them.
pub fn snapshot(actions: &ActionState<InputAction>) -> InputSnapshot {
    InputSnapshot::from_held(
        Direction::PRIORITY
            .into_iter()
            .filter(|&dir| actions.pressed(&InputAction::from(dir))),
    )
}
