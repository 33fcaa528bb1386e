use bevy::prelude::*;

use crate::level::Level;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_help);
}

fn spawn_help(mut commands: Commands, level: Res<Level>) {
    commands.spawn((
        Name::new("Help"),
        Text::new(level.preset.help),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            left: Val::Px(16.0),
            ..default()
        },
    ));
}
