use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;
use tavern_shared::{LayerKind, LevelPreset, TileGrid, TileKind, Vec2 as WorldVec};
use tracing::{debug, info};

use crate::input::InputAction;

/// The running level: its preset and the parsed tile grid.
#[derive(Resource)]
pub struct Level {
    pub preset: LevelPreset,
    pub grid: TileGrid,
}

/// Whether the collision layer and body outlines are drawn.
#[derive(Resource, Debug, Default)]
pub struct ShowCollision(pub bool);

#[derive(Component)]
struct CollisionLayer;

pub const Z_BASE: f32 = 0.0;
pub const Z_ACTOR: f32 = 10.0;
pub const Z_FOREGROUND: f32 = 20.0;
const Z_COLLISION: f32 = 30.0;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<ShowCollision>();
    app.add_systems(Startup, spawn_layers);
    app.add_systems(
        Update,
        (
            toggle_collision,
            apply_collision_visibility.run_if(resource_changed::<ShowCollision>),
        )
            .chain(),
    );
}

/// Map a world position (pixels, y down) into the scene (y up).
#[inline]
pub fn world_to_scene(p: WorldVec, z: f32) -> Vec3 {
    Vec3::new(p.x, -p.y, z)
}

fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Floor => Color::srgb(0.36, 0.27, 0.19),
        TileKind::Wall => Color::srgb(0.23, 0.2, 0.22),
        TileKind::Ground => Color::srgb(0.3, 0.45, 0.25),
        TileKind::Canopy => Color::srgba(0.15, 0.35, 0.15, 0.85),
    }
}

fn spawn_layers(mut commands: Commands, level: Res<Level>) {
    let grid = &level.grid;
    let ts = grid.tile_size();
    let tile = Vec2::splat(ts);
    let center_of = |tx: i32, ty: i32| grid.tile_min_corner(tx, ty) + WorldVec::new(ts, ts) * 0.5;

    // Base below actors, foreground above them.
    for (layer, z) in [(LayerKind::Base, Z_BASE), (LayerKind::Foreground, Z_FOREGROUND)] {
        for (tx, ty, kind) in grid.layer_tiles(layer) {
            commands.spawn((
                Sprite::from_color(tile_color(kind), tile),
                Transform::from_translation(world_to_scene(center_of(tx, ty), z)),
            ));
        }
    }

    // The collision layer exists for debugging only and starts hidden.
    for (tx, ty, _) in grid.layer_tiles(LayerKind::Collision) {
        commands.spawn((
            CollisionLayer,
            Sprite::from_color(Color::srgba(1.0, 0.1, 0.1, 0.35), tile),
            Transform::from_translation(world_to_scene(center_of(tx, ty), Z_COLLISION)),
            Visibility::Hidden,
        ));
    }

    info!(
        "level `{}` built: {}x{} tiles of {}px",
        level.preset.name,
        grid.width(),
        grid.height(),
        ts
    );
}

fn toggle_collision(actions: Res<ActionState<InputAction>>, mut show: ResMut<ShowCollision>) {
    if actions.just_pressed(&InputAction::ToggleCollision) {
        show.0 = !show.0;
        debug!("collision layer visible: {}", show.0);
    }
}

fn apply_collision_visibility(
    show: Res<ShowCollision>,
    mut tiles: Query<&mut Visibility, With<CollisionLayer>>,
) {
    let visibility = if show.0 {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut v in &mut tiles {
        *v = visibility;
    }
}
