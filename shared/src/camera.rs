use crate::Vec2;

/// Camera center that follows `target` without showing anything outside `[0, world]`.
///
/// On an axis where the world is smaller than the viewport the camera centers the world.
pub fn follow_target(target: Vec2, viewport: Vec2, world: Vec2) -> Vec2 {
    let axis = |t: f32, view: f32, size: f32| {
        let half = view * 0.5;
        if size <= view {
            size * 0.5
        } else {
            t.clamp(half, size - half)
        }
    };

    Vec2::new(
        axis(target.x, viewport.x, world.x),
        axis(target.y, viewport.y, world.y),
    )
}
