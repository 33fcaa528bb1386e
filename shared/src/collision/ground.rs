use super::{
    settings::{DIST_EPS, GROUND_PROBE},
    types::Aabb,
};
use crate::tilemap::TileGrid;

/// True if a solid tile sits directly under `body`, within `GROUND_PROBE` of its underside.
///
/// This is the physics side of the `standing` predicate; the caller also requires that the
/// body is not moving upward.
pub fn is_supported(grid: &TileGrid, body: Aabb) -> bool {
    let ts = grid.tile_size();
    let min = body.min();
    let max = body.max();

    let bottom = max.y;
    let row = ((bottom - DIST_EPS) / ts).floor() as i32 + 1;
    let gap = row as f32 * ts - bottom;
    if gap > GROUND_PROBE {
        return false;
    }

    let lo = ((min.x + DIST_EPS) / ts).floor() as i32;
    let hi = ((max.x - DIST_EPS) / ts).floor() as i32;
    (lo..=hi).any(|tx| grid.is_solid(tx, row))
}
