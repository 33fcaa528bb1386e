/*!
Collision tolerances.

Distances are in pixels. Favor practical world-space tolerances over machine epsilon so boxes
resting flush against a tile edge are classified consistently from tick to tick.
*/

/// Shrink applied to a box's extent on the non-moving axis, so a box sliding along a wall
/// does not snag on the wall's tiles.
pub const DIST_EPS: f32 = 1.0e-3;

/// Maximum gap between a body's underside and a solid tile for the body to count as standing.
pub const GROUND_PROBE: f32 = 0.5;

/// Moves shorter than this are treated as zero.
pub const MIN_MOVE: f32 = 1.0e-6;
