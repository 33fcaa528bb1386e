use super::{
    settings::{DIST_EPS, MIN_MOVE},
    types::{Aabb, AxisMove},
};
use crate::tilemap::TileGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    #[inline]
    fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Sweep `body` by `delta` along `axis`, stopping flush against the first solid tile.
///
/// Algorithm:
/// - Collect the tile lines (columns for X, rows for Y) spanned by the body on the other axis,
///   shrunk by `DIST_EPS` so a box resting exactly on a tile edge does not count that tile.
/// - Walk every tile line between the leading edge and the target edge in order of travel.
///   The first line with a solid tile in the span ends the move at that line's near edge.
///
/// Every crossed line is checked, so fast bodies cannot skip a one-tile wall.
/// The body is assumed not to overlap solid tiles at the start.
pub fn sweep_axis(grid: &TileGrid, body: Aabb, axis: Axis, delta: f32) -> AxisMove {
    if delta.abs() <= MIN_MOVE {
        return AxisMove {
            travelled: 0.0,
            blocked: false,
        };
    }

    let ts = grid.tile_size();
    let a = axis.index();
    let o = axis.other().index();
    let min = body.min();
    let max = body.max();

    let span_lo = ((min[o] + DIST_EPS) / ts).floor() as i32;
    let span_hi = ((max[o] - DIST_EPS) / ts).floor() as i32;
    let line_is_solid = |line: i32| {
        (span_lo..=span_hi).any(|s| match axis {
            Axis::X => grid.is_solid(line, s),
            Axis::Y => grid.is_solid(s, line),
        })
    };

    if delta > 0.0 {
        let edge = max[a];
        let first = ((edge - DIST_EPS) / ts).floor() as i32 + 1;
        let last = ((edge + delta - DIST_EPS) / ts).floor() as i32;

        if let Some(line) = (first..=last).find(|&line| line_is_solid(line)) {
            return AxisMove {
                travelled: (line as f32 * ts - edge).clamp(0.0, delta),
                blocked: true,
            };
        }
    } else {
        let edge = min[a];
        let first = ((edge + DIST_EPS) / ts).floor() as i32 - 1;
        let last = ((edge + delta + DIST_EPS) / ts).floor() as i32;

        if let Some(line) = (last..=first).rev().find(|&line| line_is_solid(line)) {
            return AxisMove {
                travelled: ((line + 1) as f32 * ts - edge).clamp(delta, 0.0),
                blocked: true,
            };
        }
    }

    AxisMove {
        travelled: delta,
        blocked: false,
    }
}
