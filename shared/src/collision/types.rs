/*!
Core collision types shared by the collision submodules.

This module contains no algorithms.
*/

use crate::Vec2;

/// Axis-aligned box given by its center and half extents (pixels, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    #[inline]
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }
}

/// Result of sweeping a box along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisMove {
    /// Distance actually travelled (same sign as the request, never longer).
    pub travelled: f32,
    /// True if a solid tile cut the move short.
    pub blocked: bool,
}
