//! Physical intents emitted by the movement controller.
//!
//! An intent is a requested mutation of an actor's physical state. The controller never writes
//! state itself; the host applies the returned [`IntentSet`] (see `crate::body::apply_intents`)
//! before the next integration step.

use std::fmt;

/// Animation the host should play for the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKey {
    Left,
    Right,
    Turn,
    Move,
    Idle,
}

impl AnimationKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationKey::Left => "left",
            AnimationKey::Right => "right",
            AnimationKey::Turn => "turn",
            AnimationKey::Move => "move",
            AnimationKey::Idle => "idle",
        }
    }
}

impl fmt::Display for AnimationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single requested mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    SetAccelerationX(f32),
    SetVelocityX(f32),
    SetVelocityY(f32),
    /// Facing angle in radians, measured from +X toward +Y (y down).
    SetRotation(f32),
    PlayAnimation(AnimationKey),
}

/// Ordered intents produced by one controller tick.
///
/// Order matters only when two intents touch the same field; the later one wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntentSet(Vec<Intent>);

impl IntentSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn push(&mut self, intent: Intent) {
        self.0.push(intent);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intent> {
        self.0.iter()
    }

    /// Last horizontal acceleration requested, if any.
    pub fn acceleration_x(&self) -> Option<f32> {
        self.0.iter().rev().find_map(|i| match *i {
            Intent::SetAccelerationX(a) => Some(a),
            _ => None,
        })
    }

    pub fn velocity_x(&self) -> Option<f32> {
        self.0.iter().rev().find_map(|i| match *i {
            Intent::SetVelocityX(v) => Some(v),
            _ => None,
        })
    }

    pub fn velocity_y(&self) -> Option<f32> {
        self.0.iter().rev().find_map(|i| match *i {
            Intent::SetVelocityY(v) => Some(v),
            _ => None,
        })
    }

    pub fn rotation(&self) -> Option<f32> {
        self.0.iter().rev().find_map(|i| match *i {
            Intent::SetRotation(r) => Some(r),
            _ => None,
        })
    }

    pub fn animation(&self) -> Option<AnimationKey> {
        self.0.iter().rev().find_map(|i| match *i {
            Intent::PlayAnimation(key) => Some(key),
            _ => None,
        })
    }
}

impl FromIterator<Intent> for IntentSet {
    fn from_iter<I: IntoIterator<Item = Intent>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a IntentSet {
    type Item = &'a Intent;
    type IntoIter = std::slice::Iter<'a, Intent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_return_last_write() {
        let set: IntentSet = [
            Intent::SetVelocityX(1.0),
            Intent::PlayAnimation(AnimationKey::Left),
            Intent::SetVelocityX(-2.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.velocity_x(), Some(-2.0));
        assert_eq!(set.velocity_y(), None);
        assert_eq!(set.animation(), Some(AnimationKey::Left));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn animation_names_match_host_keys() {
        assert_eq!(AnimationKey::Left.to_string(), "left");
        assert_eq!(AnimationKey::Right.as_str(), "right");
        assert_eq!(AnimationKey::Turn.as_str(), "turn");
        assert_eq!(AnimationKey::Move.as_str(), "move");
        assert_eq!(AnimationKey::Idle.as_str(), "idle");
    }
}
