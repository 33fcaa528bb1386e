use std::time::Duration;

use thiserror::Error;

use crate::Vec2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CutsceneError {
    #[error("map has no `{0}` object")]
    MissingObject(&'static str),
}

/// One tween sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutsceneFrame {
    pub position: Vec2,
    pub finished: bool,
}

/// Linear position tween that drives an actor while input is locked out.
#[derive(Clone, Debug, PartialEq)]
pub struct Cutscene {
    from: Vec2,
    to: Vec2,
    duration: f32,
    elapsed: f32,
}

impl Cutscene {
    pub fn new(from: Vec2, to: Vec2, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration: duration.as_secs_f32(),
            elapsed: 0.0,
        }
    }

    /// Advance the tween by `dt` seconds and sample it.
    ///
    /// A zero-length tween finishes on its first sample.
    pub fn advance(&mut self, dt_seconds: f32) -> CutsceneFrame {
        self.elapsed = (self.elapsed + dt_seconds.max(0.0)).min(self.duration);

        let t = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };

        let finished = t >= 1.0;
        let position = if finished {
            self.to
        } else {
            self.from.lerp(&self.to, t)
        };

        CutsceneFrame { position, finished }
    }
}
