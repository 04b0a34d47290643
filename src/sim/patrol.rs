//! Patrol state machine for moving platforms
//!
//! A patrol shuttles between two bounds along one axis. On reaching a bound it
//! snaps exactly onto it, reverses, and waits `delay` frames before moving again.

use serde::{Deserialize, Serialize};

use super::rect::Axis;

/// Default travel speed (pixels per frame)
pub const DEFAULT_PATROL_SPEED: i32 = 2;
/// Default wait at each bound (frames, half a second at 60 Hz)
pub const DEFAULT_PATROL_DELAY: u32 = 30;

/// Per-platform patrol state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patrol {
    /// Axis position of the platform when the level was built
    pub origin: i32,
    /// The other bound along `axis`
    pub target: i32,
    pub axis: Axis,
    /// Signed pixels per frame; positive travels toward the larger bound
    pub speed: i32,
    /// Frames to hold at a bound before reversing
    pub delay: u32,
    /// Frames of hold remaining
    pub elapsed_delay: u32,
}

impl Patrol {
    pub fn new(origin: i32, target: i32, axis: Axis, speed: i32, delay: u32) -> Self {
        Self {
            origin,
            target,
            axis,
            speed,
            delay,
            elapsed_delay: 0,
        }
    }

    /// Smaller of the two bounds
    #[inline]
    pub fn low(&self) -> i32 {
        self.origin.min(self.target)
    }

    /// Larger of the two bounds
    #[inline]
    pub fn high(&self) -> i32 {
        self.origin.max(self.target)
    }

    /// True while holding at a bound
    #[inline]
    pub fn waiting(&self) -> bool {
        self.elapsed_delay > 0
    }

    /// Advance one frame from axis position `position`.
    ///
    /// Returns the displacement actually applied, already clamped to the bound.
    pub fn advance(&mut self, position: i32) -> i32 {
        if self.elapsed_delay > 0 {
            self.elapsed_delay -= 1;
            return 0;
        }
        if self.speed == 0 {
            return 0;
        }

        let next = position + self.speed;
        let bound = if self.speed > 0 { self.high() } else { self.low() };
        let reached = if self.speed > 0 {
            next >= bound
        } else {
            next <= bound
        };

        if reached {
            self.reverse();
            bound - position
        } else {
            self.speed
        }
    }

    /// Turn around and start the hold, as when reaching a bound
    pub fn reverse(&mut self) {
        self.speed = -self.speed;
        self.elapsed_delay = self.delay;
    }
}

/// Level-building description of a patrol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatrolSpec {
    pub target: i32,
    pub axis: Axis,
    pub speed: i32,
    pub delay: u32,
    /// Start somewhere other than the origin (still clamped into the bounds)
    pub start: Option<i32>,
}

impl PatrolSpec {
    pub fn new(target: i32, axis: Axis) -> Self {
        Self {
            target,
            axis,
            speed: DEFAULT_PATROL_SPEED,
            delay: DEFAULT_PATROL_DELAY,
            start: None,
        }
    }

    pub fn speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    pub fn delay(mut self, delay: u32) -> Self {
        self.delay = delay;
        self
    }

    pub fn start(mut self, start: i32) -> Self {
        self.start = Some(start);
        self
    }
}
