//! Demo mode input driver
//!
//! Produces plausible keyboard input from a seeded RNG so the simulation can
//! run headless: hold a direction for a while, hop now and then, sometimes
//! release jump early, fire in bursts, and occasionally try a weapon slot.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::tick::TickInput;
use crate::consts::WEAPON_SLOTS;

/// Seeded stand-in for a player
#[derive(Debug, Clone)]
pub struct DemoDriver {
    rng: Pcg32,
    /// -1 left, 0 idle, 1 right
    direction: i32,
    /// Frames before picking a new direction
    hold_frames: u32,
    jump_held: bool,
    firing: bool,
}

impl DemoDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            direction: 0,
            hold_frames: 0,
            jump_held: false,
            firing: false,
        }
    }

    /// Input for the next frame
    pub fn next_input(&mut self) -> TickInput {
        if self.hold_frames == 0 {
            self.direction = self.rng.random_range(-1..=1);
            self.hold_frames = self.rng.random_range(10..90);
        }
        self.hold_frames -= 1;

        let mut input = TickInput {
            left: self.direction < 0,
            right: self.direction > 0,
            ..Default::default()
        };

        if self.jump_held {
            // Short hops release early, long ones ride the full impulse
            if self.rng.random_bool(0.08) {
                self.jump_held = false;
                input.jump_released = true;
            }
        } else if self.rng.random_bool(0.03) {
            self.jump_held = true;
            input.jump_pressed = true;
        }

        if self.rng.random_bool(0.02) {
            self.firing = !self.firing;
        }
        input.firing = self.firing;

        if self.rng.random_bool(0.002) {
            input.equip = Some(self.rng.random_range(1..=WEAPON_SLOTS));
        }

        input
    }
}
