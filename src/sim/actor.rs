//! The player-controlled actor and its kinematics
//!
//! Horizontal velocity is recomputed from held keys every frame. Vertical
//! velocity persists and is only integrated while falling. All movement goes
//! through the collision resolver, one axis at a time.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{resolve, touching};
use super::obstacle::Obstacle;
use super::rect::{Axis, Rect};
use super::state::SimEvent;
use super::weapon::{Arsenal, Projectile};
use crate::consts::{ACTOR_HEIGHT, ACTOR_WIDTH, COLOR_ACTOR};
use crate::{SimError, Tuning};

/// The actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub rect: Rect,
    /// Horizontal velocity from input (pixels per frame, not integrated)
    pub x_vel: i32,
    /// Vertical velocity (pixels per frame, positive is down)
    pub y_vel: f32,
    /// Airborne
    pub falling: bool,
    /// Id of the patrolling platform being ridden
    pub resting_on: Option<u32>,
    /// Ids of obstacles touching the lower edge, sampled before obstacles move
    pub collide_below: Vec<u32>,
    pub color: u32,
    pub arsenal: Arsenal,
}

impl Actor {
    pub fn new(spawn: IVec2, tuning: &Tuning) -> Self {
        Self {
            rect: Rect::new(spawn.x, spawn.y, ACTOR_WIDTH, ACTOR_HEIGHT),
            x_vel: 0,
            y_vel: 0.0,
            falling: false,
            resting_on: None,
            collide_below: Vec::new(),
            color: COLOR_ACTOR,
            arsenal: Arsenal::new(tuning),
        }
    }

    /// Derive horizontal velocity from held direction keys
    pub fn apply_intent(&mut self, left: bool, right: bool, speed: i32) {
        self.x_vel = 0;
        if left {
            self.x_vel -= speed;
        }
        if right {
            self.x_vel += speed;
        }
    }

    /// True if a one-pixel upward probe hits something
    pub fn blocked_above(&self, obstacles: &[Obstacle]) -> bool {
        touching(&self.rect, IVec2::new(0, -1), obstacles)
            .next()
            .is_some()
    }

    /// Start a jump if grounded with headroom. Returns whether it happened.
    pub fn jump(&mut self, obstacles: &[Obstacle], tuning: &Tuning) -> bool {
        if self.falling || self.blocked_above(obstacles) {
            return false;
        }
        self.y_vel = tuning.jump_power;
        self.falling = true;
        self.resting_on = None;
        true
    }

    /// Jump key released: clamp remaining upward speed
    pub fn jump_cut(&mut self, tuning: &Tuning) {
        if self.falling && self.y_vel < tuning.jump_cut_magnitude {
            self.y_vel = tuning.jump_cut_magnitude;
        }
    }

    /// One frame of kinematics against the (already advanced) obstacles
    pub fn update(
        &mut self,
        left: bool,
        right: bool,
        obstacles: &[Obstacle],
        tuning: &Tuning,
        events: &mut Vec<SimEvent>,
    ) {
        self.apply_intent(left, right, tuning.actor_speed);

        if !self.falling {
            if self.collide_below.is_empty() {
                self.falling = true;
                self.resting_on = None;
            }
        } else {
            self.move_vertical(obstacles, tuning, events);
        }

        if self.x_vel != 0 {
            if let Err(err) = self.move_axis(self.x_vel, Axis::Horizontal, obstacles, tuning) {
                recover(err, events);
            }
        }

        self.integrate_gravity(tuning);
    }

    fn move_vertical(
        &mut self,
        obstacles: &[Obstacle],
        tuning: &Tuning,
        events: &mut Vec<SimEvent>,
    ) {
        // Sub-pixel velocity truncates toward zero
        let offset = self.y_vel as i32;
        match self.move_axis(offset, Axis::Vertical, obstacles, tuning) {
            Ok(true) => {}
            Ok(false) => {
                self.falling = false;
                self.y_vel = 0.0;
                if offset > 0 {
                    log::debug!("Landed at {:?}", self.rect.pos);
                    events.push(SimEvent::Landed);
                } else {
                    events.push(SimEvent::Bonked);
                }
            }
            Err(err) => recover(err, events),
        }
    }

    /// Resolve a move and apply it. Returns whether it went through unaltered.
    pub fn move_axis(
        &mut self,
        offset: i32,
        axis: Axis,
        obstacles: &[Obstacle],
        tuning: &Tuning,
    ) -> Result<bool, SimError> {
        let resolved = resolve(self.rect, offset, axis, obstacles, tuning.max_resolve_steps)?;
        self.rect = resolved.rect;
        Ok(resolved.unaltered)
    }

    fn integrate_gravity(&mut self, tuning: &Tuning) {
        if self.falling {
            self.y_vel = tuning.apply_gravity(self.y_vel);
        } else {
            self.y_vel = 0.0;
        }
    }

    /// Switch weapons
    pub fn equip(&mut self, slot: u8) -> Result<SimEvent, SimError> {
        self.arsenal.equip(slot)
    }

    /// Sample the trigger; projectiles spawn at the actor's top-left corner
    pub fn trigger_fire(&mut self, firing: bool, tuning: &Tuning) -> Option<Projectile> {
        self.arsenal.trigger_fire(firing, self.rect.pos, tuning)
    }
}

/// A move that started inside geometry is abandoned for this frame
fn recover(err: SimError, events: &mut Vec<SimEvent>) {
    log::warn!("Move aborted: {}", err);
    if let SimError::StuckOverlap { axis, .. } = err {
        events.push(SimEvent::StuckOverlap { axis });
    }
}
