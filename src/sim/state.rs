//! World state and per-frame events
//!
//! Everything the frame loop owns lives in `World`: the actor, the obstacle
//! collection, projectiles in flight and the camera.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::camera::Camera;
use super::obstacle::Obstacle;
use super::patrol::{Patrol, PatrolSpec};
use super::rect::{Axis, Rect};
use super::weapon::Projectile;
use crate::consts::*;
use crate::{SimError, Tuning};

/// Something that happened during a tick, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Jump impulse applied
    Jumped,
    /// Downward move stopped by the ground
    Landed,
    /// Upward move stopped by a ceiling
    Bonked,
    /// Weapon slot switched
    WeaponEquipped { slot: u8 },
    /// Equip request for an unbound slot (weapon unchanged)
    EquipRejected { slot: u8 },
    /// Projectile spawned
    ShotFired,
    /// A platform pushed the actor into something else
    Crushed { platform: u32 },
    /// A move started inside geometry and was abandoned
    StuckOverlap { axis: Axis },
}

/// Static text shown on the level (rendered by the presentation layer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub message: String,
    /// Horizontal center in world pixels
    pub center_x: i32,
    /// Top edge in world pixels
    pub top: i32,
    pub color: u32,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Level bounds
    pub bounds: Rect,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub tuning: Tuning,
    pub actor: Actor,
    /// Obstacles in build order (stable ids)
    pub obstacles: Vec<Obstacle>,
    pub projectiles: Vec<Projectile>,
    pub camera: Camera,
    pub banner: Option<Banner>,
    /// Events raised during the last tick
    #[serde(skip)]
    pub events: Vec<SimEvent>,
    /// Next obstacle ID
    next_id: u32,
}

impl World {
    /// Empty world of the given size with the actor at `spawn`
    pub fn new(bounds: Rect, spawn: IVec2, tuning: Tuning) -> Self {
        let actor = Actor::new(spawn, &tuning);
        let mut camera = Camera::new(IVec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT), bounds);
        camera.follow(&actor.rect);
        Self {
            bounds,
            time_ticks: 0,
            tuning,
            actor,
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            camera,
            banner: None,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a static obstacle, returning its id
    pub fn add_static(&mut self, rect: Rect, color: u32) -> u32 {
        let id = self.next_obstacle_id();
        self.obstacles.push(Obstacle::fixed(id, rect, color));
        id
    }

    /// Add a patrolling platform, returning its id.
    ///
    /// The platform's axis position at build time becomes the patrol origin.
    pub fn add_patrol(&mut self, rect: Rect, color: u32, spec: PatrolSpec) -> u32 {
        let id = self.next_obstacle_id();
        let origin = spec.axis.of(rect.pos);
        let patrol = Patrol::new(origin, spec.target, spec.axis, spec.speed, spec.delay);

        let mut rect = rect;
        if let Some(start) = spec.start {
            let start = start.clamp(patrol.low(), patrol.high());
            rect.pos += spec.axis.vector(start - origin);
        }
        self.obstacles.push(Obstacle::patrolling(id, rect, color, patrol));
        id
    }

    pub fn obstacle(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    /// Switch the actor's weapon outside of a tick
    pub fn equip(&mut self, slot: u8) -> Result<SimEvent, SimError> {
        self.actor.equip(slot)
    }

    /// True if the actor overlaps no obstacle
    pub fn actor_is_clear(&self) -> bool {
        !super::collision::overlaps_any(&self.actor.rect, &self.obstacles)
    }
}
