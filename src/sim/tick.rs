//! Fixed timestep simulation tick
//!
//! Frame order matters for riding:
//! 1. edge-triggered input (equip, jump, jump-cut)
//! 2. contact sampling and platform choice against last frame's geometry
//! 3. platforms advance, carrying or shoving the actor (a pinned actor stops
//!    the platform instead)
//! 4. actor kinematics against the moved platforms
//! 5. weapons and projectiles
//! 6. camera

use glam::IVec2;

use super::rider;
use super::state::{SimEvent, World};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held this frame
    pub left: bool,
    pub right: bool,
    /// Primary fire held
    pub firing: bool,
    /// Jump key went down this frame
    pub jump_pressed: bool,
    /// Jump key went up this frame
    pub jump_released: bool,
    /// Weapon slot requested this frame
    pub equip: Option<u8>,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput) {
    world.events.clear();
    world.time_ticks += 1;

    if let Some(slot) = input.equip {
        match world.equip(slot) {
            Ok(event) => world.events.push(event),
            Err(err) => {
                log::warn!("Equip rejected: {}", err);
                world.events.push(SimEvent::EquipRejected { slot });
            }
        }
    }

    let World {
        actor,
        obstacles,
        projectiles,
        camera,
        tuning,
        events,
        bounds,
        ..
    } = world;

    if input.jump_pressed && actor.jump(obstacles, tuning) {
        events.push(SimEvent::Jumped);
    }
    if input.jump_released {
        actor.jump_cut(tuning);
    }

    rider::bind(actor, obstacles);

    for i in 0..obstacles.len() {
        let displacement = obstacles[i].advance();
        if displacement == IVec2::ZERO {
            continue;
        }
        if let Some(recoil) =
            rider::carry(actor, &obstacles[i], displacement, obstacles, tuning, events)
        {
            obstacles[i].give_way(recoil);
        }
    }

    actor.update(input.left, input.right, obstacles, tuning, events);

    if let Some(shot) = actor.trigger_fire(input.firing, tuning) {
        projectiles.push(shot);
        events.push(SimEvent::ShotFired);
    }
    for projectile in projectiles.iter_mut() {
        projectile.update();
    }
    projectiles.retain(|p| p.rect.intersects(bounds));

    camera.follow(&actor.rect);
}
