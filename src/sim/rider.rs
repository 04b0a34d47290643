//! Deciding which platform the actor rides, and carrying it along
//!
//! Contact is sampled before obstacles move, so the binding always reflects the
//! previous frame's geometry. When several platforms touch the actor, the one
//! it was already riding wins.

use glam::IVec2;

use super::actor::Actor;
use super::collision::{resolve_ignoring, touching};
use super::obstacle::Obstacle;
use super::state::SimEvent;
use crate::Tuning;

/// Sample contact below the actor and update `resting_on`.
///
/// Must run before obstacles advance.
pub fn bind(actor: &mut Actor, obstacles: &[Obstacle]) {
    let below: Vec<&Obstacle> = touching(&actor.rect, IVec2::new(0, 1), obstacles).collect();
    actor.collide_below = below.iter().map(|o| o.id).collect();

    if !actor.falling {
        actor.resting_on = select_platform(actor.resting_on, &below);
    }
}

/// Pick the ridden platform among the obstacles touching the actor's feet
pub fn select_platform(previous: Option<u32>, below: &[&Obstacle]) -> Option<u32> {
    let (moving, fixed): (Vec<&Obstacle>, Vec<&Obstacle>) =
        below.iter().copied().partition(|o| o.is_moving());

    if moving.is_empty() {
        return None;
    }
    if let Some(id) = previous.filter(|id| moving.iter().any(|o| o.id == *id)) {
        return Some(id);
    }
    if fixed.is_empty() {
        return moving.first().map(|o| o.id);
    }
    // Standing on solid ground that a platform merely brushes
    None
}

/// Apply one platform's frame displacement to the actor.
///
/// A ridden platform carries the actor; any other platform that moved into the
/// actor shoves it. The move is resolved against everything except the
/// platform itself. If the actor is pinned and the platform would end up
/// inside it, returns the offset that puts the platform back flush against the
/// actor (see `Obstacle::give_way`).
pub fn carry(
    actor: &mut Actor,
    platform: &Obstacle,
    displacement: IVec2,
    obstacles: &[Obstacle],
    tuning: &Tuning,
    events: &mut Vec<SimEvent>,
) -> Option<IVec2> {
    let axis = platform.patrol()?.axis;
    let amount = axis.of(displacement);
    if amount == 0 {
        return None;
    }

    let riding = actor.resting_on == Some(platform.id);
    if !riding && !actor.rect.intersects(&platform.rect) {
        return None;
    }

    let max_steps = tuning.max_resolve_steps;
    match resolve_ignoring(actor.rect, amount, axis, obstacles, platform.id, max_steps) {
        Ok(resolved) => actor.rect = resolved.rect,
        Err(err) => {
            log::warn!("Platform {} could not move actor: {}", platform.id, err);
            events.push(SimEvent::StuckOverlap { axis });
        }
    }

    if !actor.rect.intersects(&platform.rect) {
        return None;
    }
    // Depth of the platform's leading edge inside the actor
    let depth = if amount > 0 {
        axis.of(platform.rect.pos + platform.rect.size) - axis.of(actor.rect.pos)
    } else {
        axis.of(actor.rect.pos + actor.rect.size) - axis.of(platform.rect.pos)
    };
    log::debug!("Actor crushed by platform {}", platform.id);
    events.push(SimEvent::Crushed {
        platform: platform.id,
    });
    Some(axis.vector(-amount.signum() * depth))
}
