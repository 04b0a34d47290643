//! The built-in level: bordered room, green ledges, olive platforms

use glam::IVec2;

use super::patrol::PatrolSpec;
use super::rect::{Axis, Rect};
use super::state::{Banner, World};
use crate::Tuning;
use crate::consts::*;

/// Frames the vertical lift rests at each end
const LIFT_DELAY: u32 = 200;

/// Build the default level around a fresh actor
pub fn default_level(tuning: Tuning) -> World {
    let bounds = Rect::new(0, 0, WORLD_WIDTH, WORLD_HEIGHT);
    let spawn = IVec2::new(ACTOR_SPAWN.0, ACTOR_SPAWN.1);
    let mut world = World::new(bounds, spawn, tuning);

    // Floor and side walls
    for rect in [
        Rect::new(0, 980, 1000, 20),
        Rect::new(0, 0, 20, 1000),
        Rect::new(980, 0, 20, 1000),
    ] {
        world.add_static(rect, COLOR_WALL);
    }

    for rect in [
        Rect::new(250, 780, 200, 100),
        Rect::new(600, 880, 200, 100),
        Rect::new(20, 360, 880, 40),
        Rect::new(950, 400, 30, 20),
        Rect::new(20, 630, 50, 20),
        Rect::new(80, 530, 50, 20),
        Rect::new(130, 470, 200, 215),
        Rect::new(20, 760, 30, 20),
        Rect::new(400, 740, 30, 40),
    ] {
        world.add_static(rect, COLOR_LEDGE);
    }

    let platforms = [
        (Rect::new(20, 740, 75, 20), PatrolSpec::new(325, Axis::Horizontal)),
        (Rect::new(600, 500, 100, 20), PatrolSpec::new(880, Axis::Horizontal)),
        (
            Rect::new(420, 430, 100, 20),
            PatrolSpec::new(550, Axis::Vertical).speed(3).delay(LIFT_DELAY),
        ),
        (
            Rect::new(450, 700, 50, 20),
            PatrolSpec::new(930, Axis::Vertical).start(930),
        ),
        (
            Rect::new(500, 700, 50, 20),
            PatrolSpec::new(730, Axis::Horizontal).start(730),
        ),
        (
            Rect::new(780, 700, 50, 20),
            PatrolSpec::new(895, Axis::Horizontal).speed(-1),
        ),
    ];
    for (rect, spec) in platforms {
        world.add_patrol(rect, COLOR_PLATFORM, spec);
    }

    world.banner = Some(Banner {
        message: "You win. Celebrate.".to_owned(),
        center_x: bounds.center().x,
        top: 100,
        color: COLOR_BANNER,
    });

    log::info!(
        "Built default level: {} obstacles, actor at {:?}",
        world.obstacles.len(),
        world.actor.rect.pos
    );
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_contents() {
        let world = default_level(Tuning::default());
        assert_eq!(world.obstacles.len(), 18);
        assert_eq!(world.obstacles.iter().filter(|o| o.is_moving()).count(), 6);
        assert!(world.actor_is_clear());

        // Ids are unique and stable
        let mut ids: Vec<u32> = world.obstacles.iter().map(|o| o.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 18);
    }

    #[test]
    fn test_start_override_places_platform() {
        let world = default_level(Tuning::default());
        let lift = world
            .obstacles
            .iter()
            .find(|o| o.patrol().is_some_and(|p| p.target == 930))
            .unwrap();
        assert_eq!(lift.rect.pos, IVec2::new(450, 930));
        assert_eq!(lift.patrol().map(|p| p.origin), Some(700));
    }

    #[test]
    fn test_platforms_start_inside_their_bounds() {
        let world = default_level(Tuning::default());
        for obstacle in &world.obstacles {
            if let Some(patrol) = obstacle.patrol() {
                let pos = patrol.axis.of(obstacle.rect.pos);
                assert!(patrol.low() <= pos && pos <= patrol.high());
            }
        }
    }
}
