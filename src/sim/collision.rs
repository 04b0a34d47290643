//! Pixel-stepped collision resolution
//!
//! Moves are applied one axis at a time. The full offset is applied first; while
//! the rectangle overlaps anything it backs off one pixel toward where it came
//! from. Thin obstacles can't be tunneled through at frame granularity, and the
//! first clear position found is the furthest safe one.

use glam::IVec2;

use super::obstacle::Obstacle;
use super::rect::{Axis, Rect};
use crate::SimError;

/// Outcome of a resolved move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Rectangle after the move
    pub rect: Rect,
    /// The full offset was applied without backing off (no contact)
    pub unaltered: bool,
}

impl Resolved {
    /// Displacement actually applied relative to `from`
    #[inline]
    pub fn displacement(&self, from: &Rect) -> IVec2 {
        self.rect.pos - from.pos
    }
}

/// True if `rect` overlaps any obstacle
#[inline]
pub fn overlaps_any(rect: &Rect, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| rect.intersects(&o.rect))
}

/// Obstacles that `rect` would touch after shifting by `probe`.
///
/// The rectangle itself is not moved.
pub fn touching<'a>(
    rect: &Rect,
    probe: IVec2,
    obstacles: &'a [Obstacle],
) -> impl Iterator<Item = &'a Obstacle> + 'a {
    let probed = rect.translated(probe);
    obstacles.iter().filter(move |o| probed.intersects(&o.rect))
}

/// Move `rect` by `offset` along `axis`, backing off until clear.
///
/// Fails with `StuckOverlap` once `max_steps` back-offs have not found a clear
/// position, which only happens when the move started inside geometry.
pub fn resolve(
    rect: Rect,
    offset: i32,
    axis: Axis,
    obstacles: &[Obstacle],
    max_steps: u32,
) -> Result<Resolved, SimError> {
    step_back(rect, offset, axis, max_steps, |r| overlaps_any(r, obstacles))
}

/// Like `resolve`, but the obstacle `ignore` never blocks the move.
///
/// Used when that obstacle is the one doing the pushing.
pub fn resolve_ignoring(
    rect: Rect,
    offset: i32,
    axis: Axis,
    obstacles: &[Obstacle],
    ignore: u32,
    max_steps: u32,
) -> Result<Resolved, SimError> {
    step_back(rect, offset, axis, max_steps, |r| {
        obstacles
            .iter()
            .any(|o| o.id != ignore && r.intersects(&o.rect))
    })
}

fn step_back(
    rect: Rect,
    offset: i32,
    axis: Axis,
    max_steps: u32,
    blocked: impl Fn(&Rect) -> bool,
) -> Result<Resolved, SimError> {
    let back = axis.vector(if offset < 0 { 1 } else { -1 });
    let mut moved = rect.translated(axis.vector(offset));
    let mut steps = 0;

    while blocked(&moved) {
        if steps >= max_steps {
            return Err(SimError::StuckOverlap { axis, steps });
        }
        moved = moved.translated(back);
        steps += 1;
    }

    Ok(Resolved {
        rect: moved,
        unaltered: steps == 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wall(id: u32, x: i32, y: i32, w: i32, h: i32) -> Obstacle {
        Obstacle::fixed(id, Rect::new(x, y, w, h), 0)
    }

    #[test]
    fn test_free_move_is_unaltered() {
        let obstacles = vec![wall(1, 0, 200, 500, 20)];
        let actor = Rect::new(10, 10, 30, 55);

        let result = resolve(actor, 7, Axis::Vertical, &obstacles, 512).unwrap();
        assert!(result.unaltered);
        assert_eq!(result.rect.pos, IVec2::new(10, 17));
    }

    #[test]
    fn test_landing_stops_flush_on_floor() {
        let obstacles = vec![wall(1, 0, 200, 500, 20)];
        // Bottom at 140, floor top at 200
        let actor = Rect::new(10, 85, 30, 55);

        let result = resolve(actor, 80, Axis::Vertical, &obstacles, 512).unwrap();
        assert!(!result.unaltered);
        assert_eq!(result.rect.bottom(), 200);
        assert_eq!(result.displacement(&actor), IVec2::new(0, 60));
    }

    #[test]
    fn test_wall_stops_leftward_move() {
        let obstacles = vec![wall(1, 0, 0, 20, 1000)];
        let actor = Rect::new(22, 500, 30, 55);

        let result = resolve(actor, -4, Axis::Horizontal, &obstacles, 512).unwrap();
        assert!(!result.unaltered);
        assert_eq!(result.rect.left(), 20);
    }

    #[test]
    fn test_thin_obstacle_is_not_tunneled() {
        // One pixel thick ledge directly in the path of a fast fall
        let obstacles = vec![wall(1, 0, 100, 100, 1)];
        let actor = Rect::new(10, 0, 30, 55);

        let result = resolve(actor, 60, Axis::Vertical, &obstacles, 512).unwrap();
        assert!(!result.unaltered);
        assert_eq!(result.rect.bottom(), 100);
    }

    #[test]
    fn test_zero_offset_is_unaltered() {
        let obstacles = vec![wall(1, 0, 55, 100, 20)];
        let actor = Rect::new(0, 0, 30, 55);

        let result = resolve(actor, 0, Axis::Vertical, &obstacles, 512).unwrap();
        assert!(result.unaltered);
        assert_eq!(result.rect, actor);
    }

    #[test]
    fn test_stuck_overlap_is_bounded() {
        let obstacles = vec![wall(1, 0, 0, 1000, 1000)];
        let actor = Rect::new(100, 100, 30, 55);

        let result = resolve(actor, 3, Axis::Horizontal, &obstacles, 64);
        assert!(matches!(
            result,
            Err(SimError::StuckOverlap {
                axis: Axis::Horizontal,
                steps: 64
            })
        ));
    }

    #[test]
    fn test_spawned_inside_thin_geometry_walks_out() {
        // Walks back past its start and clears the far side of the block
        let obstacles = vec![wall(1, 90, 0, 20, 200)];
        let actor = Rect::new(100, 50, 30, 55);

        let result = resolve(actor, 0, Axis::Horizontal, &obstacles, 512).unwrap();
        assert!(!result.unaltered);
        assert_eq!(result.rect.right(), 90);
    }

    #[test]
    fn test_touching_probe() {
        let obstacles = vec![
            wall(1, 0, 100, 50, 20),
            wall(2, 35, 100, 50, 20),
            wall(3, 0, 0, 50, 10),
        ];
        let actor = Rect::new(20, 45, 30, 55);

        let below: Vec<u32> = touching(&actor, IVec2::new(0, 1), &obstacles)
            .map(|o| o.id)
            .collect();
        assert_eq!(below, vec![1, 2]);
        assert_eq!(touching(&actor, IVec2::new(0, -1), &obstacles).count(), 0);
    }

    #[test]
    fn test_ignored_obstacle_does_not_block() {
        // Lift overlapping the actor's feet pushes it up into a ceiling
        let obstacles = vec![wall(1, 0, 380, 500, 20), wall(2, 80, 454, 100, 20)];
        let actor = Rect::new(100, 402, 30, 55);

        let result = resolve_ignoring(actor, -3, Axis::Vertical, &obstacles, 2, 512).unwrap();
        assert!(!result.unaltered);
        assert_eq!(result.rect.top(), 400);

        // Without ignoring the lift the actor would be walked out below it
        let through = resolve(actor, -3, Axis::Vertical, &obstacles, 512).unwrap();
        assert!(through.rect.top() >= 474);
    }

    proptest! {
        #[test]
        fn prop_resolve_is_bounded_and_minimal(
            boxes in prop::collection::vec((0i32..240, 0i32..240, 1i32..60, 1i32..60), 0..10),
            x in 0i32..240,
            y in 0i32..240,
            offset in -40i32..40,
            vertical in any::<bool>(),
        ) {
            let actor = Rect::new(x, y, 30, 55);
            let obstacles: Vec<Obstacle> = boxes
                .into_iter()
                .enumerate()
                .map(|(i, (bx, by, bw, bh))| wall(i as u32, bx, by, bw, bh))
                .filter(|o| !o.rect.intersects(&actor))
                .collect();
            let axis = if vertical { Axis::Vertical } else { Axis::Horizontal };

            let result = resolve(actor, offset, axis, &obstacles, 512).unwrap();
            let moved = axis.of(result.displacement(&actor));

            // Never overlapping, never overshooting, never reversing
            prop_assert!(!overlaps_any(&result.rect, &obstacles));
            prop_assert!(moved.abs() <= offset.abs());
            prop_assert!(moved == 0 || moved.signum() == offset.signum());
            prop_assert_eq!(result.rect.size, actor.size);

            if result.unaltered {
                prop_assert_eq!(moved, offset);
            } else {
                // One more pixel of travel would have collided
                let further = result.rect.translated(axis.vector(offset.signum()));
                prop_assert!(overlaps_any(&further, &obstacles));
            }
        }
    }
}
