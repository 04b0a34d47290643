//! Viewport that follows the actor without leaving the world

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// A fixed-size window into the world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    /// Requested viewport size
    pub size: IVec2,
    /// World bounds the viewport must stay inside
    pub world: Rect,
    /// Last computed viewport
    pub viewport: Rect,
}

impl Camera {
    pub fn new(size: IVec2, world: Rect) -> Self {
        let viewport = Rect {
            pos: world.pos,
            size,
        }
        .clamped_within(&world);
        Self {
            size,
            world,
            viewport,
        }
    }

    /// Viewport centered on `target`, clamped into the world
    pub fn recenter(&self, target: &Rect) -> Rect {
        Rect {
            pos: IVec2::ZERO,
            size: self.size,
        }
        .with_center(target.center())
        .clamped_within(&self.world)
    }

    /// Recenter and remember the result
    pub fn follow(&mut self, target: &Rect) -> Rect {
        self.viewport = self.recenter(target);
        self.viewport
    }

    /// Convert a world position into viewport-relative coordinates
    pub fn to_screen(&self, world_pos: IVec2) -> IVec2 {
        world_pos - self.viewport.pos
    }
}
