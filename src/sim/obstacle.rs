//! Collidable obstacles: static ledges and patrolling platforms
//!
//! Both variants answer collision queries through the same rectangle; only
//! `advance` treats them differently.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::patrol::Patrol;
use super::rect::Rect;

/// Obstacle behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Never moves
    Static,
    /// Shuttles along one axis
    Patrolling(Patrol),
}

/// A collidable rectangle in the level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Stable id, used by the actor to remember what it rides
    pub id: u32,
    pub rect: Rect,
    /// Packed RGB for the render target
    pub color: u32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn fixed(id: u32, rect: Rect, color: u32) -> Self {
        Self {
            id,
            rect,
            color,
            kind: ObstacleKind::Static,
        }
    }

    pub fn patrolling(id: u32, rect: Rect, color: u32, patrol: Patrol) -> Self {
        Self {
            id,
            rect,
            color,
            kind: ObstacleKind::Patrolling(patrol),
        }
    }

    /// Whether this obstacle can carry a rider
    #[inline]
    pub fn is_moving(&self) -> bool {
        matches!(self.kind, ObstacleKind::Patrolling(_))
    }

    /// Patrol state, if any
    pub fn patrol(&self) -> Option<&Patrol> {
        match &self.kind {
            ObstacleKind::Patrolling(patrol) => Some(patrol),
            ObstacleKind::Static => None,
        }
    }

    /// Advance one frame and return the displacement applied to the rectangle
    pub fn advance(&mut self) -> IVec2 {
        match &mut self.kind {
            ObstacleKind::Static => IVec2::ZERO,
            ObstacleKind::Patrolling(patrol) => {
                let axis = patrol.axis;
                let delta = axis.vector(patrol.advance(axis.of(self.rect.pos)));
                self.rect.pos += delta;
                delta
            }
        }
    }

    /// Back off by `offset` after running into something that would not move.
    ///
    /// The patrol turns around unless it is already heading away.
    pub fn give_way(&mut self, offset: IVec2) {
        let ObstacleKind::Patrolling(patrol) = &mut self.kind else {
            return;
        };
        self.rect.pos += offset;
        let blocked = -patrol.axis.of(offset).signum();
        if blocked != 0 && patrol.speed.signum() == blocked {
            patrol.reverse();
        }
    }
}
