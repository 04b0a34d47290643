//! Fixed-tick platformer simulation
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only (one call to `tick` per frame)
//! - Integer pixel positions for everything that collides
//! - Obstacles keep build order; references between them are ids
//! - No rendering or platform dependencies

pub mod actor;
pub mod camera;
pub mod collision;
pub mod demo;
pub mod level;
pub mod obstacle;
pub mod patrol;
pub mod rect;
pub mod rider;
pub mod state;
pub mod tick;
pub mod weapon;

pub use actor::Actor;
pub use camera::Camera;
pub use collision::{Resolved, overlaps_any, resolve, resolve_ignoring, touching};
pub use demo::DemoDriver;
pub use level::default_level;
pub use obstacle::{Obstacle, ObstacleKind};
pub use patrol::{Patrol, PatrolSpec};
pub use rect::{Axis, Rect};
pub use state::{Banner, SimEvent, World};
pub use tick::{TickInput, tick};
pub use weapon::{Arsenal, Projectile, Weapon, WeaponKind};
