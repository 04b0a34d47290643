//! Moving Platforms - a platformer actor among patrolling platforms
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (patrols, collision, kinematics, riding, camera)
//! - `tuning`: Data-driven movement and weapon balance
//! - `error`: Crate error type

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::SimError;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (frames per second)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Viewport (screen) dimensions
    pub const VIEWPORT_WIDTH: i32 = 700;
    pub const VIEWPORT_HEIGHT: i32 = 500;

    /// World (level) dimensions
    pub const WORLD_WIDTH: i32 = 1000;
    pub const WORLD_HEIGHT: i32 = 1000;

    /// Actor defaults
    pub const ACTOR_WIDTH: i32 = 30;
    pub const ACTOR_HEIGHT: i32 = 55;
    pub const ACTOR_SPAWN: (i32, i32) = (50, 875);

    /// Number of weapon slots (1-based)
    pub const WEAPON_SLOTS: u8 = 5;

    /// Packed RGB colors handed to the render target
    pub const COLOR_ACTOR: u32 = 0xFF0000;
    pub const COLOR_WALL: u32 = 0xD2691E;
    pub const COLOR_LEDGE: u32 = 0x006400;
    pub const COLOR_PLATFORM: u32 = 0x6B8E23;
    pub const COLOR_PROJECTILE: u32 = 0xFF0000;
    pub const COLOR_BANNER: u32 = 0x6464AF;
}
