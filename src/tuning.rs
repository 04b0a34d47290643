//! Data-driven movement and weapon balance
//!
//! Defaults reproduce the feel of the reference level. Overrides can be loaded
//! from JSON; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::SimError;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Actor movement ===
    /// Horizontal run speed (pixels per frame)
    pub actor_speed: i32,
    /// Added to vertical velocity every airborne frame
    pub gravity: f32,
    /// Vertical velocity cap while falling (None = uncapped)
    pub terminal_velocity: Option<f32>,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_power: f32,
    /// Upward velocity a released jump is clamped to
    pub jump_cut_magnitude: f32,

    // === Collision ===
    /// Maximum one-pixel step-backs before a move is abandoned
    pub max_resolve_steps: u32,

    // === Weapons ===
    /// Frames between machine gun shots
    pub fire_rate: u32,
    /// Projectile speed (pixels per frame)
    pub projectile_speed: i32,
    /// Projectile edge length (pixels)
    pub projectile_size: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            actor_speed: 4,
            gravity: 0.22,
            terminal_velocity: None,
            jump_power: -9.0,
            jump_cut_magnitude: -3.0,

            max_resolve_steps: 512,

            fire_rate: 5,
            projectile_speed: 10,
            projectile_size: 5,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let tuning = serde_json::from_str(json)?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    /// Read tuning overrides from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Serialize the full tuning table (for dumping defaults)
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply one frame of gravity to a vertical velocity
    #[inline]
    pub fn apply_gravity(&self, y_vel: f32) -> f32 {
        let next = y_vel + self.gravity;
        match self.terminal_velocity {
            Some(cap) => next.min(cap),
            None => next,
        }
    }
}
