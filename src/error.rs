//! Error types for the simulation

use thiserror::Error;

use crate::sim::Axis;

/// Errors raised by the simulation core.
///
/// None of these are fatal to the frame loop; callers recover locally.
#[derive(Debug, Error)]
pub enum SimError {
    /// The collision step-back loop ran past its bound (actor started inside geometry)
    #[error("actor stuck overlapping geometry on {axis:?} axis after {steps} steps")]
    StuckOverlap { axis: Axis, steps: u32 },

    /// Equip requested for a slot with no weapon bound
    #[error("no weapon bound to slot {0}")]
    InvalidWeaponSlot(u8),

    /// Tuning file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Tuning overrides could not be parsed
    #[error("invalid tuning: {0}")]
    Tuning(#[from] serde_json::Error),
}
