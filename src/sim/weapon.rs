//! Weapon slots and projectiles
//!
//! A weapon is a fire-rate timer that spawns axis-aligned
//! projectiles flying at constant velocity. Projectiles do not collide.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::SimEvent;
use crate::SimError;
use crate::Tuning;
use crate::consts::{COLOR_PROJECTILE, WEAPON_SLOTS};

/// Weapon types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponKind {
    MachineGun,
}

/// A weapon and its cooldown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    /// Frames between shots
    pub fire_rate: u32,
    /// Frames until the next shot is allowed
    pub cooldown: u32,
}

impl Weapon {
    pub fn machine_gun(tuning: &Tuning) -> Self {
        Self {
            kind: WeaponKind::MachineGun,
            fire_rate: tuning.fire_rate,
            cooldown: 0,
        }
    }

    /// Tick the cooldown and fire if the trigger is held and the gun is ready
    pub fn update(&mut self, firing: bool, muzzle: IVec2, tuning: &Tuning) -> Option<Projectile> {
        self.cooldown = self.cooldown.saturating_sub(1);
        if firing && self.cooldown == 0 {
            self.cooldown = self.fire_rate;
            Some(Projectile::new(muzzle, IVec2::new(tuning.projectile_speed, 0), tuning))
        } else {
            None
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    pub vel: IVec2,
    pub color: u32,
}

impl Projectile {
    pub fn new(pos: IVec2, vel: IVec2, tuning: &Tuning) -> Self {
        let size = tuning.projectile_size;
        Self {
            rect: Rect::new(pos.x, pos.y, size, size),
            vel,
            color: COLOR_PROJECTILE,
        }
    }

    pub fn update(&mut self) {
        self.rect.pos += self.vel;
    }
}

/// The actor's weapon slots (1-based)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arsenal {
    slots: Vec<Option<Weapon>>,
    active: u8,
}

impl Arsenal {
    /// Slot 1 holds a machine gun, the rest are empty
    pub fn new(tuning: &Tuning) -> Self {
        let mut slots = vec![None; WEAPON_SLOTS as usize];
        slots[0] = Some(Weapon::machine_gun(tuning));
        Self { slots, active: 1 }
    }

    /// Currently equipped slot
    pub fn active_slot(&self) -> u8 {
        self.active
    }

    pub fn active(&self) -> Option<&Weapon> {
        self.slot(self.active)
    }

    fn slot(&self, slot: u8) -> Option<&Weapon> {
        let index = usize::from(slot).checked_sub(1)?;
        self.slots.get(index)?.as_ref()
    }

    /// Bind a weapon to a slot (replacing what was there)
    pub fn bind(&mut self, slot: u8, weapon: Weapon) -> Result<(), SimError> {
        let entry = usize::from(slot)
            .checked_sub(1)
            .and_then(|i| self.slots.get_mut(i))
            .ok_or(SimError::InvalidWeaponSlot(slot))?;
        *entry = Some(weapon);
        Ok(())
    }

    /// Switch to `slot`; the current weapon is kept if the slot is empty
    pub fn equip(&mut self, slot: u8) -> Result<SimEvent, SimError> {
        if self.slot(slot).is_none() {
            return Err(SimError::InvalidWeaponSlot(slot));
        }
        self.active = slot;
        log::info!("Equipped weapon slot {}", slot);
        Ok(SimEvent::WeaponEquipped { slot })
    }

    /// Sample the trigger for this frame
    pub fn trigger_fire(
        &mut self,
        firing: bool,
        muzzle: IVec2,
        tuning: &Tuning,
    ) -> Option<Projectile> {
        let index = usize::from(self.active).checked_sub(1)?;
        self.slots.get_mut(index)?.as_mut()?.update(firing, muzzle, tuning)
    }
}
