//! Weapons

use core::fmt;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Equipment;
use crate::dice::Dice;
use crate::rng::GameRng;

/// Standard weapon patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum WeaponKind {
    Sword,
    Axe,
    Spear,
    Dagger,
}

impl WeaponKind {
    pub const fn damage(&self) -> Dice {
        match self {
            WeaponKind::Sword | WeaponKind::Axe => Dice::new(1, 8),
            WeaponKind::Spear => Dice::new(1, 6),
            WeaponKind::Dagger => Dice::new(1, 4),
        }
    }

    pub const fn weight(&self) -> u32 {
        match self {
            WeaponKind::Dagger => 0,
            _ => 1,
        }
    }
}

/// A weapon; its magic bonus applies to both to-hit and damage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    damage: Dice,
    magic: bool,
    #[serde(flatten)]
    equipment: Equipment,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: Dice, weight: u32, magic_bonus: i32) -> Self {
        Self {
            damage,
            magic: magic_bonus > 0,
            equipment: Equipment::new(name, magic_bonus, weight),
        }
    }

    /// Standard weapon of the given kind
    pub fn make(kind: WeaponKind, magic_bonus: i32) -> Self {
        Self::new(kind.to_string(), kind.damage(), kind.weight(), magic_bonus)
    }

    pub fn sword() -> Self {
        Self::make(WeaponKind::Sword, 0)
    }

    /// Mark as magical even without a bonus (e.g. silvered or enchanted +0)
    pub fn with_magic(mut self) -> Self {
        self.magic = true;
        self
    }

    pub const fn damage(&self) -> Dice {
        self.damage
    }

    pub fn is_magic(&self) -> bool {
        self.magic || self.equipment.magic_bonus() > 0
    }

    pub fn to_hit_bonus(&self) -> i32 {
        self.equipment.magic_bonus()
    }

    pub fn damage_bonus(&self) -> i32 {
        self.equipment.magic_bonus()
    }

    /// Roll weapon damage including the magic bonus, never negative
    pub fn roll_damage(&self, rng: &mut GameRng) -> i32 {
        self.damage.roll(rng).saturating_add(self.damage_bonus()).max(0)
    }

    /// Highest damage a single blow can deal
    pub fn max_damage(&self) -> i32 {
        self.damage.max_roll().saturating_add(self.damage_bonus()).max(0)
    }

    pub fn magic_bonus(&self) -> i32 {
        self.equipment.magic_bonus()
    }

    pub fn set_magic_bonus(&mut self, bonus: i32) {
        self.equipment.set_magic_bonus(bonus);
    }

    pub fn inc_magic_bonus(&mut self) {
        self.equipment.inc_magic_bonus();
    }

    pub fn name(&self) -> &str {
        self.equipment.name()
    }

    pub fn weight(&self) -> u32 {
        self.equipment.weight()
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.equipment, f)
    }
}
