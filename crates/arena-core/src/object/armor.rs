//! Armor and shields

use bitflags::bitflags;
use core::fmt;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::Equipment;

/// Armor kind
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ArmorType {
    Leather,
    Chain,
    Plate,
    Shield,
}

impl ArmorType {
    /// AC reduction of a mundane piece
    pub const fn base_armor(&self) -> i32 {
        match self {
            ArmorType::Leather => 2,
            ArmorType::Chain => 4,
            ArmorType::Plate => 6,
            ArmorType::Shield => 1,
        }
    }

    pub const fn weight(&self) -> u32 {
        match self {
            ArmorType::Leather => 1,
            ArmorType::Chain => 2,
            ArmorType::Plate => 4,
            ArmorType::Shield => 1,
        }
    }

    pub const fn flags(&self) -> ArmorFlags {
        match self {
            ArmorType::Leather => ArmorFlags::empty(),
            ArmorType::Chain | ArmorType::Plate => ArmorFlags::METAL,
            ArmorType::Shield => ArmorFlags::SHIELD,
        }
    }
}

bitflags! {
    /// Material and slot properties of armor
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ArmorFlags: u8 {
        const METAL = 0x01;
        const SHIELD = 0x02;
    }
}

/// A piece of armor or a shield
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    kind: ArmorType,
    base_armor: i32,
    #[serde(flatten)]
    equipment: Equipment,
}

impl Armor {
    pub fn new(kind: ArmorType, base_armor: i32, weight: u32, magic_bonus: i32) -> Self {
        Self {
            kind,
            base_armor,
            equipment: Equipment::new(kind.to_string(), magic_bonus, weight),
        }
    }

    /// Standard mundane piece of the given kind
    pub fn make(kind: ArmorType) -> Self {
        Self::make_magic(kind, 0)
    }

    /// Standard piece of the given kind with a magic bonus
    pub fn make_magic(kind: ArmorType, magic_bonus: i32) -> Self {
        Self::new(kind, kind.base_armor(), kind.weight(), magic_bonus)
    }

    pub const fn kind(&self) -> ArmorType {
        self.kind
    }

    pub const fn base_armor(&self) -> i32 {
        self.base_armor
    }

    /// Total AC reduction: base plus magic
    pub fn armor_class(&self) -> i32 {
        self.base_armor + self.equipment.magic_bonus()
    }

    pub fn flags(&self) -> ArmorFlags {
        self.kind.flags()
    }

    pub fn is_metal(&self) -> bool {
        self.flags().contains(ArmorFlags::METAL)
    }

    pub fn is_shield(&self) -> bool {
        self.flags().contains(ArmorFlags::SHIELD)
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

    pub fn weight(&self) -> u32 {
        self.equipment.weight()
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }
}

impl fmt::Display for Armor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.equipment, f)
    }
}
