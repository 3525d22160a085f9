//! Equipment system
//!
//! Armor, shields and weapons a character can hold in its slots.

mod armor;
mod equipment;
mod weapon;

pub use armor::{Armor, ArmorFlags, ArmorType};
pub use equipment::Equipment;
pub use weapon::{Weapon, WeaponKind};
