//! Properties shared by every piece of equipment

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_MAGIC_BONUS;

/// Name, magic bonus and weight of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    name: String,
    /// Enchantment; capped at +5, no lower limit
    magic_bonus: i32,
    weight: u32,
}

impl Equipment {
    pub fn new(name: impl Into<String>, magic_bonus: i32, weight: u32) -> Self {
        Self {
            name: name.into(),
            magic_bonus: magic_bonus.min(MAX_MAGIC_BONUS),
            weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn magic_bonus(&self) -> i32 {
        self.magic_bonus
    }

    /// Set the magic bonus, capped at +5
    pub fn set_magic_bonus(&mut self, bonus: i32) {
        self.magic_bonus = bonus.min(MAX_MAGIC_BONUS);
    }

    /// Raise the magic bonus by one, capped at +5
    pub fn inc_magic_bonus(&mut self) {
        self.set_magic_bonus(self.magic_bonus.saturating_add(1));
    }

    pub const fn weight(&self) -> u32 {
        self.weight
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.magic_bonus {
            0 => write!(f, "{}", self.name),
            b if b > 0 => write!(f, "{} +{}", self.name, b),
            b => write!(f, "{} {}", self.name, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_bonus_capped() {
        let mut item = Equipment::new("Ring", 9, 0);
        assert_eq!(item.magic_bonus(), 5);
        item.set_magic_bonus(3);
        item.inc_magic_bonus();
        item.inc_magic_bonus();
        item.inc_magic_bonus();
        assert_eq!(item.magic_bonus(), 5);
        item.set_magic_bonus(-3);
        assert_eq!(item.magic_bonus(), -3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Equipment::new("Sword", 0, 1).to_string(), "Sword");
        assert_eq!(Equipment::new("Sword", 2, 1).to_string(), "Sword +2");
        assert_eq!(Equipment::new("Sword", -1, 1).to_string(), "Sword -1");
    }
}
