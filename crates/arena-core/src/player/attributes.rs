//! Character ability scores (STR, INT, WIS, DEX, CON, CHA)

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{MAX_ABILITY_SCORE, MIN_ABILITY_SCORE, NUM_ABILITIES};
use crate::dice::Dice;
use crate::rng::GameRng;

/// Ability type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum Ability {
    Strength = 0,
    Intelligence = 1,
    Wisdom = 2,
    Dexterity = 3,
    Constitution = 4,
    Charisma = 5,
}

impl Ability {
    /// Get index (0-5)
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// All abilities in order
    pub const ALL: [Ability; NUM_ABILITIES] = [
        Ability::Strength,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Charisma,
    ];
}

/// Dice used to generate a fresh set of scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter)]
pub enum AbilityRollMethod {
    /// 3d6 in order
    #[default]
    Standard,
    /// 2d6+6
    Heroic,
    /// 2d4+10
    Superior,
    /// 2d3+12
    Legendary,
}

impl AbilityRollMethod {
    pub const fn dice(&self) -> Dice {
        match self {
            AbilityRollMethod::Standard => Dice::new(3, 6),
            AbilityRollMethod::Heroic => Dice::new(2, 6).plus(6),
            AbilityRollMethod::Superior => Dice::new(2, 4).plus(10),
            AbilityRollMethod::Legendary => Dice::new(2, 3).plus(12),
        }
    }
}

/// Modifier for a score: 8 or less is -1, 9-12 is 0, 13 or more is +1
pub const fn ability_modifier(score: i8) -> i8 {
    match score {
        ..=8 => -1,
        9..=12 => 0,
        _ => 1,
    }
}

/// Base scores plus temporary damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    base: [i8; NUM_ABILITIES],
    damage: [i8; NUM_ABILITIES],
}

impl AbilityScores {
    /// Create scores from base values (each clamped to 3..=18)
    pub fn new(values: [i8; NUM_ABILITIES]) -> Self {
        Self {
            base: values.map(|v| v.clamp(MIN_ABILITY_SCORE, MAX_ABILITY_SCORE)),
            damage: [0; NUM_ABILITIES],
        }
    }

    /// Roll every ability with the given method
    pub fn roll(method: AbilityRollMethod, rng: &mut GameRng) -> Self {
        let dice = method.dice();
        let mut values = [0i8; NUM_ABILITIES];
        for value in &mut values {
            *value = dice.roll(rng) as i8;
        }
        Self::new(values)
    }

    /// Undamaged score
    pub const fn base(&self, ability: Ability) -> i8 {
        self.base[ability as usize]
    }

    /// Current score: base minus damage, never below zero
    pub fn current(&self, ability: Ability) -> i8 {
        let idx = ability.index();
        self.base[idx].saturating_sub(self.damage[idx]).max(0)
    }

    pub fn modifier(&self, ability: Ability) -> i8 {
        ability_modifier(self.current(ability))
    }

    pub const fn damage(&self, ability: Ability) -> i8 {
        self.damage[ability as usize]
    }

    /// Set a base score (clamped to 3..=18)
    pub fn set(&mut self, ability: Ability, value: i8) {
        self.base[ability.index()] = value.clamp(MIN_ABILITY_SCORE, MAX_ABILITY_SCORE);
    }

    /// Accumulate temporary damage (negative amounts are ignored)
    pub fn take_damage(&mut self, ability: Ability, amount: i8) {
        if amount <= 0 {
            return;
        }
        let idx = ability.index();
        self.damage[idx] = self.damage[idx].saturating_add(amount);
    }

    pub fn clear_damage(&mut self) {
        self.damage = [0; NUM_ABILITIES];
    }

    /// True when any current score has been drained to zero
    pub fn has_null_score(&self) -> bool {
        Ability::ALL.iter().any(|&a| self.current(a) <= 0)
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::new([10; NUM_ABILITIES])
    }
}
