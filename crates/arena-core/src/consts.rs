//! Core rule constants

/// Number of ability scores
pub const NUM_ABILITIES: usize = 6;

/// Ability score bounds for undamaged scores
pub const MIN_ABILITY_SCORE: i8 = 3;
pub const MAX_ABILITY_SCORE: i8 = 18;

/// Armor class of an unarmored combatant with average dexterity
pub const BASE_ARMOR_CLASS: i32 = 9;

/// Default monster armor class when none is given
pub const MONSTER_ARMOR_CLASS: i32 = 10;

/// Movement rate in inches
pub const NORMAL_SPEED: u32 = 12;

/// Sides on a hit die
pub const HIT_DIE_SIDES: u32 = 6;

/// Starting age of a recruit
pub const BASE_AGE: u32 = 18;

/// Highest magic bonus any equipment can carry
pub const MAX_MAGIC_BONUS: i32 = 5;

/// Experience for defeating one hit die (or level) of opponent
pub const XP_PER_HIT_DIE: u64 = 100;

/// Fighter experience needed for levels 2 through 10
pub const FIGHTER_XP_TABLE: [u64; 9] = [
    2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 120_000, 240_000, 360_000,
];

/// Additional experience per level past the table
pub const FIGHTER_XP_PER_HIGH_LEVEL: u64 = 120_000;

/// Characters stop gaining levels here
pub const MAX_LEVEL: u32 = 36;
