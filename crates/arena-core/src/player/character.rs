//! Characters: a monster base plus class, level, abilities and equipment

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::{Ability, AbilityRollMethod, AbilityScores, Alignment};
use crate::combat::{Attack, Combatant, CombatantId, HasEquipment, xp_for_difficulty};
use crate::consts::{
    BASE_AGE, BASE_ARMOR_CLASS, FIGHTER_XP_PER_HIGH_LEVEL, FIGHTER_XP_TABLE, HIT_DIE_SIDES,
    MAX_LEVEL, NORMAL_SPEED,
};
use crate::dice::Dice;
use crate::monster::{Monster, MonsterStats};
use crate::object::{Armor, Weapon};
use crate::rng::GameRng;

/// Character class
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum CharacterClass {
    #[default]
    Fighter,
    Wizard,
    Thief,
    Elf,
    Dwarf,
    Halfling,
}

/// Total experience needed to reach a level on the fighter table
pub fn xp_for_level(level: u32) -> u64 {
    match level {
        0 | 1 => 0,
        2..=10 => FIGHTER_XP_TABLE[level as usize - 2],
        _ => {
            FIGHTER_XP_TABLE[FIGHTER_XP_TABLE.len() - 1]
                + u64::from(level - 10) * FIGHTER_XP_PER_HIGH_LEVEL
        }
    }
}

/// A player or non-player character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    base: Monster,
    name: String,
    class: CharacterClass,
    level: u32,
    age: u32,
    abilities: AbilityScores,
    armor: Option<Armor>,
    shield: Option<Armor>,
    weapon: Option<Weapon>,
    experience: u64,
}

impl Character {
    /// Create a character with 3d6 abilities and hit points for its level
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        class: CharacterClass,
        level: u32,
        rng: &mut GameRng,
    ) -> Self {
        let abilities = AbilityScores::roll(AbilityRollMethod::Standard, rng);
        Self::with_abilities(id, name, class, level, abilities, rng)
    }

    /// Create a character with the given ability scores
    ///
    /// Level is raised to at least 1. An empty name becomes "<class> <id>".
    pub fn with_abilities(
        id: CombatantId,
        name: impl Into<String>,
        class: CharacterClass,
        level: u32,
        abilities: AbilityScores,
        rng: &mut GameRng,
    ) -> Self {
        let level = level.max(1);
        let mut name = name.into();
        if name.trim().is_empty() {
            name = format!("{class} {}", id.0);
        }
        let stats = MonsterStats {
            armor_class: BASE_ARMOR_CLASS,
            move_rate: NORMAL_SPEED,
            hit_dice: Dice::new(level, HIT_DIE_SIDES),
            attack: Attack::new(1, Dice::new(1, 8)),
            ..MonsterStats::default()
        };
        let base = Monster::new(id, format!("{class} {level}"), stats, rng);
        let mut character = Self {
            base,
            name,
            class,
            level,
            age: BASE_AGE,
            abilities,
            armor: None,
            shield: None,
            weapon: None,
            experience: 0,
        };
        character.update_armor_class();
        character
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn class(&self) -> CharacterClass {
        self.class
    }

    pub const fn level(&self) -> u32 {
        self.level
    }

    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Age by one simulated year
    pub fn age_one_year(&mut self) {
        self.age += 1;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.base.set_alignment(alignment);
    }

    pub const fn abilities(&self) -> &AbilityScores {
        &self.abilities
    }

    /// Current score (base minus damage)
    pub fn ability_score(&self, ability: Ability) -> i8 {
        self.abilities.current(ability)
    }

    pub fn ability_modifier(&self, ability: Ability) -> i8 {
        self.abilities.modifier(ability)
    }

    /// Set a base score (clamped to 3..=18)
    pub fn set_ability_score(&mut self, ability: Ability, score: i8) {
        self.abilities.set(ability, score);
        self.update_armor_class();
    }

    pub fn take_ability_damage(&mut self, ability: Ability, amount: i8) {
        self.abilities.take_damage(ability, amount);
        self.update_armor_class();
    }

    pub fn clear_ability_damage(&mut self) {
        self.abilities.clear_damage();
        self.update_armor_class();
    }

    pub fn has_null_ability_score(&self) -> bool {
        self.abilities.has_null_score()
    }

    pub const fn experience(&self) -> u64 {
        self.experience
    }

    pub fn add_xp(&mut self, xp: u64) {
        self.experience = self.experience.saturating_add(xp);
    }

    /// Experience still needed for the next level
    pub fn xp_to_next_level(&self) -> u64 {
        xp_for_level(self.level + 1).saturating_sub(self.experience)
    }

    /// Gain a level: hit dice become `level`d6 and hit points are re-rolled
    /// from scratch, so current equals the new max.
    pub fn level_up(&mut self, rng: &mut GameRng) {
        self.level += 1;
        self.base.set_hit_dice(Dice::new(self.level, HIT_DIE_SIDES));
        self.base.roll_hit_points(rng);
        self.base.set_race(format!("{} {}", self.class, self.level));
    }

    /// Level up as long as experience allows, up to `MAX_LEVEL`; returns
    /// levels gained
    pub fn check_level_gain(&mut self, rng: &mut GameRng) -> u32 {
        let mut gained = 0;
        while self.level < MAX_LEVEL && self.experience >= xp_for_level(self.level + 1) {
            self.level_up(rng);
            gained += 1;
        }
        gained
    }

    /// Recompute armor class from armor, shield and dexterity
    fn update_armor_class(&mut self) {
        let armor = self.armor.as_ref().map_or(0, Armor::armor_class);
        let shield = self.shield.as_ref().map_or(0, Armor::armor_class);
        let dex = i32::from(self.abilities.modifier(Ability::Dexterity));
        self.base.set_armor_class(BASE_ARMOR_CLASS - armor - shield - dex);
    }
}

impl HasEquipment for Character {
    fn armor(&self) -> Option<&Armor> {
        self.armor.as_ref()
    }

    fn shield(&self) -> Option<&Armor> {
        self.shield.as_ref()
    }

    fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    fn set_armor(&mut self, armor: Option<Armor>) -> Option<Armor> {
        let previous = std::mem::replace(&mut self.armor, armor);
        self.update_armor_class();
        previous
    }

    fn set_shield(&mut self, shield: Option<Armor>) -> Option<Armor> {
        let previous = std::mem::replace(&mut self.shield, shield);
        self.update_armor_class();
        previous
    }

    fn set_weapon(&mut self, weapon: Option<Weapon>) -> Option<Weapon> {
        std::mem::replace(&mut self.weapon, weapon)
    }

    fn draw_best_weapon(&mut self) {
        if self.weapon.is_none() {
            self.weapon = Some(Weapon::sword());
        }
    }

    fn sheathe_weapon(&mut self) -> Option<Weapon> {
        self.weapon.take()
    }

    fn boost_magic_items_one_level(&mut self) {
        if let Some(armor) = self.armor.as_mut() {
            armor.inc_magic_bonus();
        }
        if let Some(shield) = self.shield.as_mut() {
            shield.inc_magic_bonus();
        }
        if let Some(weapon) = self.weapon.as_mut() {
            weapon.inc_magic_bonus();
        }
        self.update_armor_class();
    }
}

impl Combatant for Character {
    fn base(&self) -> &Monster {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Monster {
        &mut self.base
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn xp_value(&self) -> u64 {
        xp_for_difficulty(self.level)
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Wielded weapon, falling back to the natural attack when unarmed
    fn roll_damage(&self, rng: &mut GameRng) -> i32 {
        match &self.weapon {
            Some(weapon) => weapon.roll_damage(rng),
            None => self.base.attack().roll_damage(rng),
        }
    }

    fn max_damage(&self) -> i32 {
        match &self.weapon {
            Some(weapon) => weapon.max_damage(),
            None => self.base.attack().max_damage(),
        }
    }

    fn gain_experience(&mut self, xp: u64, rng: &mut GameRng) -> u32 {
        self.add_xp(xp);
        self.check_level_gain(rng)
    }

    fn descriptor(&self) -> String {
        format!(
            "{} ({} {}, AC {}, HP {}/{})",
            self.name,
            self.class,
            self.level,
            self.base.armor_class(),
            self.base.hit_points(),
            self.base.max_hit_points()
        )
    }

    fn as_equipped(&self) -> Option<&dyn HasEquipment> {
        Some(self)
    }

    fn as_equipped_mut(&mut self) -> Option<&mut dyn HasEquipment> {
        Some(self)
    }

    fn as_character(&self) -> Option<&Character> {
        Some(self)
    }

    fn as_character_mut(&mut self) -> Option<&mut Character> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ArmorType, WeaponKind};

    fn fighter(level: u32, rng: &mut GameRng) -> Character {
        Character::with_abilities(
            CombatantId(1),
            "Fighter 1",
            CharacterClass::Fighter,
            level,
            AbilityScores::default(),
            rng,
        )
    }

    #[test]
    fn test_unarmored_average_dex_is_ac_9() {
        let mut rng = GameRng::new(1);
        let c = fighter(1, &mut rng);
        assert_eq!(c.armor_class(), 9);
        assert_eq!(c.age(), 18);
        assert_eq!(c.base().race(), "Fighter 1");
    }

    #[test]
    fn test_plate_and_magic_shield() {
        let mut rng = GameRng::new(2);
        let mut c = fighter(1, &mut rng);
        assert!(c.set_armor(Some(Armor::make(ArmorType::Plate))).is_none());
        assert_eq!(c.armor_class(), 3);
        c.set_shield(Some(Armor::make_magic(ArmorType::Shield, 1)));
        assert_eq!(c.armor_class(), 1);

        let old = c.set_armor(None);
        assert_eq!(old.map(|a| a.kind()), Some(ArmorType::Plate));
        assert_eq!(c.armor_class(), 7);
    }

    #[test]
    fn test_dexterity_changes_recompute_ac() {
        let mut rng = GameRng::new(3);
        let mut c = fighter(1, &mut rng);
        c.set_ability_score(Ability::Dexterity, 16);
        assert_eq!(c.armor_class(), 8);
        c.take_ability_damage(Ability::Dexterity, 10);
        assert_eq!(c.ability_score(Ability::Dexterity), 6);
        assert_eq!(c.armor_class(), 10);
        c.clear_ability_damage();
        assert_eq!(c.armor_class(), 8);
    }

    #[test]
    fn test_null_ability_score() {
        let mut rng = GameRng::new(4);
        let mut c = fighter(1, &mut rng);
        assert!(!c.has_null_ability_score());
        c.take_ability_damage(Ability::Constitution, 12);
        assert!(c.has_null_ability_score());
    }

    #[test]
    fn test_weapon_slot_and_damage() {
        let mut rng = GameRng::new(5);
        let mut c = fighter(1, &mut rng);
        // natural attack is 1d8
        assert_eq!(c.max_damage(), 8);

        c.set_weapon(Some(Weapon::make(WeaponKind::Dagger, 2)));
        assert_eq!(c.max_damage(), 6);
        for _ in 0..100 {
            assert!((3..=6).contains(&c.roll_damage(&mut rng)));
        }

        let dagger = c.sheathe_weapon();
        assert_eq!(dagger.map(|w| w.magic_bonus()), Some(2));
        assert!(c.weapon().is_none());

        c.draw_best_weapon();
        assert_eq!(c.weapon().map(Weapon::name), Some("Sword"));
        let replaced = c.set_weapon(Some(Weapon::make(WeaponKind::Axe, 0)));
        assert_eq!(replaced.map(|w| w.name().to_string()).as_deref(), Some("Sword"));
    }

    #[test]
    fn test_boost_magic_caps_at_five() {
        let mut rng = GameRng::new(6);
        let mut c = fighter(1, &mut rng);
        c.set_armor(Some(Armor::make_magic(ArmorType::Chain, 4)));
        c.set_weapon(Some(Weapon::sword()));
        c.boost_magic_items_one_level();
        assert_eq!(c.armor().map(Armor::magic_bonus), Some(5));
        assert_eq!(c.weapon().map(Weapon::magic_bonus), Some(1));
        assert_eq!(c.armor_class(), 0);

        c.boost_magic_items_one_level();
        assert_eq!(c.armor().map(Armor::magic_bonus), Some(5));
        assert_eq!(c.armor_class(), 0);
    }

    #[test]
    fn test_xp_table() {
        assert_eq!(xp_for_level(1), 0);
        assert_eq!(xp_for_level(2), 2_000);
        assert_eq!(xp_for_level(10), 360_000);
        assert_eq!(xp_for_level(11), 480_000);
        assert_eq!(xp_for_level(12), 600_000);
    }

    #[test]
    fn test_check_level_gain_multiple_levels() {
        let mut rng = GameRng::new(7);
        let mut c = fighter(1, &mut rng);
        c.add_xp(1_999);
        assert_eq!(c.check_level_gain(&mut rng), 0);
        assert_eq!(c.xp_to_next_level(), 1);

        c.add_xp(7_000);
        assert_eq!(c.check_level_gain(&mut rng), 3);
        assert_eq!(c.level(), 4);
        assert_eq!(c.base().hit_dice(), Dice::new(4, 6));
        assert_eq!(c.base().race(), "Fighter 4");
    }

    #[test]
    fn test_level_gain_stops_at_max_level() {
        let mut rng = GameRng::new(8);
        let mut c = fighter(1, &mut rng);
        c.add_xp(u64::MAX);
        assert_eq!(c.check_level_gain(&mut rng), MAX_LEVEL - 1);
        assert_eq!(c.level(), MAX_LEVEL);
        assert_eq!(c.check_level_gain(&mut rng), 0);
        assert!(c.is_alive());
    }

    #[test]
    fn test_gain_experience_through_trait() {
        let mut rng = GameRng::new(8);
        let mut c = fighter(1, &mut rng);
        let combatant: &mut dyn Combatant = &mut c;
        assert_eq!(combatant.gain_experience(2_000, &mut rng), 1);
        assert_eq!(combatant.level(), 2);
    }

    // Level-up discards the old HP ratio: a wounded fighter comes back at full
    // (re-rolled) health.
    #[test]
    fn test_level_up_rerolls_hit_points_from_scratch() {
        let mut rng = GameRng::new(9);
        let mut c = fighter(3, &mut rng);
        c.take_damage(c.max_hit_points() - 1);
        assert_eq!(c.hit_points(), 1);

        c.level_up(&mut rng);
        assert_eq!(c.level(), 4);
        assert_eq!(c.hit_points(), c.max_hit_points());
        assert!((4..=24).contains(&c.max_hit_points()));
    }

    #[test]
    fn test_descriptor_and_capabilities() {
        let mut rng = GameRng::new(10);
        let mut c = Character::with_abilities(
            CombatantId(7),
            "",
            CharacterClass::Fighter,
            3,
            AbilityScores::default(),
            &mut rng,
        );
        c.set_armor(Some(Armor::make(ArmorType::Plate)));
        c.set_shield(Some(Armor::make_magic(ArmorType::Shield, 1)));
        let hp = c.hit_points();
        assert_eq!(c.name(), "Fighter 7");
        assert_eq!(c.descriptor(), format!("Fighter 7 (Fighter 3, AC 1, HP {hp}/{hp})"));
        assert!(c.as_equipped().is_some());
        assert_eq!(c.as_character().map(Character::level), Some(3));
        assert_eq!(c.xp_value(), 300);
    }

    #[test]
    fn test_class_from_str() {
        assert_eq!("halfling".parse::<CharacterClass>().unwrap(), CharacterClass::Halfling);
        assert!("paladin".parse::<CharacterClass>().is_err());
    }
}
